use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Health {
    pub status: String,
    pub version: String,
}

impl Health {
    pub fn healthy(version: &str) -> Self {
        Self { status: "healthy".into(), version: version.into() }
    }
}

/// Body returned by the root endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Welcome {
    pub message: String,
    pub docs: String,
    pub redoc: String,
    pub version: String,
}

/// Plain acknowledgement, e.g. after a delete.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_serializes_as_object() {
        let v = serde_json::to_value(Message::new("done")).unwrap();
        assert_eq!(v, serde_json::json!({"message": "done"}));
    }
}
