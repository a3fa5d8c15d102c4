use thiserror::Error;

/// A single field failed one of its declared bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {constraint}")]
pub struct ValidationError {
    pub field: &'static str,
    pub constraint: String,
}

impl ValidationError {
    pub fn new(field: &'static str, constraint: impl Into<String>) -> Self {
        Self { field, constraint: constraint.into() }
    }

    pub fn required(field: &'static str) -> Self { Self::new(field, "field required") }
}
