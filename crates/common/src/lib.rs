//! Shared building blocks for the movies workspace: logging setup and the
//! small response types used by more than one crate.

pub mod types;

pub mod utils {
    pub mod logging;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::healthy("2.0.0");
        assert_eq!(h.status, "healthy");
        assert_eq!(h.version, "2.0.0");
    }
}
