use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

pub const TITLE_MAX_LEN: usize = 200;
pub const DIRECTOR_MAX_LEN: usize = 100;
pub const YEAR_MIN: i32 = 1888;
pub const YEAR_MAX: i32 = 2030;
pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 10.0;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub director: String,
    pub year: i32,
    #[sea_orm(column_type = "Double")]
    pub rating: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn validate_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let n = value.chars().count();
    if n == 0 {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    if n > max {
        return Err(ValidationError::new(field, format!("must be at most {max} characters")));
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    validate_len("title", title, TITLE_MAX_LEN)
}

pub fn validate_director(director: &str) -> Result<(), ValidationError> {
    validate_len("director", director, DIRECTOR_MAX_LEN)
}

pub fn validate_year(year: i32) -> Result<(), ValidationError> {
    if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        return Err(ValidationError::new(
            "year",
            format!("must be between {YEAR_MIN} and {YEAR_MAX}"),
        ));
    }
    Ok(())
}

pub fn validate_rating(rating: f64) -> Result<(), ValidationError> {
    if !rating.is_finite() {
        return Err(ValidationError::new("rating", "must be a finite number"));
    }
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(ValidationError::new(
            "rating",
            format!("must be between {RATING_MIN:.1} and {RATING_MAX:.1}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_bounds() {
        assert!(validate_title("A").is_ok());
        assert!(validate_title(&"A".repeat(200)).is_ok());
        assert_eq!(validate_title("").unwrap_err().field, "title");
        assert!(validate_title(&"A".repeat(201)).is_err());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 200 two-byte characters
        assert!(validate_title(&"é".repeat(200)).is_ok());
    }

    #[test]
    fn director_bounds() {
        assert!(validate_director(&"D".repeat(100)).is_ok());
        let err = validate_director(&"D".repeat(101)).unwrap_err();
        assert_eq!(err.field, "director");
        assert_eq!(err.constraint, "must be at most 100 characters");
        assert!(validate_director("").is_err());
    }

    #[test]
    fn year_bounds() {
        assert!(validate_year(1888).is_ok());
        assert!(validate_year(2030).is_ok());
        assert!(validate_year(1800).is_err());
        assert!(validate_year(1887).is_err());
        assert!(validate_year(2031).is_err());
    }

    #[test]
    fn rating_bounds() {
        assert!(validate_rating(0.0).is_ok());
        assert!(validate_rating(10.0).is_ok());
        assert!(validate_rating(-1.0).is_err());
        assert!(validate_rating(11.0).is_err());
        let err = validate_rating(f64::NAN).unwrap_err();
        assert_eq!(err.constraint, "must be a finite number");
        assert!(validate_rating(f64::INFINITY).is_err());
    }
}
