//! Input and output contracts for movie operations.
//!
//! Raw inputs (`NewMovieInput`, `MovieUpdateInput`) are what callers send.
//! `validate` turns them into `NewMovie` / `MoviePatch`, which can only be
//! built through the field validators in `models::movie`, so the service and
//! the store never re-check bounds.

use models::errors::ValidationError;
use models::movie::{self, validate_director, validate_rating, validate_title, validate_year};
use sea_orm::Set;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Creation payload as received. Every field is optional here so that a
/// missing field is reported as a `ValidationError` naming it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewMovieInput {
    pub title: Option<String>,
    pub director: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
}

impl NewMovieInput {
    pub fn validate(self) -> Result<NewMovie, ValidationError> {
        NewMovie::new(
            self.title.ok_or_else(|| ValidationError::required("title"))?,
            self.director.ok_or_else(|| ValidationError::required("director"))?,
            self.year.ok_or_else(|| ValidationError::required("year"))?,
            self.rating.ok_or_else(|| ValidationError::required("rating"))?,
        )
    }
}

/// A movie that passed validation and is ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    title: String,
    director: String,
    year: i32,
    rating: f64,
}

impl NewMovie {
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        year: i32,
        rating: f64,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let director = director.into();
        validate_title(&title)?;
        validate_director(&director)?;
        validate_year(year)?;
        validate_rating(rating)?;
        Ok(Self { title, director, year, rating })
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn director(&self) -> &str { &self.director }
    pub fn year(&self) -> i32 { self.year }
    pub fn rating(&self) -> f64 { self.rating }

    pub fn into_active_model(self) -> movie::ActiveModel {
        movie::ActiveModel {
            title: Set(self.title),
            director: Set(self.director),
            year: Set(self.year),
            rating: Set(self.rating),
            ..Default::default()
        }
    }
}

/// Update payload as received. The outer `Option` records whether the key was
/// present at all; the inner one whether it was `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieUpdateInput {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub director: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    pub rating: Option<Option<f64>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn not_null<T>(field: &'static str, value: Option<Option<T>>) -> Result<Option<T>, ValidationError> {
    match value {
        None => Ok(None),
        Some(None) => Err(ValidationError::new(field, "must not be null")),
        Some(Some(v)) => Ok(Some(v)),
    }
}

impl MovieUpdateInput {
    pub fn validate(self) -> Result<MoviePatch, ValidationError> {
        let mut patch = MoviePatch::new();
        if let Some(t) = not_null("title", self.title)? {
            patch = patch.with_title(t)?;
        }
        if let Some(d) = not_null("director", self.director)? {
            patch = patch.with_director(d)?;
        }
        if let Some(y) = not_null("year", self.year)? {
            patch = patch.with_year(y)?;
        }
        if let Some(r) = not_null("rating", self.rating)? {
            patch = patch.with_rating(r)?;
        }
        Ok(patch)
    }
}

/// Validated partial update: `Some` means "set this field", `None` means
/// "leave it as stored".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    title: Option<String>,
    director: Option<String>,
    year: Option<i32>,
    rating: Option<f64>,
}

impl MoviePatch {
    pub fn new() -> Self { Self::default() }

    pub fn with_title(mut self, title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        self.title = Some(title);
        Ok(self)
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Result<Self, ValidationError> {
        let director = director.into();
        validate_director(&director)?;
        self.director = Some(director);
        Ok(self)
    }

    pub fn with_year(mut self, year: i32) -> Result<Self, ValidationError> {
        validate_year(year)?;
        self.year = Some(year);
        Ok(self)
    }

    pub fn with_rating(mut self, rating: f64) -> Result<Self, ValidationError> {
        validate_rating(rating)?;
        self.rating = Some(rating);
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.director.is_none() && self.year.is_none() && self.rating.is_none()
    }

    /// Field-by-field merge onto a loaded row; untouched columns stay `Unchanged`.
    pub fn apply(self, am: &mut movie::ActiveModel) {
        if let Some(t) = self.title {
            am.title = Set(t);
        }
        if let Some(d) = self.director {
            am.director = Set(d);
        }
        if let Some(y) = self.year {
            am.year = Set(y);
        }
        if let Some(r) = self.rating {
            am.rating = Set(r);
        }
    }
}

/// Public view of a stored movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieView {
    pub id: i32,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub rating: f64,
}

impl From<movie::Model> for MovieView {
    fn from(m: movie::Model) -> Self {
        Self { id: m.id, title: m.title, director: m.director, year: m.year, rating: m.rating }
    }
}

/// One page of a list/search, with the global row count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    pub movies: Vec<MovieView>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

/// Unpaginated result set with its length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieList {
    pub movies: Vec<MovieView>,
    pub count: usize,
}

impl From<Vec<MovieView>> for MovieList {
    fn from(movies: Vec<MovieView>) -> Self {
        let count = movies.len();
        Self { movies, count }
    }
}

/// Which selection a list call runs. Exactly one filter is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFilter {
    All,
    Title(String),
    Director(String),
}

impl ListFilter {
    /// A non-empty `title` wins over `director`; neither means no filter.
    pub fn from_params(title: Option<String>, director: Option<String>) -> Self {
        match (title, director) {
            (Some(t), _) if !t.is_empty() => ListFilter::Title(t),
            (_, Some(d)) if !d.is_empty() => ListFilter::Director(d),
            _ => ListFilter::All,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("start year ({start}) must be less than or equal to end year ({end})")]
pub struct RangeError {
    pub start: i32,
    pub end: i32,
}

/// Inclusive year interval with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i32 { self.start }
    pub fn end(&self) -> i32 { self.end }

    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }
}
