//! Movie records: contracts, store handle, and the service that ties them together.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::MovieService;
