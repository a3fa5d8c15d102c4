use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::movie::{repository::SeaOrmMovieRepository, MovieService};

/// Shared handler state. The connection pool is the only long-lived store
/// resource; each request checks connections out through the service.
#[derive(Clone)]
pub struct ServerState {
    pub movies: Arc<MovieService<SeaOrmMovieRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmMovieRepository::new(db));
        Self { movies: Arc::new(MovieService::new(repo)) }
    }
}
