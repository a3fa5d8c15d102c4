use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use crate::movie::domain::{ListFilter, MovieList, MoviePage, MoviePatch, MovieView, NewMovie, YearRange};
use crate::movie::repository::MovieRepository;
use crate::pagination::Page;

/// Movie business service independent of web framework.
///
/// Inputs arrive already validated (`NewMovie`, `MoviePatch`, `Page`,
/// `YearRange`); a missing row is reported as `None`/`false`, never as an error.
pub struct MovieService<R: MovieRepository> {
    repo: Arc<R>,
}

impl<R: MovieRepository> MovieService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Persist a new movie and return it with its assigned id.
    ///
    /// # Examples
    /// ```
    /// use service::movie::{MovieService, domain::NewMovie, repository::mock::InMemoryMovieRepository};
    /// use std::sync::Arc;
    /// let svc = MovieService::new(Arc::new(InMemoryMovieRepository::default()));
    /// let input = NewMovie::new("The Matrix", "The Wachowskis", 1999, 8.7).unwrap();
    /// let view = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(view.title, "The Matrix");
    /// assert_eq!(view.id, 1);
    /// ```
    #[instrument(skip(self, input), fields(title = %input.title()))]
    pub async fn create(&self, input: NewMovie) -> Result<MovieView, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(id = created.id, "movie_created");
        Ok(created.into())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Option<MovieView>, ServiceError> {
        Ok(self.repo.get(id).await?.map(MovieView::from))
    }

    /// Unfiltered page in id order.
    pub async fn list(&self, page: Page) -> Result<Vec<MovieView>, ServiceError> {
        self.select(&ListFilter::All, page).await
    }

    /// Case-insensitive substring match on title.
    pub async fn search_by_title(&self, fragment: &str, page: Page) -> Result<Vec<MovieView>, ServiceError> {
        self.select(&ListFilter::Title(fragment.to_string()), page).await
    }

    /// Case-insensitive substring match on director.
    pub async fn filter_by_director(&self, fragment: &str, page: Page) -> Result<Vec<MovieView>, ServiceError> {
        self.select(&ListFilter::Director(fragment.to_string()), page).await
    }

    /// Number of stored movies, ignoring any filter.
    pub async fn count(&self) -> Result<u64, ServiceError> {
        self.repo.count().await
    }

    #[instrument(skip(self))]
    async fn select(&self, filter: &ListFilter, page: Page) -> Result<Vec<MovieView>, ServiceError> {
        let rows = self.repo.list(filter, page).await?;
        debug!(count = rows.len(), "movies_selected");
        Ok(rows.into_iter().map(MovieView::from).collect())
    }

    /// One page for the list endpoint. `total` is the count of all rows,
    /// not of the rows matching `filter`.
    pub async fn page(&self, filter: ListFilter, page: Page) -> Result<MoviePage, ServiceError> {
        let movies = self.select(&filter, page).await?;
        let total = self.count().await?;
        Ok(MoviePage { movies, total, skip: page.skip(), limit: page.limit() })
    }

    #[instrument(skip(self), fields(start = range.start(), end = range.end()))]
    pub async fn filter_by_year_range(&self, range: YearRange) -> Result<MovieList, ServiceError> {
        let rows = self.repo.list_by_year_range(range).await?;
        debug!(count = rows.len(), "movies_in_year_range");
        Ok(rows.into_iter().map(MovieView::from).collect::<Vec<_>>().into())
    }

    /// Apply the fields present in `patch`; `None` when the id is unknown.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: MoviePatch) -> Result<Option<MovieView>, ServiceError> {
        let updated = self.repo.update(id, patch).await?;
        match &updated {
            Some(m) => info!(id = m.id, "movie_updated"),
            None => debug!("movie_update_missing"),
        }
        Ok(updated.map(MovieView::from))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let removed = self.repo.delete(id).await?;
        if removed {
            info!("movie_deleted");
        }
        Ok(removed)
    }
}
