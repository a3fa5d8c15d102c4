use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String, pub version: String }

#[derive(ToSchema)]
pub struct WelcomeResponse { pub message: String, pub docs: String, pub redoc: String, pub version: String }

#[derive(ToSchema)]
pub struct MessageResponse { pub message: String }

#[derive(ToSchema)]
pub struct MovieInputDoc {
    /// 1 to 200 characters
    pub title: String,
    /// 1 to 100 characters
    pub director: String,
    /// 1888 to 2030
    pub year: i32,
    /// 0.0 to 10.0
    pub rating: f64,
}

/// Every field optional; omitted fields keep their stored value.
#[derive(ToSchema)]
pub struct MovieUpdateDoc {
    pub title: Option<String>,
    pub director: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
}

#[derive(ToSchema)]
pub struct MovieDoc {
    pub id: i32,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub rating: f64,
}

#[derive(ToSchema)]
pub struct MoviePageDoc {
    pub movies: Vec<MovieDoc>,
    /// Count of all stored movies, regardless of the title/director filter
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

#[derive(ToSchema)]
pub struct MovieListDoc {
    pub movies: Vec<MovieDoc>,
    pub count: usize,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Movies CRUD API", description = "Create, read, update, delete and search movies"),
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::movies::create,
        crate::routes::movies::list,
        crate::routes::movies::get,
        crate::routes::movies::update,
        crate::routes::movies::delete,
        crate::routes::movies::year_range,
    ),
    components(
        schemas(
            HealthResponse,
            WelcomeResponse,
            MessageResponse,
            MovieInputDoc,
            MovieUpdateDoc,
            MovieDoc,
            MoviePageDoc,
            MovieListDoc,
        )
    ),
    tags(
        (name = "root"),
        (name = "health"),
        (name = "movies")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_movie_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/movies"));
        assert!(paths.iter().any(|p| p.as_str() == "/movies/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/movies/search/year-range"));
    }
}
