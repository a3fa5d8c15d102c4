use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::errors::ValidationError;
use serde::Deserialize;
use service::movie::domain::{
    ListFilter, MovieList, MoviePage, MovieUpdateInput, MovieView, NewMovieInput, YearRange,
};
use service::pagination::Pagination;
use tracing::{error, info};

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Number of records to skip (>= 0, default 0)
    pub skip: Option<i64>,
    /// Number of records to return (1..=1000, default 100)
    pub limit: Option<i64>,
    /// Case-insensitive title substring; takes precedence over `director`
    pub title: Option<String>,
    /// Case-insensitive director substring
    pub director: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct YearRangeQuery {
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

#[utoipa::path(
    post, path = "/movies", tag = "movies",
    request_body = crate::openapi::MovieInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::MovieDoc),
        (status = 400, description = "Create Failed"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<NewMovieInput>, JsonRejection>,
) -> Result<(StatusCode, Json<MovieView>), JsonApiError> {
    let Json(input) = body?;
    let input = input.validate()?;
    match state.movies.create(input).await {
        Ok(m) => {
            info!(id = m.id, title = %m.title, "created movie");
            Ok((StatusCode::CREATED, Json(m)))
        }
        Err(e) => {
            error!(err = %e, "create movie failed");
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Create Failed", Some(format!("Error creating movie: {e}"))))
        }
    }
}

#[utoipa::path(
    get, path = "/movies", tag = "movies",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK", body = crate::openapi::MoviePageDoc),
        (status = 422, description = "Invalid pagination")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<MoviePage>, JsonApiError> {
    let Query(q) = query?;
    let page = Pagination { skip: q.skip, limit: q.limit }.validate()?;
    let filter = ListFilter::from_params(q.title, q.director);
    let result = state.movies.page(filter, page).await?;
    info!(count = result.movies.len(), total = result.total, "list movies");
    Ok(Json(result))
}

#[utoipa::path(
    get, path = "/movies/{id}", tag = "movies",
    params(("id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::MovieDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MovieView>, JsonApiError> {
    let Path(id) = id?;
    match state.movies.get(id).await? {
        Some(m) => Ok(Json(m)),
        None => Err(JsonApiError::not_found()),
    }
}

#[utoipa::path(
    put, path = "/movies/{id}", tag = "movies",
    params(("id" = i32, Path, description = "Movie ID")),
    request_body = crate::openapi::MovieUpdateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MovieDoc),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<MovieUpdateInput>, JsonRejection>,
) -> Result<Json<MovieView>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = body?;
    let patch = input.validate()?;
    match state.movies.update(id, patch).await? {
        Some(m) => {
            info!(id = m.id, "updated movie");
            Ok(Json(m))
        }
        None => Err(JsonApiError::not_found()),
    }
}

#[utoipa::path(
    delete, path = "/movies/{id}", tag = "movies",
    params(("id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageResponse),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let Path(id) = id?;
    if state.movies.delete(id).await? {
        info!(id, "deleted movie");
        Ok(Json(Message::new("Movie deleted successfully")))
    } else {
        Err(JsonApiError::not_found())
    }
}

#[utoipa::path(
    get, path = "/movies/search/year-range", tag = "movies",
    params(YearRangeQuery),
    responses(
        (status = 200, description = "OK", body = crate::openapi::MovieListDoc),
        (status = 400, description = "Start year after end year"),
        (status = 422, description = "Missing bound")
    )
)]
pub async fn year_range(
    State(state): State<ServerState>,
    query: Result<Query<YearRangeQuery>, QueryRejection>,
) -> Result<Json<MovieList>, JsonApiError> {
    let Query(q) = query?;
    let start = q.start_year.ok_or_else(|| ValidationError::required("start_year"))?;
    let end = q.end_year.ok_or_else(|| ValidationError::required("end_year"))?;
    let range = YearRange::new(start, end)?;
    Ok(Json(state.movies.filter_by_year_range(range).await?))
}
