use sea_orm::sea_query::{BinOper, Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use models::movie;

use crate::errors::ServiceError;
use crate::movie::domain::{ListFilter, MoviePatch, NewMovie, YearRange};
use crate::pagination::Page;

/// Escape LIKE wildcards so a search fragment matches literally.
fn escape_like(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Case-insensitive "contains" on a text column:
/// `LOWER(col) LIKE LOWER('%frag%') ESCAPE '\\'`.
///
/// Both sides go through the store's own `LOWER`, so a fragment always
/// matches its own text even where `LOWER` only folds ASCII (SQLite).
fn contains_ci(col: movie::Column, fragment: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(fragment));
    let pattern = SimpleExpr::Binary(
        Box::new(Func::lower(Expr::val(pattern)).into()),
        BinOper::Escape,
        Box::new(SimpleExpr::Constant('\\'.into())),
    );
    Expr::expr(Func::lower(Expr::col((movie::Entity, col)))).binary(BinOper::Like, pattern)
}

/// Insert a validated movie; the store assigns the id.
pub async fn insert_movie<C: ConnectionTrait>(db: &C, input: NewMovie) -> Result<movie::Model, ServiceError> {
    input.into_active_model().insert(db).await.map_err(ServiceError::db)
}

/// Get movie by id.
pub async fn find_movie<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<movie::Model>, ServiceError> {
    movie::Entity::find_by_id(id).one(db).await.map_err(ServiceError::db)
}

/// One page of movies in id order, optionally narrowed by title or director.
pub async fn list_movies<C: ConnectionTrait>(db: &C, filter: &ListFilter, page: Page) -> Result<Vec<movie::Model>, ServiceError> {
    let mut query = movie::Entity::find();
    match filter {
        ListFilter::All => {}
        ListFilter::Title(t) => query = query.filter(contains_ci(movie::Column::Title, t)),
        ListFilter::Director(d) => query = query.filter(contains_ci(movie::Column::Director, d)),
    }
    query
        .order_by_asc(movie::Column::Id)
        .offset(page.skip())
        .limit(page.limit())
        .all(db)
        .await
        .map_err(ServiceError::db)
}

/// Count of every row in the table.
pub async fn count_movies<C: ConnectionTrait>(db: &C) -> Result<u64, ServiceError> {
    movie::Entity::find().count(db).await.map_err(ServiceError::db)
}

/// Movies with `start <= year <= end`.
pub async fn list_movies_by_year_range<C: ConnectionTrait>(db: &C, range: YearRange) -> Result<Vec<movie::Model>, ServiceError> {
    movie::Entity::find()
        .filter(movie::Column::Year.between(range.start(), range.end()))
        .order_by_asc(movie::Column::Id)
        .all(db)
        .await
        .map_err(ServiceError::db)
}

/// Apply a patch to an existing movie. `None` when the id does not exist.
pub async fn update_movie<C: ConnectionTrait>(db: &C, id: i32, patch: MoviePatch) -> Result<Option<movie::Model>, ServiceError> {
    let Some(found) = find_movie(db, id).await? else {
        return Ok(None);
    };
    if patch.is_empty() {
        return Ok(Some(found));
    }
    let mut am: movie::ActiveModel = found.into();
    patch.apply(&mut am);
    Ok(Some(am.update(db).await.map_err(ServiceError::db)?))
}

/// Hard delete. `false` when nothing matched.
pub async fn delete_movie<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ServiceError> {
    let res = movie::Entity::delete_by_id(id).exec(db).await.map_err(ServiceError::db)?;
    Ok(res.rows_affected > 0)
}
