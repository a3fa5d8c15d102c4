use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::debug;

use crate::db::movie_store;
use crate::errors::ServiceError;
use crate::movie::domain::{ListFilter, MoviePatch, NewMovie, YearRange};
use crate::pagination::Page;

/// Store handle for movie rows. Each call is one unit of work: it acquires
/// what it needs from the store and releases it before returning.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn create(&self, input: NewMovie) -> Result<models::movie::Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<models::movie::Model>, ServiceError>;
    async fn list(&self, filter: &ListFilter, page: Page) -> Result<Vec<models::movie::Model>, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
    async fn list_by_year_range(&self, range: YearRange) -> Result<Vec<models::movie::Model>, ServiceError>;
    async fn update(&self, id: i32, patch: MoviePatch) -> Result<Option<models::movie::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
///
/// Reads borrow a pooled connection for the single query. Writes run in
/// their own transaction and commit once; an early return drops the
/// transaction, which rolls it back and hands the connection back to the pool.
#[derive(Clone)]
pub struct SeaOrmMovieRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmMovieRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl MovieRepository for SeaOrmMovieRepository {
    async fn create(&self, input: NewMovie) -> Result<models::movie::Model, ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::db)?;
        let created = movie_store::insert_movie(&txn, input).await?;
        txn.commit().await.map_err(ServiceError::db)?;
        Ok(created)
    }

    async fn get(&self, id: i32) -> Result<Option<models::movie::Model>, ServiceError> {
        movie_store::find_movie(&self.db, id).await
    }

    async fn list(&self, filter: &ListFilter, page: Page) -> Result<Vec<models::movie::Model>, ServiceError> {
        movie_store::list_movies(&self.db, filter, page).await
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        movie_store::count_movies(&self.db).await
    }

    async fn list_by_year_range(&self, range: YearRange) -> Result<Vec<models::movie::Model>, ServiceError> {
        movie_store::list_movies_by_year_range(&self.db, range).await
    }

    async fn update(&self, id: i32, patch: MoviePatch) -> Result<Option<models::movie::Model>, ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::db)?;
        let updated = movie_store::update_movie(&txn, id, patch).await?;
        if updated.is_none() {
            debug!(id, "update target missing; rolling back");
            return Ok(None);
        }
        txn.commit().await.map_err(ServiceError::db)?;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::db)?;
        let removed = movie_store::delete_movie(&txn, id).await?;
        txn.commit().await.map_err(ServiceError::db)?;
        Ok(removed)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use sea_orm::TryIntoModel;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct Table {
        rows: BTreeMap<i32, models::movie::Model>, // ordered by id
        next_id: i32,
    }

    /// Mirrors the SQL store: ids start at 1 and are never reused, and text
    /// filters are case-insensitive substring matches.
    #[derive(Default)]
    pub struct InMemoryMovieRepository {
        table: Mutex<Table>,
    }

    impl InMemoryMovieRepository {
        fn table(&self) -> Result<MutexGuard<'_, Table>, ServiceError> {
            self.table.lock().map_err(|_| ServiceError::Db("in-memory table lock poisoned".into()))
        }
    }

    fn contains_ci(haystack: &str, needle: &str) -> bool {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }

    #[async_trait]
    impl MovieRepository for InMemoryMovieRepository {
        async fn create(&self, input: NewMovie) -> Result<models::movie::Model, ServiceError> {
            let mut table = self.table()?;
            table.next_id += 1;
            let id = table.next_id;
            let mut am = input.into_active_model();
            am.id = sea_orm::Set(id);
            let model = am.try_into_model().map_err(ServiceError::db)?;
            table.rows.insert(id, model.clone());
            Ok(model)
        }

        async fn get(&self, id: i32) -> Result<Option<models::movie::Model>, ServiceError> {
            Ok(self.table()?.rows.get(&id).cloned())
        }

        async fn list(&self, filter: &ListFilter, page: Page) -> Result<Vec<models::movie::Model>, ServiceError> {
            let table = self.table()?;
            Ok(table
                .rows
                .values()
                .filter(|m| match filter {
                    ListFilter::All => true,
                    ListFilter::Title(t) => contains_ci(&m.title, t),
                    ListFilter::Director(d) => contains_ci(&m.director, d),
                })
                .skip(page.skip() as usize)
                .take(page.limit() as usize)
                .cloned()
                .collect())
        }

        async fn count(&self) -> Result<u64, ServiceError> {
            Ok(self.table()?.rows.len() as u64)
        }

        async fn list_by_year_range(&self, range: YearRange) -> Result<Vec<models::movie::Model>, ServiceError> {
            let table = self.table()?;
            Ok(table.rows.values().filter(|m| range.contains(m.year)).cloned().collect())
        }

        async fn update(&self, id: i32, patch: MoviePatch) -> Result<Option<models::movie::Model>, ServiceError> {
            let mut table = self.table()?;
            let Some(found) = table.rows.get(&id).cloned() else {
                return Ok(None);
            };
            let mut am: models::movie::ActiveModel = found.into();
            patch.apply(&mut am);
            let model = am.try_into_model().map_err(ServiceError::db)?;
            table.rows.insert(id, model.clone());
            Ok(Some(model))
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.table()?.rows.remove(&id).is_some())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn poisoned_table_is_an_error() {
            let repo = std::sync::Arc::new(InMemoryMovieRepository::default());
            let poisoner = repo.clone();
            let joined = std::thread::spawn(move || {
                let _guard = poisoner.table.lock().unwrap();
                panic!("poison the table");
            })
            .join();
            assert!(joined.is_err());

            assert!(matches!(repo.get(1).await, Err(ServiceError::Db(_))));
            assert!(matches!(repo.count().await, Err(ServiceError::Db(_))));
        }
    }
}
