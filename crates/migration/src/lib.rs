//! Migrator for the `movies` table.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_movie;
mod m20240101_000002_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_movie::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000002_add_indexes::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::{ConnectOptions, ConnectionTrait, Database, DbBackend, Statement};

    #[tokio::test]
    async fn up_and_down_on_sqlite() -> Result<(), DbErr> {
        // one connection: each in-memory connection is a separate database
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1);
        let db = Database::connect(opt).await?;
        Migrator::up(&db, None).await?;

        let row = db
            .query_one(Statement::from_string(
                DbBackend::Sqlite,
                "SELECT count(*) AS n FROM sqlite_master WHERE type = 'table' AND name = 'movies'",
            ))
            .await?
            .expect("count row");
        let n: i64 = row.try_get("", "n")?;
        assert_eq!(n, 1);

        Migrator::down(&db, None).await?;
        let row = db
            .query_one(Statement::from_string(
                DbBackend::Sqlite,
                "SELECT count(*) AS n FROM sqlite_master WHERE type = 'table' AND name = 'movies'",
            ))
            .await?
            .expect("count row");
        let n: i64 = row.try_get("", "n")?;
        assert_eq!(n, 0);
        Ok(())
    }
}
