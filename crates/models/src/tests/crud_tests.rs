use crate::movie;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};
use anyhow::Result;

use super::setup_test_db;

fn matrix() -> movie::ActiveModel {
    movie::ActiveModel {
        title: Set("The Matrix".into()),
        director: Set("The Wachowskis".into()),
        year: Set(1999),
        rating: Set(8.7),
        ..Default::default()
    }
}

/// Insert assigns ids; the business columns round-trip unchanged
#[tokio::test]
async fn test_movie_insert_and_find() -> Result<()> {
    let db = setup_test_db().await?;

    let created = matrix().insert(&db).await?;
    assert!(created.id > 0);
    assert_eq!(created.title, "The Matrix");
    assert_eq!(created.rating, 8.7);

    let second = matrix().insert(&db).await?;
    assert_ne!(second.id, created.id);

    let found = movie::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found, Some(created));
    Ok(())
}

/// Update through the active model only touches set columns
#[tokio::test]
async fn test_movie_update_and_delete() -> Result<()> {
    let db = setup_test_db().await?;
    let created = matrix().insert(&db).await?;

    let mut am: movie::ActiveModel = created.clone().into();
    am.rating = Set(7.2);
    let updated = am.update(&db).await?;
    assert_eq!(updated.rating, 7.2);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.year, created.year);

    let res = movie::Entity::delete_by_id(created.id).exec(&db).await?;
    assert_eq!(res.rows_affected, 1);
    assert_eq!(movie::Entity::find().count(&db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_model_serializes_with_plain_field_names() -> Result<()> {
    let db = setup_test_db().await?;
    let created = matrix().insert(&db).await?;
    let v = serde_json::to_value(&created)?;
    assert_eq!(v["title"], "The Matrix");
    assert_eq!(v["director"], "The Wachowskis");
    assert_eq!(v["year"], 1999);
    assert_eq!(v["id"], created.id);
    Ok(())
}
