//! Publishers repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::publisher::Publisher,
};

use super::map_constraint;

#[derive(Clone)]
pub struct PublishersRepository {
    pool: Pool<Postgres>,
}

impl PublishersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all publishers
    pub async fn list(&self) -> AppResult<Vec<Publisher>> {
        let rows = sqlx::query_as::<_, Publisher>("SELECT * FROM publishers ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get publisher by ID; a missing id is not an error
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Publisher>> {
        let publisher = sqlx::query_as::<_, Publisher>("SELECT * FROM publishers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(publisher)
    }

    /// Create a new publisher. Publisher names are unique.
    pub async fn create(&self, name: &str) -> AppResult<Publisher> {
        sqlx::query_as::<_, Publisher>(
            "INSERT INTO publishers (id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_constraint(e, "Publisher name"))
    }

    /// Update a publisher's name
    pub async fn update(&self, id: Uuid, name: &str) -> AppResult<Publisher> {
        sqlx::query_as::<_, Publisher>(
            "UPDATE publishers SET name = $1 WHERE id = $2 RETURNING *",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_constraint(e, "Publisher name"))?
        .ok_or_else(|| AppError::NotFound(format!("Publisher {} not found", id)))
    }

    /// Delete a publisher. Books referencing it keep existing with a null
    /// publisher (the store sets the foreign key to NULL).
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM publishers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Publisher {} not found", id)));
        }
        Ok(())
    }
}
