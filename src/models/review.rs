//! Review model
//!
//! A review is exclusively owned by its book: it is created in the same
//! transaction as the book and removed when the book is deleted. There is
//! no standalone create path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Review record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Review {
    pub id: Uuid,
    pub book_id: Uuid,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}
