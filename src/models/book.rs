//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{author::Author, publisher::Publisher, review::Review};

/// Full book record from the database.
///
/// `publisher`, `authors` and `review` are not columns of the books table;
/// they are hydrated by explicit follow-up queries in the repository.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub publisher_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,

    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,

    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Author>,

    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<Review>,
}

/// Create book request: the composite input for building a book together
/// with its owned review and its author links.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub publisher_id: Uuid,
    #[serde(default)]
    pub author_ids: Vec<Uuid>,
    pub review_comment: String,
}

/// Update book request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: String,
}
