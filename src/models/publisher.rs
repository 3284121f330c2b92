//! Publisher model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Publisher record. The list of a publisher's books is a derived view
/// (query by foreign key), not a stored back-reference.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Publisher {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Create publisher request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePublisher {
    pub name: String,
}

/// Update publisher request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePublisher {
    pub name: String,
}
