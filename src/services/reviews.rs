//! Reviews service (read-only; reviews live and die with their book)

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::review::Review,
    repository::Repository,
};

#[derive(Clone)]
pub struct ReviewsService {
    repository: Repository,
}

impl ReviewsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all reviews
    pub async fn list(&self) -> AppResult<Vec<Review>> {
        self.repository.reviews.list().await
    }

    /// Get review by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Review> {
        self.repository
            .reviews
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Review {} not found", id)))
    }

    /// Get the review owned by a book
    pub async fn for_book(&self, book_id: Uuid) -> AppResult<Review> {
        self.repository
            .reviews
            .get_by_book(book_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No review for book {}", book_id)))
    }
}
