//! Publishers service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::Book,
        publisher::{CreatePublisher, Publisher, UpdatePublisher},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct PublishersService {
    repository: Repository,
}

impl PublishersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all publishers
    pub async fn list(&self) -> AppResult<Vec<Publisher>> {
        self.repository.publishers.list().await
    }

    /// Get publisher by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Publisher> {
        self.repository
            .publishers
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Publisher {} not found", id)))
    }

    /// Create a publisher
    pub async fn create(&self, data: &CreatePublisher) -> AppResult<Publisher> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Publisher name cannot be empty".to_string()));
        }
        self.repository.publishers.create(name).await
    }

    /// Rename a publisher
    pub async fn update(&self, id: Uuid, data: &UpdatePublisher) -> AppResult<Publisher> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Publisher name cannot be empty".to_string()));
        }
        self.repository.publishers.update(id, name).await
    }

    /// Delete a publisher
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.publishers.delete(id).await
    }

    /// Derived view: all books of a publisher
    pub async fn books(&self, id: Uuid) -> AppResult<Vec<Book>> {
        // Distinguish "unknown publisher" from "publisher with no books"
        self.get_by_id(id).await?;
        self.repository.books.list_by_publisher(id).await
    }
}
