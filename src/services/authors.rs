//! Authors service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::author::{Author, CreateAuthor, UpdateAuthor},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all authors
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list().await
    }

    /// Get author by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Author> {
        self.repository
            .authors
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    /// Create an author
    pub async fn create(&self, data: &CreateAuthor) -> AppResult<Author> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Author name cannot be empty".to_string()));
        }
        self.repository.authors.create(name).await
    }

    /// Rename an author
    pub async fn update(&self, id: Uuid, data: &UpdateAuthor) -> AppResult<Author> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Author name cannot be empty".to_string()));
        }
        self.repository.authors.update(id, name).await
    }

    /// Delete an author
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.authors.delete(id).await
    }
}
