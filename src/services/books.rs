//! Books service
//!
//! The one piece of orchestration in the catalog: resolving the references
//! of a create request into an entity graph and handing it to the
//! repository for the atomic write.

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Get a book by ID with its relations
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Book> {
        self.repository
            .books
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Find a book by its unique title
    pub async fn get_by_title(&self, title: &str) -> AppResult<Book> {
        self.repository
            .books
            .get_by_title(title)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book '{}' not found", title)))
    }

    /// Create a book with its owned review and its author links.
    ///
    /// The publisher reference is required: an unresolved publisher id
    /// aborts before anything is written. Author ids that do not resolve
    /// are dropped rather than failing the request; the created book may
    /// reference fewer authors than asked for.
    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let title = data.title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("Book title cannot be empty".to_string()));
        }

        let publisher = self
            .repository
            .publishers
            .get_by_id(data.publisher_id)
            .await?
            .ok_or_else(|| {
                AppError::ReferenceNotFound(format!(
                    "Publisher {} not found",
                    data.publisher_id
                ))
            })?;

        let authors = self.repository.authors.get_by_ids(&data.author_ids).await?;
        if authors.len() != data.author_ids.len() {
            tracing::warn!(
                requested = data.author_ids.len(),
                resolved = authors.len(),
                "some author ids did not resolve and were dropped"
            );
        }

        self.repository
            .books
            .create_with_graph(title, publisher, authors, &data.review_comment)
            .await
    }

    /// Rename a book
    pub async fn update(&self, id: Uuid, data: &UpdateBook) -> AppResult<Book> {
        let title = data.title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("Book title cannot be empty".to_string()));
        }
        self.repository.books.update_title(id, title).await
    }

    /// Delete a book and everything it owns
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.books.delete(id).await
    }
}
