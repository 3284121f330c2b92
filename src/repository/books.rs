//! Books repository
//!
//! Owns the two composite operations of the catalog: creating a book
//! together with its review and author links, and deleting a book together
//! with everything it owns. Both run as a single transaction.

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{author::Author, book::Book, publisher::Publisher, review::Review},
};

use super::map_constraint;

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// List all books (rows only, relations not hydrated)
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY title")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a book by ID with publisher, authors and review hydrated through
    /// explicit queries. A missing id is not an error.
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match book {
            Some(book) => Ok(Some(self.hydrate(book).await?)),
            None => Ok(None),
        }
    }

    /// Get a book by its unique title
    pub async fn get_by_title(&self, title: &str) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE title = $1")
            .bind(title)
            .fetch_optional(&self.pool)
            .await?;

        match book {
            Some(book) => Ok(Some(self.hydrate(book).await?)),
            None => Ok(None),
        }
    }

    /// Derived inverse view: all books referencing a publisher
    pub async fn list_by_publisher(&self, publisher_id: Uuid) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE publisher_id = $1 ORDER BY title",
        )
        .bind(publisher_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Load the relations of a book row
    async fn hydrate(&self, mut book: Book) -> AppResult<Book> {
        if let Some(publisher_id) = book.publisher_id {
            book.publisher = sqlx::query_as::<_, Publisher>(
                "SELECT * FROM publishers WHERE id = $1",
            )
            .bind(publisher_id)
            .fetch_optional(&self.pool)
            .await?;
        }

        book.authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT a.id, a.name, a.created_at
            FROM book_authors ba
            JOIN authors a ON a.id = ba.author_id
            WHERE ba.book_id = $1
            ORDER BY a.name
            "#,
        )
        .bind(book.id)
        .fetch_all(&self.pool)
        .await?;

        book.review = sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE book_id = $1")
            .bind(book.id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(book)
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Create a book together with its owned review and its author links in
    /// one transaction: either all of book row, review row and junction rows
    /// are written, or none are. The publisher and authors must already have
    /// been resolved by the caller.
    pub async fn create_with_graph(
        &self,
        title: &str,
        publisher: Publisher,
        authors: Vec<Author>,
        review_comment: &str,
    ) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let book_id = Uuid::new_v4();
        let book = sqlx::query_as::<_, Book>(
            "INSERT INTO books (id, title, publisher_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(book_id)
        .bind(title)
        .bind(publisher.id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_constraint(e, "Book title"))?;

        let review = sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (id, book_id, comment) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(book_id)
        .bind(review_comment)
        .fetch_one(&mut *tx)
        .await?;

        for author in &authors {
            sqlx::query("INSERT INTO book_authors (book_id, author_id) VALUES ($1, $2)")
                .bind(book_id)
                .bind(author.id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(Book {
            publisher: Some(publisher),
            authors,
            review: Some(review),
            ..book
        })
    }

    /// Rename a book (insert-or-update path for an already persisted book)
    pub async fn update_title(&self, id: Uuid, title: &str) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            "UPDATE books SET title = $1 WHERE id = $2 RETURNING *",
        )
        .bind(title)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_constraint(e, "Book title"))?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

        self.hydrate(book).await
    }

    /// Delete a book together with its owned review and its junction rows in
    /// one transaction. Authors and the publisher are left untouched.
    /// Deleting a nonexistent id is signaled as not found.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM reviews WHERE book_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM book_authors WHERE book_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            // Implicit rollback when the transaction is dropped
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }
}
