//! Data models for the bookstore catalog

pub mod author;
pub mod book;
pub mod publisher;
pub mod review;

// Re-export commonly used types
pub use author::Author;
pub use book::Book;
pub use publisher::Publisher;
pub use review::Review;
