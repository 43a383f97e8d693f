//! Catalog management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Get a book by id
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get(id).await
    }

    /// Validate and create a new book. The creation timestamp is stamped
    /// here, before the store is involved; the backend only assigns the id.
    pub async fn create_book(&self, req: CreateBook) -> AppResult<Book> {
        req.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let book = Book::new(req.title, req.price);
        self.repository.books.create(&book).await
    }

    /// Validate and update an existing book's title and price
    pub async fn update_book(&self, id: i64, req: UpdateBook) -> AppResult<Book> {
        req.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.repository.books.update(id, &req.title, req.price).await
    }

    /// Delete a book
    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete(id).await
    }
}
