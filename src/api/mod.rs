//! API handlers for Librarium REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
