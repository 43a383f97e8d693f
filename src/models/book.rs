//! Book (catalog entry) model and request types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Book record as persisted in the `books` table.
///
/// Column order matches the table: `id, title, price, created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Backend-assigned identifier. 0 until the book has been persisted.
    pub id: i64,
    pub title: String,
    pub price: Decimal,
    /// Set once at construction, never recomputed by the store.
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// Build an in-memory book stamped with the current UTC instant.
    /// The id stays at its sentinel value until `create` persists the row.
    pub fn new(title: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: 0,
            title: title.into(),
            price,
            created_at: Utc::now(),
        }
    }
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(custom(function = "non_negative_price"))]
    pub price: Decimal,
}

/// Update book request. Overwrites title and price; `created_at` is untouched.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(custom(function = "non_negative_price"))]
    pub price: Decimal,
}

fn non_negative_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        return Err(ValidationError::new("price_negative"));
    }
    Ok(())
}
