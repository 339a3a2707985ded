use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Largest accepted price magnitude: 12 integer digits.
const PRICE_INTEGER_LIMIT: i64 = 1_000_000_000_000;
const PRICE_MAX_SCALE: u32 = 2;

/// A persisted catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Identifier assigned by storage, immutable
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Widget")]
    pub name: String,
    /// Unit price, serialized as a JSON number
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    #[schema(example = 10.5)]
    pub price: Decimal,
    #[schema(example = 3)]
    pub quantity: i32,
}

impl Product {
    pub fn new(id: i64, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            price: input.price,
            quantity: input.quantity,
        }
    }

    /// Replace every mutable field with the caller's values.
    pub fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.price = input.price;
        self.quantity = input.quantity;
    }
}

/// Request payload for both create and update.
///
/// All three fields are required; update replaces them all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductInput {
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 255, message = "Product name must be at most 255 characters")
    )]
    #[schema(example = "Widget", max_length = 255)]
    pub name: String,

    /// Non-negative, at most 12 integer digits and 2 decimal places.
    /// Accepted as a JSON number or a numeric string.
    #[validate(custom(function = "validate_price"))]
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    #[schema(example = 10.5, minimum = 0)]
    pub price: Decimal,

    #[validate(range(min = 0, message = "Quantity must be non-negative"))]
    #[schema(example = 3, minimum = 0)]
    pub quantity: i32,
}

fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(
            ValidationError::new("blank").with_message(Cow::Borrowed("Product name is required"))
        );
    }
    Ok(())
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(
            ValidationError::new("range").with_message(Cow::Borrowed("Price must be non-negative"))
        );
    }

    // Trailing zeros do not count: 10.500 is 10.5.
    let too_precise = price.normalize().scale() > PRICE_MAX_SCALE;
    let too_large = price.trunc() >= Decimal::from(PRICE_INTEGER_LIMIT);
    if too_precise || too_large {
        return Err(ValidationError::new("digits")
            .with_message(Cow::Borrowed("Price must have up to 2 decimal places")));
    }

    Ok(())
}
