//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with migrations applied (feature: "postgres")
//! - `TestDataBuilder`: deterministic test data generation
//! - `assertions`: custom assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let name = builder.name("product", "main");
//!     let price = builder.price();
//! }
//! ```

use rust_decimal::Decimal;

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Builder for test data with deterministic values
///
/// Values derive from a seed, so a test sees the same data on every run.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the test name (recommended)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Unique name such as `"test-product-12345-main"`
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("product", "main"), "test-product-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Price between 0.00 and 9999.99 with exactly two decimal places
    pub fn price(&self) -> Decimal {
        let cents = (self.seed % 1_000_000) as i64;
        Decimal::new(cents, 2)
    }

    /// Quantity between 0 and 999
    pub fn quantity(&self) -> i32 {
        ((self.seed >> 20) % 1_000) as i32
    }
}

/// Test assertion helpers
pub mod assertions {
    use rust_decimal::Decimal;

    /// Compare decimals by value, ignoring scale (10.5 == 10.50)
    pub fn assert_decimal_eq(actual: Decimal, expected: Decimal, context: &str) {
        assert!(
            actual == expected,
            "{}: expected {}, got {}",
            context,
            expected,
            actual
        );
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.price(), builder2.price());
        assert_eq!(
            builder1.name("product", "test"),
            builder2.name("product", "test")
        );
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.name("p", "x"), builder2.name("p", "x"));
    }

    #[test]
    fn test_generated_values_are_valid_products() {
        for seed in [0, 1, 42, u64::MAX] {
            let builder = TestDataBuilder::new(seed);
            let price = builder.price();
            assert!(price >= Decimal::ZERO);
            assert!(price.scale() == 2);
            assert!((0..1000).contains(&builder.quantity()));
        }
    }
}
