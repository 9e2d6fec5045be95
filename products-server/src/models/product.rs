//! Product input validation
//!
//! A draft is the validated form of client-supplied product fields, built
//! before any write is issued to the store.

use rust_decimal::Decimal;

use super::ValidationError;

/// Maximum length for product and option names
pub(crate) const MAX_NAME_LEN: usize = 128;

/// Validated product fields for create/update
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub delivery_price: Decimal,
}

impl ProductDraft {
    /// Build a draft, validating all fields.
    ///
    /// # Rules
    /// - Name must be non-empty (after trimming) and at most 128 characters
    /// - Price and delivery price must be non-negative
    pub fn new(
        name: &str,
        description: Option<String>,
        price: Decimal,
        delivery_price: Decimal,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        if name.len() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_NAME_LEN,
            });
        }
        if price < Decimal::ZERO {
            return Err(ValidationError::Negative { field: "price" });
        }
        if delivery_price < Decimal::ZERO {
            return Err(ValidationError::Negative {
                field: "delivery price",
            });
        }

        Ok(Self {
            name: name.to_owned(),
            description,
            price,
            delivery_price,
        })
    }
}
