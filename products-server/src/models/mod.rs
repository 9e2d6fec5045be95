//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod option;
pub mod product;
pub mod validation;

pub use option::OptionDraft;
pub use product::ProductDraft;
pub use validation::ValidationError;
