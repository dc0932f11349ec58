//! Checkout

pub mod errors;
pub mod models;
pub mod validation;
pub mod workflow;

pub use errors::CheckoutError;
pub use models::{CheckoutForm, Field, PaymentMethod};
pub use validation::{ValidationErrors, validate};
pub use workflow::{CheckoutState, CheckoutWorkflow};
