//! Checkout errors.

use thiserror::Error;

use crate::domain::checkout::validation::ValidationErrors;

/// Errors raised by the checkout workflow.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The cart has nothing in it; checkout is blocked before validation.
    #[error("nothing to checkout")]
    EmptyCart,

    /// One or more form fields failed validation; nothing was submitted.
    #[error("checkout form has {} invalid field(s)", .0.len())]
    Invalid(ValidationErrors),

    /// The workflow already left the editing state.
    #[error("checkout already submitted")]
    AlreadySubmitted,

    /// There is no submission to process.
    #[error("no submission in progress")]
    NotProcessing,
}
