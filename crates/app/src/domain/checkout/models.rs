//! Checkout Models

use std::{fmt, str::FromStr};

use thiserror::Error;

/// How the simulated order will be paid.
///
/// Constrained to the enumeration by construction; no value needs
/// validating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Credit card.
    #[default]
    Card,
    /// Cash on delivery.
    Cash,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Card => f.write_str("card"),
            Self::Cash => f.write_str("cash"),
        }
    }
}

/// Raised when parsing an unknown payment method.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown payment method: {0}")]
pub struct ParsePaymentMethodError(String);

impl FromStr for PaymentMethod {
    type Err = ParsePaymentMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(Self::Card),
            "cash" => Ok(Self::Cash),
            other => Err(ParsePaymentMethodError(other.to_string())),
        }
    }
}

/// Contact, shipping and payment details collected at checkout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub payment_method: PaymentMethod,
}

/// A form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Address,
    City,
    Zip,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FirstName => "first-name",
            Self::LastName => "last-name",
            Self::Email => "email",
            Self::Address => "address",
            Self::City => "city",
            Self::Zip => "zip",
        })
    }
}
