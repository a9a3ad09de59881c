//! # Loan Status
//!
//! Which loan card, if any, the home screen shows. The raw value of each
//! status is its name, so `LoanStatus::Offer.as_str() == "Offer"`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    /// No loan activity; the card section stays empty.
    #[default]
    None,
    /// A loan has been offered to the customer.
    Offer,
    /// The customer accepted a loan and now carries a balance.
    Accepted,
}

impl LoanStatus {
    /// Every status in declaration order. Enums carry no built-in way to
    /// iterate their variants, so the list is written out by hand.
    pub const ALL: [LoanStatus; 3] = [LoanStatus::None, LoanStatus::Offer, LoanStatus::Accepted];

    /// Returns the raw value (the variant name).
    pub fn as_str(self) -> &'static str {
        match self {
            LoanStatus::None => "None",
            LoanStatus::Offer => "Offer",
            LoanStatus::Accepted => "Accepted",
        }
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known loan status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLoanStatusError(pub String);

impl fmt::Display for ParseLoanStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown loan status '{}' (expected none, offer or accepted)",
            self.0
        )
    }
}

impl std::error::Error for ParseLoanStatusError {}

impl FromStr for LoanStatus {
    type Err = ParseLoanStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        LoanStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseLoanStatusError(s.to_string()))
    }
}
