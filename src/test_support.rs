//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::{LoanStatus, ViewModel};

/// Every `(active, loan_status)` input `ViewModel::build` accepts.
pub fn all_inputs() -> Vec<(bool, LoanStatus)> {
    [true, false]
        .into_iter()
        .flat_map(|active| LoanStatus::ALL.into_iter().map(move |status| (active, status)))
        .collect()
}

/// Section names of a view model, in order.
pub fn section_names(vm: &ViewModel) -> Vec<&'static str> {
    vm.sections().iter().map(|s| s.name()).collect()
}
