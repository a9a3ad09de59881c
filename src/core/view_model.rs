//! # View Model
//!
//! The home screen as an ordered list of sections. Built once from the
//! account state and loan status; there is no way to change it afterwards.
//!
//! ```text
//! ViewModel
//! ├── active: bool
//! ├── loan_status: LoanStatus
//! └── sections
//!     ├── Account      [AccountBalance]
//!     ├── SmartAccount [SmartAccountBalance] | []
//!     ├── CardSection  [LoanOffer] | [LoanBalance] | []
//!     └── Footer       [AccountUpdate] | [AccountClosed]
//! ```

use log::debug;

use super::item::Item;
use super::section::Section;
use super::status::LoanStatus;

/// Balance shown on the account row of an active account.
pub const ACTIVE_BALANCE: &str = "100";

#[derive(Debug, Clone)]
pub struct ViewModel {
    active: bool,
    loan_status: LoanStatus,
    sections: Vec<Section>,
}

impl ViewModel {
    /// Builds the sections for the given account state. Always yields
    /// `Account, SmartAccount, CardSection, Footer` in that order.
    pub fn build(active: bool, loan_status: LoanStatus) -> Self {
        let sections = if active {
            vec![
                Section::Account(vec![Item::account_balance(ACTIVE_BALANCE, true)]),
                Section::SmartAccount(vec![Item::SmartAccountBalance]),
                Section::CardSection(card_items(loan_status)),
                Section::Footer(vec![Item::AccountUpdate]),
            ]
        } else {
            // A closed account hides every loan card, whatever the status.
            vec![
                Section::Account(vec![Item::account_balance("", false)]),
                Section::SmartAccount(Vec::new()),
                Section::CardSection(Vec::new()),
                Section::Footer(vec![Item::AccountClosed]),
            ]
        };

        debug!(
            "Built view model (active: {}, loan status: {}) with {} sections",
            active,
            loan_status,
            sections.len()
        );

        Self {
            active,
            loan_status,
            sections,
        }
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn loan_status(&self) -> LoanStatus {
        self.loan_status
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Total number of items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items().len()).sum()
    }
}

/// Card row for an active account. Exhaustive so a new status cannot slip
/// through unhandled.
fn card_items(loan_status: LoanStatus) -> Vec<Item> {
    match loan_status {
        LoanStatus::Offer => vec![Item::LoanOffer],
        LoanStatus::Accepted => vec![Item::LoanBalance],
        LoanStatus::None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{all_inputs, section_names};

    #[test]
    fn test_every_input_yields_four_sections_in_order() {
        for (active, status) in all_inputs() {
            let vm = ViewModel::build(active, status);
            assert_eq!(
                section_names(&vm),
                ["Account", "SmartAccount", "CardSection", "Footer"],
                "active: {active}, status: {status}"
            );
        }
    }

    #[test]
    fn test_active_accepted_shows_loan_balance() {
        let vm = ViewModel::build(true, LoanStatus::Accepted);
        assert_eq!(vm.sections()[2].items(), &[Item::LoanBalance]);
    }

    #[test]
    fn test_active_offer_shows_loan_offer() {
        let vm = ViewModel::build(true, LoanStatus::Offer);
        assert_eq!(vm.sections()[2].items(), &[Item::LoanOffer]);
    }

    #[test]
    fn test_active_without_loan_has_empty_card_section() {
        let vm = ViewModel::build(true, LoanStatus::None);
        assert!(vm.sections()[2].items().is_empty());
    }

    #[test]
    fn test_active_account_rows() {
        let vm = ViewModel::build(true, LoanStatus::None);
        let sections = vm.sections();
        assert_eq!(sections[0].items(), &[Item::account_balance("100", true)]);
        assert_eq!(sections[1].items(), &[Item::SmartAccountBalance]);
        assert_eq!(sections[3].items(), &[Item::AccountUpdate]);
    }

    #[test]
    fn test_inactive_ignores_loan_status() {
        for status in LoanStatus::ALL {
            let vm = ViewModel::build(false, status);
            let sections = vm.sections();
            assert_eq!(sections[0].items(), &[Item::account_balance("", false)]);
            assert!(sections[1].items().is_empty());
            assert!(sections[2].items().is_empty());
            assert_eq!(sections[3].items(), &[Item::AccountClosed]);
        }
    }

    #[test]
    fn test_inputs_are_kept() {
        let vm = ViewModel::build(false, LoanStatus::Offer);
        assert!(!vm.active());
        assert_eq!(vm.loan_status(), LoanStatus::Offer);
    }

    #[test]
    fn test_item_count() {
        assert_eq!(ViewModel::build(true, LoanStatus::Offer).item_count(), 4);
        assert_eq!(ViewModel::build(true, LoanStatus::None).item_count(), 3);
        assert_eq!(ViewModel::build(false, LoanStatus::Accepted).item_count(), 2);
    }
}
