//! # Demo Walk-through
//!
//! Shows off the model types: iterating the fixed value lists and comparing
//! values. `Section` has no equality, so only statuses and items are
//! compared.

use crate::console::report::report_lines;
use crate::console::ui::{header_line, item_label};
use crate::core::{Item, LoanStatus, Section, ViewModel};

pub fn demo_lines() -> Vec<String> {
    let mut lines: Vec<String> = LoanStatus::ALL.iter().map(|s| s.to_string()).collect();

    lines.extend(Section::all().iter().map(header_line));

    lines.extend(
        LoanStatus::ALL
            .iter()
            .enumerate()
            .map(|(index, status)| format!("{index} {status}")),
    );

    lines.push(comparison(
        LoanStatus::Accepted.as_str(),
        LoanStatus::Offer.as_str(),
        LoanStatus::Accepted == LoanStatus::Offer,
    ));
    lines.push(comparison(
        LoanStatus::Accepted.as_str(),
        LoanStatus::Accepted.as_str(),
        LoanStatus::Accepted == LoanStatus::Accepted,
    ));

    let item_pairs = [
        (Item::AccountClosed, Item::AccountUpdate),
        (Item::AccountClosed, Item::AccountClosed),
        (
            Item::account_balance("100", false),
            Item::AccountBalance {
                balance: None,
                show_balance: false,
            },
        ),
    ];
    for (lhs, rhs) in &item_pairs {
        lines.push(comparison(&item_label(lhs), &item_label(rhs), lhs == rhs));
    }

    lines.extend(report_lines(&ViewModel::build(true, LoanStatus::Accepted)));
    lines
}

fn comparison(lhs: &str, rhs: &str, equal: bool) -> String {
    format!("{lhs} == {rhs}: {equal}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerations_come_first() {
        let lines = demo_lines();
        assert_eq!(lines[..3], ["None", "Offer", "Accepted"]);
        assert_eq!(lines[3], "Account : AccountCellId");
        assert_eq!(lines[6], "Footer : FooterCellId");
        assert_eq!(lines[7..10], ["0 None", "1 Offer", "2 Accepted"]);
    }

    #[test]
    fn test_comparisons() {
        let lines = demo_lines();
        assert_eq!(lines[10], "Accepted == Offer: false");
        assert_eq!(lines[11], "Accepted == Accepted: true");
        assert_eq!(lines[12], "AccountClosed == AccountUpdate: false");
        assert_eq!(lines[13], "AccountClosed == AccountClosed: true");
        assert_eq!(
            lines[14],
            "AccountBalance balance=\"100\" show_balance=false == AccountBalance balance=<none> show_balance=false: false"
        );
    }

    #[test]
    fn test_ends_with_accepted_report() {
        let lines = demo_lines();
        let report = report_lines(&ViewModel::build(true, LoanStatus::Accepted));
        assert_eq!(lines[lines.len() - report.len()..], report[..]);
    }
}
