//! # Sections
//!
//! A section groups the items shown under one cell type. The cell
//! identifier depends on the tag alone, never on the items inside.
//!
//! `Section` has no `PartialEq`. Compare sections through [`Section::name`]
//! and [`Section::items`] instead.

use super::item::Item;

#[derive(Debug, Clone)]
pub enum Section {
    Account(Vec<Item>),
    SmartAccount(Vec<Item>),
    CardSection(Vec<Item>),
    Footer(Vec<Item>),
}

impl Section {
    /// One empty section of each kind, in declaration order.
    pub fn all() -> [Section; 4] {
        [
            Section::Account(Vec::new()),
            Section::SmartAccount(Vec::new()),
            Section::CardSection(Vec::new()),
            Section::Footer(Vec::new()),
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Section::Account(_) => "Account",
            Section::SmartAccount(_) => "SmartAccount",
            Section::CardSection(_) => "CardSection",
            Section::Footer(_) => "Footer",
        }
    }

    /// Reuse identifier of the cell that displays this section.
    pub fn cell_identifier(&self) -> &'static str {
        match self {
            Section::Account(_) => "AccountCellId",
            Section::SmartAccount(_) => "SmartAccountCellId",
            Section::CardSection(_) => "CardCellId",
            Section::Footer(_) => "FooterCellId",
        }
    }

    pub fn items(&self) -> &[Item] {
        match self {
            Section::Account(items)
            | Section::SmartAccount(items)
            | Section::CardSection(items)
            | Section::Footer(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_each_kind_once_and_empty() {
        let names: Vec<_> = Section::all().iter().map(Section::name).collect();
        assert_eq!(names, ["Account", "SmartAccount", "CardSection", "Footer"]);
        assert!(Section::all().iter().all(|s| s.items().is_empty()));
    }

    #[test]
    fn test_cell_identifier_ignores_items() {
        let empty = Section::CardSection(vec![]);
        let offer = Section::CardSection(vec![Item::LoanOffer]);
        let balance = Section::CardSection(vec![Item::LoanBalance, Item::LoanOffer]);
        assert_eq!(empty.cell_identifier(), "CardCellId");
        assert_eq!(offer.cell_identifier(), "CardCellId");
        assert_eq!(balance.cell_identifier(), "CardCellId");
    }

    #[test]
    fn test_cell_identifiers() {
        let ids: Vec<_> = Section::all().iter().map(Section::cell_identifier).collect();
        assert_eq!(
            ids,
            ["AccountCellId", "SmartAccountCellId", "CardCellId", "FooterCellId"]
        );
    }

    #[test]
    fn test_items_preserve_order() {
        let section = Section::Footer(vec![Item::AccountUpdate, Item::AccountClosed]);
        assert_eq!(section.items(), &[Item::AccountUpdate, Item::AccountClosed]);
    }
}
