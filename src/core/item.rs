//! # Items
//!
//! A single row inside a [`Section`](super::section::Section). Only
//! `AccountBalance` carries data; the other rows are fully described by
//! their variant.

#[derive(Debug, Clone)]
pub enum Item {
    AccountBalance {
        balance: Option<String>,
        show_balance: bool,
    },
    SmartAccountBalance,
    LoanOffer,
    LoanBalance,
    AccountClosed,
    AccountUpdate,
}

impl Item {
    /// Shorthand for an `AccountBalance` row with a known balance.
    pub fn account_balance(balance: impl Into<String>, show_balance: bool) -> Self {
        Item::AccountBalance {
            balance: Some(balance.into()),
            show_balance,
        }
    }

    /// The variant name, used when printing payload-free rows.
    pub fn name(&self) -> &'static str {
        match self {
            Item::AccountBalance { .. } => "AccountBalance",
            Item::SmartAccountBalance => "SmartAccountBalance",
            Item::LoanOffer => "LoanOffer",
            Item::LoanBalance => "LoanBalance",
            Item::AccountClosed => "AccountClosed",
            Item::AccountUpdate => "AccountUpdate",
        }
    }
}

// Written out by hand: tags must match, and only AccountBalance compares payloads.
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Item::AccountBalance {
                    balance: lhs_balance,
                    show_balance: lhs_show,
                },
                Item::AccountBalance {
                    balance: rhs_balance,
                    show_balance: rhs_show,
                },
            ) => lhs_balance == rhs_balance && lhs_show == rhs_show,
            (Item::SmartAccountBalance, Item::SmartAccountBalance)
            | (Item::LoanOffer, Item::LoanOffer)
            | (Item::LoanBalance, Item::LoanBalance)
            | (Item::AccountClosed, Item::AccountClosed)
            | (Item::AccountUpdate, Item::AccountUpdate) => true,
            _ => false,
        }
    }
}

impl Eq for Item {}
