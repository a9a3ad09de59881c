//! # Section Rendering
//!
//! Turns a [`ViewModel`] into text lines: one header per section, then one
//! indented line per item.
//!
//! ```text
//! Account : AccountCellId
//!   AccountBalance balance="100" show_balance=true
//! SmartAccount : SmartAccountCellId
//!   SmartAccountBalance
//! CardSection : CardCellId
//!   LoanBalance
//! Footer : FooterCellId
//!   AccountUpdate
//! ```

use crate::console::component::Component;
use crate::core::{Item, Section, ViewModel};

/// Printed in place of a balance that is not known.
pub const ABSENT_MARKER: &str = "<none>";

const ITEM_INDENT: &str = "  ";

/// Renders every section of `vm`, in order.
pub fn render(vm: &ViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(vm.sections().len() + vm.item_count());
    vm.render(&mut lines);
    lines
}

impl Component for ViewModel {
    fn render(&self, lines: &mut Vec<String>) {
        for section in self.sections() {
            section.render(lines);
        }
    }
}

impl Component for Section {
    fn render(&self, lines: &mut Vec<String>) {
        lines.push(header_line(self));
        for item in self.items() {
            item.render(lines);
        }
    }
}

impl Component for Item {
    fn render(&self, lines: &mut Vec<String>) {
        lines.push(format!("{ITEM_INDENT}{}", item_label(self)));
    }
}

/// `"<name> : <cell id>"`
pub fn header_line(section: &Section) -> String {
    format!("{} : {}", section.name(), section.cell_identifier())
}

/// Describes one item. Only `AccountBalance` shows its payload.
pub fn item_label(item: &Item) -> String {
    match item {
        Item::AccountBalance {
            balance,
            show_balance,
        } => {
            let balance = match balance {
                Some(value) => format!("{value:?}"),
                None => ABSENT_MARKER.to_string(),
            };
            format!("{} balance={balance} show_balance={show_balance}", item.name())
        }
        other => other.name().to_string(),
    }
}
