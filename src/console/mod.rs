//! # Console Adapter
//!
//! Prints the core model as plain text. This is the only module that
//! produces output, and it writes to any `io::Write` so tests can capture
//! it in a `Vec<u8>`.
//!
//! - [`ui`]: section and item lines via the [`Component`](component::Component) trait
//! - [`report`]: titled reports around the rendered lines
//! - [`demo`]: enumeration and equality walk-through

pub mod component;
pub mod demo;
pub mod report;
pub mod ui;

use log::info;
use std::io::{self, Write};

use crate::core::ViewModel;
use crate::core::config::ResolvedConfig;

pub use report::{write_all_reports, write_report};
pub use ui::render;

/// What the console should print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// One report for the configured account state.
    #[default]
    Show,
    /// A report for every account state.
    All,
    /// The walk-through from [`demo::demo_lines`].
    Demo,
}

pub fn run<W: Write>(mode: Mode, config: &ResolvedConfig, out: &mut W) -> io::Result<()> {
    info!("Running {:?}", mode);
    match mode {
        Mode::Show => {
            let vm = ViewModel::build(config.active, config.loan_status);
            write_report(out, &vm)
        }
        Mode::All => write_all_reports(out),
        Mode::Demo => report::write_lines(out, &demo::demo_lines()),
    }
}
