//! # Core Model
//!
//! The home screen's data model. It knows nothing about how it is shown.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • LoanStatus           │
//!                    │  • Section / Item       │
//!                    │  • ViewModel::build()   │
//!                    │  • config resolution    │
//!                    │                         │
//!                    │  No output. Pure.       │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │  console   │
//!                         │  adapter   │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`status`]: `LoanStatus` and its fixed value list
//! - [`item`]: `Item`, one row of a section, with hand-written equality
//! - [`section`]: `Section`, a tagged list of items with its cell identifier
//! - [`view_model`]: `ViewModel::build()`, the section layout rules
//! - [`config`]: settings file, env vars and CLI overrides

pub mod config;
pub mod item;
pub mod section;
pub mod status;
pub mod view_model;

pub use item::Item;
pub use section::Section;
pub use status::{LoanStatus, ParseLoanStatusError};
pub use view_model::ViewModel;
