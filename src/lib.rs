// Pedantic lint configuration for the crate.
// Most of these are reasonable but too strict for this codebase:
// - missing_errors_doc: Error handling is self-evident from Result types
// - missing_panics_doc: Panics are limited to static regex construction
// - module_name_repetitions: `template::schema::SectionSpec` style names read better in docs
// - too_many_lines: The schema table is one cohesive literal
// - needless_pass_by_value: Sometimes clearer semantically
// - manual_let_else: if-let with early return is often clearer in context
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::too_many_lines,
    clippy::needless_pass_by_value,
    clippy::manual_let_else
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod operations;
pub mod publish;
pub mod template;
