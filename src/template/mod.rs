//! Profile template parser.
//!
//! A profile document is markdown-flavoured text with nine `## ` sections.
//! Each section is parsed on its own by composable span extractors
//! ([`extract`], [`compound`]) according to the declarative [`schema`], and
//! [`assemble`] turns the results into records.

pub mod assemble;
pub mod blank;
pub mod boundary;
pub mod compound;
pub mod extract;
pub mod schema;
pub mod sections;
pub mod text;

pub use assemble::parse_document;
