//! Operations behind the CLI commands.
//!
//! Each operation reads the profile document through [`read_document`], runs
//! the template parser and returns a serializable result.

pub mod build;
pub mod check;
pub mod document;
pub mod show;
pub mod template;

pub use build::{build, BuildRequest, BuildResult};
pub use check::{check, CheckResult, SectionStatus};
pub use document::read_document;
pub use show::show;
pub use template::{write_template, TemplateResult};
