use std::fmt::Write;

use super::compound::{
    OFFER_DESCRIPTION_LABEL, OFFER_LABEL, ROLE_COMPANY, ROLE_CONTRIBUTIONS, ROLE_DATES,
    ROLE_LOCATION, ROLE_ORGANIZATION_TYPE, ROLE_SCOPE, ROLE_SUMMARY, ROLE_TITLE,
};
use super::extract::{label_marker, Marker};
use super::schema::{Expect, SectionSpec, SCHEMA};

const TITLE: &str = "Career Profile";
const PREAMBLE: &str = "Replace each hint comment with your answer. Anything still inside a comment is treated as unset.";
const BLANK_OFFERS: usize = 3;
const BLANK_ROLES: usize = 3;
const BLANK_LIST_ITEMS: usize = 2;

/// Render the empty profile template, every value a hint comment.
///
/// Parsing the result yields no records.
#[must_use]
pub fn render_blank_template() -> String {
    let mut out = format!("# {TITLE}\n\n<!-- {PREAMBLE} -->\n");
    for spec in SCHEMA {
        render_section(&mut out, spec);
    }
    out
}

fn render_section(out: &mut String, spec: &SectionSpec) {
    let _ = write!(out, "\n## {}\n\n", spec.heading);
    let mut last_was_field = false;

    for item in spec.items {
        let is_field = matches!(item, Expect::Field { .. });
        if last_was_field && !is_field {
            out.push('\n');
        }
        match *item {
            Expect::Field { label, hint, .. } => {
                let _ = writeln!(out, "{} <!-- {hint} -->", label_marker(label));
            }
            Expect::List { marker, hint, .. } => {
                render_marker(out, marker);
                for _ in 0..BLANK_LIST_ITEMS {
                    let _ = writeln!(out, "- <!-- {hint} -->");
                }
                out.push('\n');
            }
            Expect::Table {
                marker, columns, ..
            } => {
                render_marker(out, marker);
                let _ = writeln!(out, "| {} |", columns.join(" | "));
                let _ = writeln!(out, "|{}", "---|".repeat(columns.len()));
                let cells: Vec<String> = columns
                    .iter()
                    .map(|c| format!("<!-- {} -->", c.to_lowercase()))
                    .collect();
                let _ = writeln!(out, "| {} |\n", cells.join(" | "));
            }
            Expect::Offers { heading, .. } => {
                let _ = writeln!(out, "### {heading}\n");
                for _ in 0..BLANK_OFFERS {
                    let _ = writeln!(out, "{} <!-- Short title -->", label_marker(OFFER_LABEL));
                    let _ = writeln!(
                        out,
                        "{} <!-- One or two sentences -->\n",
                        label_marker(OFFER_DESCRIPTION_LABEL)
                    );
                }
            }
            Expect::Roles { .. } => {
                for ordinal in 1..=BLANK_ROLES {
                    render_role(out, ordinal);
                }
            }
            Expect::Mirror { .. } => {}
        }
        last_was_field = is_field;
    }
}

fn render_marker(out: &mut String, marker: Marker<'_>) {
    match marker {
        Marker::Heading(text) => {
            let _ = writeln!(out, "### {text}\n");
        }
        Marker::Label(label) => {
            let _ = writeln!(out, "{}", label_marker(label));
        }
    }
}

fn render_role(out: &mut String, ordinal: usize) {
    if ordinal == 1 {
        let _ = writeln!(out, "### Role {ordinal} (Most Recent)\n");
    } else {
        let _ = writeln!(out, "### Role {ordinal}\n");
    }
    for label in [
        ROLE_TITLE,
        ROLE_COMPANY,
        ROLE_ORGANIZATION_TYPE,
        ROLE_DATES,
        ROLE_LOCATION,
        ROLE_SCOPE,
        ROLE_SUMMARY,
    ] {
        let _ = writeln!(out, "{} <!-- {label} -->", label_marker(label));
    }
    let _ = writeln!(out, "\n{}", label_marker(ROLE_CONTRIBUTIONS));
    for _ in 0..BLANK_LIST_ITEMS {
        let _ = writeln!(out, "- <!-- Contribution, with impact -->");
    }
    out.push('\n');
}
