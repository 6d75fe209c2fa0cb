//! Extractors for sections built from repeated blocks.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::extract::{field, label_marker, list, Marker};
use super::text::clean_value;
use crate::models::record::{Offer, Role};

/// Labels of the title/description pairs under "What I Offer".
pub const OFFER_LABEL: &str = "Offer";
pub const OFFER_DESCRIPTION_LABEL: &str = "Description";

/// Field labels of a role block, in output order.
pub const ROLE_TITLE: &str = "Title";
pub const ROLE_COMPANY: &str = "Company";
pub const ROLE_ORGANIZATION_TYPE: &str = "Organization Type";
pub const ROLE_DATES: &str = "Dates";
pub const ROLE_LOCATION: &str = "Location";
pub const ROLE_SCOPE: &str = "Scope";
pub const ROLE_SUMMARY: &str = "Summary";
pub const ROLE_CONTRIBUTIONS: &str = "Key Contributions";

// `### Role 3`, `### Role 1 (Most Recent)`, `### Role 2 - current`
static ROLE_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*###[ \t]+Role[ \t]+\d+\b.*$").expect("valid role heading regex")
});

/// Split `span` on the repeating `**Offer:**` marker into title/description
/// pairs. The first line of each block is the title; blocks without a usable
/// title are discarded.
#[must_use]
pub fn offers(span: &str) -> Vec<Offer> {
    let marker = label_marker(OFFER_LABEL);
    span.split(marker.as_str())
        .skip(1)
        .filter_map(|block| {
            let title = clean_value(block.lines().next().unwrap_or_default());
            if title.is_empty() {
                debug!("dropping offer without title");
                return None;
            }
            Some(Offer {
                title,
                description: field(block, OFFER_DESCRIPTION_LABEL),
            })
        })
        .collect()
}

/// Split `span` on `### Role N` headings and extract one [`Role`] per block,
/// in document order. Any text after the ordinal is ignored. A block is kept
/// when it has a title or a company.
#[must_use]
pub fn roles(span: &str) -> Vec<Role> {
    let starts: Vec<(usize, usize)> = ROLE_HEADING_RE
        .find_iter(span)
        .map(|m| (m.start(), m.end()))
        .collect();

    starts
        .iter()
        .enumerate()
        .filter_map(|(i, &(_, heading_end))| {
            let end = starts.get(i + 1).map_or(span.len(), |&(next, _)| next);
            let block = &span[heading_end..end];
            let role = Role {
                title: field(block, ROLE_TITLE),
                company: field(block, ROLE_COMPANY),
                organization_type: field(block, ROLE_ORGANIZATION_TYPE),
                dates: field(block, ROLE_DATES),
                location: field(block, ROLE_LOCATION),
                scope: field(block, ROLE_SCOPE),
                summary: field(block, ROLE_SUMMARY),
                contributions: list(block, Marker::Label(ROLE_CONTRIBUTIONS)),
            };
            if role.title.is_empty() && role.company.is_empty() {
                debug!(ordinal = i + 1, "dropping role without title or company");
                None
            } else {
                Some(role)
            }
        })
        .collect()
}
