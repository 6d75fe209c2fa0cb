//! The parser schema: which sections exist and what each one contains.
//!
//! Extraction, the blank template and the completeness report are all
//! driven from [`SCHEMA`]; nothing about the document structure is inferred.

use super::extract::Marker;

/// One expected value inside a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// Scalar `**Label:** value`.
    Field {
        key: &'static str,
        label: &'static str,
        hint: &'static str,
    },
    /// Bullet list after a heading or label.
    List {
        key: &'static str,
        marker: Marker<'static>,
        hint: &'static str,
    },
    /// Pipe table after a heading or label.
    Table {
        key: &'static str,
        marker: Marker<'static>,
        columns: &'static [&'static str],
    },
    /// Repeated `**Offer:**` / `**Description:**` pairs under a heading.
    Offers {
        key: &'static str,
        heading: &'static str,
    },
    /// Repeated `### Role N` groups.
    Roles { key: &'static str },
    /// Verbatim copy of another record's value.
    Mirror {
        key: &'static str,
        endpoint: &'static str,
        source: &'static str,
    },
}

impl Expect {
    #[must_use]
    pub fn key(&self) -> &'static str {
        match *self {
            Self::Field { key, .. }
            | Self::List { key, .. }
            | Self::Table { key, .. }
            | Self::Offers { key, .. }
            | Self::Roles { key }
            | Self::Mirror { key, .. } => key,
        }
    }
}

/// A top-level section and the record it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    /// Exact `## ` heading text.
    pub heading: &'static str,
    /// Record name, also the output file stem.
    pub endpoint: &'static str,
    /// One-line description published in the directory.
    pub description: &'static str,
    pub items: &'static [Expect],
}

/// Every section of the profile template, in document order.
pub static SCHEMA: &[SectionSpec] = &[
    SectionSpec {
        heading: "Identity",
        endpoint: "identity",
        description: "Who I am: name, title, contact details and positioning",
        items: &[
            Expect::Field { key: "name", label: "Name", hint: "Your full name" },
            Expect::Field { key: "title", label: "Title", hint: "Current or target title" },
            Expect::Field { key: "location", label: "Location", hint: "City, region" },
            Expect::Field { key: "email", label: "Email", hint: "Contact email" },
            Expect::Field { key: "linkedin", label: "LinkedIn", hint: "LinkedIn profile URL" },
            Expect::Field { key: "website", label: "Website", hint: "Personal site URL" },
            Expect::Field { key: "tagline", label: "Tagline", hint: "One line that sums you up" },
            Expect::Field {
                key: "positioning",
                label: "Positioning Statement",
                hint: "Two or three sentences on the problem you solve and for whom",
            },
            Expect::Offers { key: "what_i_offer", heading: "What I Offer" },
        ],
    },
    SectionSpec {
        heading: "Career Narrative",
        endpoint: "narrative",
        description: "The story of my career and where it is heading",
        items: &[
            Expect::Field { key: "summary", label: "Summary", hint: "The short version of your story" },
            Expect::Field { key: "origin", label: "Origin", hint: "How you got started" },
            Expect::Field {
                key: "current_chapter",
                label: "Current Chapter",
                hint: "What you are focused on now",
            },
            Expect::List {
                key: "inflection_points",
                marker: Marker::Heading("Inflection Points"),
                hint: "A moment that changed your direction",
            },
        ],
    },
    SectionSpec {
        heading: "Thesis & Implications",
        endpoint: "thesis",
        description: "What I believe about my field and what follows from it",
        items: &[
            Expect::Field { key: "thesis", label: "Thesis", hint: "The core belief behind your work" },
            Expect::Field { key: "why_now", label: "Why Now", hint: "Why this matters today" },
            Expect::List {
                key: "implications",
                marker: Marker::Heading("Implications"),
                hint: "What follows if the thesis holds",
            },
            Expect::List {
                key: "evidence",
                marker: Marker::Heading("Evidence"),
                hint: "Something you have seen that supports it",
            },
        ],
    },
    SectionSpec {
        heading: "Quantified Accomplishments",
        endpoint: "accomplishments",
        description: "Measured results, headline numbers first",
        items: &[
            Expect::Table {
                key: "headline",
                marker: Marker::Heading("Headline Accomplishments"),
                columns: &["Accomplishment", "Metric", "Context"],
            },
            Expect::List {
                key: "additional",
                marker: Marker::Heading("Additional Results"),
                hint: "Another result, with a number if you have one",
            },
        ],
    },
    SectionSpec {
        heading: "Headline Stats",
        endpoint: "stats",
        description: "The numbers worth leading with",
        items: &[
            Expect::Table {
                key: "key_stats",
                marker: Marker::Heading("Key Stats"),
                columns: &["Stat", "Context"],
            },
            Expect::Mirror {
                key: "headline_accomplishments",
                endpoint: "accomplishments",
                source: "headline",
            },
        ],
    },
    SectionSpec {
        heading: "Experience",
        endpoint: "experience",
        description: "Role history, most recent first",
        items: &[Expect::Roles { key: "roles" }],
    },
    SectionSpec {
        heading: "Seeking",
        endpoint: "seeking",
        description: "What I am looking for next",
        items: &[
            Expect::List {
                key: "target_roles",
                marker: Marker::Label("Target Roles"),
                hint: "A role you would say yes to",
            },
            Expect::List {
                key: "industries",
                marker: Marker::Label("Industries"),
                hint: "An industry you want to work in",
            },
            Expect::Field { key: "company_stage", label: "Company Stage", hint: "Seed, growth, public..." },
            Expect::Field {
                key: "location_preference",
                label: "Location Preference",
                hint: "Remote, hybrid, on-site and where",
            },
            Expect::Field { key: "compensation", label: "Compensation", hint: "Expectations, if you share them" },
            Expect::Field { key: "availability", label: "Availability", hint: "When you can start" },
            Expect::Table {
                key: "target_organizations",
                marker: Marker::Heading("Target Organizations"),
                columns: &["Organization Type", "Why"],
            },
            Expect::Mirror {
                key: "what_i_offer",
                endpoint: "identity",
                source: "what_i_offer",
            },
        ],
    },
    SectionSpec {
        heading: "Culture Fit",
        endpoint: "culture-fit",
        description: "Where I do my best work and what I avoid",
        items: &[
            Expect::Field { key: "work_style", label: "Work Style", hint: "How you like to work" },
            Expect::Field {
                key: "leadership_style",
                label: "Leadership Style",
                hint: "How you lead and like to be led",
            },
            Expect::List {
                key: "thrives_in",
                marker: Marker::Heading("Thrives In"),
                hint: "An environment where you do your best work",
            },
            Expect::List {
                key: "avoids",
                marker: Marker::Heading("Avoids"),
                hint: "Something that drains you",
            },
            Expect::List {
                key: "values",
                marker: Marker::Heading("Values"),
                hint: "A value you hold a team to",
            },
        ],
    },
    SectionSpec {
        heading: "Skills",
        endpoint: "skills",
        description: "Skills taxonomy: technical, leadership, domain and tools",
        items: &[
            Expect::List {
                key: "technical",
                marker: Marker::Heading("Technical"),
                hint: "A technical skill",
            },
            Expect::List {
                key: "leadership",
                marker: Marker::Heading("Leadership"),
                hint: "A leadership skill",
            },
            Expect::List {
                key: "domain",
                marker: Marker::Heading("Domain"),
                hint: "A domain you know deeply",
            },
            Expect::List {
                key: "tools",
                marker: Marker::Heading("Tools"),
                hint: "A tool or platform",
            },
            Expect::List {
                key: "certifications",
                marker: Marker::Label("Certifications"),
                hint: "A certification",
            },
        ],
    },
];

/// Schema entry for an endpoint name.
#[must_use]
pub fn spec_for(endpoint: &str) -> Option<&'static SectionSpec> {
    SCHEMA.iter().find(|s| s.endpoint == endpoint)
}

/// All endpoint names in schema order.
#[must_use]
pub fn endpoints() -> Vec<&'static str> {
    SCHEMA.iter().map(|s| s.endpoint).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn nine_sections() {
        assert_eq!(SCHEMA.len(), 9);
    }

    #[test]
    fn headings_and_endpoints_are_unique() {
        let headings: HashSet<_> = SCHEMA.iter().map(|s| s.heading).collect();
        let endpoints: HashSet<_> = SCHEMA.iter().map(|s| s.endpoint).collect();
        assert_eq!(headings.len(), SCHEMA.len());
        assert_eq!(endpoints.len(), SCHEMA.len());
    }

    #[test]
    fn keys_are_unique_per_section() {
        for spec in SCHEMA {
            let keys: HashSet<_> = spec.items.iter().map(Expect::key).collect();
            assert_eq!(keys.len(), spec.items.len(), "duplicate key in {}", spec.endpoint);
        }
    }

    #[test]
    fn mirrors_point_at_real_values() {
        for spec in SCHEMA {
            for item in spec.items {
                if let Expect::Mirror { endpoint, source, .. } = item {
                    let target = spec_for(endpoint).expect("mirror endpoint exists");
                    let found = target.items.iter().find(|i| i.key() == *source);
                    assert!(
                        matches!(found, Some(i) if !matches!(i, Expect::Mirror { .. })),
                        "{}.{source} is not an extracted value",
                        target.endpoint
                    );
                }
            }
        }
    }

    #[test]
    fn spec_lookup() {
        assert_eq!(spec_for("culture-fit").map(|s| s.heading), Some("Culture Fit"));
        assert!(spec_for("nope").is_none());
        assert_eq!(endpoints().first(), Some(&"identity"));
    }
}
