use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// One table row: header keys zipped with cleaned cells, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    cells: Vec<(String, String)>,
}

impl TableRow {
    #[must_use]
    pub fn new(cells: Vec<(String, String)>) -> Self {
        Self { cells }
    }

    /// Cell value for a normalized header key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// True when every cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|(_, v)| v.is_empty())
    }
}

impl Serialize for TableRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (key, value) in &self.cells {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A title/description pair ("what I offer").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Offer {
    pub title: String,
    pub description: String,
}

/// One position in the role history. The first role is the most recent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Role {
    pub title: String,
    pub company: String,
    pub organization_type: String,
    pub dates: String,
    pub location: String,
    pub scope: String,
    pub summary: String,
    pub contributions: Vec<String>,
}

/// Extracted value of one schema expectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    List(Vec<String>),
    Table(Vec<TableRow>),
    Offers(Vec<Offer>),
    Roles(Vec<Role>),
}

impl Value {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Table(rows) => rows.is_empty(),
            Self::Offers(offers) => offers.is_empty(),
            Self::Roles(roles) => roles.is_empty(),
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// A keyed value inside a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: &'static str,
    pub value: Value,
    /// Copied from another record; does not count toward emptiness.
    pub mirrored: bool,
}

/// Structured output for one section, serialized as a JSON object whose
/// keys follow the schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub endpoint: &'static str,
    pub entries: Vec<Entry>,
}

impl Record {
    #[must_use]
    pub fn new(endpoint: &'static str) -> Self {
        Self {
            endpoint,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, key: &'static str, value: Value) {
        self.entries.push(Entry {
            key,
            value,
            mirrored: false,
        });
    }

    pub fn push_mirror(&mut self, key: &'static str, value: Value) {
        self.entries.push(Entry {
            key,
            value,
            mirrored: true,
        });
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    /// True when no value extracted from the record's own section has data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries
            .iter()
            .filter(|e| !e.mirrored)
            .all(|e| e.value.is_empty())
    }

    /// Keys of own values that came out empty.
    #[must_use]
    pub fn empty_keys(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|e| !e.mirrored && e.value.is_empty())
            .map(|e| e.key)
            .collect()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.key, &entry.value)?;
        }
        map.end()
    }
}

/// One line of the endpoint directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    pub endpoint: &'static str,
    pub path: String,
    pub description: &'static str,
}

/// Self-description of the published records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directory {
    pub name: String,
    pub endpoints: Vec<DirectoryEntry>,
}

/// Every non-empty record of one document plus its directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecords {
    pub records: Vec<Record>,
    pub directory: Directory,
}

impl ProfileRecords {
    #[must_use]
    pub fn get(&self, endpoint: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.endpoint == endpoint)
    }

    #[must_use]
    pub fn endpoints(&self) -> Vec<&'static str> {
        self.records.iter().map(|r| r.endpoint).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_row_serializes_in_column_order() {
        let row = TableRow::new(vec![
            ("stat".into(), "$50M+".into()),
            ("context".into(), "Savings".into()),
        ]);
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"stat":"$50M+","context":"Savings"}"#);
    }

    #[test]
    fn record_emptiness_ignores_mirrors() {
        let mut record = Record::new("stats");
        record.push("key_stats", Value::Table(vec![]));
        record.push_mirror("headline_accomplishments", Value::List(vec!["x".into()]));
        assert!(record.is_empty());
        assert_eq!(record.empty_keys(), vec!["key_stats"]);
    }

    #[test]
    fn record_serializes_in_entry_order() {
        let mut record = Record::new("identity");
        record.push("name", Value::Text("Ada".into()));
        record.push("tags", Value::List(vec!["a".into()]));
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Ada","tags":["a"]}"#);
    }
}
