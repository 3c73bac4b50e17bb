//! Ordered label/value reports produced by collectors

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Local};

/// Ordered mapping from label to value.
///
/// Insertion order is the output order. Keys are unique: inserting a key that
/// already exists replaces its value without moving it. A value of `None`
/// means the provider had nothing for that label; the formatter renders it as
/// `unknown`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricReport {
    entries: Vec<(String, Option<String>)>,
}

impl MetricReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a present value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.insert_opt(key, Some(value.into()));
    }

    /// Insert a value that may be missing
    pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Append every entry of `other`, in order
    pub fn extend(&mut self, other: MetricReport) {
        for (key, value) in other.entries {
            self.insert_opt(key, value);
        }
    }

    /// Look up a value by label; `Some(None)` means the label exists but is blank
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A titled report, printed as one block of the output
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub report: MetricReport,
}

impl Section {
    pub fn new(title: &'static str, report: MetricReport) -> Self {
        Self {
            title,
            subtitle: None,
            report,
        }
    }

    pub fn with_subtitle(title: &'static str, subtitle: &'static str, report: MetricReport) -> Self {
        Self {
            title,
            subtitle: Some(subtitle),
            report,
        }
    }
}

/// Every section of one run, plus when it was generated
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub generated: DateTime<Local>,
    pub sections: Vec<Section>,
}

/// Hands out unique entity names for `"{entity} {attribute}"` labels.
///
/// The first occurrence of a name is returned as is; later ones become
/// `"name (2)"`, `"name (3)"`, ... No label is handed out twice, even when a
/// real entity is literally called `"name (2)"`.
#[derive(Debug, Default)]
pub struct EntityNames {
    seen: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl EntityNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, name: &str) -> String {
        let count = self.seen.entry(name.to_string()).or_insert(0);
        *count += 1;

        let mut label = if *count == 1 {
            name.to_string()
        } else {
            format!("{} ({})", name, count)
        };
        while self.issued.contains(&label) {
            *count += 1;
            label = format!("{} ({})", name, count);
        }

        self.issued.insert(label.clone());
        label
    }
}
