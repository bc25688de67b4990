// src/catalog.rs
// Aggregate class/error mappings. BTreeMap keys iterate in ascending
// order, which is exactly the order the generated module wants.

use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    /// class code ("42") → full label ("Class 42 - Syntax Error or Access Rule Violation")
    pub classes: BTreeMap<String, String>,
    /// class code → (error code ("42501") → symbolic label ("INSUFFICIENT_PRIVILEGE"))
    pub errors: BTreeMap<String, BTreeMap<String, String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_class(&mut self, code: &str, label: &str) {
        self.classes.insert(s!(code), s!(label));
    }

    pub fn insert_error(&mut self, class: &str, code: &str, label: &str) {
        self.errors
            .entry(s!(class))
            .or_default()
            .insert(s!(code), s!(label));
    }

    /// Merge one version's catalog into the aggregate.
    /// Class labels: last writer wins. Error maps: per-class union, so
    /// codes dropped by a later release still survive from earlier ones.
    pub fn merge(&mut self, other: Catalog) {
        self.classes.extend(other.classes);
        for (class, errs) in other.errors {
            self.errors.entry(class).or_default().extend(errs);
        }
    }

    pub fn code_count(&self) -> usize {
        self.errors.values().map(|m| m.len()).sum()
    }
}
