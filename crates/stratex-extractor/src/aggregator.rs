//! Parse model answers into line items and aggregate them across chunks
//!
//! Parsing is deliberately permissive: the model is asked for bullets but is
//! not guaranteed to comply, so every non-blank line is a candidate item.

use std::collections::HashSet;
use stratex_domain::LineItem;

/// Ordered set of unique line items, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedResult {
    items: Vec<LineItem>,
    seen: HashSet<LineItem>,
}

impl AggregatedResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` unless an equal item is already present
    ///
    /// Returns `true` if the item was added.
    pub fn insert(&mut self, item: LineItem) -> bool {
        if self.seen.contains(&item) {
            return false;
        }
        self.seen.insert(item.clone());
        self.items.push(item);
        true
    }

    /// Whether an equal item is present
    pub fn contains(&self, item: &LineItem) -> bool {
        self.seen.contains(item)
    }

    /// Number of unique items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items have been collected
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in first-seen order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Iterate over items in first-seen order
    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    /// Items as plain strings, in order
    pub fn to_strings(&self) -> Vec<String> {
        self.items.iter().map(|i| i.as_str().to_string()).collect()
    }

    /// Consume the result, returning the ordered items
    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }
}

impl<'a> IntoIterator for &'a AggregatedResult {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Split a raw answer into line items
///
/// Blank lines are dropped. Leading bullet markers (any of `markers`, possibly
/// repeated) and surrounding whitespace are stripped; a line that held only
/// markers is dropped too.
pub fn parse_lines<S: AsRef<str>>(raw_answer: &str, markers: &[S]) -> Vec<LineItem> {
    raw_answer
        .lines()
        .filter_map(|line| LineItem::new(strip_markers(line, markers)))
        .collect()
}

/// Merge `new_lines` into `accumulated`, keeping first-seen order
///
/// Items already present, including repeats inside `new_lines`, are skipped.
pub fn merge<I>(mut accumulated: AggregatedResult, new_lines: I) -> AggregatedResult
where
    I: IntoIterator<Item = LineItem>,
{
    for item in new_lines {
        accumulated.insert(item);
    }
    accumulated
}

fn strip_markers<'a, S: AsRef<str>>(line: &'a str, markers: &[S]) -> &'a str {
    let mut rest = line.trim();
    loop {
        let marker = markers
            .iter()
            .map(|m| m.as_ref())
            .find(|m: &&str| !m.is_empty() && rest.starts_with(*m));
        match marker {
            Some(m) => rest = rest[m.len()..].trim_start(),
            None => return rest,
        }
    }
}
