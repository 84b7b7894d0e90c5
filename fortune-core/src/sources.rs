//! Tolerant field lookup over loosely structured JSON.
//!
//! A payload is flattened into a list of object nodes (the "sources") in
//! breadth-first order, and fields are probed with dotted paths against each
//! source in turn. Shallow sources are always tried before deeper ones, so a
//! top-level field under a secondary name beats a nested field under the
//! preferred name.

use std::collections::VecDeque;

use serde_json::{Map, Value};

use crate::score::normalize_score;

/// Ordered object nodes of a payload, root first.
#[derive(Debug, Clone, Default)]
pub struct SourceList<'a> {
    sources: Vec<&'a Map<String, Value>>,
}

impl<'a> SourceList<'a> {
    /// Flatten a payload breadth-first.
    ///
    /// Arrays are opaque: they are never emitted and never traversed. A
    /// non-object root produces an empty list.
    pub fn flatten(payload: &'a Value) -> Self {
        let mut sources = Vec::new();
        let mut queue: VecDeque<&'a Value> = VecDeque::new();
        queue.push_back(payload);

        while let Some(value) = queue.pop_front() {
            let Value::Object(map) = value else {
                continue;
            };

            sources.push(map);

            queue.extend(map.values().filter(|nested| nested.is_object()));
        }

        Self { sources }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Map<String, Value>> + '_ {
        self.sources.iter().copied()
    }

    /// First non-blank string found, trimmed.
    ///
    /// Sources are the outer loop and paths the inner one.
    pub fn first_string(&self, paths: &[&str]) -> Option<String> {
        self.scan(paths, |candidate| match candidate {
            Value::String(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            _ => None,
        })
    }

    /// First candidate that normalizes to a score on the 0-5 scale.
    pub fn first_score(&self, paths: &[&str]) -> Option<f64> {
        self.scan(paths, normalize_score)
    }

    fn scan<T>(&self, paths: &[&str], mut accept: impl FnMut(&Value) -> Option<T>) -> Option<T> {
        for source in &self.sources {
            for path in paths {
                if let Some(found) = value_at_path(source, path).and_then(&mut accept) {
                    return Some(found);
                }
            }
        }
        None
    }
}

/// Resolve a dotted path inside one object.
///
/// Resolution fails as soon as an intermediate value is not an object; array
/// indices are not supported.
pub fn value_at_path<'a>(source: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = source.get(first)?;

    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }

    Some(current)
}
