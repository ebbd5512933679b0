//! Output records
//!
//! What the interpreter hands to the rendering layer. Payloads are structured
//! so a renderer can style them; file content stays opaque.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::DiagnosticKind;
use crate::vfs::{Content, DirEntry};

/// Renderable body of an output record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Payload {
    /// The submitted line, shown after the prompt it was typed at
    Echo { prompt: String, input: String },
    Text(String),
    Lines(Vec<String>),
    Listing {
        path: String,
        entries: Vec<DirEntry>,
        /// Section overviews include previews
        enriched: bool,
    },
    Content { name: String, content: Content },
    Diagnostic { kind: DiagnosticKind, message: String },
}

impl Payload {
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Self::Diagnostic { .. })
    }
}

/// One immutable entry in the display log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    pub id: u64,
    pub payload: Payload,
    pub timestamp: DateTime<Utc>,
}

/// Append-only log; only `clear` removes records
#[derive(Debug, Clone, Default)]
pub struct OutputLog {
    records: Vec<OutputRecord>,
    next_id: u64,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a payload. Ids keep increasing across clears.
    pub fn push(&mut self, payload: Payload) -> &OutputRecord {
        self.next_id += 1;
        self.records.push(OutputRecord {
            id: self.next_id,
            payload,
            timestamp: Utc::now(),
        });
        &self.records[self.records.len() - 1]
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[OutputRecord] {
        &self.records
    }

    /// Records with an id greater than `id`
    pub fn since(&self, id: u64) -> &[OutputRecord] {
        let start = self.records.partition_point(|record| record.id <= id);
        &self.records[start..]
    }

    pub fn last_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_survive_clear() {
        let mut log = OutputLog::new();
        log.push(Payload::Text("a".to_string()));
        log.push(Payload::Text("b".to_string()));
        log.clear();
        assert!(log.is_empty());

        let id = log.push(Payload::Text("c".to_string())).id;
        assert_eq!(id, 3);
    }

    #[test]
    fn test_since() {
        let mut log = OutputLog::new();
        log.push(Payload::Text("a".to_string()));
        let mark = log.last_id();
        log.push(Payload::Text("b".to_string()));
        log.push(Payload::Text("c".to_string()));

        let fresh: Vec<u64> = log.since(mark).iter().map(|r| r.id).collect();
        assert_eq!(fresh, vec![2, 3]);
        assert!(log.since(log.last_id()).is_empty());
    }

    #[test]
    fn test_payload_serializes_with_type_tag() {
        let value = serde_json::to_value(Payload::Diagnostic {
            kind: DiagnosticKind::Lookup,
            message: "cat: no such file: x".to_string(),
        })
        .unwrap();
        assert_eq!(value["type"], "diagnostic");
        assert_eq!(value["data"]["kind"], "lookup");
    }
}
