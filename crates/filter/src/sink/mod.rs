//! Machine-readable filter output.
//!
//! Two row shapes:
//! - [`SummaryRow`] — one per filter call
//! - [`persona_core::Person`] — one per matched record, in tagged form
//!
//! One backend: NDJSON written to any `Write` impl.

pub mod json_stream;

use crate::reporter::FilterReport;
use persona_core::{FieldMap, Tag};
use serde::Serialize;

/// One row per filter call — inputs and counts.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub source: String,
    pub variant: Tag,
    pub criteria: FieldMap,
    pub scanned: u64,
    pub matched: u64,
    pub elapsed_us: u64,
}

impl FilterReport {
    /// Flatten the report into a sink-ready summary row.
    pub fn to_summary_row(&self) -> SummaryRow {
        SummaryRow {
            source: self.source.clone(),
            variant: self.variant,
            criteria: self.criteria.clone(),
            scanned: self.scanned as u64,
            matched: self.matched as u64,
            elapsed_us: self.elapsed.as_micros() as u64,
        }
    }
}
