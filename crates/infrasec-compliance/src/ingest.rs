//! # Control Table Ingest
//!
//! Reads a CSV control table with a header row. Columns are located by
//! header name, case-insensitively and ignoring surrounding whitespace, so
//! column order and extra columns do not matter.
//!
//! | Column | Required | Empty cell |
//! |--------|----------|------------|
//! | `Control ID` | no | no identifier |
//! | `Control Name` | yes | error |
//! | `Status` | yes | error |
//! | `Evidence Available` | yes | error |
//!
//! The whole table is rejected on the first bad row. There is no partial
//! recovery: the caller fixes the file and submits it again.

use std::io::Read;

use infrasec_core::{ControlId, ControlRecord, ControlStatus};

use crate::error::IngestError;

const COL_ID: &str = "Control ID";
const COL_NAME: &str = "Control Name";
const COL_STATUS: &str = "Status";
const COL_EVIDENCE: &str = "Evidence Available";

/// Parse an evidence cell. Returns `None` for anything unrecognized.
pub fn parse_evidence(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Some(true),
        "no" | "n" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Read every control row from `reader`.
pub fn read_controls<R: Read>(reader: R) -> Result<Vec<ControlRecord>, IngestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}').trim().eq_ignore_ascii_case(name))
    };

    let id_idx = find(COL_ID);
    let name_idx = find(COL_NAME).ok_or(IngestError::MissingColumn(COL_NAME))?;
    let status_idx = find(COL_STATUS).ok_or(IngestError::MissingColumn(COL_STATUS))?;
    let evidence_idx = find(COL_EVIDENCE).ok_or(IngestError::MissingColumn(COL_EVIDENCE))?;

    if id_idx.is_none() {
        tracing::debug!("no {COL_ID:?} column; every control falls into the default domain");
    }

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let name = required_cell(&row, name_idx, line, COL_NAME)?;

        let status_cell = required_cell(&row, status_idx, line, COL_STATUS)?;
        let status: ControlStatus = status_cell.parse().map_err(|_| IngestError::InvalidValue {
            line,
            column: COL_STATUS,
            value: status_cell.to_string(),
        })?;

        let evidence_cell = required_cell(&row, evidence_idx, line, COL_EVIDENCE)?;
        let evidence = parse_evidence(evidence_cell).ok_or_else(|| IngestError::InvalidValue {
            line,
            column: COL_EVIDENCE,
            value: evidence_cell.to_string(),
        })?;

        let control_id = id_idx.and_then(|idx| row.get(idx)).and_then(ControlId::new);

        let record = ControlRecord::new(control_id, name, status, evidence).map_err(|_| {
            IngestError::MissingField {
                line,
                column: COL_NAME,
            }
        })?;
        records.push(record);
    }

    tracing::debug!(rows = records.len(), "ingested control table");
    Ok(records)
}

fn required_cell<'r>(
    row: &'r csv::StringRecord,
    idx: usize,
    line: u64,
    column: &'static str,
) -> Result<&'r str, IngestError> {
    match row.get(idx) {
        Some(cell) if !cell.is_empty() => Ok(cell),
        _ => Err(IngestError::MissingField { line, column }),
    }
}
