use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use csv::Trim;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parser::parse_description;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("failed to open statement file {path:?}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("skipping malformed statement row: {0}")]
    Row(#[from] csv::Error),
}

/// One row of the bank statement export. Columns the extractors do not use
/// (date, amounts, balance) are ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct StatementRow {
    #[serde(rename = "Transaction Description")]
    pub description: String,
    #[serde(rename = "Transaction Type")]
    pub transaction_type: String,
}

/// A parsed report line. It is used for decoupling the report output from
/// StatementRow and easy serialisation.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReportRow {
    pub description: String,
    pub transaction_type: String,
    pub name: String,
    pub reference: String,
}

impl ReportRow {
    pub fn from_statement(row: &StatementRow) -> Self {
        let parsed = parse_description(&row.description, &row.transaction_type);
        ReportRow {
            description: row.description.clone(),
            transaction_type: row.transaction_type.clone(),
            name: parsed.name,
            reference: parsed.reference,
        }
    }
}

/// Read a statement export from disk and parse every row.
pub fn read_report(path: &Path) -> Result<Vec<ReportRow>> {
    let file = File::open(path).map_err(|source| FeedError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(scan_statement(file))
}

/// Parse every row of a statement export. Malformed rows are logged and
/// skipped rather than aborting the report.
pub fn scan_statement<R: io::Read>(reader: R) -> Vec<ReportRow> {
    let mut rdr = csv::ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut report = Vec::new();

    log::debug!("Started deserialising statement rows");
    for result in rdr.deserialize::<StatementRow>() {
        log::debug!("Deserialising row into StatementRow: {result:?}");
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("{}", FeedError::Row(e));
                continue;
            }
        };
        log::debug!("Parsing statement row: {row:?}");
        report.push(ReportRow::from_statement(&row));
    }

    report
}
