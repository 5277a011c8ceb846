use std::fs::File;
use std::io;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::models::{MedicalReport, ParseCategoryError, RecoveryStatus, RestUnit, Severity};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to open {path}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: invalid {field} {value:?}, expected YYYY-MM-DD")]
    InvalidDate {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("row {row}: {source}")]
    InvalidValue {
        row: usize,
        #[source]
        source: ParseCategoryError,
    },
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    id: u32,
    player: String,
    player_id: u32,
    injury_type: String,
    body_part: String,
    severity: String,
    status: String,
    date_reported: String,
    rest_duration: u32,
    rest_unit: String,
    expected_return: String,
    #[serde(default)]
    medical_notes: String,
    #[serde(default)]
    treatment_plan: String,
    doctor_assigned: String,
    last_updated: String,
    sessions_completed: u32,
    total_sessions: u32,
}

impl CsvRow {
    fn into_report(self, row: usize) -> Result<MedicalReport, ImportError> {
        let date = |field: &'static str, value: &str| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ImportError::InvalidDate {
                row,
                field,
                value: value.to_string(),
            })
        };
        let invalid = |source| ImportError::InvalidValue { row, source };

        Ok(MedicalReport {
            id: self.id,
            player: self.player,
            player_id: self.player_id,
            injury_type: self.injury_type,
            body_part: self.body_part,
            severity: self.severity.parse::<Severity>().map_err(invalid)?,
            status: self.status.parse::<RecoveryStatus>().map_err(invalid)?,
            date_reported: date("date_reported", &self.date_reported)?,
            rest_duration: self.rest_duration,
            rest_unit: self.rest_unit.parse::<RestUnit>().map_err(invalid)?,
            expected_return: date("expected_return", &self.expected_return)?,
            medical_notes: self.medical_notes,
            treatment_plan: self.treatment_plan,
            doctor_assigned: self.doctor_assigned,
            last_updated: date("last_updated", &self.last_updated)?,
            sessions_completed: self.sessions_completed,
            total_sessions: self.total_sessions,
        })
    }
}

pub fn read_reports<R: io::Read>(input: R) -> Result<Vec<MedicalReport>, ImportError> {
    let mut reader = csv::Reader::from_reader(input);
    let mut reports = Vec::new();

    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = index + 1;
        let raw = result.map_err(|source| ImportError::Csv { row, source })?;
        reports.push(raw.into_report(row)?);
    }

    Ok(reports)
}

pub fn import_reports(csv_path: &Path) -> Result<Vec<MedicalReport>, ImportError> {
    let file = File::open(csv_path).map_err(|source| ImportError::Open {
        path: csv_path.display().to_string(),
        source,
    })?;
    let reports = read_reports(file)?;
    info!(count = reports.len(), path = %csv_path.display(), "imported medical reports");
    Ok(reports)
}
