//! Final-state reporting.
//!
//! Writes one CSV row per person, in id order, with the person's final
//! status. People who never entered the state map are reported as
//! susceptible.

use crate::error::ContagionError;
use crate::graph::PersonId;
use crate::people::HealthStatus;
use crate::sim::Simulation;
use csv::Writer;
use serde_derive::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{create_dir_all, File};
use std::path::Path;

/// One row of the final-state report.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinalStateRow {
    pub person: PersonId,
    pub status: HealthStatus,
}

// Checks that the path is valid. Creates the file and all parent
// directories if they do not exist. Returns the file if successful.
fn create_report_file(path: &Path) -> Result<File, ContagionError> {
    match path.extension().and_then(OsStr::to_str) {
        Some("csv") => {
            if let Some(parent) = path.parent() {
                create_dir_all(parent)?;
            }
            let file = File::create(path)?;
            Ok(file)
        }
        _ => Err(ContagionError::ContagionError(
            "Report output files must be CSVs at this time".to_string(),
        )),
    }
}

/// Writes the final state of a finished run to a CSV file at `path`.
///
/// # Errors
///
/// Returns a `ContagionError` if `path` is not a `.csv` path or the file
/// cannot be created or written.
pub fn write_final_state(path: &Path, sim: &Simulation) -> Result<(), ContagionError> {
    let file = create_report_file(path)?;
    let mut writer = Writer::from_writer(file);
    for person in sim.graph().people() {
        writer.serialize(FinalStateRow {
            person,
            status: sim.state().status_of(person),
        })?;
    }
    writer.flush()?;
    Ok(())
}
