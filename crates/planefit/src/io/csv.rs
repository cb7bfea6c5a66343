//! CSV sample loading.
//!
//! ## Purpose
//!
//! This module turns comma-delimited text into `(x, y, z)` samples.
//!
//! ## Key concepts
//!
//! * **Header**: A first record in which no field is numeric is a header and is skipped.
//! * **Blank lines**: Records with only empty fields are skipped.
//! * **Rows**: Every other record must be exactly three numbers.
//!
//! ## Non-goals
//!
//! * This module does not check the values for finiteness; the fit does.
//! * This module does not support delimiters other than commas.

use std::fs::File;
use std::io::Read;
use std::path::Path;

// External dependencies
use ::csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;

// Internal dependencies
use crate::primitives::errors::PlaneFitError;
use crate::primitives::sample::Sample;

/// Number of fields in a sample row.
const FIELDS_PER_ROW: usize = 3;

/// Read samples from any reader.
pub fn read_samples<R: Read>(reader: R) -> Result<Vec<Sample<f64>>, PlaneFitError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut samples = Vec::new();
    let mut seen_record = false;

    for result in rdr.records() {
        let record = result.map_err(map_csv_error)?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);

        if record.iter().all(str::is_empty) {
            continue;
        }

        if !seen_record {
            seen_record = true;
            if is_header(&record) {
                debug!("skipping header at line {line}: {:?}", record);
                continue;
            }
        }

        samples.push(parse_row(&record, line)?);
    }

    debug!("read {} samples", samples.len());
    Ok(samples)
}

/// Read samples from a file.
pub fn read_samples_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<Sample<f64>>, PlaneFitError> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|e| PlaneFitError::Io(format!("{}: {}", path.display(), e)))?;
    read_samples(file)
}

fn is_header(record: &StringRecord) -> bool {
    record.iter().all(|field| field.parse::<f64>().is_err())
}

fn parse_row(record: &StringRecord, line: usize) -> Result<Sample<f64>, PlaneFitError> {
    if record.len() != FIELDS_PER_ROW {
        return Err(PlaneFitError::MalformedInput {
            line,
            reason: format!("expected {FIELDS_PER_ROW} fields, found {}", record.len()),
        });
    }

    let mut values = [0.0f64; FIELDS_PER_ROW];
    for (k, field) in record.iter().enumerate() {
        values[k] = field.parse().map_err(|_| PlaneFitError::MalformedInput {
            line,
            reason: format!("field {} ({field:?}) is not a number", k + 1),
        })?;
    }

    Ok(Sample::from(values))
}

fn map_csv_error(err: ::csv::Error) -> PlaneFitError {
    if err.is_io_error() {
        return PlaneFitError::Io(err.to_string());
    }
    let line = err.position().map(|p| p.line() as usize).unwrap_or(0);
    PlaneFitError::MalformedInput {
        line,
        reason: err.to_string(),
    }
}
