//! Streams a station CSV file through the aggregator.
//!
//! Expected header: `datetime,temp,humid,srad,ws,prcp,wdir` in any order.

use std::{fs::File, io, path::Path};

use anyhow::{Context, Result};
use csv::{Reader, ReaderBuilder, Trim};
use indicatif::ProgressBar;

use crate::{
    climate::Aggregator,
    reading::{Observation, RawRecord},
};

/// Opens a CSV file for reading.
pub fn open_records(file_path: &Path) -> Result<Reader<File>> {
    reader_builder()
        .from_path(file_path)
        .with_context(|| format!("Unable to open `{}`", file_path.display()))
}

/// Feeds every row to `aggregator` in file order and returns the number of rows read.
///
/// Rows that cannot be decoded are fed as skipped readings.
pub fn deserialise<R: io::Read>(
    mut reader: Reader<R>,
    aggregator: &mut Aggregator,
    progress_bar: &ProgressBar,
) -> Result<usize> {
    let mut rows = 0;

    for (idx, result) in reader.deserialize::<RawRecord>().enumerate() {
        match result {
            Ok(raw) => match Observation::from_raw(&raw) {
                Some(obs) => aggregator.observe(&obs),
                None => {
                    log::debug!("Row {}: no timestamp or precipitation, skipping", idx + 1);
                    aggregator.skip();
                }
            },
            Err(e) => {
                log::debug!("Row {}: {}, skipping", idx + 1, e);
                aggregator.skip();
            }
        }

        rows += 1;
        progress_bar.inc(1);
    }

    Ok(rows)
}

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(true).flexible(true).trim(Trim::All);

    builder
}

// -- Tests -------------------------------------------------------------------
