use std::path::Path;

use anyhow::Result;

use crate::{
    cli::{create_spinner, ConvertArgs},
    climate::{reduce, Aggregator, ClimateSummary},
    deserialise::{deserialise, open_records},
    par::{save_par, station::name_from_path, StationInfo},
};

use super::make_par_file_name;

/// Fewer years than this are unlikely to capture long-term trends.
const MIN_YEARS: usize = 10;

pub async fn convert(args: &ConvertArgs) -> Result<String> {
    let par_file_name = args
        .output
        .clone()
        .unwrap_or_else(|| make_par_file_name(&args.input));
    let station = station_info(args);

    let summary = summarise(&args.input).await?;
    if let Some(warning) = short_record_warning(&summary) {
        log::warn!("{}", warning);
    }

    save_par(&summary, &station, &par_file_name)?;

    Ok(par_file_name.to_string_lossy().to_string())
}

async fn summarise(input: &Path) -> Result<ClimateSummary> {
    let reader = open_records(input)?;
    let mut aggregator = Aggregator::default();

    let bar = create_spinner(format!("Reading `{}`...", input.display()));
    let rows = deserialise(reader, &mut aggregator, &bar)?;
    bar.finish_with_message(format!("{} rows read", rows));

    let aggregation = aggregator.finish();
    log::info!(
        "{} observations, {} skipped, {} days, {} storms",
        aggregation.observations,
        aggregation.skipped,
        aggregation.day_count,
        aggregation.storms
    );

    reduce(aggregation).await
}

fn station_info(args: &ConvertArgs) -> StationInfo {
    StationInfo {
        name: args
            .name
            .clone()
            .unwrap_or_else(|| name_from_path(&args.input)),
        id: args.id.clone(),
        latitude: args.latitude,
        longitude: args.longitude,
        elevation: args.elevation,
        station_type: args.station_type,
    }
}

/// A warning when the record is too short to trust, otherwise `None`.
fn short_record_warning(summary: &ClimateSummary) -> Option<String> {
    let years = summary.years();

    (years < MIN_YEARS).then(|| {
        format!(
            "Number of years ({}) is less than {}. Consider using a larger dataset: \
             small datasets will not adequately capture long-term trends",
            years, MIN_YEARS
        )
    })
}

// -- Tests -------------------------------------------------------------------
