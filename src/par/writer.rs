//! Fixed-width CLIGEN parameter file layout.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};

use crate::climate::{reduce::SectorSummary, stats::Moments, ClimateSummary, MonthSummary, WindSector};

use super::station::StationInfo;

const NO_DATA: &str = "NA";
const FIELD_WIDTH: usize = 6;

/// Writes the report to `file_path`, replacing any existing file.
pub fn save_par(summary: &ClimateSummary, station: &StationInfo, file_path: &Path) -> Result<()> {
    let file = File::create(file_path)
        .with_context(|| format!("Unable to create `{}`", file_path.display()))?;
    let mut writer = BufWriter::new(file);

    write_par(summary, station, &mut writer)?;
    writer.flush()?;

    Ok(())
}

pub fn write_par<W: Write>(summary: &ClimateSummary, station: &StationInfo, out: &mut W) -> Result<()> {
    write_header(summary, station, out)?;

    let months = &summary.months;
    let moments = |f: fn(&MonthSummary) -> Option<Moments>, g: fn(&Moments) -> f64| {
        months.iter().map(move |m| f(m).as_ref().map(g)).collect::<Vec<_>>()
    };
    let scalars =
        |f: fn(&MonthSummary) -> Option<f64>| months.iter().map(f).collect::<Vec<_>>();

    let rows: [(&str, Vec<Option<f64>>, usize); 14] = [
        ("MEAN P", moments(|m| m.precipitation, |s| s.mean), 2),
        ("S DEV P", moments(|m| m.precipitation, |s| s.std_dev), 2),
        ("SKEW P", moments(|m| m.precipitation, |s| s.skew), 2),
        ("P(W/W)", scalars(|m| m.p_wet_wet), 2),
        ("P(W/D)", scalars(|m| m.p_wet_dry), 2),
        ("TMAX AV", moments(|m| m.max_temp, |s| s.mean), 2),
        ("TMIN AV", moments(|m| m.min_temp, |s| s.mean), 2),
        ("SD TMAX", moments(|m| m.max_temp, |s| s.std_dev), 2),
        ("SD TMIN", moments(|m| m.min_temp, |s| s.std_dev), 2),
        ("SOL.RAD", moments(|m| m.radiation, |s| s.mean), 0),
        ("SD SOL", moments(|m| m.radiation, |s| s.std_dev), 0),
        ("MX .5 P", scalars(|m| m.half_hour_max), 2),
        ("DEW PT", scalars(|m| m.dew_point), 2),
        ("Time Pk", scalars(|m| m.time_to_peak), 3),
    ];
    for (label, values, precision) in &rows {
        writeln!(out, "{:<8}{}", label, fields(values, *precision))?;
    }

    for sector in WindSector::ALL {
        let sectors: Vec<&SectorSummary> =
            months.iter().map(|m| &m.sectors[sector.index()]).collect();
        let frequency: Vec<_> = sectors.iter().map(|s| s.frequency).collect();
        let speed = |g: fn(&Moments) -> f64| {
            sectors
                .iter()
                .map(|s| s.wind_speed.as_ref().map(g))
                .collect::<Vec<_>>()
        };

        writeln!(out, "% {:<6}{}", sector.label(), fields(&frequency, 2))?;
        writeln!(out, "{:<8}{}", "MEAN", fields(&speed(|s| s.mean), 2))?;
        writeln!(out, "{:<8}{}", "STD DEV", fields(&speed(|s| s.std_dev), 2))?;
        writeln!(out, "{:<8}{}", "SKEW", fields(&speed(|s| s.skew), 2))?;
    }

    writeln!(out, "{:<8}{}", "CALM", fields(&scalars(|m| m.calm), 2))?;

    write_interpolation_placeholders(out)?;

    Ok(())
}

fn write_header<W: Write>(summary: &ClimateSummary, station: &StationInfo, out: &mut W) -> Result<()> {
    writeln!(out, "{:<41}{}", station.name, station.id)?;
    writeln!(
        out,
        "LATT ={:>7.2} LONG={:>7.2} YEARS={:>3}. TYPE= {}",
        station.latitude,
        station.longitude,
        summary.years(),
        station.station_type
    )?;
    writeln!(
        out,
        "ELEVATION = {:>4} TP5 = {:<5.2} TP6 = {:.2}",
        format!("{:04.0}", station.elevation),
        summary.half_hour_record,
        summary.six_hour_record
    )?;

    Ok(())
}

fn write_interpolation_placeholders<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "INTERPOLATED DATA (station & weighting factor)")?;
    writeln!(out)?;
    writeln!(out, "---Wind Stations---")?;
    writeln!(out, "---Solar Radiation and Max .5 P Stations---")?;
    writeln!(out, "---Dewpoint Stations---")?;
    writeln!(out, "---Time Peak Stations---")?;

    Ok(())
}

/// Twelve right-aligned fields; missing values print as the no-data marker.
fn fields(values: &[Option<f64>], precision: usize) -> String {
    values
        .iter()
        .map(|v| match v {
            Some(v) => format!("{:>width$.prec$}", v, width = FIELD_WIDTH, prec = precision),
            None => format!("{:>width$}", NO_DATA, width = FIELD_WIDTH),
        })
        .collect()
}

// -- Tests -------------------------------------------------------------------
