//! Table and JSON output of the fixed sample datasets.

use aqua_core::samples::{CONTAMINANT_LEVELS, QUALITY_DISTRIBUTION, WATER_QUALITY_TREND};
use serde::Serialize;
use std::io::Write;

/// A contaminant row with its derived gauge values.
#[derive(Debug, Serialize)]
struct ContaminantRow {
    name: &'static str,
    value: f64,
    safe_limit: f64,
    unit: &'static str,
    ratio: f64,
    fill_fraction: f64,
    exceeds_limit: bool,
}

pub fn write_samples<W: Write>(out: &mut W, json: bool) -> anyhow::Result<()> {
    if json {
        return write_json(out, &WATER_QUALITY_TREND);
    }
    writeln!(
        out,
        "{:<6}{:>6}{:>12}{:>12}{:>14}",
        "Month", "pH", "Turbidity", "DO (mg/L)", "Temp (°C)"
    )?;
    for s in WATER_QUALITY_TREND.iter() {
        writeln!(
            out,
            "{:<6}{:>6.1}{:>12.1}{:>12.1}{:>14.0}",
            s.month_label(),
            s.ph,
            s.turbidity,
            s.dissolved_oxygen,
            s.temperature
        )?;
    }
    Ok(())
}

pub fn write_contaminants<W: Write>(out: &mut W, json: bool) -> anyhow::Result<()> {
    let rows: Vec<ContaminantRow> = CONTAMINANT_LEVELS
        .iter()
        .map(|c| ContaminantRow {
            name: c.name,
            value: c.value,
            safe_limit: c.safe_limit,
            unit: c.unit,
            ratio: c.ratio(),
            fill_fraction: c.fill_fraction(),
            exceeds_limit: c.exceeds_limit(),
        })
        .collect();
    if json {
        return write_json(out, &rows);
    }
    for row in &rows {
        let flag = if row.exceeds_limit { "  OVER LIMIT" } else { "" };
        writeln!(
            out,
            "{:<10} {} / {} {:<10} {:>5.1}%{}",
            row.name,
            row.value,
            row.safe_limit,
            row.unit,
            row.ratio * 100.0,
            flag
        )?;
    }
    Ok(())
}

pub fn write_distribution<W: Write>(out: &mut W, json: bool) -> anyhow::Result<()> {
    if json {
        return write_json(out, &QUALITY_DISTRIBUTION);
    }
    for bucket in QUALITY_DISTRIBUTION.iter() {
        writeln!(out, "{}: {}%", bucket.label, bucket.percentage)?;
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: fn(&mut Vec<u8>, bool) -> anyhow::Result<()>, json: bool) -> String {
        let mut out = Vec::new();
        f(&mut out, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn samples_table_has_header_and_six_rows() {
        let text = render(write_samples, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[1].starts_with("Jan"));
        assert!(lines[6].starts_with("Jun"));
        assert!(lines[6].contains("7.4"));
    }

    #[test]
    fn samples_json_uses_month_labels() {
        let value: serde_json::Value = serde_json::from_str(&render(write_samples, true)).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0]["month"], "Jan");
        assert_eq!(rows[0]["ph"], 7.2);
    }

    #[test]
    fn contaminants_report_ratio_and_units() {
        let text = render(write_contaminants, false);
        assert!(text.contains("Bacteria   2 / 100 CFU/100ml"));
        assert!(!text.contains("OVER LIMIT"));

        let value: serde_json::Value =
            serde_json::from_str(&render(write_contaminants, true)).unwrap();
        let nitrates = &value[2];
        assert_eq!(nitrates["name"], "Nitrates");
        assert_eq!(nitrates["exceeds_limit"], false);
        assert!((nitrates["ratio"].as_f64().unwrap() - 0.82).abs() < 1e-9);
    }

    #[test]
    fn distribution_lines() {
        let text = render(write_distribution, false);
        assert_eq!(text, "Excellent: 45%\nGood: 35%\nFair: 15%\nPoor: 5%\n");
    }
}
