use crate::distribution::Distribution;
use crate::extract::ColumnSeries;
use crate::summary::SummaryStats;
use freq_lens_common::{FreqLensError, Result};
use std::io::Write;
use std::path::Path;

// --- headless table output ---

pub fn print_distribution(series: &ColumnSeries, dist: &Distribution, decimals: usize) {
    println!("{:<16} {}", "Column:", series.name);
    println!(
        "{:<16} {} ({} cells skipped)",
        "Observations:",
        dist.sorted_data.len(),
        series.skipped_cells
    );
    println!(
        "{:<16} {:.decimals$} .. {:.decimals$} (range {:.decimals$})",
        "Extent:", dist.min_value, dist.max_value, dist.range
    );
    println!(
        "{:<16} {} (raw {:.3})",
        "Classes:", dist.number_of_classes, dist.raw_number_of_classes
    );
    println!(
        "{:<16} {} (raw {:.3})",
        "Class width:", dist.class_width, dist.raw_class_width
    );
    println!();
    println!(
        "{:>3}  {:>24}  {:>24}  {:>12}  {:>9}",
        "#", "Limits", "Edges", "Midpoint", "Frequency"
    );
    for (i, c) in dist.classes.iter().enumerate() {
        println!(
            "{:>3}  {:>10.decimals$} - {:>10.decimals$}  {:>10.decimals$} - {:>10.decimals$}  {:>12.decimals$}  {:>9}",
            i + 1,
            c.lower_limit,
            c.upper_limit,
            c.lower_edge,
            c.upper_edge,
            c.midpoint,
            c.frequency
        );
    }
    let tallied = dist.total_frequency();
    println!();
    if tallied < dist.sorted_data.len() as u64 {
        println!(
            "{:<16} {} of {} (final class stops below the maximum)",
            "Tallied:",
            tallied,
            dist.sorted_data.len()
        );
    } else {
        println!("{:<16} {}", "Tallied:", tallied);
    }
}

pub fn print_summary(series: &ColumnSeries, stats: &SummaryStats, decimals: usize) {
    println!("{:<16} {}", "Column:", series.name);
    println!("{:<16} {}", "Count:", stats.count);
    println!("{:<16} {}", "Skipped cells:", series.skipped_cells);
    println!("{:<16} {:.decimals$}", "Mean:", stats.mean);
    println!("{:<16} {:.decimals$}", "Stddev:", stats.stddev);
    println!("{:<16} {:.decimals$}", "Median:", stats.median);
    println!("{:<16} {:.decimals$}", "Min:", stats.min);
    println!("{:<16} {:.decimals$}", "Max:", stats.max);
}

// --- JSON export ---

pub fn export_json(
    output_path: &Path,
    series: &ColumnSeries,
    dist: &Distribution,
    stats: &SummaryStats,
) -> Result<()> {
    let doc = serde_json::json!({
        "column": series.name,
        "total_cells": series.total_cells,
        "skipped_cells": series.skipped_cells,
        "distribution": dist,
        "summary": stats,
    });
    let mut file = std::fs::File::create(output_path)?;
    serde_json::to_writer_pretty(&mut file, &doc)
        .map_err(|e| FreqLensError::Other(e.to_string()))?;
    Ok(())
}

// --- CSV export ---

pub fn export_csv(output_path: &Path, dist: &Distribution) -> Result<()> {
    let mut file = std::fs::File::create(output_path)?;
    writeln!(
        file,
        "class,lower_limit,upper_limit,lower_edge,upper_edge,midpoint,frequency"
    )?;
    for (i, c) in dist.classes.iter().enumerate() {
        writeln!(
            file,
            "{},{},{},{},{},{},{}",
            i + 1,
            c.lower_limit,
            c.upper_limit,
            c.lower_edge,
            c.upper_edge,
            c.midpoint,
            c.frequency
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::compute_frequency_distribution;

    fn fixture() -> (ColumnSeries, Distribution, SummaryStats) {
        let values: Vec<f64> = (1..=10).map(|v| v as f64).collect();
        let dist = compute_frequency_distribution(&values).unwrap();
        let stats = crate::summary::summarize_sorted(&dist.sorted_data).unwrap();
        let series = ColumnSeries {
            name: "score".into(),
            values,
            skipped_cells: 1,
            total_cells: 11,
        };
        (series, dist, stats)
    }

    #[test]
    fn csv_export_writes_one_row_per_class() {
        let (_, dist, _) = fixture();
        let tmp = tempfile::NamedTempFile::new().unwrap();
        export_csv(tmp.path(), &dist).unwrap();
        let content = std::fs::read_to_string(tmp.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), dist.classes.len() + 1);
        assert!(lines[0].starts_with("class,lower_limit"));
        assert_eq!(lines[1], "1,1,2,0.5,2.5,1.5,2");
    }

    #[test]
    fn json_export_round_trips_the_audit_fields() {
        let (series, dist, stats) = fixture();
        let tmp = tempfile::NamedTempFile::new().unwrap();
        export_json(tmp.path(), &series, &dist, &stats).unwrap();
        let doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(tmp.path()).unwrap()).unwrap();
        assert_eq!(doc["column"], "score");
        assert_eq!(doc["skipped_cells"], 1);
        assert_eq!(doc["distribution"]["number_of_classes"], 5);
        let raw_k = doc["distribution"]["raw_number_of_classes"].as_f64().unwrap();
        assert!((raw_k - 4.3).abs() < 1e-9);
        assert_eq!(doc["distribution"]["class_width"], 2);
        assert_eq!(doc["summary"]["count"], 10);
    }
}
