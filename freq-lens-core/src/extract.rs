use csv::ReaderBuilder;
use freq_lens_common::{FreqLensError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub delimiter: u8,
    pub has_headers: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
        }
    }
}

/// Numeric observations pulled from one column. Cells that did not parse to
/// a finite number are skipped but counted, so a malformed file shows up in
/// the presenters instead of vanishing silently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub skipped_cells: u64,
    pub total_cells: u64,
}

fn parse_cell(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Read every column of a delimited file as a candidate numeric series.
/// Columns with no numeric cell at all are dropped; headerless files get
/// synthesized `col_N` names. Records may vary in length (trailing cells
/// simply extend the widest column set seen so far).
pub fn extract_columns(path: &Path, opts: &ExtractOptions) -> Result<Vec<ColumnSeries>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(opts.delimiter)
        .has_headers(opts.has_headers)
        .flexible(true)
        .from_path(path)?;

    let names: Vec<String> = if opts.has_headers {
        reader.headers()?.iter().map(|h| h.trim().to_owned()).collect()
    } else {
        Vec::new()
    };
    let mut columns: Vec<ColumnSeries> = Vec::new();

    for record in reader.records() {
        let record = record?;
        for (i, cell) in record.iter().enumerate() {
            if i >= columns.len() {
                let name = names
                    .get(i)
                    .filter(|n| !n.is_empty())
                    .cloned()
                    .unwrap_or_else(|| format!("col_{i}"));
                columns.push(ColumnSeries {
                    name,
                    values: Vec::new(),
                    skipped_cells: 0,
                    total_cells: 0,
                });
            }
            let col = &mut columns[i];
            col.total_cells += 1;
            match parse_cell(cell) {
                Some(v) => col.values.push(v),
                None => col.skipped_cells += 1,
            }
        }
    }

    columns.retain(|c| !c.values.is_empty());
    if columns.is_empty() {
        return Err(FreqLensError::NoNumericData(format!(
            "{} contains no numeric cells",
            path.display()
        )));
    }
    Ok(columns)
}

/// Pick the series to analyze: the named column when given, otherwise the
/// first column that yielded numeric values.
pub fn select_series(series: Vec<ColumnSeries>, name: Option<&str>) -> Result<ColumnSeries> {
    match name {
        Some(wanted) => series
            .into_iter()
            .find(|s| s.name == wanted)
            .ok_or_else(|| {
                FreqLensError::NoNumericData(format!("column '{wanted}' has no numeric values"))
            }),
        None => series.into_iter().next().ok_or_else(|| {
            FreqLensError::NoNumericData("no numeric column available".into())
        }),
    }
}
