use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{
    COL_BOOSTER_CATEGORY, COL_CLASS, COL_LAUNCH_SITE, COL_PAYLOAD_MASS, LaunchRecord,
    LaunchTable,
};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch table from a `.csv` file with a header row containing at
/// least the four launch columns.
///
/// Any failure (missing file, missing column, bad cell, out-of-domain value)
/// is returned with the offending row in the context chain.
pub fn load_file(path: &Path) -> Result<LaunchTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading launch records from {}", path.display()))?;

    for (row, rec) in records.iter().enumerate() {
        validate(rec).with_context(|| format!("Row {row}"))?;
    }

    let table = LaunchTable::from_records(records);
    let (min, max) = table.payload_bounds();
    log::info!(
        "Loaded {} launch records from {} (sites: {:?}, payload {min}..={max} kg)",
        table.len(),
        path.display(),
        table.sites()
    );
    Ok(table)
}

fn validate(rec: &LaunchRecord) -> Result<()> {
    if !rec.payload_mass_kg.is_finite() {
        bail!("payload mass is not a finite number: {}", rec.payload_mass_kg);
    }
    if rec.launch_site.trim().is_empty() {
        bail!("empty launch site");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names; the four launch columns are
/// required, any other column is ignored.
fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for col in [COL_LAUNCH_SITE, COL_PAYLOAD_MASS, COL_CLASS, COL_BOOSTER_CATEGORY] {
        if !headers.iter().any(|h| h == col) {
            bail!("CSV missing '{col}' column");
        }
    }

    reader
        .deserialize::<LaunchRecord>()
        .enumerate()
        .map(|(row_no, result)| result.with_context(|| format!("CSV row {row_no}")))
        .collect()
}
