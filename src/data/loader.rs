use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use super::metric::Metric;
use super::model::{CountryRecord, Dataset};
use crate::error::{DashboardError, ReadCause};

/// `Total_Edge_Length` is stored in metres; the dashboard shows kilometres.
const EDGE_LENGTH_SCALE: f64 = 1000.0;

/// Name given to the unnamed first (index) column.
const COUNTRY_COLUMN: &str = "country";

/// Non-metric columns every dataset must carry.
const FILTER_COLUMNS: [&str; 3] = ["GDP_Capita", "Continent", "IncomeGroup"];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the country metrics table.
///
/// Normalisation happens here, once:
/// * the unnamed first column becomes `country`
/// * `Total_Edge_Length` is divided by 1000
/// * missing numeric cells become 0
/// * every record gets the default [`Marker`](super::model::Marker)
pub fn load_dataset(path: &Path) -> Result<Dataset, DashboardError> {
    let file = File::open(path).map_err(|e| DashboardError::file_read(path, e))?;
    let dataset = read_dataset(file).map_err(|e| DashboardError::file_read(path, e))?;
    log::info!("Loaded {} countries from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Load the static description fragment shown above the controls.
pub fn load_description(path: &Path) -> Result<String, DashboardError> {
    std::fs::read_to_string(path).map_err(|e| DashboardError::file_read(path, e))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

fn read_dataset<R: Read>(source: R) -> Result<Dataset, ReadCause> {
    let mut reader = csv::Reader::from_reader(source);
    let headers = name_index_column(reader.headers()?);
    check_required_columns(&headers)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let mut record: CountryRecord = row.deserialize(Some(&headers))?;
        record.total_edge_length /= EDGE_LENGTH_SCALE;
        records.push(record);
    }

    Ok(Dataset::from_records(records))
}

/// Rename the first header to `country` when it is blank (or pandas' `Unnamed: 0`).
fn name_index_column(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let unnamed = h.trim().is_empty() || h.starts_with("Unnamed");
            if i == 0 && unnamed {
                COUNTRY_COLUMN
            } else {
                h
            }
        })
        .collect()
}

fn check_required_columns(headers: &StringRecord) -> Result<(), ReadCause> {
    let required = std::iter::once(COUNTRY_COLUMN)
        .chain(FILTER_COLUMNS)
        .chain(Metric::ALL.iter().map(|m| m.column()));

    let missing: Vec<&str> = required
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("missing column(s): {}", missing.join(", ")).into())
    }
}
