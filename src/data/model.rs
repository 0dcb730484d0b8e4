use palette::Srgb;
use serde::{Deserialize, Deserializer};

use crate::color;

// ---------------------------------------------------------------------------
// Numeric cell parsing
// ---------------------------------------------------------------------------

/// Cell contents treated as a missing value (the usual spreadsheet and
/// dataframe NA markers).
pub(crate) const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Deserialize a numeric cell, replacing missing values with zero.
fn zero_if_missing<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let text = raw.as_deref().map(str::trim).unwrap_or("");
    if MISSING_TOKENS.contains(&text) {
        return Ok(0.0);
    }
    let value: f64 = text
        .parse()
        .map_err(|_| serde::de::Error::custom(format!("'{text}' is not a number")))?;
    Ok(if value.is_nan() { 0.0 } else { value })
}

// ---------------------------------------------------------------------------
// Marker – presentation-only styling carried by every record
// ---------------------------------------------------------------------------

/// Fixed scatter-marker styling.  Never used for filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub color: Srgb<u8>,
    /// Opacity in `0.0..=1.0`.
    pub alpha: f32,
}

impl Default for Marker {
    fn default() -> Self {
        Marker {
            color: color::named_color(color::DEFAULT_MARKER_COLOR),
            alpha: 1.0,
        }
    }
}

// ---------------------------------------------------------------------------
// CountryRecord – one row of the metrics table
// ---------------------------------------------------------------------------

/// One country's pre-computed network metrics.
///
/// Field names follow the CSV header; every numeric field goes through
/// [`zero_if_missing`], so a record never holds a NaN.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CountryRecord {
    pub country: String,

    #[serde(rename = "Continent")]
    pub continent: Option<String>,
    #[serde(rename = "IncomeGroup")]
    pub income_group: Option<String>,
    #[serde(rename = "GDP_Capita", deserialize_with = "zero_if_missing")]
    pub gdp_capita: f64,

    // -- network shape --
    #[serde(rename = "Area", deserialize_with = "zero_if_missing")]
    pub area: f64,
    /// Kilometres after load (the file stores metres).
    #[serde(rename = "Total_Edge_Length", deserialize_with = "zero_if_missing")]
    pub total_edge_length: f64,
    #[serde(rename = "Density", deserialize_with = "zero_if_missing")]
    pub density: f64,
    #[serde(rename = "Edge_No", deserialize_with = "zero_if_missing")]
    pub edge_count: f64,
    #[serde(rename = "Ave_Path_Length", deserialize_with = "zero_if_missing")]
    pub avg_path_length: f64,
    #[serde(rename = "Assortativity", deserialize_with = "zero_if_missing")]
    pub assortativity: f64,
    #[serde(rename = "Diameter", deserialize_with = "zero_if_missing")]
    pub diameter: f64,
    #[serde(rename = "Max_Degree", deserialize_with = "zero_if_missing")]
    pub max_degree: f64,
    #[serde(rename = "areaLog", deserialize_with = "zero_if_missing")]
    pub area_log: f64,
    #[serde(rename = "edgeLog", deserialize_with = "zero_if_missing")]
    pub edge_log: f64,
    #[serde(rename = "edgeArea", deserialize_with = "zero_if_missing")]
    pub edge_area: f64,
    #[serde(rename = "edgeAreaLog", deserialize_with = "zero_if_missing")]
    pub edge_area_log: f64,

    // -- isolation after removing 5/10/20% of nodes --
    #[serde(rename = "max_5perc_isolated", deserialize_with = "zero_if_missing")]
    pub max_5perc_isolated: f64,
    #[serde(rename = "max_10perc_isolated", deserialize_with = "zero_if_missing")]
    pub max_10perc_isolated: f64,
    #[serde(rename = "max_20perc_isolated", deserialize_with = "zero_if_missing")]
    pub max_20perc_isolated: f64,
    #[serde(rename = "mean_5perc_isolated", deserialize_with = "zero_if_missing")]
    pub mean_5perc_isolated: f64,
    #[serde(rename = "mean_10perc_isolated", deserialize_with = "zero_if_missing")]
    pub mean_10perc_isolated: f64,
    #[serde(rename = "mean_20perc_isolated", deserialize_with = "zero_if_missing")]
    pub mean_20perc_isolated: f64,
    #[serde(rename = "min_5perc_isolated", deserialize_with = "zero_if_missing")]
    pub min_5perc_isolated: f64,
    #[serde(rename = "min_10perc_isolated", deserialize_with = "zero_if_missing")]
    pub min_10perc_isolated: f64,
    #[serde(rename = "min_20perc_isolated", deserialize_with = "zero_if_missing")]
    pub min_20perc_isolated: f64,

    // -- surplus loss after removing 5/10/20% of nodes --
    #[serde(rename = "max_5perc_surloss_e2", deserialize_with = "zero_if_missing")]
    pub max_5perc_surloss: f64,
    #[serde(rename = "max_10perc_surloss_e2", deserialize_with = "zero_if_missing")]
    pub max_10perc_surloss: f64,
    #[serde(rename = "max_20perc_surloss_e2", deserialize_with = "zero_if_missing")]
    pub max_20perc_surloss: f64,
    #[serde(rename = "mean_5perc_surloss_e2", deserialize_with = "zero_if_missing")]
    pub mean_5perc_surloss: f64,
    #[serde(rename = "mean_10perc_surloss_e2", deserialize_with = "zero_if_missing")]
    pub mean_10perc_surloss: f64,
    #[serde(rename = "mean_20perc_surloss_e2", deserialize_with = "zero_if_missing")]
    pub mean_20perc_surloss: f64,
    #[serde(rename = "min_5perc_surloss_e2", deserialize_with = "zero_if_missing")]
    pub min_5perc_surloss: f64,
    #[serde(rename = "min_10perc_surloss_e2", deserialize_with = "zero_if_missing")]
    pub min_10perc_surloss: f64,
    #[serde(rename = "min_20perc_surloss_e2", deserialize_with = "zero_if_missing")]
    pub min_20perc_surloss: f64,

    #[serde(skip)]
    pub marker: Marker,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// All country records in file order.  Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<CountryRecord>,
}

impl Dataset {
    pub fn from_records(records: Vec<CountryRecord>) -> Self {
        Dataset { records }
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Number of countries.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
