use std::path::PathBuf;

use crate::data::metric::Metric;

// ---------------------------------------------------------------------------
// Resource locations and window settings
// ---------------------------------------------------------------------------

pub const DATASET_PATH: &str = "percolation/country_metrics.csv";
pub const DESCRIPTION_PATH: &str = "percolation/description.html";
pub const WINDOW_TITLE: &str = "Percolation results";

/// Startup configuration.  Fixed at compile time; nothing is read from the
/// command line or persisted between sessions.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
    pub description_path: PathBuf,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DATASET_PATH),
            description_path: PathBuf::from(DESCRIPTION_PATH),
            window_title: WINDOW_TITLE.to_string(),
            window_size: [1100.0, 720.0],
            min_window_size: [640.0, 420.0],
        }
    }
}

// ---------------------------------------------------------------------------
// Control definitions
// ---------------------------------------------------------------------------

/// Numeric range controls, in panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderId {
    MinGdpCapita,
    MinNetLength,
    MaxNetLength,
    MinArea,
    MaxArea,
}

/// Free-text controls, in panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextId {
    Continent,
    IncomeGroup,
}

/// The two axis dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisId {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderDef {
    pub id: SliderId,
    pub title: &'static str,
    pub start: f64,
    pub end: f64,
    pub default: f64,
    pub step: f64,
}

pub static SLIDERS: [SliderDef; 5] = [
    SliderDef {
        id: SliderId::MinGdpCapita,
        title: "Minimum GDP per Capita (US dollar)",
        start: 0.0,
        end: 70_000.0,
        default: 1_000.0,
        step: 100.0,
    },
    SliderDef {
        id: SliderId::MinNetLength,
        title: "Minimum total network length (km)",
        start: 0.0,
        end: 475_000.0,
        default: 0.0,
        step: 1.0,
    },
    SliderDef {
        id: SliderId::MaxNetLength,
        title: "Maximum total network length (km)",
        start: 0.0,
        end: 475_000.0,
        default: 475_000.0,
        step: 1.0,
    },
    SliderDef {
        id: SliderId::MinArea,
        title: "Minimum country size (km2)",
        start: 0.0,
        end: 10_375_000.0,
        default: 0.0,
        step: 1.0,
    },
    SliderDef {
        id: SliderId::MaxArea,
        title: "Maximum country size (km2)",
        start: 0.0,
        end: 10_375_000.0,
        default: 10_375_000.0,
        step: 1.0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextDef {
    pub id: TextId,
    pub title: &'static str,
}

pub static TEXT_FIELDS: [TextDef; 2] = [
    TextDef {
        id: TextId::Continent,
        title: "Continent:",
    },
    TextDef {
        id: TextId::IncomeGroup,
        title: "World Bank Income Group:",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDef {
    pub id: AxisId,
    pub title: &'static str,
    pub default: Metric,
}

pub static AXES: [AxisDef; 2] = [
    AxisDef {
        id: AxisId::X,
        title: "X Axis",
        default: Metric::EdgeAreaLog,
    },
    AxisDef {
        id: AxisId::Y,
        title: "Y Axis",
        default: Metric::Max10Isolated,
    },
];

impl SliderId {
    pub fn def(self) -> &'static SliderDef {
        match self {
            SliderId::MinGdpCapita => &SLIDERS[0],
            SliderId::MinNetLength => &SLIDERS[1],
            SliderId::MaxNetLength => &SLIDERS[2],
            SliderId::MinArea => &SLIDERS[3],
            SliderId::MaxArea => &SLIDERS[4],
        }
    }
}

impl AxisId {
    pub fn def(self) -> &'static AxisDef {
        match self {
            AxisId::X => &AXES[0],
            AxisId::Y => &AXES[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definitions_are_indexed_by_their_id() {
        for def in &SLIDERS {
            assert_eq!(def.id.def(), def);
            assert!(def.start <= def.default && def.default <= def.end);
        }
        for def in &AXES {
            assert_eq!(def.id.def(), def);
        }
    }

    #[test]
    fn default_axes_match_the_dashboard_layout() {
        assert_eq!(AxisId::X.def().default.label(), "log(Size Country/Total Edge Length)");
        assert_eq!(AxisId::Y.def().default.label(), "Maximum 10% Isolated");
    }
}
