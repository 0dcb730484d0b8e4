use std::collections::{BTreeMap, BTreeSet};

use super::model::CountryRecord;
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Metric – every plottable column of the dataset
// ---------------------------------------------------------------------------

/// A numeric column that can be put on either axis of the scatter plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    Area,
    TotalEdgeLength,
    Density,
    EdgeCount,
    AvgPathLength,
    Assortativity,
    Diameter,
    MaxDegree,
    AreaLog,
    EdgeLog,
    EdgeArea,
    EdgeAreaLog,
    Max5Isolated,
    Max10Isolated,
    Max20Isolated,
    Mean5Isolated,
    Mean10Isolated,
    Mean20Isolated,
    Min5Isolated,
    Min10Isolated,
    Min20Isolated,
    Max5SurplusLoss,
    Max10SurplusLoss,
    Max20SurplusLoss,
    Mean5SurplusLoss,
    Mean10SurplusLoss,
    Mean20SurplusLoss,
    Min5SurplusLoss,
    Min10SurplusLoss,
    Min20SurplusLoss,
}

impl Metric {
    pub const ALL: [Metric; 30] = [
        Metric::Area,
        Metric::TotalEdgeLength,
        Metric::Density,
        Metric::EdgeCount,
        Metric::AvgPathLength,
        Metric::Assortativity,
        Metric::Diameter,
        Metric::MaxDegree,
        Metric::AreaLog,
        Metric::EdgeLog,
        Metric::EdgeArea,
        Metric::EdgeAreaLog,
        Metric::Max5Isolated,
        Metric::Max10Isolated,
        Metric::Max20Isolated,
        Metric::Mean5Isolated,
        Metric::Mean10Isolated,
        Metric::Mean20Isolated,
        Metric::Min5Isolated,
        Metric::Min10Isolated,
        Metric::Min20Isolated,
        Metric::Max5SurplusLoss,
        Metric::Max10SurplusLoss,
        Metric::Max20SurplusLoss,
        Metric::Mean5SurplusLoss,
        Metric::Mean10SurplusLoss,
        Metric::Mean20SurplusLoss,
        Metric::Min5SurplusLoss,
        Metric::Min10SurplusLoss,
        Metric::Min20SurplusLoss,
    ];

    /// Human-readable axis label shown in the dropdowns.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Area => "Size of country",
            Metric::TotalEdgeLength => "Total Edge Length (in km)",
            Metric::Density => "Density",
            Metric::EdgeCount => "Number of Edges",
            Metric::AvgPathLength => "Average Edge Length",
            Metric::Assortativity => "Assortativity",
            Metric::Diameter => "Diameter",
            Metric::MaxDegree => "Maximum degree",
            Metric::AreaLog => "log(size of country)",
            Metric::EdgeLog => "log(Total Edge Length)",
            Metric::EdgeArea => "Size Country/Total Edge Length",
            Metric::EdgeAreaLog => "log(Size Country/Total Edge Length)",
            Metric::Max5Isolated => "Maximum 5% Isolated",
            Metric::Max10Isolated => "Maximum 10% Isolated",
            Metric::Max20Isolated => "Maximum 20% Isolated",
            Metric::Mean5Isolated => "Mean 5% Isolated",
            Metric::Mean10Isolated => "Mean 10% Isolated",
            Metric::Mean20Isolated => "Mean 20% Isolated",
            Metric::Min5Isolated => "Minimum 5% Isolated",
            Metric::Min10Isolated => "Minimum 10% Isolated",
            Metric::Min20Isolated => "Minimum 20% Isolated",
            Metric::Max5SurplusLoss => "Maximum 5% Surplus Loss",
            Metric::Max10SurplusLoss => "Maximum 10% Surplus Loss",
            Metric::Max20SurplusLoss => "Maximum 20% Surplus Loss",
            Metric::Mean5SurplusLoss => "Mean 5% Surplus Loss",
            Metric::Mean10SurplusLoss => "Mean 10% Surplus Loss",
            Metric::Mean20SurplusLoss => "Mean 20% Surplus Loss",
            Metric::Min5SurplusLoss => "Minimum 5% Surplus Loss",
            Metric::Min10SurplusLoss => "Minimum 10% Surplus Loss",
            Metric::Min20SurplusLoss => "Minimum 20% Surplus Loss",
        }
    }

    /// Column header of the metric in the dataset file.
    pub fn column(self) -> &'static str {
        match self {
            Metric::Area => "Area",
            Metric::TotalEdgeLength => "Total_Edge_Length",
            Metric::Density => "Density",
            Metric::EdgeCount => "Edge_No",
            Metric::AvgPathLength => "Ave_Path_Length",
            Metric::Assortativity => "Assortativity",
            Metric::Diameter => "Diameter",
            Metric::MaxDegree => "Max_Degree",
            Metric::AreaLog => "areaLog",
            Metric::EdgeLog => "edgeLog",
            Metric::EdgeArea => "edgeArea",
            Metric::EdgeAreaLog => "edgeAreaLog",
            Metric::Max5Isolated => "max_5perc_isolated",
            Metric::Max10Isolated => "max_10perc_isolated",
            Metric::Max20Isolated => "max_20perc_isolated",
            Metric::Mean5Isolated => "mean_5perc_isolated",
            Metric::Mean10Isolated => "mean_10perc_isolated",
            Metric::Mean20Isolated => "mean_20perc_isolated",
            Metric::Min5Isolated => "min_5perc_isolated",
            Metric::Min10Isolated => "min_10perc_isolated",
            Metric::Min20Isolated => "min_20perc_isolated",
            Metric::Max5SurplusLoss => "max_5perc_surloss_e2",
            Metric::Max10SurplusLoss => "max_10perc_surloss_e2",
            Metric::Max20SurplusLoss => "max_20perc_surloss_e2",
            Metric::Mean5SurplusLoss => "mean_5perc_surloss_e2",
            Metric::Mean10SurplusLoss => "mean_10perc_surloss_e2",
            Metric::Mean20SurplusLoss => "mean_20perc_surloss_e2",
            Metric::Min5SurplusLoss => "min_5perc_surloss_e2",
            Metric::Min10SurplusLoss => "min_10perc_surloss_e2",
            Metric::Min20SurplusLoss => "min_20perc_surloss_e2",
        }
    }

    /// Read this metric's value from a record.
    pub fn value(self, record: &CountryRecord) -> f64 {
        match self {
            Metric::Area => record.area,
            Metric::TotalEdgeLength => record.total_edge_length,
            Metric::Density => record.density,
            Metric::EdgeCount => record.edge_count,
            Metric::AvgPathLength => record.avg_path_length,
            Metric::Assortativity => record.assortativity,
            Metric::Diameter => record.diameter,
            Metric::MaxDegree => record.max_degree,
            Metric::AreaLog => record.area_log,
            Metric::EdgeLog => record.edge_log,
            Metric::EdgeArea => record.edge_area,
            Metric::EdgeAreaLog => record.edge_area_log,
            Metric::Max5Isolated => record.max_5perc_isolated,
            Metric::Max10Isolated => record.max_10perc_isolated,
            Metric::Max20Isolated => record.max_20perc_isolated,
            Metric::Mean5Isolated => record.mean_5perc_isolated,
            Metric::Mean10Isolated => record.mean_10perc_isolated,
            Metric::Mean20Isolated => record.mean_20perc_isolated,
            Metric::Min5Isolated => record.min_5perc_isolated,
            Metric::Min10Isolated => record.min_10perc_isolated,
            Metric::Min20Isolated => record.min_20perc_isolated,
            Metric::Max5SurplusLoss => record.max_5perc_surloss,
            Metric::Max10SurplusLoss => record.max_10perc_surloss,
            Metric::Max20SurplusLoss => record.max_20perc_surloss,
            Metric::Mean5SurplusLoss => record.mean_5perc_surloss,
            Metric::Mean10SurplusLoss => record.mean_10perc_surloss,
            Metric::Mean20SurplusLoss => record.mean_20perc_surloss,
            Metric::Min5SurplusLoss => record.min_5perc_surloss,
            Metric::Min10SurplusLoss => record.min_10perc_surloss,
            Metric::Min20SurplusLoss => record.min_20perc_surloss,
        }
    }
}

// ---------------------------------------------------------------------------
// MetricRegistry – label → metric lookup for the axis selectors
// ---------------------------------------------------------------------------

/// The axis map: display label → [`Metric`].
#[derive(Debug, Clone)]
pub struct MetricRegistry {
    by_label: BTreeMap<&'static str, Metric>,
}

impl MetricRegistry {
    /// Build the registry from [`Metric::ALL`], rejecting duplicate labels
    /// or columns.
    pub fn new() -> Result<Self, DashboardError> {
        Self::from_metrics(&Metric::ALL)
    }

    fn from_metrics(metrics: &[Metric]) -> Result<Self, DashboardError> {
        let mut by_label = BTreeMap::new();
        let mut columns = BTreeSet::new();
        for &metric in metrics {
            if by_label.insert(metric.label(), metric).is_some() {
                return Err(DashboardError::DuplicateMetric(metric.label()));
            }
            if !columns.insert(metric.column()) {
                return Err(DashboardError::DuplicateMetric(metric.column()));
            }
        }
        Ok(MetricRegistry { by_label })
    }

    /// Display labels in lexicographic order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.by_label.keys().copied().collect()
    }

    pub fn resolve(&self, label: &str) -> Result<Metric, DashboardError> {
        self.by_label
            .get(label)
            .copied()
            .ok_or_else(|| DashboardError::UnknownMetric(label.to_string()))
    }
}
