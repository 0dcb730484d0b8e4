use palette::Srgb;

use crate::config::{AxisId, SliderId, TextId};
use crate::data::filter::{filtered_indices, FilterSpec};
use crate::data::metric::{Metric, MetricRegistry};
use crate::data::model::Dataset;
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Control changes emitted by the shell
// ---------------------------------------------------------------------------

/// A single control value change.  Each one triggers exactly one recompute.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlChange {
    Slider(SliderId, f64),
    /// Raw text as typed; trimmed before it reaches the filter.
    Text(TextId, String),
    /// New axis label, as offered by [`MetricRegistry::labels`].
    Axis(AxisId, String),
}

// ---------------------------------------------------------------------------
// Plot data published to the shell
// ---------------------------------------------------------------------------

/// Parallel per-point columns for the scatter plot, aligned by row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotSource {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: Vec<Srgb<u8>>,
    pub alpha: Vec<f32>,
    pub label: Vec<String>,
}

impl PlotSource {
    /// Project the rows at `indices` onto the two chosen metrics.
    fn project(dataset: &Dataset, indices: &[usize], x: Metric, y: Metric) -> Self {
        let mut source = PlotSource::default();
        for &idx in indices {
            let record = &dataset.records()[idx];
            source.x.push(x.value(record));
            source.y.push(y.value(record));
            source.color.push(record.marker.color);
            source.alpha.push(record.marker.alpha);
            source.label.push(record.country.clone());
        }
        source
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Everything the chart shows, replaced as one value on every recompute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotView {
    pub source: PlotSource,
    pub x_title: String,
    pub y_title: String,
    pub title: String,
}

pub fn summary_title(count: usize) -> String {
    format!("{count} countries selected")
}

// ---------------------------------------------------------------------------
// Dashboard – the reactive controller
// ---------------------------------------------------------------------------

/// Owns the dataset, the current filter and axis selection, and the
/// derived plot view.  Only ever touched from the UI thread.
pub struct Dashboard {
    dataset: Dataset,
    registry: MetricRegistry,
    filter: FilterSpec,
    x_axis: String,
    y_axis: String,
    view: PlotView,
    recomputes: u64,
}

impl Dashboard {
    /// Build the controller with default control values and run the
    /// initial recompute so the chart is populated before any input.
    pub fn new(dataset: Dataset, registry: MetricRegistry) -> Result<Self, DashboardError> {
        let mut dashboard = Dashboard {
            dataset,
            registry,
            filter: FilterSpec::default(),
            x_axis: AxisId::X.def().default.label().to_string(),
            y_axis: AxisId::Y.def().default.label().to_string(),
            view: PlotView::default(),
            recomputes: 0,
        };
        dashboard.update()?;
        Ok(dashboard)
    }

    /// Store one control's new value, then recompute.
    pub fn apply_change(&mut self, change: ControlChange) -> Result<(), DashboardError> {
        match change {
            ControlChange::Slider(id, value) => *self.filter.bound_mut(id) = value,
            ControlChange::Text(id, value) => *self.filter.pattern_mut(id) = value.trim().to_string(),
            ControlChange::Axis(id, label) => {
                // reject before storing so a bad label leaves the selection as it was
                self.registry.resolve(&label)?;
                match id {
                    AxisId::X => self.x_axis = label,
                    AxisId::Y => self.y_axis = label,
                }
            }
        }
        self.update()
    }

    /// Re-filter the dataset and rebuild the plot view from scratch.
    ///
    /// On error the previous view is left untouched.
    pub fn update(&mut self) -> Result<(), DashboardError> {
        let x = self.registry.resolve(&self.x_axis)?;
        let y = self.registry.resolve(&self.y_axis)?;

        let visible = filtered_indices(&self.dataset, &self.filter);
        let view = PlotView {
            source: PlotSource::project(&self.dataset, &visible, x, y),
            x_title: self.x_axis.clone(),
            y_title: self.y_axis.clone(),
            title: summary_title(visible.len()),
        };

        self.recomputes += 1;
        log::debug!(
            "recompute #{}: {} of {} countries selected, x = {}, y = {}",
            self.recomputes,
            visible.len(),
            self.dataset.len(),
            x.column(),
            y.column()
        );

        self.view = view;
        Ok(())
    }

    pub fn view(&self) -> &PlotView {
        &self.view
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn axis(&self, id: AxisId) -> &str {
        match id {
            AxisId::X => &self.x_axis,
            AxisId::Y => &self.y_axis,
        }
    }

    pub fn registry(&self) -> &MetricRegistry {
        &self.registry
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Number of recomputes so far, the startup one included.
    #[cfg(test)]
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CountryRecord;

    fn country(name: &str, continent: &str, diameter: f64, density: f64) -> CountryRecord {
        CountryRecord {
            country: name.to_string(),
            continent: Some(continent.to_string()),
            income_group: Some("High income".to_string()),
            gdp_capita: 20_000.0,
            area: 50_000.0,
            total_edge_length: 100.0,
            diameter,
            density,
            ..Default::default()
        }
    }

    fn dashboard(records: Vec<CountryRecord>) -> Dashboard {
        Dashboard::new(Dataset::from_records(records), MetricRegistry::new().unwrap()).unwrap()
    }

    fn seven_countries() -> Vec<CountryRecord> {
        (0..7)
            .map(|i| country(&format!("C{i}"), "Europe", i as f64, 0.1 * i as f64))
            .collect()
    }

    #[test]
    fn startup_populates_the_view() {
        let d = dashboard(seven_countries());
        assert_eq!(d.recomputes(), 1);
        assert_eq!(d.view().source.len(), 7);
        assert_eq!(d.view().x_title, "log(Size Country/Total Edge Length)");
        assert_eq!(d.view().y_title, "Maximum 10% Isolated");
        assert_eq!(d.filter(), &FilterSpec::default());
        assert_eq!(d.filter().bound(SliderId::MinGdpCapita), 1000.0);
    }

    #[test]
    fn summary_title_counts_selected_countries() {
        let d = dashboard(seven_countries());
        assert_eq!(d.view().title, "7 countries selected");
        assert_eq!(summary_title(0), "0 countries selected");
    }

    #[test]
    fn axis_selection_projects_the_chosen_columns() {
        let mut d = dashboard(vec![
            country("Peru", "South America", 30.0, 0.2),
            country("Spain", "Europe", 25.0, 0.4),
            country("Chile", "South America", 40.0, 0.1),
        ]);
        d.apply_change(ControlChange::Axis(AxisId::X, "Diameter".into())).unwrap();
        d.apply_change(ControlChange::Axis(AxisId::Y, "Density".into())).unwrap();
        d.apply_change(ControlChange::Text(TextId::Continent, "America".into())).unwrap();

        let view = d.view();
        assert_eq!(view.x_title, "Diameter");
        assert_eq!(view.y_title, "Density");
        assert_eq!(view.source.x, [30.0, 40.0]);
        assert_eq!(view.source.y, [0.2, 0.1]);
        assert_eq!(view.source.label, ["Peru", "Chile"]);
        assert_eq!(view.source.color, [palette::named::ORANGE; 2]);
        assert_eq!(view.source.alpha, [1.0, 1.0]);
        assert_eq!(view.title, "2 countries selected");
    }

    #[test]
    fn every_change_recomputes_exactly_once() {
        let mut d = dashboard(seven_countries());
        let changes = [
            ControlChange::Slider(SliderId::MinArea, 10.0),
            ControlChange::Slider(SliderId::MinArea, 20.0),
            ControlChange::Text(TextId::IncomeGroup, "High".into()),
            ControlChange::Axis(AxisId::Y, "Diameter".into()),
        ];
        for (i, change) in changes.into_iter().enumerate() {
            d.apply_change(change).unwrap();
            assert_eq!(d.recomputes(), 2 + i as u64);
        }
    }

    #[test]
    fn text_patterns_are_trimmed() {
        let mut d = dashboard(seven_countries());
        d.apply_change(ControlChange::Text(TextId::Continent, "  Europe \n".into())).unwrap();
        assert_eq!(d.filter().pattern(TextId::Continent), "Europe");
        assert_eq!(d.view().source.len(), 7);
    }

    #[test]
    fn inverted_range_empties_the_plot() {
        let mut d = dashboard(seven_countries());
        d.apply_change(ControlChange::Slider(SliderId::MinNetLength, 500.0)).unwrap();
        d.apply_change(ControlChange::Slider(SliderId::MaxNetLength, 10.0)).unwrap();
        assert!(d.view().source.is_empty());
        assert_eq!(d.view().title, "0 countries selected");
    }

    #[test]
    fn gdp_floor_slider_filters() {
        let mut records = seven_countries();
        records[3].gdp_capita = 500.0;
        let mut d = dashboard(records);
        assert_eq!(d.view().source.len(), 6);
        d.apply_change(ControlChange::Slider(SliderId::MinGdpCapita, 0.0)).unwrap();
        assert_eq!(d.view().source.len(), 7);
    }

    #[test]
    fn unknown_axis_label_leaves_the_controller_unchanged() {
        let mut d = dashboard(seven_countries());
        let before = d.view().clone();
        let err = d
            .apply_change(ControlChange::Axis(AxisId::X, "Population".into()))
            .unwrap_err();
        assert!(matches!(err, DashboardError::UnknownMetric(_)));
        assert_eq!(d.view(), &before);
        assert_eq!(d.axis(AxisId::X), before.x_title);
        assert_eq!(d.recomputes(), 1);
    }

    #[test]
    fn empty_dataset_is_not_an_error() {
        let d = dashboard(Vec::new());
        assert!(d.view().source.is_empty());
        assert_eq!(d.view().title, "0 countries selected");
    }
}
