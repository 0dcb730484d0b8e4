use super::model::{CountryRecord, Dataset};
use crate::config::{SliderId, TextId};

// ---------------------------------------------------------------------------
// Filter predicate: numeric bounds plus two substring patterns
// ---------------------------------------------------------------------------

/// The predicate parameters currently set by the controls.
///
/// Bounds are inclusive.  Nothing enforces `min <= max`; an inverted pair
/// simply matches no record.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub min_gdp_capita: f64,
    pub min_net_length: f64,
    pub max_net_length: f64,
    pub min_area: f64,
    pub max_area: f64,
    /// Literal, case-sensitive substring of the continent.  Empty = no filter.
    pub continent: String,
    /// Literal, case-sensitive substring of the income group.  Empty = no filter.
    pub income_group: String,
}

impl Default for FilterSpec {
    /// The slider defaults with both text patterns empty.
    fn default() -> Self {
        FilterSpec {
            min_gdp_capita: SliderId::MinGdpCapita.def().default,
            min_net_length: SliderId::MinNetLength.def().default,
            max_net_length: SliderId::MaxNetLength.def().default,
            min_area: SliderId::MinArea.def().default,
            max_area: SliderId::MaxArea.def().default,
            continent: String::new(),
            income_group: String::new(),
        }
    }
}

impl FilterSpec {
    /// Current value of a numeric bound.
    pub fn bound(&self, id: SliderId) -> f64 {
        match id {
            SliderId::MinGdpCapita => self.min_gdp_capita,
            SliderId::MinNetLength => self.min_net_length,
            SliderId::MaxNetLength => self.max_net_length,
            SliderId::MinArea => self.min_area,
            SliderId::MaxArea => self.max_area,
        }
    }

    pub fn bound_mut(&mut self, id: SliderId) -> &mut f64 {
        match id {
            SliderId::MinGdpCapita => &mut self.min_gdp_capita,
            SliderId::MinNetLength => &mut self.min_net_length,
            SliderId::MaxNetLength => &mut self.max_net_length,
            SliderId::MinArea => &mut self.min_area,
            SliderId::MaxArea => &mut self.max_area,
        }
    }

    pub fn pattern(&self, id: TextId) -> &str {
        match id {
            TextId::Continent => &self.continent,
            TextId::IncomeGroup => &self.income_group,
        }
    }

    pub fn pattern_mut(&mut self, id: TextId) -> &mut String {
        match id {
            TextId::Continent => &mut self.continent,
            TextId::IncomeGroup => &mut self.income_group,
        }
    }

    /// Whether `record` passes every active predicate.
    pub fn matches(&self, record: &CountryRecord) -> bool {
        record.gdp_capita >= self.min_gdp_capita
            && in_range(record.total_edge_length, self.min_net_length, self.max_net_length)
            && in_range(record.area, self.min_area, self.max_area)
            && contains_pattern(record.continent.as_deref(), &self.continent)
            && contains_pattern(record.income_group.as_deref(), &self.income_group)
    }
}

fn in_range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

/// An empty pattern accepts everything; otherwise a missing value never matches.
fn contains_pattern(value: Option<&str>, pattern: &str) -> bool {
    if pattern.is_empty() {
        return true;
    }
    value.is_some_and(|v| v.contains(pattern))
}

/// Return indices of records that pass `spec`, in dataset order.
pub fn filtered_indices(dataset: &Dataset, spec: &FilterSpec) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| spec.matches(record))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_spec() -> FilterSpec {
        FilterSpec {
            min_gdp_capita: 0.0,
            min_net_length: 0.0,
            max_net_length: f64::MAX,
            min_area: 0.0,
            max_area: f64::MAX,
            continent: String::new(),
            income_group: String::new(),
        }
    }

    fn record(name: &str, continent: &str, income: &str, gdp: f64, length: f64, area: f64) -> CountryRecord {
        CountryRecord {
            country: name.to_string(),
            continent: Some(continent.to_string()),
            income_group: Some(income.to_string()),
            gdp_capita: gdp,
            total_edge_length: length,
            area,
            ..Default::default()
        }
    }

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            record("Laos", "Southeast Asia", "Lower middle income", 2500.0, 5.0, 236_800.0),
            record("France", "Europe", "High income", 41_000.0, 9.0, 551_695.0),
            record("Chad", "Africa", "Low income", 700.0, 0.1, 1_284_000.0),
            record("Japan", "East Asia", "High income", 39_000.0, 120.0, 377_975.0),
            CountryRecord {
                country: "Atlantis".into(),
                gdp_capita: 5000.0,
                total_edge_length: 3.0,
                area: 10.0,
                ..Default::default()
            },
        ])
    }

    fn names(ds: &Dataset, spec: &FilterSpec) -> Vec<String> {
        filtered_indices(ds, spec)
            .into_iter()
            .map(|i| ds.records()[i].country.clone())
            .collect()
    }

    #[test]
    fn open_spec_keeps_everything_in_order() {
        let ds = sample();
        assert_eq!(filtered_indices(&ds, &open_spec()), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn net_length_bounds_are_inclusive() {
        let ds = Dataset::from_records(vec![
            record("a", "", "", 0.0, 0.1, 0.0),
            record("b", "", "", 0.0, 5.0, 0.0),
            record("c", "", "", 0.0, 9.0, 0.0),
        ]);
        let spec = FilterSpec {
            min_net_length: 1.0,
            max_net_length: 10.0,
            ..open_spec()
        };
        assert_eq!(filtered_indices(&ds, &spec), vec![1, 2]);

        let exact = FilterSpec {
            min_net_length: 5.0,
            max_net_length: 5.0,
            ..open_spec()
        };
        assert_eq!(filtered_indices(&ds, &exact), vec![1]);
    }

    #[test]
    fn gdp_floor_and_area_range() {
        let ds = sample();
        let spec = FilterSpec {
            min_gdp_capita: 1000.0,
            min_area: 100.0,
            max_area: 600_000.0,
            ..open_spec()
        };
        assert_eq!(names(&ds, &spec), ["Laos", "France", "Japan"]);
    }

    #[test]
    fn continent_is_a_case_sensitive_substring() {
        let ds = sample();
        let spec = FilterSpec {
            continent: "Asia".into(),
            ..open_spec()
        };
        assert_eq!(names(&ds, &spec), ["Laos", "Japan"]);

        let lower = FilterSpec {
            continent: "asia".into(),
            ..open_spec()
        };
        assert!(filtered_indices(&ds, &lower).is_empty());
    }

    #[test]
    fn southeast_asia_matches_asia_but_europe_does_not() {
        let ds = Dataset::from_records(vec![
            record("x", "Southeast Asia", "", 0.0, 0.0, 0.0),
            record("y", "Europe", "", 0.0, 0.0, 0.0),
        ]);
        let spec = FilterSpec {
            continent: "Asia".into(),
            ..open_spec()
        };
        assert_eq!(filtered_indices(&ds, &spec), vec![0]);
    }

    #[test]
    fn income_group_pattern_combines_with_other_predicates() {
        let ds = sample();
        let spec = FilterSpec {
            income_group: "High".into(),
            continent: "Europe".into(),
            ..open_spec()
        };
        assert_eq!(names(&ds, &spec), ["France"]);
    }

    #[test]
    fn missing_categorical_only_fails_non_empty_patterns() {
        let ds = sample();
        let any = FilterSpec {
            income_group: "income".into(),
            ..open_spec()
        };
        assert!(!names(&ds, &any).contains(&"Atlantis".to_string()));
        assert!(names(&ds, &open_spec()).contains(&"Atlantis".to_string()));
    }

    #[test]
    fn inverted_ranges_yield_nothing() {
        let ds = sample();
        let lengths = FilterSpec {
            min_net_length: 10.0,
            max_net_length: 1.0,
            ..open_spec()
        };
        assert!(filtered_indices(&ds, &lengths).is_empty());

        let areas = FilterSpec {
            min_area: 1e6,
            max_area: 0.0,
            ..open_spec()
        };
        assert!(filtered_indices(&ds, &areas).is_empty());
    }

    #[test]
    fn empty_dataset_yields_nothing() {
        assert!(filtered_indices(&Dataset::default(), &open_spec()).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = sample();
        let spec = FilterSpec {
            min_gdp_capita: 1000.0,
            continent: "a".into(),
            ..open_spec()
        };
        let once: Vec<CountryRecord> = filtered_indices(&ds, &spec)
            .into_iter()
            .map(|i| ds.records()[i].clone())
            .collect();
        let refiltered = Dataset::from_records(once.clone());
        let twice: Vec<CountryRecord> = filtered_indices(&refiltered, &spec)
            .into_iter()
            .map(|i| refiltered.records()[i].clone())
            .collect();
        assert!(!once.is_empty());
        assert_eq!(once, twice);
    }

    #[test]
    fn result_is_an_ordered_subsequence_matching_the_predicate() {
        let ds = sample();
        let specs = [
            open_spec(),
            FilterSpec { min_gdp_capita: 2000.0, ..open_spec() },
            FilterSpec { max_net_length: 6.0, ..open_spec() },
            FilterSpec { income_group: "income".into(), ..open_spec() },
        ];
        for spec in &specs {
            let indices = filtered_indices(&ds, spec);
            assert!(indices.windows(2).all(|w| w[0] < w[1]));
            for (i, r) in ds.records().iter().enumerate() {
                assert_eq!(indices.contains(&i), spec.matches(r), "{}", r.country);
            }
        }
    }
}
