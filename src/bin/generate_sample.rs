use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

const OUTPUT_DIR: &str = "percolation";
const COUNTRY_COUNT: usize = 80;

const CONTINENTS: [&str; 7] = [
    "Europe",
    "Southeast Asia",
    "East Asia",
    "Sub-Saharan Africa",
    "South America",
    "North America",
    "Middle East",
];

const INCOME_GROUPS: [&str; 4] = [
    "Low income",
    "Lower middle income",
    "Upper middle income",
    "High income",
];

const DESCRIPTION: &str = "<h2>Percolation of national transport networks</h2>\n\
<p>Each point is a country. Pick two network metrics for the axes and narrow \
the selection with the GDP, network length, country size, continent and \
income-group filters.</p>\n\
<p><em>Synthetic sample data.</em></p>\n";

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Log-uniform sample, for quantities spanning several magnitudes.
    fn log_range(&mut self, lo: f64, hi: f64) -> f64 {
        self.range(lo.ln(), hi.ln()).exp()
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// min/mean/max of a robustness statistic at 5, 10 and 20% node removal.
/// Returned in header order: max 5/10/20, mean 5/10/20, min 5/10/20.
fn percentile_stats(rng: &mut SimpleRng, scale: f64) -> [f64; 9] {
    let fragility = rng.range(0.2, 1.0);
    let mean: Vec<f64> = [0.05, 0.10, 0.20]
        .iter()
        .map(|p| (p * fragility * rng.range(0.8, 1.2)).min(1.0) * scale)
        .collect();
    let mut out = [0.0; 9];
    for i in 0..3 {
        out[i] = mean[i] * rng.range(1.1, 1.6);
        out[3 + i] = mean[i];
        out[6 + i] = mean[i] * rng.range(0.3, 0.9);
    }
    out
}

fn header() -> Vec<String> {
    let mut cols: Vec<String> = [
        "", "Continent", "IncomeGroup", "GDP_Capita", "Area", "Total_Edge_Length", "Density",
        "Edge_No", "Ave_Path_Length", "Assortativity", "Diameter", "Max_Degree", "areaLog",
        "edgeLog", "edgeArea", "edgeAreaLog",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    for suffix in ["isolated", "surloss_e2"] {
        for stat in ["max", "mean", "min"] {
            for perc in [5, 10, 20] {
                cols.push(format!("{stat}_{perc}perc_{suffix}"));
            }
        }
    }
    cols
}

fn country_row(rng: &mut SimpleRng, index: usize) -> Vec<String> {
    let area_km2 = rng.log_range(300.0, 10_000_000.0);
    let length_km = (area_km2 * rng.range(0.005, 0.06)).min(474_000.0);
    let edges = (length_km / rng.range(2.0, 8.0)).round().max(1.0);
    let edge_area = area_km2 / length_km;

    let mut row = vec![
        format!("Country {index:02}"),
        rng.pick(&CONTINENTS).to_string(),
        rng.pick(&INCOME_GROUPS).to_string(),
        format!("{:.0}", rng.log_range(300.0, 80_000.0)),
        format!("{area_km2:.0}"),
        // metres in the file
        format!("{:.0}", length_km * 1000.0),
        format!("{:.6}", rng.range(0.0005, 0.01)),
        format!("{edges:.0}"),
        format!("{:.3}", rng.range(3.0, 40.0)),
        // every seventh country has no assortativity value
        if index % 7 == 0 {
            String::new()
        } else {
            format!("{:.4}", rng.range(-0.3, 0.4))
        },
        format!("{:.0}", rng.range(10.0, 400.0)),
        format!("{:.0}", rng.range(3.0, 9.0)),
        format!("{:.4}", area_km2.ln()),
        format!("{:.4}", length_km.ln()),
        format!("{edge_area:.4}"),
        format!("{:.4}", edge_area.ln()),
    ];
    row.extend(percentile_stats(rng, 1.0).iter().map(|v| format!("{v:.4}")));
    row.extend(percentile_stats(rng, 100.0).iter().map(|v| format!("{v:.4}")));
    row
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let dir = Path::new(OUTPUT_DIR);
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let csv_path = dir.join("country_metrics.csv");
    let mut writer = csv::Writer::from_path(&csv_path)
        .with_context(|| format!("creating {}", csv_path.display()))?;
    writer.write_record(header())?;
    for index in 0..COUNTRY_COUNT {
        writer.write_record(country_row(&mut rng, index))?;
    }
    writer.flush()?;

    let description_path = dir.join("description.html");
    fs::write(&description_path, DESCRIPTION)
        .with_context(|| format!("writing {}", description_path.display()))?;

    println!(
        "Wrote {COUNTRY_COUNT} countries to {} and {}",
        csv_path.display(),
        description_path.display()
    );
    Ok(())
}
