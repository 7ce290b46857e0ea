//! Writes a synthetic launch dataset to `spacex_launch_dash.csv` so the
//! dashboard can run without real data.

use anyhow::{Context, Result};

use launch_dash::config::DATASET_FILE_NAME;
use launch_dash::data::model::{LaunchRecord, Outcome};
use launch_dash::layout::LAUNCH_SITES;

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Booster generations in launch order: (category, payload ceiling kg, success rate).
const BOOSTERS: [(&str, f64, f64); 5] = [
    ("v1.0", 700.0, 0.2),
    ("v1.1", 4500.0, 0.35),
    ("FT", 9600.0, 0.7),
    ("B4", 9600.0, 0.75),
    ("B5", 9600.0, 0.9),
];

const LAUNCHES_PER_BOOSTER: usize = 11;

fn generate(rng: &mut SimpleRng) -> Vec<LaunchRecord> {
    let mut records = Vec::with_capacity(BOOSTERS.len() * LAUNCHES_PER_BOOSTER);
    for &(category, ceiling, success_rate) in &BOOSTERS {
        for _ in 0..LAUNCHES_PER_BOOSTER {
            let site = *rng.pick(&LAUNCH_SITES);
            // Round to whole kilograms like the published manifests.
            let payload = (rng.next_f64() * ceiling).round();
            let class = if rng.next_f64() < success_rate {
                Outcome::Success
            } else {
                Outcome::Failure
            };
            records.push(LaunchRecord::new(site, payload, class, category));
        }
    }
    records
}

fn write_csv(path: &str, records: &[LaunchRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    for rec in records {
        writer.serialize(rec).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let records = generate(&mut rng);

    write_csv(DATASET_FILE_NAME, &records)?;

    let successes = records.iter().filter(|r| r.class.is_success()).count();
    println!(
        "Wrote {} launches ({successes} successful) to {DATASET_FILE_NAME}",
        records.len()
    );
    Ok(())
}
