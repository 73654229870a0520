use anyhow::{Context, Result};
use serde::Serialize;

use creel::metrics::condition::standard_weight;
use creel::species::SpeciesTable;

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

#[derive(Serialize)]
struct SampleRow<'a> {
    species: &'a str,
    length_mm: f64,
    weight_g: f64,
    effort_hours: f64,
    net_id: String,
}

/// (species, mean length mm, length sd mm, expected catch per net).
const CATCH_MIX: &[(&str, f64, f64, f64)] = &[
    ("Bluegill", 170.0, 45.0, 14.0),
    ("Yellow Perch", 210.0, 50.0, 9.0),
    ("Walleye", 430.0, 110.0, 6.0),
    ("Black Crappie", 240.0, 55.0, 5.0),
    ("Largemouth Bass", 330.0, 90.0, 4.0),
    ("Northern Pike", 620.0, 140.0, 2.0),
];

const NET_COUNT: usize = 8;
const OUTPUT_PATH: &str = "sample_survey.csv";

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = SimpleRng::new(42);
    let species_table = SpeciesTable::reference();

    let mut writer = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;

    let mut total_rows = 0usize;
    for net in 0..NET_COUNT {
        let net_id = format!("NET-{:02}", net + 1);
        let effort_hours = (rng.gauss(4.0, 1.0).clamp(1.0, 8.0) * 4.0).round() / 4.0;

        for &(species, mean_length, sd_length, per_net) in CATCH_MIX {
            // Effort-scaled catch with net-to-net variation.
            let expected = per_net * effort_hours / 4.0;
            let count = rng.gauss(expected, expected.sqrt()).round().max(0.0) as usize;

            for _ in 0..count {
                let length_mm = rng.gauss(mean_length, sd_length).max(60.0).round();
                let weight_g = synthesize_weight(&species_table, species, length_mm, &mut rng);

                writer
                    .serialize(SampleRow {
                        species,
                        length_mm,
                        weight_g,
                        effort_hours,
                        net_id: net_id.clone(),
                    })
                    .context("writing CSV row")?;
                total_rows += 1;
            }
        }
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {total_rows} survey records across {NET_COUNT} nets to {OUTPUT_PATH}");
    Ok(())
}

/// Weight from the species' standard-weight curve with multiplicative
/// condition noise. Below the curve's minimum length (or for species
/// without Ws parameters) fall back to a cubic condition-factor guess.
fn synthesize_weight(table: &SpeciesTable, species: &str, length_mm: f64, rng: &mut SimpleRng) -> f64 {
    let base = table
        .ws(species)
        .and_then(|params| standard_weight(params, length_mm))
        .unwrap_or_else(|| 1e-5 * length_mm.powi(3));
    let condition = rng.gauss(0.0, 0.08).exp();
    (base * condition).max(1.0).round()
}
