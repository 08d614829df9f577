use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// (feature, typical value, yearly growth, first year with data)
const FEATURES: [(&str, f64, f64, u32); 5] = [
    ("Median Household Income", 62_000.0, 0.035, 2017),
    ("Homes Heated By Utility Gas", 1_150_000.0, -0.004, 2017),
    ("Homes Heated By Electricity", 900_000.0, 0.018, 2017),
    ("Homes Heated By Solar Energy", 2_400.0, 0.12, 2018),
    ("Average Monthly Electricity Cost", 118.0, 0.025, 2019),
];

const YEARS: std::ops::RangeInclusive<u32> = 2017..=2022;

const STATES: [&str; 8] = [
    "Alabama", "California", "Colorado", "Florida", "Iowa", "New York", "Ohio", "Texas",
];

const METROS: [&str; 7] = [
    "Austin-Round Rock, TX",
    "Boise City, ID",
    "Denver-Aurora-Lakewood, CO",
    "Des Moines-West Des Moines, IA",
    "Phoenix-Mesa-Chandler, AZ",
    "Seattle-Tacoma-Bellevue, WA",
    "Tulsa, OK",
];

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
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + (hi - lo) * unit
    }
}

/// Header row followed by one row of optional values per entity.
struct WideTable {
    columns: Vec<String>,
    entities: Vec<String>,
    values: Vec<Vec<Option<f64>>>,
}

fn build(entity_column: &str, entities: &[&str], rng: &mut SimpleRng) -> WideTable {
    let mut columns = vec![entity_column.to_string()];
    for (feature, _, _, first_year) in FEATURES {
        columns.extend(
            YEARS
                .filter(|y| *y >= first_year)
                .map(|y| format!("{feature} {y}")),
        );
    }

    let values = entities
        .iter()
        .map(|_| {
            let mut row = Vec::new();
            for (_, base, growth, first_year) in FEATURES {
                let scale = rng.uniform(0.4, 1.6);
                for year in YEARS.filter(|y| *y >= first_year) {
                    // Roughly one survey gap per table.
                    if rng.uniform(0.0, 1.0) < 0.01 {
                        row.push(None);
                        continue;
                    }
                    let t = (year - 2017) as f64;
                    let noise = rng.uniform(0.97, 1.03);
                    let v = base * scale * (1.0 + growth).powf(t) * noise;
                    row.push(Some((v * 100.0).round() / 100.0));
                }
            }
            row
        })
        .collect();

    WideTable {
        columns,
        entities: entities.iter().map(|e| e.to_string()).collect(),
        values,
    }
}

fn write_csv(table: &WideTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV")?;
    writer.write_record(&table.columns)?;
    for (entity, row) in table.entities.iter().zip(&table.values) {
        let mut record = vec![entity.clone()];
        record.extend(row.iter().map(|v| v.map(|v| v.to_string()).unwrap_or_default()));
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_parquet(table: &WideTable, path: &Path) -> Result<()> {
    let mut fields = vec![Field::new(&table.columns[0], DataType::Utf8, false)];
    fields.extend(
        table.columns[1..]
            .iter()
            .map(|c| Field::new(c, DataType::Float64, true)),
    );
    let schema = Arc::new(Schema::new(fields));

    let mut arrays: Vec<ArrayRef> = vec![Arc::new(StringArray::from(table.entities.clone()))];
    for col in 0..table.columns.len() - 1 {
        let column: Float64Array = table.values.iter().map(|row| row[col]).collect();
        arrays.push(Arc::new(column));
    }

    let batch = RecordBatch::try_new(schema.clone(), arrays).context("building record batch")?;
    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);
    for (stem, entity_column, entities) in [
        ("Combined_State", "State", &STATES[..]),
        ("Combined_Metro", "Metro", &METROS[..]),
    ] {
        let table = build(entity_column, entities, &mut rng);
        for ext in ["csv", "parquet"] {
            let path = out_dir.join(format!("{stem}.{ext}"));
            let written = match ext {
                "csv" => write_csv(&table, &path),
                _ => write_parquet(&table, &path),
            };
            written.with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        println!(
            "{stem}: {} entities x {} measurement columns",
            table.entities.len(),
            table.columns.len() - 1
        );
    }
    Ok(())
}
