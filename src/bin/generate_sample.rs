use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Box-Muller transform for normally distributed feature noise.
fn gauss(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let u1 = rng.gen::<f64>().max(1e-15);
    let u2 = rng.gen::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);

    // Deliberately imbalanced strata so the proportion chart is interesting.
    let species: Vec<(&str, usize, f64, f64)> = vec![
        // (label, count, mean petal length, mean petal width)
        ("setosa", 60, 1.4, 0.2),
        ("versicolor", 30, 4.3, 1.3),
        ("virginica", 10, 5.5, 2.0),
    ];
    let sites = ["north", "south"];

    let mut all_species: Vec<String> = Vec::new();
    let mut all_length: Vec<f64> = Vec::new();
    let mut all_width: Vec<f64> = Vec::new();
    let mut all_site: Vec<String> = Vec::new();
    let mut all_id: Vec<i64> = Vec::new();

    let mut row_id: i64 = 0;
    for &(label, count, mean_length, mean_width) in &species {
        for _ in 0..count {
            all_species.push(label.to_string());
            all_length.push(gauss(&mut rng, mean_length, 0.3).max(0.1));
            all_width.push(gauss(&mut rng, mean_width, 0.1).max(0.05));
            all_site.push(sites[rng.gen_range(0..sites.len())].to_string());
            all_id.push(row_id);
            row_id += 1;
        }
    }

    // Build Arrow arrays
    let species_array = StringArray::from(
        all_species.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
    );
    let length_array = Float64Array::from(all_length);
    let width_array = Float64Array::from(all_width);
    let site_array = StringArray::from(
        all_site.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
    );
    let id_array = Int64Array::from(all_id);

    let schema = Arc::new(Schema::new(vec![
        Field::new("species", DataType::Utf8, false),
        Field::new("petal_length", DataType::Float64, false),
        Field::new("petal_width", DataType::Float64, false),
        Field::new("site", DataType::Utf8, false),
        Field::new("measurement_id", DataType::Int64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(species_array),
            Arc::new(length_array),
            Arc::new(width_array),
            Arc::new(site_array),
            Arc::new(id_array),
        ],
    )
    .context("creating RecordBatch")?;

    // Write Parquet
    let output_path = "sample_data.parquet";
    let file = std::fs::File::create(output_path).context("creating output file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing writer")?;

    println!("Wrote {row_id} labeled rows to {output_path}");
    Ok(())
}
