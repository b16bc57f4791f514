//! Tabular arrays: TOON's headline feature for uniform record arrays.
//!
//! Run with: cargo run --example tabular_arrays

use serde::Serialize;
use std::error::Error;
use toon_codec::to_string;

#[derive(Serialize)]
struct Reading {
    sensor: String,
    celsius: f64,
    ok: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let readings: Vec<Reading> = (0..5)
        .map(|i| Reading {
            sensor: format!("probe{}", i),
            celsius: 19.5 + f64::from(i),
            ok: i != 3,
        })
        .collect();

    let toon = to_string(&readings)?;
    let json = serde_json::to_string(&readings)?;

    println!("TOON ({} bytes):\n{}\n", toon.len(), toon);
    println!("JSON ({} bytes):\n{}\n", json.len(), json);
    println!(
        "The field names appear once in the header instead of once per record,\n\
         which is where the token savings come from."
    );

    Ok(())
}
