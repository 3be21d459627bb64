//! Demonstration driver for the bignumber crate.
//!
//! Progressively sets bits on a fresh value and prints the low bit window
//! after each step, then exercises the parse pipeline with random and
//! deliberately malformed numerals. No library logic lives here.

use bignumber::{Float128, NumeralError};
use log::{error, info};
use rand::Rng;

/// Highest bit index of the printed low-bit window.
const WINDOW: usize = 50;

/// Renders magnitude bits `high` down to 0 inclusive, most significant first.
fn low_bits(value: &Float128, high: usize) -> String {
    (0..=high)
        .rev()
        .map(|i| if value.bit(i) { '1' } else { '0' })
        .collect()
}

fn random_hex_numeral(rng: &mut impl Rng, len: usize) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    (0..len).map(|_| HEX[rng.random_range(0..16)] as char).collect()
}

fn report(label: &str, result: Result<Float128, NumeralError>) {
    match result {
        Ok(value) => {
            info!("{label}: parsed");
            println!(
                "{label}\n  hex: {}\n  bin: {}",
                value
                    .to_string_radix(16)
                    .expect("base 16 is always renderable"),
                value
                    .to_string_radix(2)
                    .expect("base 2 is always renderable"),
            );
        }
        Err(e) => {
            error!("{label}: {e}");
            println!("{label}\n  rejected: {e}");
        }
    }
}

fn main() {
    env_logger::init();

    let mut value = Float128::new();
    info!("filling the low {WINDOW} bits one by one");
    for i in 0..WINDOW {
        value.set_bit(i, true);
        println!("{}", low_bits(&value, WINDOW));
    }

    let ones = Float128::all_one();
    println!(
        "all-one pattern: {}",
        ones.to_string_radix(16)
            .expect("base 16 is always renderable")
    );

    let mut rng = rand::rng();
    let numeral = random_hex_numeral(&mut rng, 32);
    report(&format!("random hex numeral {numeral:?}"), Float128::from_str_radix(&numeral, 16));

    report("malformed numeral \"12G3\"", Float128::from_str_radix("12G3", 16));
    report(
        "oversized numeral (33 hex digits)",
        Float128::from_str_radix(&random_hex_numeral(&mut rng, 33), 16),
    );
    report("decimal numeral \"--12,5\"", Float128::from_str_radix("--12,5", 10));
}
