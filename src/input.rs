//! Input generation and parsing at the user-facing boundary.
//!
//! Random sequences are reproducible when a seed is given. Custom arrays and
//! comparison size lists arrive as comma-separated text; anything malformed
//! becomes [`SortError::InvalidConfiguration`].

use crate::error::{Result, SortError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::RangeInclusive;

/// Value range used for animated runs
pub const DISPLAY_VALUE_RANGE: RangeInclusive<i64> = 1..=100;
/// Value range used for comparison runs
pub const COMPARISON_VALUE_RANGE: RangeInclusive<i64> = 1..=1000;
/// Largest size accepted in a comparison size list
pub const MAX_COMPARISON_SIZE: usize = 10_000;

/// Generate `len` values uniformly from `range`.
///
/// With a seed the output is fully deterministic; without one it draws from
/// OS entropy.
pub fn random_sequence(len: usize, range: RangeInclusive<i64>, seed: Option<u64>) -> Vec<i64> {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    generate_with(&mut rng, len, range)
}

/// Generate `len` values from an existing RNG.
pub fn generate_with<R: Rng>(rng: &mut R, len: usize, range: RangeInclusive<i64>) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Parse a comma-separated list of integers, e.g. `"5, 3, 8,1"`.
///
/// Blank entries are skipped. At least one value is required.
pub fn parse_custom_array(text: &str) -> Result<Vec<i64>> {
    let values = text
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|_| {
                SortError::InvalidConfiguration(format!(
                    "'{token}' is not an integer; enter numbers separated by commas"
                ))
            })
        })
        .collect::<Result<Vec<i64>>>()?;

    if values.is_empty() {
        return Err(SortError::InvalidConfiguration(
            "enter numbers separated by commas".to_string(),
        ));
    }
    Ok(values)
}

/// Parse and validate a comparison size list such as `"100,500,1000"`.
///
/// Every size must be in `1..=MAX_COMPARISON_SIZE`.
pub fn parse_sizes(text: &str) -> Result<Vec<usize>> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SortError::InvalidConfiguration(
            "no sizes provided".to_string(),
        ));
    }

    let sizes = text
        .split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<usize>().map_err(|_| {
                SortError::InvalidConfiguration(format!("'{token}' is not a valid size"))
            })
        })
        .collect::<Result<Vec<usize>>>()?;

    validate_sizes(&sizes)?;
    Ok(sizes)
}

/// Check that a size list is non-empty and every size is within bounds.
pub fn validate_sizes(sizes: &[usize]) -> Result<()> {
    if sizes.is_empty() {
        return Err(SortError::InvalidConfiguration(
            "no valid sizes provided".to_string(),
        ));
    }
    if sizes.contains(&0) {
        return Err(SortError::InvalidConfiguration(
            "array sizes must be positive".to_string(),
        ));
    }
    if sizes.iter().any(|&size| size > MAX_COMPARISON_SIZE) {
        return Err(SortError::InvalidConfiguration(format!(
            "array sizes must not exceed {MAX_COMPARISON_SIZE}"
        )));
    }
    Ok(())
}
