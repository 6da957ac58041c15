//! Monte Carlo estimate of π

use crate::automaton::seed::RandomSource;
use crate::core::error::{LifeError, Result};

/// Area of the sampling square [-1, 1] × [-1, 1]
const SQUARE_AREA: f64 = 4.0;

/// Estimate π from `samples` uniform points in the square [-1, 1]²
///
/// Counts the points that fall inside the unit circle (x² + y² ≤ 1) and
/// scales the hit ratio by the area of the square.
pub fn estimate_pi<S: RandomSource + ?Sized>(samples: u64, rng: &mut S) -> Result<f64> {
    if samples == 0 {
        return Err(LifeError::InvalidArgument(
            "pi estimation needs at least one sample".into(),
        ));
    }

    let mut hits: u64 = 0;
    for _ in 0..samples {
        let x = -1.0 + 2.0 * rng.next_unit();
        let y = -1.0 + 2.0 * rng.next_unit();
        if x * x + y * y <= 1.0 {
            hits += 1;
        }
    }

    Ok(SQUARE_AREA * (hits as f64 / samples as f64))
}
