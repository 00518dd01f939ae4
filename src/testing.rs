//! Testing helpers.

use assert_float_eq::*;
use tinyrand::Rand;
use tinyrand_alloc::Mock;

/// The generator output that [crate::sampler::random_f64] maps to `value`, for any `value` in
/// [0, 1) representable with 53 bits of mantissa.
pub fn roll(value: f64) -> u64 {
    debug_assert!((0.0..1.0).contains(&value), "roll {value} out of range");
    ((value * (1u64 << 53) as f64) as u64) << 11
}

/// A generator that yields the given uniform draws in order, and panics if asked for more.
pub fn scripted(values: &[f64]) -> impl Rand {
    let rolls: Vec<_> = values.iter().map(|&value| roll(value) as u128).collect();
    Mock::default().with_next_u128(move |state| {
        let invocation = state.next_u128_invocations() as usize;
        assert!(
            invocation < rolls.len(),
            "scripted generator exhausted after {} draws",
            rolls.len()
        );
        rolls[invocation]
    })
}

pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::random_f64;

    #[test]
    fn scripted_yields_draws_in_order() {
        let mut rand = scripted(&[0.25, 0.0, 0.75]);
        assert_eq!(0.25, random_f64(&mut rand));
        assert_eq!(0.0, random_f64(&mut rand));
        assert_eq!(0.75, random_f64(&mut rand));
    }

    #[test]
    #[should_panic(expected = "scripted generator exhausted after 1 draws")]
    fn scripted_panics_when_exhausted() {
        let mut rand = scripted(&[0.5]);
        random_f64(&mut rand);
        random_f64(&mut rand);
    }
}
