//! Simulated obtained marks.
//!
//! Each grade owns a closed percentage band of the total marks. The band is
//! floored into whole marks and then clamped against the passing threshold so
//! a failing grade always lands below passing and any other grade lands at or
//! above it. The random pick is delegated to a [`RandomSource`] so the band
//! arithmetic can be tested on its own.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Grade;

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Pick an integer in `min..=max`. Callers guarantee `min <= max`.
    fn pick_inclusive(&mut self, min: u32, max: u32) -> u32;
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub const fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<StdRng> {
    /// Reproducible source for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_inclusive(&mut self, min: u32, max: u32) -> u32 {
        self.0.random_range(min..=max)
    }
}

/// Percentage band of total marks, as ratios in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MarksBand {
    pub min_ratio: f64,
    pub max_ratio: f64,
}

impl MarksBand {
    /// Band used for a letter outside the grade table.
    pub const FALLBACK: Self = Self::new(0.50, 0.74);

    const fn new(min_ratio: f64, max_ratio: f64) -> Self {
        Self {
            min_ratio,
            max_ratio,
        }
    }

    #[must_use]
    pub const fn for_grade(grade: Grade) -> Self {
        match grade {
            Grade::APlus => Self::new(0.90, 1.00),
            Grade::A => Self::new(0.81, 0.89),
            Grade::BPlus => Self::new(0.73, 0.80),
            Grade::B => Self::new(0.65, 0.72),
            Grade::CPlus => Self::new(0.60, 0.64),
            Grade::C => Self::new(0.55, 0.59),
            Grade::CMinus => Self::new(0.50, 0.54),
            Grade::F => Self::new(0.00, 0.49),
        }
    }

    /// Band for a raw grade letter, falling back to [`MarksBand::FALLBACK`].
    #[must_use]
    pub fn for_label(label: &str) -> Self {
        Grade::parse(label).map_or(Self::FALLBACK, Self::for_grade)
    }
}

/// Inclusive range of obtained marks consistent with a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ObtainedRange {
    pub min: u32,
    pub max: u32,
}

impl ObtainedRange {
    /// Draw one value from the range.
    pub fn pick(self, random: &mut dyn RandomSource) -> u32 {
        if self.min == self.max {
            return self.min;
        }
        random.pick_inclusive(self.min, self.max)
    }
}

/// Range of obtained marks for a grade letter.
///
/// Only the exact letter `F` takes the failing branch; unknown letters use the
/// fallback band and are treated as passing.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn obtained_range_for_label(label: &str, total_marks: u32, passing_marks: u32) -> ObtainedRange {
    let band = MarksBand::for_label(label);
    let total = i64::from(total_marks);
    let passing = i64::from(passing_marks);

    let mut min = ((band.min_ratio * f64::from(total_marks)).floor() as i64).max(0);
    let mut max = ((band.max_ratio * f64::from(total_marks)).floor() as i64).min(total);

    if label.trim() == Grade::F.as_str() {
        max = max.min(passing - 1);
        if max < 0 {
            return ObtainedRange { min: 0, max: 0 };
        }
        min = min.min(max);
    } else {
        min = min.max(passing);
        if max < min {
            max = min;
        }
    }

    ObtainedRange {
        min: min as u32,
        max: max as u32,
    }
}

/// Range of obtained marks for a known grade.
#[must_use]
pub fn obtained_range(grade: Grade, total_marks: u32, passing_marks: u32) -> ObtainedRange {
    obtained_range_for_label(grade.as_str(), total_marks, passing_marks)
}

/// Simulate the obtained marks for a subject.
pub fn simulate_obtained(
    grade: Grade,
    total_marks: u32,
    passing_marks: u32,
    random: &mut dyn RandomSource,
) -> u32 {
    obtained_range(grade, total_marks, passing_marks).pick(random)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// Always returns one end of the requested range.
    struct Edge {
        high: bool,
    }

    impl RandomSource for Edge {
        fn pick_inclusive(&mut self, min: u32, max: u32) -> u32 {
            if self.high { max } else { min }
        }
    }

    #[rstest]
    #[case(Grade::APlus, 100, 50, 90, 100)]
    #[case(Grade::A, 100, 50, 81, 89)]
    #[case(Grade::CMinus, 100, 50, 50, 54)]
    #[case(Grade::F, 100, 50, 0, 49)]
    #[case(Grade::A, 50, 25, 40, 44)]
    #[case(Grade::APlus, 50, 25, 45, 50)]
    fn band_ranges(
        #[case] grade: Grade,
        #[case] total: u32,
        #[case] passing: u32,
        #[case] min: u32,
        #[case] max: u32,
    ) {
        assert_eq!(obtained_range(grade, total, passing), ObtainedRange { min, max });
    }

    #[test]
    fn failing_grade_is_capped_below_passing() {
        // band max would be 49, passing threshold pulls it to 29
        assert_eq!(
            obtained_range(Grade::F, 100, 30),
            ObtainedRange { min: 0, max: 29 }
        );
    }

    #[test]
    fn failing_grade_with_zero_passing_returns_zero() {
        assert_eq!(
            obtained_range(Grade::F, 100, 0),
            ObtainedRange { min: 0, max: 0 }
        );
    }

    #[test]
    fn passing_grade_is_raised_to_threshold() {
        // band is 65..=72 but passing is 95: collapse to the threshold
        assert_eq!(
            obtained_range(Grade::B, 100, 95),
            ObtainedRange { min: 95, max: 95 }
        );
        // band is 50..=54 and passing 52 lifts only the lower bound
        assert_eq!(
            obtained_range(Grade::CMinus, 100, 52),
            ObtainedRange { min: 52, max: 54 }
        );
    }

    #[test]
    fn unknown_label_uses_fallback_band() {
        assert_eq!(MarksBand::for_label("D"), MarksBand::FALLBACK);
        assert_eq!(
            obtained_range_for_label("D", 100, 50),
            ObtainedRange { min: 50, max: 74 }
        );
    }

    #[test]
    fn pick_respects_both_ends() {
        let range = obtained_range(Grade::BPlus, 100, 50);
        assert_eq!(range.pick(&mut Edge { high: false }), 73);
        assert_eq!(range.pick(&mut Edge { high: true }), 80);
    }

    #[test]
    fn simulated_marks_agree_with_grade() {
        let mut random = RngSource::seeded(7);
        for _ in 0..200 {
            for grade in Grade::ALL {
                for (total, passing) in [(100, 50), (50, 25), (75, 40)] {
                    let obtained = simulate_obtained(grade, total, passing, &mut random);
                    if grade.is_failing() {
                        assert!(obtained < passing, "{grade} gave {obtained}");
                    } else {
                        assert!(obtained >= passing, "{grade} gave {obtained}");
                        assert!(obtained <= total, "{grade} gave {obtained}");
                    }
                }
            }
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        let first: Vec<u32> = (0..10).map(|_| a.pick_inclusive(0, 100)).collect();
        let second: Vec<u32> = (0..10).map(|_| b.pick_inclusive(0, 100)).collect();
        assert_eq!(first, second);
    }
}
