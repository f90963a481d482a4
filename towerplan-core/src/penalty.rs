//! Penalty weights applied to overlapping towers.

/// Exponential penalty charged per tower.
///
/// A tower with `k` other towers inside the penalty radius costs
/// `base * exp(growth * k)`.
///
/// # Examples
/// ```
/// use towerplan_core::PenaltyModel;
///
/// let model = PenaltyModel::default();
/// assert_eq!(model.tower_penalty(0), 170.0);
/// assert!(model.tower_penalty(2) > model.tower_penalty(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PenaltyModel {
    /// Cost of an isolated tower.
    pub base: f64,
    /// Exponential growth per overlapping neighbour.
    pub growth: f64,
}

impl PenaltyModel {
    /// Base cost used by the scoring rules.
    pub const BASE: f64 = 170.0;
    /// Growth rate used by the scoring rules.
    pub const GROWTH: f64 = 0.17;

    /// Penalty for a single tower with `overlaps` neighbours in range.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the penalty is an exponential in the overlap count"
    )]
    pub fn tower_penalty(&self, overlaps: usize) -> f64 {
        let count = f64::from(u32::try_from(overlaps).unwrap_or(u32::MAX));
        self.base * (self.growth * count).exp()
    }
}

impl Default for PenaltyModel {
    fn default() -> Self {
        Self {
            base: Self::BASE,
            growth: Self::GROWTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 170.0)]
    #[case(1, 201.501_824_7)]
    #[case(2, 238.841_090_4)]
    fn matches_reference_values(#[case] overlaps: usize, #[case] expected: f64) {
        let penalty = PenaltyModel::default().tower_penalty(overlaps);
        assert!((penalty - expected).abs() < 1e-6, "got {penalty}");
    }

    #[rstest]
    fn zero_growth_is_flat() {
        let model = PenaltyModel {
            base: 10.0,
            growth: 0.0,
        };
        assert_eq!(model.tower_penalty(7), 10.0);
    }
}
