use crate::math::interval::Segment;
use crate::math::quadrature::quadraturerule::QuadratureRule;

/// Simpson's rule: `(b - a) / 6 * (sin(a) + 4 sin((a + b) / 2) + sin(b))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpsonRule;

impl QuadratureRule for SimpsonRule {
    fn name(&self) -> &'static str {
        "simpson"
    }

    fn estimate(&self, segment: Segment) -> f64 {
        segment.width() / 6.0
            * (segment.start().sin() + 4.0 * segment.midpoint().sin() + segment.end().sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn single_segment_matches_formula() {
        let expected = 2.6 / 6.0 * (0.3_f64.sin() + 4.0 * 1.6_f64.sin() + 2.9_f64.sin());
        assert_relative_eq!(
            SimpsonRule.estimate(Segment::new(0.3, 2.9)),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn half_period_in_one_segment() {
        // π/6 * (0 + 4 + 0)
        assert_relative_eq!(
            SimpsonRule.estimate(Segment::new(0.0, PI)),
            2.0 * PI / 3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn zero_width_segment() {
        assert_eq!(SimpsonRule.estimate(Segment::new(0.7, 0.7)), 0.0);
    }
}
