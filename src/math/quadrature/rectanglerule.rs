use crate::math::interval::Segment;
use crate::math::quadrature::quadraturerule::QuadratureRule;

/// Midpoint rectangle rule: `(b - a) * sin((a + b) / 2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleRule;

impl QuadratureRule for RectangleRule {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn estimate(&self, segment: Segment) -> f64 {
        segment.width() * segment.midpoint().sin()
    }
}
