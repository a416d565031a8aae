use crate::math::interval::Segment;

/// Estimate of ∫ sin over a single segment.
pub trait QuadratureRule {
    fn name(&self) -> &'static str;

    fn estimate(&self, segment: Segment) -> f64;
}
