use std::num::NonZeroU32;

use crate::math::interval::{
    Interval,
    Segment
};
use crate::math::quadrature::quadraturerule::QuadratureRule;

// ─────────────────────────────────────────────────────────────────────────────
// CompositeIntegrator
// ─────────────────────────────────────────────────────────────────────────────
//
// Splits an interval into `subdivisions` equal segments and sums a rule over
// them:
//
//   step  = (R - L) / n
//   seg_i = [L + i·step, L + (i+1)·step],  i = 0..n
//
// Boundaries are computed from `i` directly (no running sum), so every rule
// integrated with the same integrator sees bit-identical segments. A zero
// count cannot be expressed.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeIntegrator {
    subdivisions: NonZeroU32
}

impl CompositeIntegrator {
    pub fn new(subdivisions: NonZeroU32) -> CompositeIntegrator {
        CompositeIntegrator { subdivisions }
    }

    pub fn partition(&self, interval: &Interval) -> impl Iterator<Item = Segment> {
        let n = self.subdivisions.get();
        let left = interval.left();
        let step = interval.width() / n as f64;
        (0..n).map(move |i| Segment::new(left + i as f64 * step, left + (i + 1) as f64 * step))
    }

    pub fn integrate(&self, interval: &Interval, rule: &dyn QuadratureRule) -> f64 {
        self.partition(interval)
            .map(|segment| rule.estimate(segment))
            .sum()
    }
}
