use std::num::NonZeroU32;

use tracing::debug;

use crate::experiment::experimentresult::ExperimentResult;
use crate::math::integrator::CompositeIntegrator;
use crate::math::interval::Interval;
use crate::math::quadrature::quadraturerule::QuadratureRule;
use crate::math::quadrature::rectanglerule::RectangleRule;
use crate::math::quadrature::simpsonrule::SimpsonRule;

/// Runs the rectangle and Simpson rules side by side at each resolution.
pub struct ExperimentRunner {
    rectangle_rule: RectangleRule,
    simpson_rule: SimpsonRule
}

impl ExperimentRunner {
    pub fn new() -> ExperimentRunner {
        ExperimentRunner { rectangle_rule: RectangleRule, simpson_rule: SimpsonRule }
    }

    pub fn run_single(&self, interval: &Interval, subdivisions: NonZeroU32) -> ExperimentResult {
        let integrator = CompositeIntegrator::new(subdivisions);
        let rectangle_estimate = integrator.integrate(interval, &self.rectangle_rule);
        let simpson_estimate = integrator.integrate(interval, &self.simpson_rule);
        let result = ExperimentResult::new(subdivisions, rectangle_estimate, simpson_estimate);
        let exact = interval.exact_integral();
        debug!(
            subdivisions = subdivisions.get(),
            rule = self.rectangle_rule.name(),
            estimate = rectangle_estimate,
            error = result.rectangle_error(exact),
            "experiment estimate"
        );
        debug!(
            subdivisions = subdivisions.get(),
            rule = self.simpson_rule.name(),
            estimate = simpson_estimate,
            error = result.simpson_error(exact),
            "experiment estimate"
        );
        result
    }

    /// One result per count, in the order given.
    pub fn run(&self, interval: &Interval, subdivisions: &[NonZeroU32]) -> Vec<ExperimentResult> {
        subdivisions
            .iter()
            .map(|&n| self.run_single(interval, n))
            .collect()
    }

    pub fn format(results: &[ExperimentResult]) -> Vec<String> {
        results.iter().map(|result| result.to_string()).collect()
    }
}

impl Default for ExperimentRunner {
    fn default() -> ExperimentRunner {
        ExperimentRunner::new()
    }
}
