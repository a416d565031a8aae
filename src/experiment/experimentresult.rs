use std::fmt;
use std::num::NonZeroU32;

/// Both estimates for one subdivision count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentResult {
    subdivisions: NonZeroU32,
    rectangle_estimate: f64,
    simpson_estimate: f64
}

impl ExperimentResult {
    pub fn new(subdivisions: NonZeroU32, rectangle_estimate: f64, simpson_estimate: f64) -> ExperimentResult {
        ExperimentResult { subdivisions, rectangle_estimate, simpson_estimate }
    }

    pub fn subdivisions(&self) -> NonZeroU32 {
        self.subdivisions
    }

    pub fn rectangle_estimate(&self) -> f64 {
        self.rectangle_estimate
    }

    pub fn simpson_estimate(&self) -> f64 {
        self.simpson_estimate
    }

    pub fn rectangle_error(&self, exact: f64) -> f64 {
        (self.rectangle_estimate - exact).abs()
    }

    pub fn simpson_error(&self, exact: f64) -> f64 {
        (self.simpson_estimate - exact).abs()
    }
}

/// `<n> <rectangle:.5> <simpson:.5>`
impl fmt::Display for ExperimentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.5} {:.5}", self.subdivisions, self.rectangle_estimate, self.simpson_estimate)
    }
}
