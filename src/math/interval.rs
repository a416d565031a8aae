use std::f64::consts::PI;

use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// IntervalError
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum IntervalError {
    #[error("left border must be non-negative (got {0})")]
    NegativeLeftBorder(f64),
    #[error("right border must not exceed π (got {0})")]
    RightBorderAbovePi(f64),
    #[error("right border must exceed left border (left {left}, right {right})")]
    RightBorderBelowLeft { left: f64, right: f64 },
}

// ─────────────────────────────────────────────────────────────────────────────
// Interval
// ─────────────────────────────────────────────────────────────────────────────

/// Integration domain of sine, `0 <= left <= right <= π`.
///
/// Only constructible through [`Interval::new`], so every instance holds the
/// invariant. Comparisons are negated so NaN borders are rejected too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    left: f64,
    right: f64
}

impl Interval {
    pub fn new(left: f64, right: f64) -> Result<Interval, IntervalError> {
        let left = Interval::check_left_border(left)?;
        if !(right <= PI) {
            return Err(IntervalError::RightBorderAbovePi(right));
        }
        if !(left <= right) {
            return Err(IntervalError::RightBorderBelowLeft { left, right });
        }
        Ok(Interval { left, right })
    }

    /// Lets a reader reject the left border before it asks for the right one.
    pub fn check_left_border(left: f64) -> Result<f64, IntervalError> {
        if !(left >= 0.0) {
            return Err(IntervalError::NegativeLeftBorder(left));
        }
        Ok(left)
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Closed form of ∫ sin over the interval.
    pub fn exact_integral(&self) -> f64 {
        self.left.cos() - self.right.cos()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Segment
// ─────────────────────────────────────────────────────────────────────────────

/// Sub-interval handed to a quadrature rule. Not validated: rounding in the
/// partition may push `end` a few ulps past the parent interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: f64,
    end: f64
}

impl Segment {
    pub fn new(start: f64, end: f64) -> Segment {
        Segment { start, end }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}
