use std::io::{
    BufRead,
    Write
};

use tracing::debug;

use crate::console::consoleerror::ConsoleError;
use crate::console::tokenreader::TokenReader;
use crate::math::interval::Interval;

pub const LEFT_BORDER_PROMPT: &str = "Enter interval's left border:";
pub const RIGHT_BORDER_PROMPT: &str = "Enter interval's right border:";

// ─────────────────────────────────────────────────────────────────────────────
// IntervalReader
// ─────────────────────────────────────────────────────────────────────────────
//
// Prompt, read, check, in this order:
//
//   1. left parses          -> InvalidLeftBorder
//   2. left >= 0            -> DomainError
//   3. right parses         -> InvalidRightBorder
//   4. right <= π           -> DomainError
//   5. left <= right        -> DomainError
//
// The right prompt is written only after the left border passed 1 and 2.

#[derive(Clone, Copy)]
enum Border {
    Left,
    Right
}

impl Border {
    fn invalid(self) -> ConsoleError {
        match self {
            Border::Left => ConsoleError::InvalidLeftBorder,
            Border::Right => ConsoleError::InvalidRightBorder,
        }
    }
}

pub struct IntervalReader<'a, R, W> {
    tokens: TokenReader<R>,
    output: &'a mut W
}

impl<'a, R: BufRead, W: Write> IntervalReader<'a, R, W> {
    pub fn new(input: R, output: &'a mut W) -> IntervalReader<'a, R, W> {
        IntervalReader { tokens: TokenReader::new(input), output }
    }

    pub fn read_interval(&mut self) -> Result<Interval, ConsoleError> {
        self.prompt(LEFT_BORDER_PROMPT)?;
        let left = self.read_border(Border::Left)?;
        let left = Interval::check_left_border(left)?;
        debug!(left, "left border accepted");

        self.prompt(RIGHT_BORDER_PROMPT)?;
        let right = self.read_border(Border::Right)?;
        let interval = Interval::new(left, right)?;
        debug!(left, right, "interval accepted");
        Ok(interval)
    }

    fn prompt(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text).map_err(ConsoleError::WriteError)?;
        self.output.flush().map_err(ConsoleError::WriteError)
    }

    fn read_border(&mut self, border: Border) -> Result<f64, ConsoleError> {
        let token = self
            .tokens
            .next_token()
            .map_err(ConsoleError::ReadError)?
            .ok_or_else(|| border.invalid())?;
        let token = std::str::from_utf8(&token).map_err(|error| {
            debug!(%error, "border is not valid UTF-8");
            border.invalid()
        })?;
        token.parse::<f64>().map_err(|error| {
            debug!(%token, %error, "border is not a number");
            border.invalid()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::interval::IntervalError;
    use std::io::Cursor;

    fn read(input: &str) -> (Result<Interval, ConsoleError>, String) {
        read_bytes(input.as_bytes())
    }

    fn read_bytes(input: &[u8]) -> (Result<Interval, ConsoleError>, String) {
        let mut output = Vec::new();
        let result = IntervalReader::new(Cursor::new(input.to_vec()), &mut output).read_interval();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn reads_both_borders() {
        let (result, output) = read("0.3\n2.9\n");
        let interval = result.unwrap();
        assert_eq!((interval.left(), interval.right()), (0.3, 2.9));
        assert_eq!(output, format!("{}\n{}\n", LEFT_BORDER_PROMPT, RIGHT_BORDER_PROMPT));
    }

    #[test]
    fn borders_on_one_line() {
        let (result, _) = read("0 1.5");
        assert_eq!(result.unwrap().right(), 1.5);
    }

    #[test]
    fn negative_left_skips_right_prompt() {
        let (result, output) = read("-0.1\n1.0\n");
        assert!(matches!(
            result,
            Err(ConsoleError::DomainError(IntervalError::NegativeLeftBorder(_)))
        ));
        assert_eq!(output, format!("{}\n", LEFT_BORDER_PROMPT));
    }

    #[test]
    fn unparsable_left() {
        let (result, output) = read("abc 1.0");
        assert!(matches!(result, Err(ConsoleError::InvalidLeftBorder)));
        assert!(!output.contains(RIGHT_BORDER_PROMPT));
    }

    #[test]
    fn missing_left() {
        let (result, _) = read("");
        assert!(matches!(result, Err(ConsoleError::InvalidLeftBorder)));
    }

    #[test]
    fn trailing_non_utf8_byte_is_never_read() {
        let (result, output) = read_bytes(b"0 1 \xff\n");
        let interval = result.unwrap();
        assert_eq!((interval.left(), interval.right()), (0.0, 1.0));
        assert_eq!(output, format!("{}\n{}\n", LEFT_BORDER_PROMPT, RIGHT_BORDER_PROMPT));
    }

    #[test]
    fn non_utf8_left_is_an_input_error() {
        let (result, output) = read_bytes(b"\xff 1\n");
        let error = result.unwrap_err();
        assert!(matches!(error, ConsoleError::InvalidLeftBorder));
        assert_eq!(error.to_string(), "cannot read left border");
        assert!(!output.contains(RIGHT_BORDER_PROMPT));
    }

    #[test]
    fn non_utf8_right_is_an_input_error() {
        let (result, _) = read_bytes(b"0.5\n\xfe\xff\n");
        assert!(matches!(result, Err(ConsoleError::InvalidRightBorder)));
    }

    #[test]
    fn unparsable_right() {
        let (result, _) = read("0.5\n1.5x\n");
        assert!(matches!(result, Err(ConsoleError::InvalidRightBorder)));
    }

    #[test]
    fn missing_right() {
        let (result, output) = read("0.5\n");
        assert!(matches!(result, Err(ConsoleError::InvalidRightBorder)));
        assert!(output.contains(RIGHT_BORDER_PROMPT));
    }

    #[test]
    fn right_above_pi() {
        let (result, _) = read("0 4.0");
        assert!(matches!(
            result,
            Err(ConsoleError::DomainError(IntervalError::RightBorderAbovePi(_)))
        ));
    }

    #[test]
    fn reversed_borders() {
        let (result, _) = read("2 1");
        assert!(matches!(
            result,
            Err(ConsoleError::DomainError(IntervalError::RightBorderBelowLeft { .. }))
        ));
    }

    struct BrokenOutput;

    impl Write for BrokenOutput {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_prompt_write() {
        let mut output = BrokenOutput;
        let result = IntervalReader::new(Cursor::new("0 1"), &mut output).read_interval();
        assert!(matches!(result, Err(ConsoleError::WriteError(_))));
    }
}
