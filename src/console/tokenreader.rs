use std::collections::VecDeque;
use std::io::{
    self,
    BufRead
};

/// Yields whitespace-separated tokens from a line-oriented source.
///
/// Lines are pulled only when the pending tokens run out, so a prompt can be
/// written between two reads even when both values sit on one line. Tokens
/// stay raw bytes; decoding is left to the caller, so a stray non-UTF-8 byte
/// only spoils its own token.
pub struct TokenReader<R> {
    source: R,
    pending: VecDeque<Vec<u8>>
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(source: R) -> TokenReader<R> {
        TokenReader { source, pending: VecDeque::new() }
    }

    /// `Ok(None)` once the source is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<Vec<u8>>> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            if self.source.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                line.split(|byte| byte.is_ascii_whitespace())
                    .filter(|token| !token.is_empty())
                    .map(<[u8]>::to_vec)
            );
        }
        Ok(self.pending.pop_front())
    }
}
