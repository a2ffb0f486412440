/*!
 * Reading the referee stream: whitespace-delimited integers, line breaks not significant.
 */

use std::collections::VecDeque;
use std::convert::TryFrom;
use std::io::BufRead;

use anyhow::Result;

use crate::Submission;

/// Pulls integers one at a time from a line-oriented source.
pub struct TokenReader<R> {
    input: R,
    buf: String,
    line_no: usize,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        TokenReader { input, buf: String::new(), line_no: 0, pending: VecDeque::new() }
    }

    /// Returns next integer, or `None` when input is exhausted.
    /// Blocks until a whole line is available.
    pub fn next_int(&mut self) -> Result<Option<Submission>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return match token.parse::<Submission>() {
                    Ok(v) => Ok(Some(v)),
                    Err(e) => bail!("Error at input line number {}: token {:?}: {}", self.line_no, token, e),
                };
            }
            self.buf.clear();
            match self.input.read_line(&mut self.buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.line_no += 1;
                    self.pending.extend(self.buf.split_whitespace().map(str::to_owned));
                },
                Err(e) => bail!("Error at input line number {}: {}", self.line_no + 1, e),
            }
        }
    }

    /// Number of lines read so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

/// Game parameters sent once by the referee before the first round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setup {
    /// Submissions per round (player count, own submission included).
    pub n: usize,
    /// Highest allowed submission; lowest is always 1.
    pub k: Submission,
    /// Win modulus. Not used by any policy.
    pub w: Submission,
    /// Own player index. Not used by any policy.
    pub j: Submission,
}

impl Setup {
    /// Reads and validates `n k w j`.
    pub fn read<R: BufRead>(reader: &mut TokenReader<R>) -> Result<Self> {
        let mut values = [0 as Submission; 4];
        for (i, v) in values.iter_mut().enumerate() {
            match reader.next_int()? {
                Some(x) => *v = x,
                None => bail!("Incomplete setup: input ended after {} of 4 values (n k w j)", i),
            }
        }
        let [n, k, w, j] = values;
        Self::create(n, k, w, j)
    }

    /// Validates raw setup values.
    pub fn create(n: Submission, k: Submission, w: Submission, j: Submission) -> Result<Self> {
        if n < 0 {
            bail!("Invalid setup: negative submissions count n={}", n);
        }
        if k < 1 {
            bail!("Invalid setup: upper bound k={} leaves no allowed submission", k);
        }
        let n = usize::try_from(n).map_err(|e| anyhow!("Invalid setup: n={}: {}", n, e))?;
        Ok(Setup { n, k, w, j })
    }
}
