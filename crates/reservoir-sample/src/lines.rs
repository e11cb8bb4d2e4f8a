//! Splitting a byte stream into batches of complete lines.

use std::io::{self, BufRead};

use rand::RngCore;
use reservoir_core::{Capacity, Sampler, SamplerState};
use tracing::debug;

/// Iterator over batches of at most `batch_lines` lines.
///
/// Lines are split on `\n` only; the terminator is stripped and any `\r`
/// is kept. Invalid UTF-8 is replaced rather than rejected. A trailing line
/// with no terminator is still yielded once the reader reaches EOF.
#[derive(Debug)]
pub struct LineBatches<R> {
    reader: R,
    batch_lines: usize,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> LineBatches<R> {
    /// Batches lines from `reader`. `batch_lines` is clamped to at least one.
    pub fn new(reader: R, batch_lines: usize) -> Self {
        Self {
            reader,
            batch_lines: batch_lines.max(1),
            buf: Vec::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for LineBatches<R> {
    type Item = io::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut batch = Vec::with_capacity(self.batch_lines.min(1024));
        while batch.len() < self.batch_lines {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    break;
                }
                Ok(_) => {
                    if self.buf.last() == Some(&b'\n') {
                        self.buf.pop();
                    }
                    batch.push(String::from_utf8_lossy(&self.buf).into_owned());
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
        if batch.is_empty() {
            None
        } else {
            Some(Ok(batch))
        }
    }
}

/// Reads `reader` to the end and returns the reservoir over all of its lines.
pub fn sample_reader<R, G>(
    reader: R,
    capacity: Capacity,
    batch_lines: usize,
    sampler: &mut Sampler<G>,
) -> io::Result<SamplerState<String>>
where
    R: BufRead,
    G: RngCore,
{
    let mut state = SamplerState::new(capacity);
    for (index, batch) in LineBatches::new(reader, batch_lines).enumerate() {
        let batch = batch?;
        let lines = batch.len();
        state = sampler.update(state, batch);
        debug!(
            batch = index,
            lines,
            seen = state.seen_count(),
            "folded batch"
        );
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn groups_lines_into_bounded_batches() {
        let input = Cursor::new("a\nb\nc\nd\ne\n");
        let batches: Vec<Vec<String>> = LineBatches::new(input, 2)
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(batches, vec![vec!["a", "b"], vec!["c", "d"], vec!["e"]]);
    }

    #[test]
    fn keeps_empty_lines_and_unterminated_tail() {
        let input = Cursor::new("x\n\ny");
        let lines: Vec<String> = LineBatches::new(input, 10)
            .flat_map(|batch| batch.unwrap())
            .collect();
        assert_eq!(lines, vec!["x", "", "y"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(LineBatches::new(Cursor::new(""), 4).count(), 0);
    }
}
