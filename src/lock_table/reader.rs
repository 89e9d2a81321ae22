//! Lazy, single-pass reader over a lock table stream.

use super::{LockRecord, parse_line};
use crate::error::{LslocksError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// Iterator of [`LockRecord`]s pulled line by line from a lock table.
///
/// Nothing is buffered beyond the current line. The first error (a malformed
/// line or a failed read) is yielded once and ends the iteration.
#[derive(Debug)]
pub struct LockTableReader<R> {
    lines: Lines<R>,
    line_number: usize,
    done: bool,
}

impl LockTableReader<BufReader<File>> {
    /// Open the lock table at `path`.
    ///
    /// The file is owned by the returned reader and closes when it is
    /// dropped, whether or not it was read to the end.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LslocksError::LockTableUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LockTableReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for LockTableReader<R> {
    type Item = Result<LockRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            self.line_number += 1;
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(source) => {
                    self.done = true;
                    return Some(Err(LslocksError::LockTableRead {
                        line_number: self.line_number,
                        source,
                    }));
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            let record = parse_line(&line, self.line_number);
            if record.is_err() {
                self.done = true;
            }
            return Some(record);
        }
    }
}
