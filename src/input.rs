use std::io::BufRead;

use crate::error::TranslateError;

/// Reads one decimal logical address per line.
///
/// Lines are trimmed and blank lines are skipped. A line that is not an
/// integer, or not valid UTF-8, yields a recoverable
/// [`TranslateError::Malformed`]; a failing reader yields
/// [`TranslateError::Input`].
pub struct AddressReader<R> {
    reader: R,
    line_number: usize,
    buffer: Vec<u8>,
}

impl<R: BufRead> AddressReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            buffer: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for AddressReader<R> {
    type Item = Result<i64, TranslateError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();
            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => self.line_number += 1,
                Err(e) => return Some(Err(TranslateError::Input(e))),
            }
            let line = match std::str::from_utf8(&self.buffer) {
                Ok(line) => line.trim(),
                Err(_) => {
                    return Some(Err(TranslateError::Malformed {
                        line_number: self.line_number,
                        text: String::from_utf8_lossy(&self.buffer).trim().to_string(),
                    }))
                }
            };
            if line.is_empty() {
                continue;
            }
            let parsed = line.parse::<i64>().map_err(|_| TranslateError::Malformed {
                line_number: self.line_number,
                text: line.to_string(),
            });
            return Some(parsed);
        }
    }
}
