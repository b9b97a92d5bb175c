//! Line splitting for fetched word lists.

use std::io::{self, BufRead};

/// Iterator over the lines of a reader.
///
/// Splits on `\n` and strips one trailing `\r`. A trailing newline does not
/// produce a final empty line, but an empty line in the middle does. Bytes
/// that are not UTF-8 are replaced with U+FFFD, so such a line never
/// validates as a word.
pub struct Lines<R> {
    inner: io::Split<R>,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: reader.split(b'\n'),
        }
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut bytes = match self.inner.next()? {
            Ok(b) => b,
            Err(e) => return Some(Err(e)),
        };
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        let line = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };
        Some(Ok(line))
    }
}
