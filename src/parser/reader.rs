//! Streaming line reader for trace files.

use std::io::{self, BufRead};

/// Iterator over the lines of a trace, without their terminators.
///
/// Unlike `BufRead::lines`, invalid UTF-8 is replaced rather than treated
/// as a read error: function arguments in traces routinely contain
/// arbitrary bytes.
pub struct TraceLineReader<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: BufRead> TraceLineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(8192),
        }
    }
}

impl<R: BufRead> Iterator for TraceLineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.inner.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
