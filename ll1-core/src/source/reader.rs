//! Narrow source over any [`std::io::Read`]
//!
//! Holds exactly one byte of lookahead. Buffering is the reader's business,
//! wrap files in a `BufReader`.

use std::io::{self, ErrorKind, Read};

use tracing::warn;

use crate::source::InputSource;

/// Byte source over a reader
///
/// The first I/O error ends the source. It is kept so the caller can tell a
/// clean end of input from a failed read.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    /// `Some(None)` once the end has been seen
    peeked: Option<Option<u8>>,
    error: Option<io::Error>,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            peeked: None,
            error: None,
        }
    }

    /// Error that ended the source, if any
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Take the error that ended the source, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Unwrap the reader. A byte held as lookahead is lost.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn fill(&mut self) -> Option<u8> {
        if let Some(peeked) = self.peeked {
            return peeked;
        }
        let mut byte = [0u8; 1];
        let next = loop {
            match self.reader.read(&mut byte) {
                Ok(0) => break None,
                Ok(_) => break Some(byte[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!(error = %e, "read failed, treating as end of input");
                    self.error = Some(e);
                    break None;
                }
            }
        };
        self.peeked = Some(next);
        next
    }
}

impl<R: Read> InputSource for ReaderSource<R> {
    type Char = u8;

    fn look_ahead(&mut self) -> Option<u8> {
        self.fill()
    }

    fn read(&mut self) -> Option<u8> {
        let next = self.fill();
        // end stays sticky
        if next.is_some() {
            self.peeked = None;
        }
        next
    }
}
