//! Trial-and-error format detection for streams with no file name to go by.

use log::debug;
use std::io::{self, BufReader, Read};

use crate::error::{Result, ShortcutError};
use crate::format::ShortcutFormat;

/// Default number of bytes retained for rewinding between attempts.
pub const DEFAULT_TRIAL_BUFFER_SIZE: usize = 8192;

/// Smallest read buffer handed to a parser; enough to peek one whole UTF-8 character.
const MIN_READ_BUFFER: usize = 4;

/// Formats tried, in order. `Website` shares the `Url` grammar so it is not tried on its own.
/// `Webloc` buffers the whole remaining stream, so it goes last.
const CANDIDATES: [ShortcutFormat; 3] = [
    ShortcutFormat::Url,
    ShortcutFormat::Desktop,
    ShortcutFormat::Webloc,
];

/// A reader that remembers up to `capacity` bytes read since the last [`mark`](Self::mark), so
/// that it can be rewound to that point.
///
/// Once more than `capacity` bytes have been read past the mark, the retained bytes are dropped
/// and [`rewind`](Self::rewind) fails with [`ShortcutError::BufferTooSmall`].
pub struct RewindReader<R> {
    inner: R,
    capacity: usize,
    retained: Vec<u8>,
    replay_pos: usize,
    overflowed: bool,
}

impl<R: Read> RewindReader<R> {
    pub fn new(inner: R, capacity: usize) -> Self {
        Self {
            inner,
            capacity,
            retained: Vec::new(),
            replay_pos: 0,
            overflowed: false,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Make the current position the point that [`rewind`](Self::rewind) returns to.
    pub fn mark(&mut self) {
        self.retained.drain(..self.replay_pos);
        self.replay_pos = 0;
        self.overflowed = false;
    }

    pub fn rewind(&mut self) -> Result<()> {
        if self.overflowed {
            return Err(ShortcutError::BufferTooSmall {
                capacity: self.capacity,
            });
        }
        self.replay_pos = 0;
        Ok(())
    }
}

impl<R: Read> Read for RewindReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.replay_pos < self.retained.len() {
            let pending = &self.retained[self.replay_pos..];
            let n = pending.len().min(buf.len());
            buf[..n].copy_from_slice(&pending[..n]);
            self.replay_pos += n;
            return Ok(n);
        }

        let n = self.inner.read(buf)?;
        if !self.overflowed {
            if self.retained.len() + n <= self.capacity {
                self.retained.extend_from_slice(&buf[..n]);
                self.replay_pos = self.retained.len();
            } else {
                self.overflowed = true;
                self.retained.clear();
                self.replay_pos = 0;
            }
        }
        Ok(n)
    }
}

/// Read the URL from a stream of unknown shortcut type, trying each format in turn.
///
/// The stream is read once and is not closed. See
/// [`read_url_trial_and_error_with_capacity`] for details.
pub fn read_url_trial_and_error<R: Read>(reader: R) -> Result<String> {
    read_url_trial_and_error_with_capacity(reader, DEFAULT_TRIAL_BUFFER_SIZE)
}

/// Like [`read_url_trial_and_error`], retaining up to `capacity` bytes for rewinding.
///
/// A candidate that reads more than `capacity` bytes before failing makes the stream impossible
/// to rewind; this is reported as [`ShortcutError::BufferTooSmall`] rather than as an
/// unrecognized format, since the remaining candidates never got a fair attempt.
///
/// Parsers always read through a buffer of at least four bytes, so that the first character of
/// the stream can be inspected whole.
pub fn read_url_trial_and_error_with_capacity<R: Read>(
    reader: R,
    capacity: usize,
) -> Result<String> {
    let mut stream = RewindReader::new(reader, capacity);
    let buffer_size = capacity.max(MIN_READ_BUFFER);

    for (index, format) in CANDIDATES.into_iter().enumerate() {
        stream.mark();
        debug!("trying to read stream as {format}");

        let attempt = format.parse(BufReader::with_capacity(buffer_size, &mut stream));
        let err = match attempt {
            Ok(url) => {
                debug!("stream recognized as {format}");
                return Ok(url);
            }
            Err(err) if err.is_fatal_for_trial() => return Err(err),
            Err(err) => err,
        };

        debug!("{format} attempt failed: {err}");
        if index + 1 < CANDIDATES.len() {
            stream.rewind()?;
        }
    }

    Err(ShortcutError::UnrecognizedFormat)
}
