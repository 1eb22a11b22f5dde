#![no_std]

//! `TextBuffer`: a growable byte buffer for building formatted text.
//!
//! Bytes are appended through a single write position and consumed through a
//! single read position. Formatted output can optionally be followed by a NUL
//! terminator so the contents can be handed out as a C string; the
//! terminator is not counted as content and the next write replaces it.
//!
//! ```
//! # use textbuf::TextBuffer;
//! let mut buffer = TextBuffer::new();
//! buffer.write_formatted(format_args!("{} + {}", 1, 2)).unwrap();
//! buffer.write_terminated(format_args!(" = {}", 3)).unwrap();
//!
//! assert_eq!(buffer.as_bytes(), b"1 + 2 = 3");
//! assert_eq!(buffer.as_c_str().unwrap().to_bytes(), b"1 + 2 = 3");
//! assert_eq!(buffer.read(), Some(b'1'));
//! assert_eq!(buffer.peek(), Some(b' '));
//! ```

extern crate alloc;

mod error;

use alloc::vec::Vec;
use core::ffi::CStr;
use core::fmt;

pub use error::TextBufferError;

/// Bytes reserved up front and added on top of every growth request.
pub const REALLOC_AMOUNT: usize = 2000;

#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    data: Vec<u8>,
    read_index: usize,
    terminated: bool,
}

impl TextBuffer {
    /// Creates an empty buffer with [`REALLOC_AMOUNT`] bytes reserved.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(REALLOC_AMOUNT),
            read_index: 0,
            terminated: false,
        }
    }

    /// Number of content bytes, not counting a pending terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len() - usize::from(self.terminated)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the next unread byte and advances the read position.
    pub fn read(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.read_index += 1;
        Some(byte)
    }

    /// Returns the next unread byte without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.as_bytes().get(self.read_index).copied()
    }

    /// Reserves room for `additional` more bytes.
    ///
    /// # Errors
    ///
    /// Returns `TextBufferError::AllocationFailed` if the allocation is refused.
    pub fn extend(&mut self, additional: usize) -> Result<(), TextBufferError> {
        self.data
            .try_reserve_exact(additional)
            .map_err(|_| TextBufferError::AllocationFailed {
                requested: additional,
            })
    }

    fn ensure_room(&mut self, additional: usize) -> Result<(), TextBufferError> {
        if self.data.capacity() - self.data.len() < additional {
            self.extend(additional.saturating_add(REALLOC_AMOUNT))?;
        }
        Ok(())
    }

    fn drop_terminator(&mut self) {
        if self.terminated {
            self.data.pop();
            self.terminated = false;
        }
    }

    /// Appends one byte.
    ///
    /// # Errors
    ///
    /// Returns `TextBufferError::AllocationFailed` if the buffer cannot grow.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), TextBufferError> {
        self.write_bytes(&[byte])
    }

    /// Appends `bytes`.
    ///
    /// # Errors
    ///
    /// Returns `TextBufferError::AllocationFailed` if the buffer cannot grow.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), TextBufferError> {
        self.drop_terminator();
        self.ensure_room(bytes.len())?;
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Appends formatted text without a terminator.
    ///
    /// # Errors
    ///
    /// - `TextBufferError::AllocationFailed` if the buffer cannot grow
    /// - `TextBufferError::Format` if a formatted value reports an error
    pub fn write_formatted(&mut self, args: fmt::Arguments<'_>) -> Result<(), TextBufferError> {
        let mut sink = FormatSink {
            buffer: self,
            error: None,
        };
        match fmt::write(&mut sink, args) {
            Ok(()) => Ok(()),
            Err(_) => Err(sink.error.unwrap_or(TextBufferError::Format)),
        }
    }

    /// Appends formatted text followed by a NUL terminator.
    ///
    /// # Errors
    ///
    /// Same as [`write_formatted`](TextBuffer::write_formatted).
    pub fn write_terminated(&mut self, args: fmt::Arguments<'_>) -> Result<(), TextBufferError> {
        self.write_formatted(args)?;
        self.ensure_room(1)?;
        self.data.push(0);
        self.terminated = true;
        Ok(())
    }

    /// Content bytes, not including a pending terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len()]
    }

    /// Start of the raw storage, terminator included if one is pending.
    ///
    /// The pointer is valid until the next write.
    #[must_use]
    pub fn as_ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    /// Contents up to the first NUL byte as a C string.
    ///
    /// # Errors
    ///
    /// Returns `TextBufferError::MissingTerminator` if no NUL byte is stored.
    pub fn as_c_str(&self) -> Result<&CStr, TextBufferError> {
        CStr::from_bytes_until_nul(&self.data).map_err(|_| TextBufferError::MissingTerminator)
    }
}

/// Keeps the first buffer error, since `fmt::Error` carries no details.
struct FormatSink<'a> {
    buffer: &'a mut TextBuffer,
    error: Option<TextBufferError>,
}

impl fmt::Write for FormatSink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.write_bytes(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}

impl fmt::Write for TextBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

impl embedded_io::ErrorType for TextBuffer {
    type Error = TextBufferError;
}

impl embedded_io::Write for TextBuffer {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
