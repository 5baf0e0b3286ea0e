use std::ops::Range;
use std::path::Path;

use derive_setters::Setters;
use tracing::debug;

use crate::encoding::Encoding;
use crate::error::{Error, PathContext, Result};
use crate::primitive::{FsPrimitive, OpenMode};

/// Parameters of an exact-length read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Setters)]
pub struct ExactRead {
    /// Number of bytes that must be read
    length: usize,

    /// Buffer to read into. When absent one of exactly `length` bytes is
    /// allocated.
    #[setters(strip_option)]
    buffer: Option<Vec<u8>>,

    /// Where in the buffer the bytes are written
    offset: usize,

    /// Where in the file reading starts
    position: u64,

    /// Decode the buffer into text instead of returning raw bytes
    #[setters(strip_option)]
    encoding: Option<Encoding>,
}

impl ExactRead {
    pub fn new(length: usize) -> Self {
        Self { length, ..Default::default() }
    }
}

/// Result of an exact read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutput {
    Bytes(Vec<u8>),
    Text(String),
}

impl ReadOutput {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            ReadOutput::Bytes(bytes) => bytes,
            ReadOutput::Text(text) => text.as_bytes(),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            ReadOutput::Bytes(bytes) => bytes,
            ReadOutput::Text(text) => text.into_bytes(),
        }
    }

    /// The decoded text, if the read was given an encoding.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ReadOutput::Text(text) => Some(text),
            ReadOutput::Bytes(_) => None,
        }
    }
}

impl<P: FsPrimitive> crate::Fsx<P> {
    /// Reads exactly `request.length` bytes from `path`.
    ///
    /// The file is opened, read at `position` into the buffer at `offset`,
    /// and closed again whether or not the read succeeded. Fewer bytes than
    /// requested is an error ([`Error::ShortRead`]), never a truncated
    /// buffer. With an encoding the whole buffer is returned decoded.
    pub async fn exact_read<T: AsRef<Path>>(
        &self,
        path: T,
        request: ExactRead,
    ) -> Result<ReadOutput> {
        let path = path.as_ref();
        let ExactRead { length, buffer, offset, position, encoding } = request;

        let capacity = buffer.as_ref().map_or(length, Vec::len);
        let end = offset
            .checked_add(length)
            .filter(|end| *end <= capacity)
            .ok_or(Error::BufferOverflow { offset, length, capacity })?;

        let mut handle = self.open(path, OpenMode::Read).await?;
        let read = self
            .read_window(path, &mut handle, buffer, offset..end, position)
            .await;
        let closed = self.primitive.close(handle).await;

        let (buffer, bytes_read) = read?;
        closed.path_context(path, Error::Close)?;

        if bytes_read != length {
            return Err(Error::ShortRead {
                path: path.to_path_buf(),
                expected: length,
                actual: bytes_read,
            });
        }

        debug!(path = %path.display(), length, position, "Exact read completed");

        Ok(match encoding {
            Some(encoding) => ReadOutput::Text(encoding.decode(&buffer)),
            None => ReadOutput::Bytes(buffer),
        })
    }

    /// Reads into `window` of the buffer. Without a caller buffer the file
    /// size is checked first so a regular file too short for the request is
    /// reported as a short read before anything is allocated.
    async fn read_window(
        &self,
        path: &Path,
        handle: &mut P::Handle,
        buffer: Option<Vec<u8>>,
        window: Range<usize>,
        position: u64,
    ) -> Result<(Vec<u8>, usize)> {
        let length = window.len();
        let mut buffer = match buffer {
            Some(buffer) => buffer,
            None => {
                let stat = self.stat(path).await?;
                let available =
                    usize::try_from(stat.len.saturating_sub(position)).unwrap_or(usize::MAX);
                if stat.is_file() && available < length {
                    return Ok((Vec::new(), available));
                }
                vec![0; length]
            }
        };

        let bytes_read = self
            .primitive
            .read(handle, &mut buffer[window], position)
            .await
            .path_context(path, Error::Read)?;
        Ok((buffer, bytes_read))
    }

    /// Reads exactly `length` bytes starting at `position`.
    pub async fn exact_read_bytes<T: AsRef<Path>>(
        &self,
        path: T,
        length: usize,
        position: u64,
    ) -> Result<Vec<u8>> {
        self.exact_read(path, ExactRead::new(length).position(position))
            .await
            .map(ReadOutput::into_bytes)
    }
}
