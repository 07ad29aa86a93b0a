use crate::writer::ResponseWriter;
use flate2::{Compress, Compression, Crc, FlushCompress, Status};
use std::io;

const OUTPUT_BUFFER_SIZE: usize = 8 * 1024; // 8KB output buffer

// `GzEncoder` cannot be reset for reuse, so the member framing is written here.
/// Member header: magic, CM=deflate, no flags, zero mtime, no XFL, OS unknown.
const GZIP_HEADER: [u8; 10] = [0x1f, 0x8b, 0x08, 0, 0, 0, 0, 0, 0, 0xff];

/// A resettable gzip encoder.
///
/// The encoder owns no sink; every call receives the writer the compressed
/// bytes go to, which lets one instance serve many requests in turn.
pub struct GzipStream {
    compress: Compress,
    crc: Crc,
    output_buffer: Vec<u8>,
    header_written: bool,
}

impl GzipStream {
    pub(crate) fn new(level: Compression) -> Self {
        Self {
            compress: Compress::new(level, false),
            crc: Crc::new(),
            output_buffer: Vec::with_capacity(OUTPUT_BUFFER_SIZE),
            header_written: false,
        }
    }

    /// Returns the stream to the state of a freshly created one.
    pub(crate) fn reset(&mut self) {
        self.compress.reset();
        self.crc.reset();
        self.output_buffer.clear();
        self.header_written = false;
    }

    /// Compresses all of `input`, writing whatever the encoder emits to `sink`.
    pub(crate) fn write<W>(&mut self, mut input: &[u8], sink: &mut W) -> io::Result<()>
    where
        W: ResponseWriter + ?Sized,
    {
        self.write_header(sink)?;
        self.crc.update(input);

        while !input.is_empty() {
            self.output_buffer.clear();
            let before = self.compress.total_in();
            self.compress
                .compress_vec(input, &mut self.output_buffer, FlushCompress::None)?;
            let consumed = (self.compress.total_in() - before) as usize;
            input = &input[consumed..];

            if !self.output_buffer.is_empty() {
                sink.write_all(&self.output_buffer)?;
            } else if consumed == 0 {
                return Err(io::Error::other("deflate made no progress"));
            }
        }

        Ok(())
    }

    /// Pushes everything compressed so far out to `sink`.
    pub(crate) fn flush<W>(&mut self, sink: &mut W) -> io::Result<()>
    where
        W: ResponseWriter + ?Sized,
    {
        self.write_header(sink)?;

        self.output_buffer.clear();
        self.compress
            .compress_vec(&[], &mut self.output_buffer, FlushCompress::Sync)?;
        loop {
            sink.write_all(&self.output_buffer)?;
            self.output_buffer.clear();
            let before = self.compress.total_out();
            self.compress
                .compress_vec(&[], &mut self.output_buffer, FlushCompress::None)?;
            if before == self.compress.total_out() {
                return Ok(());
            }
        }
    }

    /// Ends the member: remaining deflate output followed by the trailer.
    pub(crate) fn finish<W>(&mut self, sink: &mut W) -> io::Result<()>
    where
        W: ResponseWriter + ?Sized,
    {
        self.write_header(sink)?;

        loop {
            self.output_buffer.clear();
            let status =
                self.compress
                    .compress_vec(&[], &mut self.output_buffer, FlushCompress::Finish)?;
            sink.write_all(&self.output_buffer)?;
            if status == Status::StreamEnd {
                break;
            }
        }

        let mut trailer = [0u8; 8];
        trailer[..4].copy_from_slice(&self.crc.sum().to_le_bytes());
        trailer[4..].copy_from_slice(&self.crc.amount().to_le_bytes());
        sink.write_all(&trailer)
    }

    fn write_header<W>(&mut self, sink: &mut W) -> io::Result<()>
    where
        W: ResponseWriter + ?Sized,
    {
        if !self.header_written {
            sink.write_all(&GZIP_HEADER)?;
            self.header_written = true;
        }
        Ok(())
    }
}

impl std::fmt::Debug for GzipStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GzipStream")
            .field("total_in", &self.compress.total_in())
            .field("total_out", &self.compress.total_out())
            .field("header_written", &self.header_written)
            .finish()
    }
}
