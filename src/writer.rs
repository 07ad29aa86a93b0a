use http::{HeaderMap, StatusCode};
use std::io;

/// The capability set a host server exposes to handlers for one response.
///
/// Headers may be changed until [`write_header`](Self::write_header) commits
/// the status line. Writing body bytes before that commits an implicit
/// `200 OK`. Optional capabilities are exposed through
/// [`flusher`](Self::flusher) and [`unwrap_writer`](Self::unwrap_writer);
/// writers that lack them keep the default `None`.
pub trait ResponseWriter {
    /// Returns the response headers.
    fn headers(&self) -> &HeaderMap;

    /// Returns the response headers for modification.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Commits the status line and the current headers.
    fn write_header(&mut self, status: StatusCode);

    /// Writes body bytes, returning how many were accepted.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;

    /// Writes the whole buffer.
    fn write_all(&mut self, mut buf: &[u8]) -> io::Result<()> {
        while !buf.is_empty() {
            match self.write(buf) {
                Ok(0) => return Err(io::ErrorKind::WriteZero.into()),
                Ok(n) => buf = &buf[n..],
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Returns the flush capability, if this writer has one.
    fn flusher(&mut self) -> Option<&mut dyn Flusher> {
        None
    }

    /// Returns the writer this one decorates, if any.
    fn unwrap_writer(&mut self) -> Option<&mut dyn ResponseWriter> {
        None
    }
}

/// Pushes buffered response bytes to the client immediately.
pub trait Flusher {
    /// Flushes buffered output.
    fn flush(&mut self) -> io::Result<()>;
}

impl<W: ResponseWriter + ?Sized> ResponseWriter for &mut W {
    fn headers(&self) -> &HeaderMap {
        (**self).headers()
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        (**self).headers_mut()
    }

    fn write_header(&mut self, status: StatusCode) {
        (**self).write_header(status)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        (**self).write_all(buf)
    }

    fn flusher(&mut self) -> Option<&mut dyn Flusher> {
        (**self).flusher()
    }

    fn unwrap_writer(&mut self) -> Option<&mut dyn ResponseWriter> {
        (**self).unwrap_writer()
    }
}

impl<W: ResponseWriter + ?Sized> ResponseWriter for Box<W> {
    fn headers(&self) -> &HeaderMap {
        (**self).headers()
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        (**self).headers_mut()
    }

    fn write_header(&mut self, status: StatusCode) {
        (**self).write_header(status)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        (**self).write_all(buf)
    }

    fn flusher(&mut self) -> Option<&mut dyn Flusher> {
        (**self).flusher()
    }

    fn unwrap_writer(&mut self) -> Option<&mut dyn ResponseWriter> {
        (**self).unwrap_writer()
    }
}
