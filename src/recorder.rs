use crate::writer::{Flusher, ResponseWriter};
use bytes::{Bytes, BytesMut};
use http::header::AsHeaderName;
use http::{HeaderMap, Response, StatusCode};
use http_body_util::Full;
use std::io;
use tracing::warn;

/// An in-memory [`ResponseWriter`].
///
/// Records what a handler writes so it can be inspected or turned into an
/// [`http::Response`]. Headers are snapshotted when the status is committed,
/// like a real transport would send them; later changes to the live map are
/// not part of the recorded response.
#[derive(Debug, Default)]
pub struct ResponseRecorder {
    headers: HeaderMap,
    committed: Option<(StatusCode, HeaderMap)>,
    body: BytesMut,
    flushes: usize,
}

impl ResponseRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the committed status, if any.
    pub fn status(&self) -> Option<StatusCode> {
        self.committed.as_ref().map(|(status, _)| *status)
    }

    /// Returns a header of the recorded response as a string.
    ///
    /// Reads the committed headers, or the live ones if nothing was committed.
    pub fn header<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.recorded_headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
    }

    /// Returns the recorded headers.
    pub fn recorded_headers(&self) -> &HeaderMap {
        match &self.committed {
            Some((_, headers)) => headers,
            None => &self.headers,
        }
    }

    /// Returns the body bytes written so far.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns how many times the recorder was flushed.
    pub fn flushes(&self) -> usize {
        self.flushes
    }

    /// Converts the recording into a response.
    ///
    /// A recorder that was never written to yields an empty `200 OK`.
    pub fn into_response(self) -> Response<Full<Bytes>> {
        let (status, headers) = self
            .committed
            .unwrap_or((StatusCode::OK, self.headers));

        let mut response = Response::new(Full::new(self.body.freeze()));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        response
    }
}

impl ResponseWriter for ResponseRecorder {
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write_header(&mut self, status: StatusCode) {
        if let Some((committed, _)) = &self.committed {
            warn!(%committed, %status, "superfluous write_header call");
            return;
        }
        self.committed = Some((status, self.headers.clone()));
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.committed.is_none() {
            self.write_header(StatusCode::OK);
        }
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flusher(&mut self) -> Option<&mut dyn Flusher> {
        Some(self)
    }
}

impl Flusher for ResponseRecorder {
    fn flush(&mut self) -> io::Result<()> {
        if self.committed.is_none() {
            self.write_header(StatusCode::OK);
        }
        self.flushes += 1;
        Ok(())
    }
}
