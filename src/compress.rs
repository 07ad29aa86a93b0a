use crate::pool::GzipPool;
use crate::sniff::detect_content_type;
use crate::stream::GzipStream;
use crate::writer::{Flusher, ResponseWriter};
use http::{HeaderMap, HeaderValue, StatusCode, header};
use std::fmt;
use std::io;
use tracing::{trace, warn};

/// Default minimum body size for compression.
///
/// Responses declaring a smaller `Content-Length` are sent as-is.
pub const DEFAULT_MIN_SIZE: usize = 1000;

/// Per-response compression decision.
#[derive(Debug)]
enum Decision {
    /// Nothing has forced a choice yet.
    Undecided,
    /// Bytes go straight to the real writer.
    Skipping,
    /// Bytes go through a pooled encoder.
    Compressing(GzipStream),
}

/// A [`ResponseWriter`] that gzips the body when the response allows it.
///
/// The decision is made once, when the status is committed or the first body
/// bytes are written, whichever comes first. Until then headers set by the
/// handler are left alone. When compressing, `Content-Encoding: gzip` is set
/// and `Content-Length` removed before the status line goes out.
///
/// [`close`](Self::close) must run when the handler is done; it writes the gzip
/// trailer and returns the encoder to the pool. Dropping an unclosed writer
/// closes it and logs any error.
pub struct GzipResponseWriter<'a> {
    inner: &'a mut dyn ResponseWriter,
    pool: &'a GzipPool,
    min_size: usize,
    decision: Decision,
    wrote_header: bool,
}

impl<'a> GzipResponseWriter<'a> {
    /// Wraps `inner`, borrowing encoders from `pool`.
    pub fn new(inner: &'a mut dyn ResponseWriter, pool: &'a GzipPool) -> Self {
        Self {
            inner,
            pool,
            min_size: DEFAULT_MIN_SIZE,
            decision: Decision::Undecided,
            wrote_header: false,
        }
    }

    /// Sets the minimum declared `Content-Length` worth compressing.
    pub fn min_size(mut self, size: usize) -> Self {
        self.min_size = size;
        self
    }

    /// Returns whether the body is being compressed.
    pub fn is_compressing(&self) -> bool {
        matches!(self.decision, Decision::Compressing(_))
    }

    /// Returns a reference to the real writer.
    pub fn get_ref(&self) -> &dyn ResponseWriter {
        &*self.inner
    }

    /// Finishes the gzip stream and returns its encoder to the pool.
    ///
    /// Does nothing when the body was not compressed. Calling it more than once
    /// is harmless. An encoder that failed to finish is discarded rather than
    /// pooled.
    pub fn close(&mut self) -> io::Result<()> {
        let mut stream = match std::mem::replace(&mut self.decision, Decision::Skipping) {
            Decision::Compressing(stream) => stream,
            other => {
                self.decision = other;
                return Ok(());
            }
        };

        stream.finish(&mut *self.inner)?;
        let flushed = flush_inner(&mut *self.inner);
        self.pool.release(stream);
        flushed
    }

    /// Runs the skip rules and switches to the chosen mode.
    fn decide(&mut self) {
        if !matches!(self.decision, Decision::Undecided) {
            return;
        }

        if let Some(reason) = skip_reason(self.inner.headers(), self.min_size) {
            trace!(reason, "not compressing response");
            self.decision = Decision::Skipping;
            return;
        }

        trace!("compressing response");
        let headers = self.inner.headers_mut();
        headers.insert(header::CONTENT_ENCODING, HeaderValue::from_static("gzip"));
        headers.remove(header::CONTENT_LENGTH);
        self.decision = Decision::Compressing(self.pool.acquire());
    }
}

impl ResponseWriter for GzipResponseWriter<'_> {
    fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        self.inner.headers_mut()
    }

    fn write_header(&mut self, status: StatusCode) {
        let first = !self.wrote_header;
        self.wrote_header = true;
        // Only the first commit may touch headers.
        if first && !is_bodiless_status(status) {
            self.decide();
        }
        self.inner.write_header(status);
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.wrote_header {
            if content_type(self.inner.headers()).is_none() {
                let sniffed = detect_content_type(buf);
                self.inner
                    .headers_mut()
                    .insert(header::CONTENT_TYPE, HeaderValue::from_static(sniffed));
            }
            self.write_header(StatusCode::OK);
        }

        match &mut self.decision {
            Decision::Compressing(stream) => {
                stream.write(buf, &mut *self.inner)?;
                Ok(buf.len())
            }
            Decision::Skipping => self.inner.write(buf),
            Decision::Undecided => {
                // Status already committed without a decision; headers are final.
                self.decision = Decision::Skipping;
                self.inner.write(buf)
            }
        }
    }

    fn flusher(&mut self) -> Option<&mut dyn Flusher> {
        Some(self)
    }

    fn unwrap_writer(&mut self) -> Option<&mut dyn ResponseWriter> {
        Some(&mut *self.inner)
    }
}

impl Flusher for GzipResponseWriter<'_> {
    fn flush(&mut self) -> io::Result<()> {
        // Flushing commits the status, so decide first.
        if !self.wrote_header {
            self.write_header(StatusCode::OK);
        }
        if let Decision::Compressing(stream) = &mut self.decision {
            stream.flush(&mut *self.inner)?;
        }
        flush_inner(&mut *self.inner)
    }
}

impl Drop for GzipResponseWriter<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!(error = %e, "failed to finish gzip response");
        }
    }
}

impl fmt::Debug for GzipResponseWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GzipResponseWriter")
            .field("min_size", &self.min_size)
            .field("decision", &self.decision)
            .field("wrote_header", &self.wrote_header)
            .finish_non_exhaustive()
    }
}

fn flush_inner(inner: &mut dyn ResponseWriter) -> io::Result<()> {
    match inner.flusher() {
        Some(flusher) => flusher.flush(),
        None => Ok(()),
    }
}

/// Statuses whose commit does not trigger the decision.
fn is_bodiless_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::NO_CONTENT | StatusCode::NOT_MODIFIED | StatusCode::PARTIAL_CONTENT
    )
}

/// Returns why the response must not be compressed, or `None` to compress.
fn skip_reason(headers: &HeaderMap, min_size: usize) -> Option<&'static str> {
    if has_content_range(headers) {
        Some("range response")
    } else if has_content_encoding(headers) {
        Some("already encoded")
    } else if is_below_min_size(headers, min_size) {
        Some("below minimum size")
    } else if is_uncompressible_content_type(headers) {
        Some("uncompressible content type")
    } else {
        None
    }
}

/// Checks if Content-Range header is present (range response).
fn has_content_range(headers: &HeaderMap) -> bool {
    headers.contains_key(header::CONTENT_RANGE)
}

/// Checks if Content-Encoding header is already present.
fn has_content_encoding(headers: &HeaderMap) -> bool {
    headers.contains_key(header::CONTENT_ENCODING)
}

/// Checks if Content-Length is below the minimum size.
fn is_below_min_size(headers: &HeaderMap, min_size: usize) -> bool {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok())
        .is_some_and(|len| len < min_size)
}

/// Checks if a declared content type rules out compression.
///
/// An absent Content-Type does not; it is sniffed from the body instead.
fn is_uncompressible_content_type(headers: &HeaderMap) -> bool {
    content_type(headers).is_some_and(|v| !v.to_str().is_ok_and(is_compressible_content_type))
}

/// Returns the declared Content-Type; an empty value counts as undeclared.
fn content_type(headers: &HeaderMap) -> Option<&HeaderValue> {
    headers.get(header::CONTENT_TYPE).filter(|v| !v.is_empty())
}

/// Returns whether a body of the given media type is worth compressing.
///
/// Text, JSON, JavaScript and XML types compress well, as do SVG images and
/// WOFF fonts. Parameters such as `charset` are ignored.
pub fn is_compressible_content_type(content_type: &str) -> bool {
    let essence = match content_type.parse::<mime::Mime>() {
        Ok(mime) => mime.essence_str().to_ascii_lowercase(),
        Err(_) => content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase(),
    };

    if essence.starts_with("text/") {
        return true;
    }
    if let Some(subtype) = essence.strip_prefix("application/") {
        return subtype.contains("json") || subtype.contains("javascript") || subtype.contains("xml");
    }
    matches!(essence.as_str(), "image/svg+xml" | "font/woff" | "font/woff2")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::ResponseRecorder;
    use flate2::read::GzDecoder;
    use std::io::Read;

    const HELLO: &str = "Hello, world!\n";

    fn content() -> String {
        HELLO.repeat(DEFAULT_MIN_SIZE / HELLO.len() + 1)
    }

    fn gunzip(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        GzDecoder::new(data).read_to_end(&mut out).unwrap();
        out
    }

    /// A writer with neither optional capability.
    struct BareWriter {
        headers: HeaderMap,
        status: Option<StatusCode>,
        body: Vec<u8>,
    }

    impl BareWriter {
        fn new() -> Self {
            Self {
                headers: HeaderMap::new(),
                status: None,
                body: Vec::new(),
            }
        }
    }

    impl ResponseWriter for BareWriter {
        fn headers(&self) -> &HeaderMap {
            &self.headers
        }

        fn headers_mut(&mut self) -> &mut HeaderMap {
            &mut self.headers
        }

        fn write_header(&mut self, status: StatusCode) {
            self.status.get_or_insert(status);
        }

        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.status.get_or_insert(StatusCode::OK);
            self.body.extend_from_slice(buf);
            Ok(buf.len())
        }
    }

    /// A writer whose body writes always fail.
    struct BrokenWriter(HeaderMap);

    impl ResponseWriter for BrokenWriter {
        fn headers(&self) -> &HeaderMap {
            &self.0
        }

        fn headers_mut(&mut self) -> &mut HeaderMap {
            &mut self.0
        }

        fn write_header(&mut self, _status: StatusCode) {}

        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    /// Records the body length seen at every flush.
    #[derive(Default)]
    struct FlushLog {
        rec: ResponseRecorder,
        flushed_at: Vec<usize>,
    }

    impl ResponseWriter for FlushLog {
        fn headers(&self) -> &HeaderMap {
            self.rec.headers()
        }

        fn headers_mut(&mut self) -> &mut HeaderMap {
            self.rec.headers_mut()
        }

        fn write_header(&mut self, status: StatusCode) {
            self.rec.write_header(status);
        }

        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.rec.write(buf)
        }

        fn flusher(&mut self) -> Option<&mut dyn Flusher> {
            Some(self)
        }
    }

    impl Flusher for FlushLog {
        fn flush(&mut self) -> io::Result<()> {
            self.flushed_at.push(self.rec.body().len());
            Ok(())
        }
    }

    #[test]
    fn test_compresses_with_sniffed_content_type() {
        let pool = GzipPool::default();
        let mut rec = ResponseRecorder::new();
        let body = content();

        let mut w = GzipResponseWriter::new(&mut rec, &pool);
        w.write_all(body.as_bytes()).unwrap();
        assert!(w.is_compressing());
        w.close().unwrap();
        drop(w);

        assert_eq!(rec.status(), Some(StatusCode::OK));
        assert_eq!(rec.header(header::CONTENT_ENCODING), Some("gzip"));
        assert_eq!(
            rec.header(header::CONTENT_TYPE),
            Some("text/plain; charset=utf-8")
        );
        assert_eq!(gunzip(rec.body()), body.as_bytes());
    }

    #[test]
    fn test_explicit_status_then_write() {
        let pool = GzipPool::default();
        let mut rec = ResponseRecorder::new();
        let body = content();

        let mut w = GzipResponseWriter::new(&mut rec, &pool);
        w.headers_mut()
            .insert(header::CONTENT_LENGTH, HeaderValue::from(body.len()));
        w.write_header(StatusCode::OK);
        w.write_all(body.as_bytes()).unwrap();
        w.close().unwrap();
        drop(w);

        assert_eq!(rec.header(header::CONTENT_ENCODING), Some("gzip"));
        assert_eq!(rec.header(header::CONTENT_LENGTH), None);
        // No type was set before the commit, so none was sniffed.
        assert_eq!(rec.header(header::CONTENT_TYPE), None);
        assert_eq!(gunzip(rec.body()), body.as_bytes());
    }

    #[test]
    fn test_skip_rules() {
        let cases = [
            (header::CONTENT_RANGE, "bytes 21010-47021/47022"),
            (header::CONTENT_ENCODING, "br"),
            (header::CONTENT_LENGTH, "999"),
            (header::CONTENT_TYPE, "application/octet-stream"),
            (header::CONTENT_TYPE, "image/png"),
        ];

        for (name, value) in cases {
            let pool = GzipPool::default();
            let mut rec = ResponseRecorder::new();
            let body = content();

            let mut w = GzipResponseWriter::new(&mut rec, &pool);
            w.headers_mut()
                .insert(name.clone(), HeaderValue::from_static(value));
            w.write_all(body.as_bytes()).unwrap();
            assert!(!w.is_compressing(), "{name}: {value}");
            w.close().unwrap();
            drop(w);

            assert_ne!(rec.header(header::CONTENT_ENCODING), Some("gzip"), "{name}: {value}");
            assert_eq!(rec.body(), body.as_bytes(), "{name}: {value}");
            assert_eq!(pool.idle(), 0, "{name}: {value}");
        }
    }

    #[test]
    fn test_range_wins_over_compressible_type() {
        let pool = GzipPool::default();
        let mut rec = ResponseRecorder::new();

        let mut w = GzipResponseWriter::new(&mut rec, &pool);
        w.headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static("text/html"));
        w.headers_mut()
            .insert(header::CONTENT_RANGE, HeaderValue::from_static("bytes 0-99/5000"));
        w.write_header(StatusCode::OK);
        assert!(!w.is_compressing());
    }

    #[test]
    fn test_empty_content_type_is_sniffed() {
        let pool = GzipPool::default();
        let mut rec = ResponseRecorder::new();
        let body = content();

        let mut w = GzipResponseWriter::new(&mut rec, &pool);
        w.headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(""));
        w.write_all(body.as_bytes()).unwrap();
        assert!(w.is_compressing());
        drop(w);

        assert_eq!(
            rec.header(header::CONTENT_TYPE),
            Some("text/plain; charset=utf-8")
        );
    }

    #[test]
    fn test_length_at_threshold_is_compressed() {
        let pool = GzipPool::default();
        let mut rec = ResponseRecorder::new();

        let mut w = GzipResponseWriter::new(&mut rec, &pool);
        w.headers_mut()
            .insert(header::CONTENT_LENGTH, HeaderValue::from(DEFAULT_MIN_SIZE));
        w.write_header(StatusCode::OK);
        assert!(w.is_compressing());
    }

    #[test]
    fn test_unparseable_length_does_not_skip() {
        let pool = GzipPool::default();
        let mut rec = ResponseRecorder::new();

        let mut w = GzipResponseWriter::new(&mut rec, &pool);
        w.headers_mut()
            .insert(header::CONTENT_LENGTH, HeaderValue::from_static("lots"));
        w.write_header(StatusCode::OK);
        assert!(w.is_compressing());
        drop(w);

        assert_eq!(rec.header(header::CONTENT_LENGTH), None);
    }

    #[test]
    fn test_custom_min_size() {
        let pool = GzipPool::default();
        let mut rec = ResponseRecorder::new();

        let mut w = GzipResponseWriter::new(&mut rec, &pool).min_size(10);
        w.headers_mut()
            .insert(header::CONTENT_LENGTH, HeaderValue::from(12));
        w.write_all(b"Hello, world").unwrap();
        assert!(w.is_compressing());
    }

    #[test]
    fn test_bodiless_status_defers_decision() {
        for status in [
            StatusCode::NO_CONTENT,
            StatusCode::NOT_MODIFIED,
            StatusCode::PARTIAL_CONTENT,
        ] {
            let pool = GzipPool::default();
            let mut rec = ResponseRecorder::new();
            let body = content();

            let mut w = GzipResponseWriter::new(&mut rec, &pool);
            w.headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
            w.write_header(status);
            assert!(!w.is_compressing());
            w.write_all(body.as_bytes()).unwrap();
            assert!(!w.is_compressing());
            w.close().unwrap();
            drop(w);

            assert_eq!(rec.status(), Some(status));
            assert_eq!(rec.header(header::CONTENT_ENCODING), None);
            assert_eq!(rec.body(), body.as_bytes());
        }
    }

    #[test]
    fn test_decision_is_made_once() {
        let pool = GzipPool::default();
        let mut rec = ResponseRecorder::new();
        let body = content();

        let mut w = GzipResponseWriter::new(&mut rec, &pool);
        w.headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static("text/html"));
        w.write_all(body.as_bytes()).unwrap();
        // Changing headers after the decision has no effect on it.
        w.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/octet-stream"),
        );
        w.write_all(body.as_bytes()).unwrap();
        assert!(w.is_compressing());
        w.close().unwrap();
        drop(w);

        assert_eq!(gunzip(rec.body()), body.repeat(2).as_bytes());
    }

    #[test]
    fn test_flush_reaches_real_writer() {
        let pool = GzipPool::default();
        let mut log = FlushLog::default();
        let body = b"<html><body>streaming</body></html>";

        let mut w = GzipResponseWriter::new(&mut log, &pool).min_size(0);
        w.write_all(body).unwrap();
        w.flusher().unwrap().flush().unwrap();
        w.close().unwrap();
        drop(w);

        assert_eq!(log.flushed_at.len(), 2);
        // The gzip header plus the sync-flushed block reached the writer.
        assert!(log.flushed_at[0] > 10);
        assert_eq!(
            log.rec.header(header::CONTENT_TYPE),
            Some("text/html; charset=utf-8")
        );
        assert_eq!(gunzip(log.rec.body()), body);
    }

    #[test]
    fn test_flush_without_capability() {
        let pool = GzipPool::default();
        let mut inner = BareWriter::new();

        let mut w = GzipResponseWriter::new(&mut inner, &pool).min_size(0);
        w.write_all(b"some text").unwrap();
        w.flush().unwrap();
        w.close().unwrap();
        drop(w);

        assert_eq!(inner.status, Some(StatusCode::OK));
        assert_eq!(gunzip(&inner.body), b"some text");
        assert_eq!(pool.idle(), 1);
    }

    #[test]
    fn test_flush_when_skipping_passes_through() {
        let pool = GzipPool::default();
        let mut log = FlushLog::default();

        let mut w = GzipResponseWriter::new(&mut log, &pool).min_size(0);
        w.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/octet-stream"),
        );
        w.write_all(b"\x00\x01raw").unwrap();
        assert!(!w.is_compressing());
        assert!(w.get_ref().headers().get(header::CONTENT_ENCODING).is_none());
        w.flush().unwrap();
        drop(w);

        assert_eq!(log.flushed_at, [5]);
        assert_eq!(log.rec.body(), b"\x00\x01raw");
    }

    #[test]
    fn test_flush_before_first_write_decides_first() {
        let pool = GzipPool::default();
        let mut rec = ResponseRecorder::new();
        let body = content();

        let mut w = GzipResponseWriter::new(&mut rec, &pool);
        w.flush().unwrap();
        assert!(w.is_compressing());
        w.write_all(body.as_bytes()).unwrap();
        w.close().unwrap();
        drop(w);

        assert_eq!(rec.status(), Some(StatusCode::OK));
        assert_eq!(rec.recorded_headers()[header::CONTENT_ENCODING], "gzip");
        assert_eq!(gunzip(rec.body()), body.as_bytes());
        assert_eq!(rec.flushes(), 2);
    }

    #[test]
    fn test_flush_before_write_of_small_response_skips() {
        let pool = GzipPool::default();
        let mut rec = ResponseRecorder::new();

        let mut w = GzipResponseWriter::new(&mut rec, &pool);
        w.headers_mut()
            .insert(header::CONTENT_LENGTH, HeaderValue::from_static("5"));
        w.flush().unwrap();
        assert!(!w.is_compressing());
        w.write_all(b"hello").unwrap();
        drop(w);

        assert_eq!(rec.header(header::CONTENT_ENCODING), None);
        assert_eq!(rec.body(), b"hello");
    }

    #[test]
    fn test_repeated_write_header_keeps_first_decision() {
        let pool = GzipPool::default();
        let mut rec = ResponseRecorder::new();
        let body = content();

        let mut w = GzipResponseWriter::new(&mut rec, &pool);
        w.write_header(StatusCode::NO_CONTENT);
        w.write_header(StatusCode::OK);
        assert!(!w.is_compressing());
        w.write_all(body.as_bytes()).unwrap();
        w.close().unwrap();
        drop(w);

        assert_eq!(rec.status(), Some(StatusCode::NO_CONTENT));
        assert_eq!(rec.header(header::CONTENT_ENCODING), None);
        assert_eq!(rec.body(), body.as_bytes());
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn test_close_without_writes_is_noop() {
        let pool = GzipPool::default();
        let mut rec = ResponseRecorder::new();

        let mut w = GzipResponseWriter::new(&mut rec, &pool);
        w.close().unwrap();
        drop(w);

        assert_eq!(rec.status(), None);
        assert!(rec.body().is_empty());
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn test_close_releases_stream_once() {
        let pool = GzipPool::default();
        let mut rec = ResponseRecorder::new();

        let mut w = GzipResponseWriter::new(&mut rec, &pool);
        w.write_all(content().as_bytes()).unwrap();
        w.close().unwrap();
        w.close().unwrap();
        drop(w);

        assert_eq!(pool.idle(), 1);
    }

    #[test]
    fn test_drop_releases_stream() {
        let pool = GzipPool::default();
        let mut rec = ResponseRecorder::new();
        let body = content();

        {
            let mut w = GzipResponseWriter::new(&mut rec, &pool);
            w.write_all(body.as_bytes()).unwrap();
        }

        assert_eq!(pool.idle(), 1);
        assert_eq!(gunzip(rec.body()), body.as_bytes());
    }

    #[test]
    fn test_write_error_is_propagated() {
        let pool = GzipPool::default();
        let mut broken = BrokenWriter(HeaderMap::new());
        let mut w = GzipResponseWriter::new(&mut broken, &pool);

        let err = w.write_all(content().as_bytes()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let err = w.close().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        // An encoder that failed to finish is not reused.
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn test_unwrap_writer_exposes_inner() {
        let pool = GzipPool::default();
        let mut rec = ResponseRecorder::new();
        let expected = &rec as *const ResponseRecorder;

        let mut w = GzipResponseWriter::new(&mut rec, &pool);
        let inner = w.unwrap_writer().unwrap();
        assert!(std::ptr::addr_eq(std::ptr::from_ref(&*inner), expected));
    }

    #[test]
    fn test_compressible_content_types() {
        for ct in [
            "text/plain",
            "text/html; charset=utf-8",
            "TEXT/CSS",
            "application/json",
            "application/ld+json",
            "application/javascript",
            "application/xml",
            "application/atom+xml",
            "image/svg+xml",
            "font/woff",
            "font/woff2",
            "text/plain; charset",
            "application/json;;",
        ] {
            assert!(is_compressible_content_type(ct), "{ct}");
        }

        for ct in [
            "",
            "application/octet-stream",
            "application/pdf",
            "image/png",
            "font/ttf",
            "video/mp4",
            "not a mime type",
        ] {
            assert!(!is_compressible_content_type(ct), "{ct}");
        }
    }
}
