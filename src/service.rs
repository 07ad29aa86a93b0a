use crate::compress::GzipResponseWriter;
use crate::handler::Handler;
use crate::negotiate::accepts_gzip;
use crate::pool::GzipPool;
use crate::recorder::ResponseRecorder;
use crate::writer::ResponseWriter;
use bytes::Bytes;
use http::{HeaderMap, HeaderValue, Request, Response, header};
use http_body_util::Full;
use std::future::{Ready, ready};
use std::io;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::Service;
use tracing::trace;

/// A handler that gzips the responses of the handler it wraps.
///
/// Every response gets `Vary: Accept-Encoding`. When the request accepts gzip
/// the inner handler writes through a [`GzipResponseWriter`], which is closed
/// once the handler returns, or dropped if it panics.
#[derive(Debug, Clone)]
pub struct GzipHandler<H> {
    inner: H,
    pool: Arc<GzipPool>,
    min_size: usize,
}

impl<H> GzipHandler<H> {
    /// Creates a new compressing handler wrapping `inner`.
    pub fn new(inner: H, pool: Arc<GzipPool>, min_size: usize) -> Self {
        Self {
            inner,
            pool,
            min_size,
        }
    }

    /// Returns a reference to the inner handler.
    pub fn inner(&self) -> &H {
        &self.inner
    }

    /// Returns a mutable reference to the inner handler.
    pub fn inner_mut(&mut self) -> &mut H {
        &mut self.inner
    }

    /// Consumes this handler, returning the inner handler.
    pub fn into_inner(self) -> H {
        self.inner
    }

    /// Returns the encoder pool this handler draws from.
    pub fn pool(&self) -> &Arc<GzipPool> {
        &self.pool
    }
}

impl<B, H> Handler<B> for GzipHandler<H>
where
    H: Handler<B>,
{
    fn serve(&self, req: &Request<B>, w: &mut dyn ResponseWriter) -> io::Result<()> {
        add_vary_accept_encoding(w.headers_mut());

        if !accepts_gzip(req.headers()) {
            trace!("client does not accept gzip");
            return self.inner.serve(req, w);
        }

        let mut gz = GzipResponseWriter::new(w, &self.pool).min_size(self.min_size);
        let served = self.inner.serve(req, &mut gz);
        let closed = gz.close();
        served.and(closed)
    }
}

/// Serves requests into a [`ResponseRecorder`], so the handler can sit in a
/// Tower stack that expects buffered `http` responses.
impl<B, H> Service<Request<B>> for GzipHandler<H>
where
    H: Handler<B>,
{
    type Response = Response<Full<Bytes>>;
    type Error = io::Error;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let mut recorder = ResponseRecorder::new();
        let result = self
            .serve(&req, &mut recorder)
            .map(|()| recorder.into_response());
        ready(result)
    }
}

/// Adds Accept-Encoding to the Vary header if not already present.
fn add_vary_accept_encoding(headers: &mut HeaderMap) {
    // Check all Vary headers to see if Accept-Encoding is already present
    for vary in headers.get_all(header::VARY) {
        if let Ok(vary_str) = vary.to_str() {
            let covered = vary_str.split(',').any(|v| {
                let v = v.trim();
                v == "*" || v.eq_ignore_ascii_case("accept-encoding")
            });
            if covered {
                return;
            }
        }
    }

    headers.append(header::VARY, HeaderValue::from_static("Accept-Encoding"));
}
