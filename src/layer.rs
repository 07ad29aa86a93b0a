use crate::compress::DEFAULT_MIN_SIZE;
use crate::error::Error;
use crate::pool::GzipPool;
use crate::service::GzipHandler;
use std::sync::Arc;
use tower::Layer;

/// A Tower layer that gzips the responses of the handlers it wraps.
///
/// All handlers produced by one layer share its encoder pool.
#[derive(Debug, Clone)]
pub struct GzipLayer {
    pool: Arc<GzipPool>,
    min_size: usize,
}

impl GzipLayer {
    /// Creates a new gzip layer with default settings.
    ///
    /// Encoders use the fastest compression level and the minimum size for
    /// compression is 1000 bytes.
    pub fn new() -> Self {
        Self::with_pool(Arc::new(GzipPool::default()))
    }

    /// Creates a gzip layer compressing at `level`.
    ///
    /// Fails when `level` is not a valid gzip level (`0..=9`).
    pub fn with_level(level: u32) -> Result<Self, Error> {
        Ok(Self::with_pool(Arc::new(GzipPool::new(level)?)))
    }

    /// Creates a gzip layer drawing encoders from an existing pool.
    pub fn with_pool(pool: Arc<GzipPool>) -> Self {
        Self {
            pool,
            min_size: DEFAULT_MIN_SIZE,
        }
    }

    /// Sets the minimum body size required for compression.
    ///
    /// Responses with a known Content-Length smaller than this value
    /// will not be compressed.
    pub fn min_size(mut self, size: usize) -> Self {
        self.min_size = size;
        self
    }
}

impl Default for GzipLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Layer<H> for GzipLayer {
    type Service = GzipHandler<H>;

    fn layer(&self, inner: H) -> Self::Service {
        GzipHandler::new(inner, Arc::clone(&self.pool), self.min_size)
    }
}
