use crate::error::Error;
use crate::stream::GzipStream;
use flate2::Compression;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Highest gzip level accepted by [`GzipPool::new`].
pub const BEST_COMPRESSION: u32 = 9;

/// Level used by [`GzipPool::default`].
pub const BEST_SPEED: u32 = 1;

/// A cache of reusable gzip encoders sharing one compression level.
///
/// Creating a deflate state is the expensive part of compressing a response,
/// so writers borrow encoders from here and hand them back once the response
/// is complete. The pool is a cache: callers cannot tell a fresh encoder from a
/// reused one, and released encoders beyond `max_idle` are simply dropped.
#[derive(Debug)]
pub struct GzipPool {
    level: Compression,
    max_idle: Option<usize>,
    idle: Mutex<Vec<GzipStream>>,
}

impl GzipPool {
    /// Creates an unbounded pool producing encoders at `level`.
    ///
    /// Fails with [`Error::InvalidLevel`] when `level` is above 9.
    pub fn new(level: u32) -> Result<Self, Error> {
        if level > BEST_COMPRESSION {
            return Err(Error::InvalidLevel(level));
        }
        Ok(Self {
            level: Compression::new(level),
            max_idle: None,
            idle: Mutex::new(Vec::new()),
        })
    }

    /// Caps how many idle encoders are kept around.
    pub fn with_max_idle(mut self, max_idle: usize) -> Self {
        self.max_idle = Some(max_idle);
        self
    }

    /// Returns the compression level of the encoders in this pool.
    pub fn level(&self) -> u32 {
        self.level.level()
    }

    /// Returns the number of encoders currently waiting for reuse.
    pub fn idle(&self) -> usize {
        self.lock().len()
    }

    /// Takes an encoder out of the pool, creating one if none is idle.
    ///
    /// The returned encoder is always in its initial state.
    pub fn acquire(&self) -> GzipStream {
        match self.lock().pop() {
            Some(mut stream) => {
                stream.reset();
                stream
            }
            None => {
                debug!(level = self.level.level(), "creating gzip encoder");
                GzipStream::new(self.level)
            }
        }
    }

    /// Makes an encoder available to later [`acquire`](Self::acquire) calls.
    pub fn release(&self, stream: GzipStream) {
        let mut idle = self.lock();
        if self.max_idle.is_none_or(|max| idle.len() < max) {
            idle.push(stream);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<GzipStream>> {
        // The vector is never left half-updated, so a poisoned lock is still usable.
        self.idle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for GzipPool {
    fn default() -> Self {
        Self {
            level: Compression::new(BEST_SPEED),
            max_idle: None,
            idle: Mutex::new(Vec::new()),
        }
    }
}
