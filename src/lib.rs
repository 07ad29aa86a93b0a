//! On-the-fly gzip compression for HTTP handlers.
//!
//! Handlers write their response to a [`ResponseWriter`]. Wrapping a handler
//! in a [`GzipHandler`] (usually through [`GzipLayer`]) makes it compress
//! responses transparently when the client asks for gzip and the response is
//! worth compressing. The handler does not need to know.
//!
//! # Example
//!
//! ```ignore
//! use http_gzip::{GzipLayer, Handler, ResponseWriter, handler_fn};
//! use tower::Layer;
//!
//! let handler = GzipLayer::with_level(6)?.layer(handler_fn(|_req, w| {
//!     w.write_all(b"hello, world")
//! }));
//! handler.serve(&request, &mut writer)?;
//! ```
//!
//! # Compression Rules
//!
//! Only `gzip` is negotiated, and only when the first `gzip` entry of the
//! request's `Accept-Encoding` carries no quality or a positive one.
//!
//! The middleware will **not** compress responses when:
//! - `Content-Range` header is present (range responses)
//! - `Content-Encoding` header is already set
//! - `Content-Length` is below the minimum size threshold (default: 1000 bytes)
//! - `Content-Type` is set and is not text, JSON, JavaScript, XML, SVG or WOFF
//! - The status is committed as 204, 206 or 304 before any body is written
//!
//! The decision is made once, on the first status commit or body write.
//! A missing `Content-Type` is sniffed from the first body bytes.
//!
//! # Response Modifications
//!
//! - `Vary` header includes `Accept-Encoding` on every response
//!
//! When compression is applied:
//! - `Content-Encoding` header is set to `gzip`
//! - `Content-Length` header is removed (compressed size is unknown)

#![deny(missing_docs)]

mod compress;
mod error;
mod handler;
mod layer;
mod negotiate;
mod pool;
mod recorder;
mod service;
mod sniff;
mod stream;
mod writer;

pub use compress::{DEFAULT_MIN_SIZE, GzipResponseWriter, is_compressible_content_type};
pub use error::Error;
pub use handler::{Handler, handler_fn};
pub use layer::GzipLayer;
pub use negotiate::{accepts_gzip, allows_gzip};
pub use pool::{BEST_COMPRESSION, BEST_SPEED, GzipPool};
pub use recorder::ResponseRecorder;
pub use service::GzipHandler;
pub use sniff::{SNIFF_LEN, detect_content_type};
pub use stream::GzipStream;
pub use writer::{Flusher, ResponseWriter};
