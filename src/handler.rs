use crate::writer::ResponseWriter;
use http::Request;
use std::io;

/// Produces a response by writing to a [`ResponseWriter`].
///
/// Errors returned by the writer should be passed back with `?`; the caller
/// owns the connection and decides what to do with them.
pub trait Handler<B> {
    /// Handles one request.
    fn serve(&self, req: &Request<B>, w: &mut dyn ResponseWriter) -> io::Result<()>;
}

impl<B, F> Handler<B> for F
where
    F: Fn(&Request<B>, &mut dyn ResponseWriter) -> io::Result<()>,
{
    fn serve(&self, req: &Request<B>, w: &mut dyn ResponseWriter) -> io::Result<()> {
        self(req, w)
    }
}

/// Turns a closure into a [`Handler`].
///
/// Only needed to help closure signature inference, e.g.
/// `handler_fn(|_req, w| w.write_all(b"hi"))`.
pub fn handler_fn<B, F>(f: F) -> F
where
    F: Fn(&Request<B>, &mut dyn ResponseWriter) -> io::Result<()>,
{
    f
}
