use http::{HeaderMap, header};

/// Returns whether the request headers declare that gzip is acceptable.
///
/// Only the first `Accept-Encoding` value is consulted. A missing header or a
/// value that is not visible ASCII means "do not compress".
pub fn accepts_gzip(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .is_some_and(allows_gzip)
}

/// Parses an `Accept-Encoding` value and returns whether gzip is allowed.
///
/// The value is a comma-separated list of encodings with optional quality
/// values (e.g. "compress;q=0.5, gzip;q=1.0"). The first entry whose token is
/// exactly `gzip` decides the outcome: without a parameter it is accepted,
/// with a `q=` parameter it is accepted only when the quality is positive, and
/// any other parameter is a rejection. Wildcards are not honoured.
pub fn allows_gzip(header: &str) -> bool {
    if !header.contains("gzip") {
        return false;
    }

    for part in header.split(',') {
        let (encoding, param) = match part.split_once(';') {
            Some((encoding, param)) => (encoding, Some(param)),
            None => (part, None),
        };
        if encoding.trim() != "gzip" {
            continue;
        }
        return match param {
            None => true,
            Some(param) => parse_quality(param).is_some_and(|q| q > 0.0),
        };
    }

    false
}

/// Parses a `q=<number>` parameter.
fn parse_quality(param: &str) -> Option<f64> {
    param.trim().strip_prefix("q=")?.parse::<f64>().ok()
}
