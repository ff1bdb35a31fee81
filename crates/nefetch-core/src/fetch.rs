//! Blocking HTTP GET via the curl crate (libcurl).
//!
//! Fetches the whole response body into memory; dataset bodies are a few
//! tens of MiB at most, which keeps the re-serialization step simple.

use std::time::Duration;
use thiserror::Error;

/// Timeouts applied to each GET. Taken from config, not hard-coded.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

/// Error from a single GET: transport failure or non-2xx status.
/// Kept separate from anyhow so callers can tell the two apart.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Curl(#[from] curl::Error),
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
}

/// Performs a blocking GET and returns the response body bytes.
///
/// Follows redirects. Fails on any transport error or non-2xx status;
/// there is no retry at this layer.
pub fn fetch_body(url: &str, opts: &FetchOptions) -> Result<Vec<u8>, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.request_timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http {
            url: url.to_string(),
            code,
        });
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_names_url_and_code() {
        let err = FetchError::Http {
            url: "https://example.com/x.geojson".to_string(),
            code: 404,
        };
        assert_eq!(
            err.to_string(),
            "GET https://example.com/x.geojson returned HTTP 404"
        );
    }

    #[test]
    fn fetch_body_rejects_unsupported_scheme() {
        let opts = FetchOptions {
            connect_timeout: Duration::from_secs(1),
            request_timeout: Duration::from_secs(1),
        };
        let err = fetch_body("gopher2://nowhere/x", &opts).unwrap_err();
        assert!(matches!(err, FetchError::Curl(_)));
    }
}
