//! source loading
//!
//! reads schema and operation documents from disk, or fetches the schema sdl
//! from a running graphql server.

use crate::error::{Error, Result};
use reqwest::blocking::Client as BlockingClient;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::fs;
use std::path::Path;
use url::Url;

/// read every file in order
pub fn read_sources<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<String>> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            tracing::debug!(path = %path.display(), "reading source");
            fs::read_to_string(path).map_err(|err| {
                Error::Io(std::io::Error::new(
                    err.kind(),
                    format!("failed to read {}: {err}", path.display()),
                ))
            })
        })
        .collect()
}

/// build the url the schema sdl is served from
pub fn schema_url(endpoint: &str) -> Result<Url> {
    let normalized = endpoint.trim_end_matches('/');
    let url = Url::parse(normalized)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::Config(format!(
            "invalid url scheme: {}. must be http or https",
            url.scheme()
        )));
    }
    Ok(url)
}

/// fetch schema sdl with an optional bearer token
pub fn fetch_schema(endpoint: &str, token: Option<&str>) -> Result<String> {
    let url = schema_url(endpoint)?;

    let mut headers = HeaderMap::new();
    if let Some(token) = token {
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|err| Error::Config(format!("invalid token header value: {err}")))?,
        );
    }

    tracing::info!(%url, "fetching schema");
    let response = BlockingClient::new().get(url).headers(headers).send()?;
    let status = response.status();
    let text = response.text()?;
    if !status.is_success() {
        return Err(Error::Config(format!("schema http error: {status}")));
    }
    Ok(text)
}
