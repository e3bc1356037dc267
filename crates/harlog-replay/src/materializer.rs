use crate::{MaterializeOptions, Result};
use harlog_core::har::Request;

/// Builds outbound `http` requests from captured HAR requests.
///
/// Only `method`, `url`, `headers` and `postData` are used. Cookies and the
/// query string are capture metadata; the query is expected to already be
/// part of `url`.
#[derive(Debug, Clone, Default)]
pub struct RequestMaterializer {
    options: MaterializeOptions,
}

impl RequestMaterializer {
    pub fn new(options: MaterializeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MaterializeOptions {
        &self.options
    }

    /// Convert a HAR request into an `http::Request` carrying the body bytes.
    ///
    /// An empty method is sent as `GET`. Invalid methods, URLs or header names
    /// surface as [`crate::Error::Build`].
    pub fn materialize(&self, req: &Request) -> Result<http::Request<Vec<u8>>> {
        let body = req
            .post_data
            .as_ref()
            .map(|data| data.body_with_separator(self.options.param_join.separator()))
            .unwrap_or_default();

        // An empty method means GET
        let method = if req.method.is_empty() {
            http::Method::GET.as_str()
        } else {
            req.method.as_str()
        };

        let mut builder = http::Request::builder().method(method).uri(req.url.as_str());

        for header in &req.headers {
            if self.options.skip_colon_named_headers && header.name.contains(':') {
                tracing::trace!("Skipping header {}", header.name);
                continue;
            }
            builder = builder.header(header.name.as_str(), header.value.as_str());
        }

        tracing::debug!(
            "Materialized request: {} {} ({} body bytes)",
            method,
            req.url,
            body.len()
        );

        Ok(builder.body(body.into_bytes())?)
    }
}

/// Materialize with [`MaterializeOptions::default`]
pub fn materialize(req: &Request) -> Result<http::Request<Vec<u8>>> {
    RequestMaterializer::default().materialize(req)
}
