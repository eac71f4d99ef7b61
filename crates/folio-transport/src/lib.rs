//! folio-transport: HTTP client for the portfolio site's JSON endpoints.
//!
//! [`SiteClient`] talks to three routes on a configurable origin:
//!
//! | Route | Method | Body | Reply |
//! |-------|--------|------|-------|
//! | `/contact` | POST | [`ContactForm`] | `{success, message}` |
//! | `/newsletter` | POST | [`NewsletterForm`] | `{success, message}` |
//! | `/api/testimonials` | GET |: | `[Testimonial]` |
//!
//! The client does not retry. Callers turn the result into a toast with
//! [`SubmitOutcome::classify`](folio_core::forms::SubmitOutcome::classify).

use bytes::Bytes;
use folio_core::{
    carousel::Testimonial,
    forms::{ContactForm, FormKind, NewsletterForm, SubmitResponse},
};
use http_body_util::{BodyExt, Full};
use hyper::{header, Method, Request, StatusCode, Uri};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use serde::Serialize;

const TESTIMONIALS_PATH: &str = "/api/testimonials";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: hyper::http::uri::InvalidUri,
    },
    #[error("building request: {0}")]
    Build(#[from] hyper::http::Error),
    #[error("request failed: {0}")]
    Request(#[from] hyper_util::client::legacy::Error),
    #[error("reading response: {0}")]
    Read(#[from] hyper::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed body: {0}")]
    Body(#[from] serde_json::Error),
}

/// Thin JSON client over a pooled hyper connection.
#[derive(Clone)]
pub struct SiteClient {
    base_url: String,
    client: Client<HttpConnector, Full<Bytes>>,
}

impl std::fmt::Debug for SiteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteClient").field("base_url", &self.base_url).finish()
    }
}

impl SiteClient {
    /// `base_url` is an origin such as `http://127.0.0.1:5000`; a trailing
    /// slash is ignored.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        base_url
            .parse::<Uri>()
            .map_err(|source| TransportError::InvalidUrl { url: base_url.clone(), source })?;
        let client = Client::builder(TokioExecutor::new()).build_http();
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the contact form. A non-JSON reply counts as success when the
    /// status is 2xx.
    pub async fn submit_contact(&self, form: &ContactForm) -> Result<SubmitResponse, TransportError> {
        self.submit(FormKind::Contact, form).await
    }

    /// POST a newsletter subscription.
    pub async fn subscribe(&self, form: &NewsletterForm) -> Result<SubmitResponse, TransportError> {
        self.submit(FormKind::Newsletter, form).await
    }

    /// Featured testimonials, newest first as ordered by the server.
    pub async fn testimonials(&self) -> Result<Vec<Testimonial>, TransportError> {
        let req = Request::builder()
            .method(Method::GET)
            .uri(self.uri(TESTIMONIALS_PATH)?)
            .header(header::ACCEPT, "application/json")
            .body(Full::new(Bytes::new()))?;
        let (status, body) = self.send(req).await?;
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }
        Ok(serde_json::from_slice(&body)?)
    }

    /// Testimonials to swap into the carousel, or `None` when the page should
    /// keep its static ones: the list came back empty or the fetch failed.
    /// Failures are logged, never surfaced.
    pub async fn fresh_testimonials(&self) -> Option<Vec<Testimonial>> {
        match self.testimonials().await {
            Ok(list) if list.is_empty() => None,
            Ok(list) => Some(list),
            Err(e) => {
                tracing::warn!(error = %e, "testimonials unavailable, keeping static ones");
                None
            }
        }
    }

    async fn submit<T: Serialize>(
        &self,
        kind: FormKind,
        payload: &T,
    ) -> Result<SubmitResponse, TransportError> {
        let body = serde_json::to_vec(payload)?;
        let req = Request::builder()
            .method(Method::POST)
            .uri(self.uri(kind.path())?)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .body(Full::new(Bytes::from(body)))?;
        let (status, body) = self.send(req).await?;
        tracing::debug!(path = kind.path(), %status, bytes = body.len(), "form reply");
        Ok(SubmitResponse::parse(kind, status.is_success(), &body)?)
    }

    async fn send(&self, req: Request<Full<Bytes>>) -> Result<(StatusCode, Bytes), TransportError> {
        let uri = req.uri().clone();
        let res = self.client.request(req).await?;
        let status = res.status();
        let body = res.into_body().collect().await?.to_bytes();
        tracing::debug!(%uri, %status, "site request");
        Ok((status, body))
    }

    fn uri(&self, path: &str) -> Result<Uri, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        url.parse()
            .map_err(|source| TransportError::InvalidUrl { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let c = SiteClient::new("http://localhost:5000/").unwrap();
        assert_eq!(c.base_url(), "http://localhost:5000");
        assert_eq!(c.uri("/contact").unwrap().path(), "/contact");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = SiteClient::new("http://exa mple.com").unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl { .. }));
    }
}
