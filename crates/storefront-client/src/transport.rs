//! Transport seam between the fetch client and the network.

use crate::{FetchError, Request, Response};
use async_trait::async_trait;

/// Executes a fully built request.
///
/// Futures are not required to be `Send`: in the browser the request runs on
/// the single UI event loop.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn execute(&self, request: Request) -> Result<Response, FetchError>;
}

/// Transport backed by `reqwest` (browser `fetch` on wasm32).
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<Response, FetchError> {
        let mut outgoing = self.client.get(&request.url);
        for (key, value) in &request.headers {
            outgoing = outgoing.header(key.as_str(), value.as_str());
        }

        let response = outgoing.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(Response::new(status, body))
    }
}
