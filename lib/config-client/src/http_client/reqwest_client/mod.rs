use super::{Error, Headers, HttpClient, Response, StatusCode};

/// [`HttpClient`] backed by a shared [`reqwest::Client`] connection pool.
#[derive(Clone, Default)]
pub struct ReqwestClient {
    pub client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Builds a client that skips server certificate validation when
    /// `accept_invalid_certs` is set.
    pub fn with_accept_invalid_certs(accept_invalid_certs: bool) -> Result<Self, Error> {
        reqwest::Client::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map(Self::new)
            .map_err(|e| Error::Other(e.to_string()))
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<Response, Error> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::HttpError(e.to_string()))?;

        let status = StatusCode(response.status().as_u16());
        let headers: Headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::HttpError(e.to_string()))?;

        Ok(Response {
            body: body.to_vec(),
            headers,
            status,
            url: url.to_owned(),
        })
    }
}
