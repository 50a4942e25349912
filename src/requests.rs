use reqwest::{Client, ClientBuilder, Response};

use crate::fetch_error::FetchError;

pub struct RequestClient {
    client: Client,
}

impl RequestClient {
    /// Every request carries `user_agent`; the marketplace turns away
    /// clients that look like bots.
    pub fn new(user_agent: &str) -> anyhow::Result<Self> {
        let client = ClientBuilder::new().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    pub async fn fetch_url_response(&self, url: &str) -> Result<Response, FetchError> {
        let to_fetch_error = |source| FetchError {
            url: url.to_string(),
            source,
        };
        let response = self.client.get(url).send().await.map_err(to_fetch_error)?;
        // A 4xx/5xx page is not something we can extract cards from.
        response.error_for_status().map_err(to_fetch_error)
    }

    pub async fn fetch_url_body(&self, url: &str) -> Result<String, FetchError> {
        let response = self.fetch_url_response(url).await?;
        response.text().await.map_err(|source| FetchError {
            url: url.to_string(),
            source,
        })
    }
}
