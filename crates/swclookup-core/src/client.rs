//! Authenticated HTTP client for the SWC query endpoints.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::SwcConfig;
use crate::error::{LookupError, Result};
use crate::event;

/// Envelope every query endpoint wraps its results in.
#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    objects: Vec<T>,
}

/// The SWC query client.
///
/// Issues single-shot GETs with `ApiKey` authorization. No retries, no
/// pagination; the service's timeout defaults apply.
pub struct SwcClient {
    config: SwcConfig,
    http: Client,
}

impl SwcClient {
    /// Create a new query client.
    pub fn new(config: SwcConfig) -> Result<Self> {
        let http = Client::builder().user_agent("swclookup/0.1").build()?;
        Ok(Self { config, http })
    }

    /// Create a query client with a custom HTTP client (for testing with
    /// mockito).
    pub fn with_http_client(config: SwcConfig, http: Client) -> Self {
        Self { config, http }
    }

    /// Issue one query and return the decoded `objects` array.
    ///
    /// The API key file is re-read on every call; there is no cached
    /// state between queries.
    pub async fn query_objects<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<Vec<T>> {
        let api_key = event::load_api_key(&self.config.api_key_path)?;

        debug!(url, params = params.len(), "querying service");
        let response = self
            .http
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("ApiKey {api_key}"))
            .query(params)
            .send()
            .await
            .map_err(|e| LookupError::Connect {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(LookupError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.contains("application/json") {
            return Err(LookupError::ContentType {
                url: url.to_string(),
                content_type,
            });
        }

        let body: QueryResponse<T> =
            response
                .json()
                .await
                .map_err(|e| LookupError::Body {
                    url: url.to_string(),
                    source: e,
                })?;

        debug!(url, objects = body.objects.len(), "query returned");
        Ok(body.objects)
    }

    /// The configured session-data endpoint.
    pub fn session_url(&self) -> &str {
        &self.config.session_url
    }

    /// The configured alert endpoint.
    pub fn alert_url(&self) -> &str {
        &self.config.alert_url
    }
}
