//! REST API client for the recommendation backend
//!
//! Three typed request/response operations over a fixed base path with
//! JSON bodies. No retry, no caching; each call is a single best-effort
//! round trip.

use std::time::Duration;

use serde::de::DeserializeOwned;

use shared::{LiquorRecommendation, PairingResponse, RecommendationRecord, RecommendationRequest};

use crate::error::{ClientError, ClientResult};

/// REST client for the liquor recommendation API
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// `api_addr` is the base path of the API, e.g.
    /// `http://127.0.0.1:8080/api`; a bare host:port is given an
    /// `http://` scheme.
    pub fn new(api_addr: &str) -> Self {
        let base_url = if api_addr.starts_with("http") {
            api_addr.trim_end_matches('/').to_string()
        } else {
            format!("http://{}", api_addr.trim_end_matches('/'))
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Request ranked liquor recommendations for the given inputs
    ///
    /// Returns the server's ordered result list verbatim; ranking order
    /// is server-defined and not re-sorted here.
    pub async fn fetch_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> ClientResult<Vec<LiquorRecommendation>> {
        tracing::debug!(
            "🍶 Requesting recommendations for query '{}'",
            request.user_query
        );

        let url = format!("{}/liquors/recommendations", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Network {
                message: e.to_string(),
            })?;

        Self::decode(response).await
    }

    /// Look up the food pairing for one liquor id
    pub async fn fetch_pairing(&self, liquor_id: u64) -> ClientResult<PairingResponse> {
        let url = format!("{}/liquors/{}/pairings", self.base_url, liquor_id);
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network {
                message: e.to_string(),
            })?;

        Self::decode(response).await
    }

    /// Fetch the full collection of historical recommendation records
    pub async fn fetch_history(&self) -> ClientResult<Vec<RecommendationRecord>> {
        let url = format!("{}/recommendations", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network {
                message: e.to_string(),
            })?;

        Self::decode(response).await
    }

    /// Map a response into the shared failure taxonomy
    ///
    /// Non-success status wins over body decoding, so a 500 with an HTML
    /// body reports as a server error, not a decode error.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| ClientError::Network {
            message: e.to_string(),
        })?;

        serde_json::from_slice(&body).map_err(|e| ClientError::Decode {
            message: e.to_string(),
        })
    }
}
