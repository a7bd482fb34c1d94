//! Client for the third-party review aggregator: a single passthrough GET
//! with normalized parameters and a static-mock fallback. No retries, no
//! caching, no pagination bookkeeping.

use std::time::Duration;

use tracing::{debug, warn};

use configs::AggregatorConfig;
use models::aggregator::{AggregatorReviewsResponse, FetchReviewsParams};
use models::mock;

use crate::errors::ServiceError;

#[derive(Clone)]
pub struct AggregatorClient {
    http: reqwest::Client,
    base_url: String,
}

impl AggregatorClient {
    pub fn from_config(cfg: &AggregatorConfig) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .map_err(|e| ServiceError::Upstream(e.to_string()))?;
        Ok(Self { http, base_url: cfg.base_url.clone() })
    }

    /// Fetch filtered reviews from the upstream endpoint. Non-2xx status or
    /// an unparsable body is an error; failure handling is the caller's
    /// concern.
    pub async fn fetch_reviews(
        &self,
        params: &FetchReviewsParams,
    ) -> Result<AggregatorReviewsResponse, ServiceError> {
        let url = format!("{}/filtered", self.base_url);
        debug!(%url, object_id = %params.object_id, amount = params.amount, "fetching aggregator reviews");

        let resp = self
            .http
            .get(&url)
            .query(&params.to_query())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ServiceError::Upstream(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ServiceError::Upstream(format!("aggregator returned status {status}")));
        }

        resp.json::<AggregatorReviewsResponse>()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))
    }

    /// Fetch with the mock fallback: any upstream failure downgrades to the
    /// static fixture so the dashboard always has something to render.
    pub async fn fetch_reviews_or_mock(
        &self,
        params: &FetchReviewsParams,
    ) -> AggregatorReviewsResponse {
        match self.fetch_reviews(params).await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = %e, "aggregator fetch failed; serving mock reviews");
                mock::mock_aggregator_reviews()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> AggregatorClient {
        let cfg = AggregatorConfig {
            base_url: server.base_url(),
            connect_timeout_secs: 2,
            request_timeout_secs: 2,
        };
        AggregatorClient::from_config(&cfg).expect("client")
    }

    #[tokio::test]
    async fn passes_normalized_parameters_through() {
        let server = MockServer::start();
        let upstream = server.mock(|when, then| {
            when.method(GET)
                .path("/filtered")
                .query_param("reviewSources", "KAYAK")
                .query_param("sortType", "recent")
                .query_param("objectId", "12222")
                .query_param("travelerTypes", "")
                .query_param("amount", "10");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "reviews": [{"id": "u-1", "score": 91.0, "author": "Ana", "siteName": "KAYAK"}],
                    "totalCount": 1
                }));
        });

        let client = client_for(&server);
        let resp = client.fetch_reviews(&FetchReviewsParams::default()).await.expect("fetch");
        upstream.assert();
        assert_eq!(resp.reviews.len(), 1);
        assert_eq!(resp.reviews[0].author, "Ana");
        assert_eq!(resp.total_count, Some(1));
    }

    #[tokio::test]
    async fn upstream_error_status_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/filtered");
            then.status(502);
        });

        let client = client_for(&server);
        let err = client.fetch_reviews(&FetchReviewsParams::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Upstream(_)));
    }

    #[tokio::test]
    async fn non_json_body_is_a_parse_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/filtered");
            then.status(200).body("<html>maintenance</html>");
        });

        let client = client_for(&server);
        let err = client.fetch_reviews(&FetchReviewsParams::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Parse(_)));
    }

    #[tokio::test]
    async fn fallback_serves_the_fixture() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/filtered");
            then.status(500);
        });

        let client = client_for(&server);
        let resp = client.fetch_reviews_or_mock(&FetchReviewsParams::default()).await;
        assert_eq!(resp, mock::mock_aggregator_reviews());
    }
}
