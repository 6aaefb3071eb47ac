use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::{request::routing_request::RoutingRequest, response::RoutingResponse};

pub const ROUTE_OPTIMIZATION_API_URL: &str = "https://fleetengine.googleapis.com/v1:optimizeTours";

/// Restricts the response to the fields the transformer reads.
pub const RESPONSE_FIELD_MASK: &str = "routes.routeLabel,routes.visits,routes.route,routes.routeDuration,routes.routeDistanceMeters,routes.routePolyline.encodedPolyline";

pub const API_KEY_ENV_VAR: &str = "ROUTE_OPTIMIZATION_API_KEY";
pub const API_URL_ENV_VAR: &str = "ROUTE_OPTIMIZATION_URL";

const API_KEY_HEADER: &str = "X-Goog-Api-Key";
const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

#[derive(Debug, Error)]
pub enum OptimizeToursError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("environment variable {0} is not set")]
    MissingApiKey(&'static str),
}

#[derive(Debug, Clone)]
pub struct OptimizeToursClientParams {
    pub api_key: String,
    pub url: String,
}

impl OptimizeToursClientParams {
    pub fn new(api_key: impl Into<String>) -> Self {
        OptimizeToursClientParams {
            api_key: api_key.into(),
            url: ROUTE_OPTIMIZATION_API_URL.to_string(),
        }
    }

    pub fn from_env() -> Result<Self, OptimizeToursError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, OptimizeToursError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV_VAR)
            .filter(|key| !key.is_empty())
            .ok_or(OptimizeToursError::MissingApiKey(API_KEY_ENV_VAR))?;

        let params = OptimizeToursClientParams::new(api_key);

        Ok(match lookup(API_URL_ENV_VAR).filter(|url| !url.is_empty()) {
            Some(url) => params.with_url(url),
            None => params,
        })
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

pub struct OptimizeToursClient {
    params: OptimizeToursClientParams,
    client: reqwest::Client,
}

impl OptimizeToursClient {
    pub fn new(params: OptimizeToursClientParams) -> Self {
        Self::with_http_client(params, reqwest::Client::new())
    }

    pub fn with_http_client(params: OptimizeToursClientParams, client: reqwest::Client) -> Self {
        Self { params, client }
    }

    pub fn url(&self) -> &str {
        &self.params.url
    }

    pub async fn optimize_tours(
        &self,
        request: &RoutingRequest,
    ) -> Result<RoutingResponse, OptimizeToursError> {
        debug!(
            "OptimizeTours: posting {} vehicles and {} shipments to {}",
            request.vehicles.len(),
            request.shipments.len(),
            self.params.url
        );

        let response = self
            .client
            .post(&self.params.url)
            .header(API_KEY_HEADER, &self.params.api_key)
            .header(FIELD_MASK_HEADER, RESPONSE_FIELD_MASK)
            .json(request)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<RoutingResponse, OptimizeToursError> {
        let status = response.status();

        if status == StatusCode::OK {
            let text = response.text().await?;
            debug!("OptimizeTours: received {} bytes", text.len());
            Ok(serde_json::from_str(&text)?)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(OptimizeToursError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
