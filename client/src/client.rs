//! API client for the fitness planner backend
//!
//! Each operation is an independent async request/response exchange:
//! nothing coordinates, serializes, or rate-limits concurrent calls, and
//! the only shared state is the once-resolved base origin and the
//! connection pool inside `reqwest::Client`.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use fitness_planner_shared::validation::parse_plan_id;
use fitness_planner_shared::{
    MacroCalcRequest, MacroCalcResponse, NutritionGenerateRequest, NutritionGenerateResponse,
    NutritionRegenerateRequest, NutritionRegenerateResponse,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use validator::Validate;

/// HTTP client for the plan and nutrition endpoints
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the origin resolved from `config`
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Create a client reusing an existing `reqwest::Client`
    /// (shared connection pool, caller-supplied timeouts)
    pub fn with_http_client(config: &ClientConfig, http: Client) -> Self {
        let base_url = config.resolved_api_base();
        debug!(%base_url, "API client constructed");
        Self { http, base_url }
    }

    /// The resolved base origin all requests target
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Plan operations
    // ========================================================================

    /// Fetch the list of plans
    pub async fn list_plans(&self) -> ClientResult<Value> {
        self.get_json("/plans").await
    }

    /// Fetch a single plan by id.
    ///
    /// The id must coerce to a finite number strictly greater than zero;
    /// anything else fails with `InvalidArgument` before any network call,
    /// so an absent id rendered as "undefined" never hits the backend.
    pub async fn get_plan(&self, id: &str) -> ClientResult<Value> {
        let id = parse_plan_id(id).map_err(ClientError::InvalidArgument)?;
        self.get_json(&format!("/plans/{id}")).await
    }

    /// Generate a plan from an arbitrary payload, forwarded verbatim
    pub async fn generate_plan(&self, payload: &Value) -> ClientResult<Value> {
        self.post_json("/plans/generate", payload).await
    }

    // ========================================================================
    // Nutrition operations
    // ========================================================================

    /// Generate a nutrition plan for the given targets and constraints
    pub async fn generate_nutrition(
        &self,
        request: &NutritionGenerateRequest,
    ) -> ClientResult<NutritionGenerateResponse> {
        request
            .validate()
            .map_err(|err| ClientError::InvalidArgument(err.to_string()))?;
        self.post_json("/nutrition/generate", request).await
    }

    /// Regenerate a nutrition plan against a previous version snapshot.
    ///
    /// The snapshot is forwarded untouched; the backend computes the diff.
    pub async fn regenerate_nutrition(
        &self,
        request: &NutritionRegenerateRequest,
    ) -> ClientResult<NutritionRegenerateResponse> {
        request
            .validate()
            .map_err(|err| ClientError::InvalidArgument(err.to_string()))?;
        self.post_json("/nutrition/regenerate", request).await
    }

    /// Calculate calorie/macro targets from biometric inputs
    pub async fn macro_calc(
        &self,
        request: &MacroCalcRequest,
    ) -> ClientResult<MacroCalcResponse> {
        self.post_json("/nutrition/macro-calc", request).await
    }

    // ========================================================================
    // Transport helpers
    // ========================================================================

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "POST");
        let response = self.http.post(&url).json(body).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Remote { status, body });
        }
        Ok(response.json::<T>().await?)
    }
}
