// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use std::time::Duration;
use tracing::{debug, info, warn};
use crate::api::error::ApiError;
use crate::api::traits::FoodApi;
use crate::config::Config;
use crate::foods::{CreateFoodRequest, FoodId, FoodPlate, NewFoodPlate};

const USER_AGENT: &str = concat!("food-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpFoodApi {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpFoodApi {
    /// Build a client for the API rooted at `base_url`. Without `timeout`
    /// reqwest's defaults apply.
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            api_key,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(
            config.api_base_url.clone(),
            config.api_key.clone(),
            config.request_timeout(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        debug!(method = %method, url = %url, "Building food API request");
        let mut request = self.client.request(method, &url);

        if let Some(ref key) = self.api_key {
            request = request.header("Authorization", format!("Bearer {}", key));
        }

        request
    }

    async fn ensure_success(response: Response) -> Result<Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, body = %body, "Food API rejected request");
        Err(ApiError::Status { status, body })
    }
}

#[async_trait]
impl FoodApi for HttpFoodApi {
    async fn list_foods(&self) -> Result<Vec<FoodPlate>, ApiError> {
        let response = self.build_request(Method::GET, "foods").send().await?;
        let foods: Vec<FoodPlate> = Self::ensure_success(response).await?.json().await?;

        info!(count = foods.len(), "Fetched foods");
        Ok(foods)
    }

    async fn create_food(&self, food: NewFoodPlate) -> Result<FoodPlate, ApiError> {
        let request = CreateFoodRequest::from(food);
        let response = self
            .build_request(Method::POST, "foods")
            .json(&request)
            .send()
            .await?;
        let created: FoodPlate = Self::ensure_success(response).await?.json().await?;

        info!(food_id = created.id, name = %created.name, "Created food");
        Ok(created)
    }

    async fn update_food(&self, id: FoodId, food: FoodPlate) -> Result<FoodPlate, ApiError> {
        let response = self
            .build_request(Method::PUT, &format!("foods/{}", id))
            .json(&food)
            .send()
            .await?;
        let updated: FoodPlate = Self::ensure_success(response).await?.json().await?;

        info!(food_id = updated.id, "Updated food");
        Ok(updated)
    }

    async fn delete_food(&self, id: FoodId) -> Result<(), ApiError> {
        let response = self
            .build_request(Method::DELETE, &format!("foods/{}", id))
            .send()
            .await?;
        Self::ensure_success(response).await?;

        info!(food_id = id, "Deleted food");
        Ok(())
    }
}
