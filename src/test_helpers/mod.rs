// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::sync::Mutex;

use crate::api::{ApiError, FoodApi};
use crate::config::Config;
use crate::foods::{CreateFoodRequest, FoodId, FoodPlate, NewFoodPlate};

/// Build a food with predictable fields derived from `id` and `name`
pub fn food(id: FoodId, name: &str) -> FoodPlate {
    FoodPlate {
        id,
        name: name.to_string(),
        image: format!("https://example.com/foods/{}.png", id),
        price: format!("{}.90", id * 10),
        description: format!("{} description", name),
        available: true,
    }
}

/// Create a test configuration pointing at `api_base_url`
pub fn create_test_config(api_base_url: &str) -> Config {
    Config {
        api_base_url: api_base_url.to_string(),
        api_key: None,
        request_timeout_secs: Some(5),
        log_level: "error".to_string(), // Reduce log noise in tests
        log_json: false,
    }
}

/// In-memory stand-in for the food backend.
#[derive(Default)]
pub struct MemoryFoodApi {
    foods: Mutex<Vec<FoodPlate>>,
    reject_with: Mutex<Option<StatusCode>>,
    sent_updates: Mutex<Vec<(FoodId, FoodPlate)>>,
}

impl MemoryFoodApi {
    pub fn with_foods(foods: Vec<FoodPlate>) -> Self {
        Self {
            foods: Mutex::new(foods),
            ..Default::default()
        }
    }

    /// Make every following request fail with `status`
    pub async fn reject_with(&self, status: StatusCode) {
        *self.reject_with.lock().await = Some(status);
    }

    pub async fn set_foods(&self, foods: Vec<FoodPlate>) {
        *self.foods.lock().await = foods;
    }

    pub async fn backend_foods(&self) -> Vec<FoodPlate> {
        self.foods.lock().await.clone()
    }

    /// Every `(id, body)` pair that reached `update_food`
    pub async fn sent_updates(&self) -> Vec<(FoodId, FoodPlate)> {
        self.sent_updates.lock().await.clone()
    }

    async fn check_rejected(&self) -> Result<(), ApiError> {
        match *self.reject_with.lock().await {
            Some(status) => Err(ApiError::Status {
                status,
                body: "rejected by test backend".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl FoodApi for MemoryFoodApi {
    async fn list_foods(&self) -> Result<Vec<FoodPlate>, ApiError> {
        self.check_rejected().await?;
        Ok(self.foods.lock().await.clone())
    }

    async fn create_food(&self, food: NewFoodPlate) -> Result<FoodPlate, ApiError> {
        self.check_rejected().await?;

        let request = CreateFoodRequest::from(food);
        let mut foods = self.foods.lock().await;
        let id = foods.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        let created = FoodPlate {
            id,
            name: request.food.name,
            image: request.food.image,
            price: request.food.price,
            description: request.food.description,
            available: request.available,
        };
        foods.push(created.clone());
        Ok(created)
    }

    async fn update_food(&self, id: FoodId, food: FoodPlate) -> Result<FoodPlate, ApiError> {
        self.check_rejected().await?;
        self.sent_updates.lock().await.push((id, food.clone()));

        let mut foods = self.foods.lock().await;
        match foods.iter_mut().find(|f| f.id == id) {
            Some(slot) => {
                *slot = FoodPlate { id, ..food };
                Ok(slot.clone())
            }
            None => Err(ApiError::Status {
                status: StatusCode::NOT_FOUND,
                body: String::new(),
            }),
        }
    }

    async fn delete_food(&self, id: FoodId) -> Result<(), ApiError> {
        self.check_rejected().await?;
        self.foods.lock().await.retain(|f| f.id != id);
        Ok(())
    }
}
