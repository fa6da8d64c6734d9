// SPDX-License-Identifier: GPL-3.0-only
use async_trait::async_trait;
use crate::api::error::ApiError;
use crate::foods::{FoodId, FoodPlate, NewFoodPlate};

#[async_trait]
pub trait FoodApi: Send + Sync {
    /// `GET /foods`
    async fn list_foods(&self) -> Result<Vec<FoodPlate>, ApiError>;

    /// `POST /foods`, sent with `available: true`.
    /// Returns the record as stored by the backend, including its new id.
    async fn create_food(&self, food: NewFoodPlate) -> Result<FoodPlate, ApiError>;

    /// `PUT /foods/{id}` with the full record
    async fn update_food(&self, id: FoodId, food: FoodPlate) -> Result<FoodPlate, ApiError>;

    /// `DELETE /foods/{id}`; the response body is ignored
    async fn delete_food(&self, id: FoodId) -> Result<(), ApiError>;
}
