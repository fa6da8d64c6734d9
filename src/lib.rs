// SPDX-License-Identifier: GPL-3.0-only
//! Data-synchronisation core of the food dashboard: a view-model that keeps
//! a local list of food plates in step with the food REST API.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod foods;
pub mod logging;
pub mod utils;

#[cfg(test)]
mod test_helpers;

pub use api::{ApiError, FoodApi, HttpFoodApi};
pub use dashboard::{Dashboard, FoodCollection, ModalState};
pub use foods::{FoodId, FoodPlate, NewFoodPlate, UpdateRequest};
