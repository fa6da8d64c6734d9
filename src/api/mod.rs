// SPDX-License-Identifier: GPL-3.0-only
pub mod client;
pub mod error;
pub mod traits;

pub use client::HttpFoodApi;
pub use error::ApiError;
pub use traits::FoodApi;
