// SPDX-License-Identifier: GPL-3.0-only
use serde::{Deserialize, Serialize};

pub type FoodId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodPlate {
    /// Identifier assigned by the backend
    pub id: FoodId,

    /// Display name of the dish
    pub name: String,

    /// Image URL
    pub image: String,

    /// Price, kept as the decimal text the backend sends
    pub price: String,

    pub description: String,

    /// Whether the dish can currently be ordered
    pub available: bool,
}

/// Fields the add form collects. The backend assigns `id`, and
/// availability is always sent as `true`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFoodPlate {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

impl NewFoodPlate {
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            price: price.into(),
            description: description.into(),
        }
    }
}

/// Body of `POST /foods`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateFoodRequest {
    #[serde(flatten)]
    pub food: NewFoodPlate,
    pub available: bool,
}

impl From<NewFoodPlate> for CreateFoodRequest {
    fn from(food: NewFoodPlate) -> Self {
        Self {
            food,
            available: true,
        }
    }
}

/// Changed fields from the edit form. Unset fields keep the value of the
/// record being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl UpdateRequest {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.image.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.available.is_none()
    }

    /// Merge the set fields onto `base`. The id always comes from `base`.
    pub fn apply_to(&self, base: &FoodPlate) -> FoodPlate {
        FoodPlate {
            id: base.id,
            name: self.name.clone().unwrap_or_else(|| base.name.clone()),
            image: self.image.clone().unwrap_or_else(|| base.image.clone()),
            price: self.price.clone().unwrap_or_else(|| base.price.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| base.description.clone()),
            available: self.available.unwrap_or(base.available),
        }
    }
}
