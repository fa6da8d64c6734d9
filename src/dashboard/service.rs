// SPDX-License-Identifier: GPL-3.0-only
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::api::{ApiError, FoodApi};
use crate::dashboard::collection::FoodCollection;
use crate::dashboard::modal::ModalState;
use crate::foods::{FoodId, FoodPlate, NewFoodPlate, UpdateRequest};

/// View-model behind the food dashboard.
///
/// Every mutation waits for the backend to acknowledge it before touching
/// the local list. Failed mutations are logged and leave the list as it was.
pub struct Dashboard {
    api: Arc<dyn FoodApi>,
    foods: FoodCollection,
    modals: ModalState,
}

impl Dashboard {
    pub fn new(api: Arc<dyn FoodApi>) -> Self {
        Self {
            api,
            foods: FoodCollection::new(),
            modals: ModalState::new(),
        }
    }

    /// Fetch the full list and replace local state with it.
    ///
    /// Unlike the mutations, a failure here is returned to the caller and
    /// not swallowed.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        let foods = self.api.list_foods().await?;
        info!(count = foods.len(), "Loaded foods");
        self.foods.replace_all(foods);
        Ok(())
    }

    /// Create a food (always as available) and append the backend's copy.
    pub async fn add(&mut self, food: NewFoodPlate) -> Option<FoodPlate> {
        match self.api.create_food(food).await {
            Ok(created) => {
                info!(food_id = created.id, "Added food");
                self.foods.append(created.clone());
                Some(created)
            }
            Err(e) => {
                error!(error = %e, "Failed to add food");
                None
            }
        }
    }

    /// Merge `patch` onto the food selected with [`Dashboard::edit_food`],
    /// send the result, and swap in the backend's copy.
    pub async fn update(&mut self, patch: UpdateRequest) -> Option<FoodPlate> {
        let Some(editing) = self.modals.editing_food() else {
            warn!("Update requested with no food selected for editing");
            return None;
        };

        // merged onto the selection snapshot, which may be older than self.foods
        let id = editing.id;
        let merged = patch.apply_to(editing);

        match self.api.update_food(id, merged).await {
            Ok(updated) => {
                if !self.foods.replace(updated.clone()) {
                    warn!(food_id = updated.id, "Updated food is no longer in the local list");
                }
                info!(food_id = updated.id, "Updated food");
                Some(updated)
            }
            Err(e) => {
                error!(error = %e, food_id = id, "Failed to update food");
                None
            }
        }
    }

    /// Delete on the backend, then drop the local copy.
    pub async fn delete(&mut self, id: FoodId) -> bool {
        match self.api.delete_food(id).await {
            Ok(()) => {
                self.foods.remove(id);
                info!(food_id = id, "Deleted food");
                true
            }
            Err(e) => {
                error!(error = %e, food_id = id, "Failed to delete food");
                false
            }
        }
    }

    pub fn toggle_modal(&mut self) {
        self.modals.toggle_modal();
    }

    pub fn toggle_edit_modal(&mut self) {
        self.modals.toggle_edit_modal();
    }

    pub fn edit_food(&mut self, food: FoodPlate) {
        self.modals.edit_food(food);
    }

    pub fn foods(&self) -> &[FoodPlate] {
        self.foods.as_slice()
    }

    pub fn collection(&self) -> &FoodCollection {
        &self.foods
    }

    pub fn modals(&self) -> &ModalState {
        &self.modals
    }

    pub fn editing_food(&self) -> Option<&FoodPlate> {
        self.modals.editing_food()
    }

    pub fn api(&self) -> &Arc<dyn FoodApi> {
        &self.api
    }
}
