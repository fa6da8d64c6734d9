// SPDX-License-Identifier: GPL-3.0-only
use crate::foods::FoodPlate;

/// Open/closed state of the add and edit dialogs, plus the record the edit
/// dialog works on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    add_open: bool,
    edit_open: bool,
    editing_food: Option<FoodPlate>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_modal(&mut self) {
        self.add_open = !self.add_open;
    }

    pub fn toggle_edit_modal(&mut self) {
        self.edit_open = !self.edit_open;
    }

    /// Select `food` for editing and flip the edit dialog.
    pub fn edit_food(&mut self, food: FoodPlate) {
        self.editing_food = Some(food);
        self.toggle_edit_modal();
    }

    pub fn is_modal_open(&self) -> bool {
        self.add_open
    }

    pub fn is_edit_modal_open(&self) -> bool {
        self.edit_open
    }

    /// Snapshot taken when editing started. Not refreshed by later syncs.
    pub fn editing_food(&self) -> Option<&FoodPlate> {
        self.editing_food.as_ref()
    }
}
