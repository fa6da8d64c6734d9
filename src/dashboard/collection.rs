// SPDX-License-Identifier: GPL-3.0-only
use crate::foods::{FoodId, FoodPlate};

/// Ordered local copy of the backend's food list.
///
/// Transitions are applied only with records the backend has already
/// acknowledged; nothing here talks to the network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodCollection {
    foods: Vec<FoodPlate>,
}

impl FoodCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a fresh fetch
    pub fn replace_all(&mut self, foods: Vec<FoodPlate>) {
        self.foods = foods;
    }

    pub fn append(&mut self, food: FoodPlate) {
        self.foods.push(food);
    }

    /// Swap in `food` for the record with the same id. Returns false when no
    /// such record exists; the record is not inserted in that case.
    pub fn replace(&mut self, food: FoodPlate) -> bool {
        match self.foods.iter_mut().find(|f| f.id == food.id) {
            Some(slot) => {
                *slot = food;
                true
            }
            None => false,
        }
    }

    /// Drop the record with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: FoodId) -> bool {
        let before = self.foods.len();
        self.foods.retain(|f| f.id != id);
        self.foods.len() != before
    }

    pub fn get(&self, id: FoodId) -> Option<&FoodPlate> {
        self.foods.iter().find(|f| f.id == id)
    }

    pub fn as_slice(&self) -> &[FoodPlate] {
        &self.foods
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FoodPlate> {
        self.foods.iter()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

impl From<Vec<FoodPlate>> for FoodCollection {
    fn from(foods: Vec<FoodPlate>) -> Self {
        Self { foods }
    }
}

impl<'a> IntoIterator for &'a FoodCollection {
    type Item = &'a FoodPlate;
    type IntoIter = std::slice::Iter<'a, FoodPlate>;

    fn into_iter(self) -> Self::IntoIter {
        self.foods.iter()
    }
}
