// SPDX-License-Identifier: GPL-3.0-only
pub mod collection;
pub mod modal;
pub mod service;

pub use collection::FoodCollection;
pub use modal::ModalState;
pub use service::Dashboard;
