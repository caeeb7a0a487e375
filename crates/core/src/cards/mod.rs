//! Cards module - the tradable catalog.

mod cards_model;
mod cards_service;
mod cards_traits;

pub use cards_model::{Card, NewCard};
pub use cards_service::CardService;
pub use cards_traits::{CardRepositoryTrait, CardServiceTrait};
