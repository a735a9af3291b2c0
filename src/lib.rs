pub mod error;
pub mod kitchen;
pub mod models;
pub mod scoring;

pub use error::{KitchenError, Result};
pub use kitchen::Dish;
pub use models::{Ingredient, KosherType};
pub use scoring::Limits;
