use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum KitchenError {
    #[error("Invalid name: {0:?}")]
    BadName(String),

    #[error("Invalid kosher type: {0}")]
    BadKosherType(String),

    #[error("Calories out of range: {0}")]
    BadCalories(i32),

    #[error("Health out of range: {0}")]
    BadHealth(i32),

    #[error("Invalid cost: {0}")]
    BadCost(f64),

    #[error("Invalid discount: {0} (expected a whole percentage between 0 and 100)")]
    BadDiscount(f64),

    #[error("Buffer too small: need {needed} bytes, got {capacity}")]
    SmallBuffer { needed: usize, capacity: usize },

    #[error("Invalid range for {field}: {min}..={max}")]
    InvalidRange {
        field: &'static str,
        min: i32,
        max: i32,
    },

    #[error("Dish capacity must be at least 1")]
    InvalidCapacity,

    #[error("Dish is full ({0} ingredients)")]
    IsFull(usize),

    #[error("{new} ({new_type}) cannot share a dish with {held} ({held_type})")]
    KosherViolation {
        new: String,
        new_type: crate::models::KosherType,
        held: String,
        held_type: crate::models::KosherType,
    },

    #[error("No ingredient at index {0}")]
    IngredientNotFound(usize),

    #[error("Dish has no ingredients")]
    IsEmpty,

    #[error("Dish was already tasted; its ingredients are locked")]
    AlreadyTasted,

    #[error("Dish was never tasted")]
    NeverTasted,

    #[error("Invalid flexibility: {0} (expected a value between 0 and 1)")]
    InvalidFlexibility(f64),

    #[error("Out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
}

pub type Result<T> = std::result::Result<T, KitchenError>;
