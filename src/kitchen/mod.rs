mod comparison;
mod dish;
mod tasting;

pub use dish::Dish;
