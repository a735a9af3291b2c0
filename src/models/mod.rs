pub mod ingredient;
pub mod kosher;

pub use ingredient::Ingredient;
pub use kosher::KosherType;
