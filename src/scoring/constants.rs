/// Maximum ingredient name length, in characters.
pub const MAX_NAME_LENGTH: usize = 40;

/// Calorie range accepted for an ingredient (inclusive).
pub const MIN_CALORIES: i32 = 0;
pub const MAX_CALORIES: i32 = 2000;

/// Health range accepted for an ingredient (inclusive).
pub const MIN_HEALTH: i32 = 0;
pub const MAX_HEALTH: i32 = 10;

/// Upper end of the quality scale; quality is floored at 0.
pub const QUALITY_SCALE: f64 = 10.0;

// Quality normalization divides by these widths.
const _: () = assert!(MAX_CALORIES > MIN_CALORIES, "calorie range must not be empty");
const _: () = assert!(MAX_HEALTH > MIN_HEALTH, "health range must not be empty");
const _: () = assert!(MAX_NAME_LENGTH >= 1);
