use std::ops::RangeInclusive;

use crate::error::{KitchenError, Result};
use crate::scoring::constants::*;

/// Validity ranges used to check ingredients and normalize their quality.
///
/// `Limits::default()` mirrors the compile-time constants. A custom set can be
/// built with [`Limits::new`], which rejects empty or zero-width ranges so
/// that normalization never divides by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Limits {
    max_name_length: usize,
    calories: RangeInclusive<i32>,
    health: RangeInclusive<i32>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_name_length: MAX_NAME_LENGTH,
            calories: MIN_CALORIES..=MAX_CALORIES,
            health: MIN_HEALTH..=MAX_HEALTH,
        }
    }
}

impl Limits {
    pub fn new(
        max_name_length: usize,
        calories: RangeInclusive<i32>,
        health: RangeInclusive<i32>,
    ) -> Result<Self> {
        if max_name_length == 0 {
            return Err(KitchenError::InvalidRange {
                field: "name length",
                min: 1,
                max: 0,
            });
        }
        check_width("calories", &calories)?;
        check_width("health", &health)?;

        Ok(Self {
            max_name_length,
            calories,
            health,
        })
    }

    pub fn max_name_length(&self) -> usize {
        self.max_name_length
    }

    pub fn calories(&self) -> &RangeInclusive<i32> {
        &self.calories
    }

    pub fn health(&self) -> &RangeInclusive<i32> {
        &self.health
    }

    /// Map a calorie count onto `0..=QUALITY_SCALE`.
    pub fn normalized_calories(&self, calories: i32) -> f64 {
        normalize(calories, &self.calories)
    }

    /// Map a health value onto `0..=QUALITY_SCALE`.
    pub fn normalized_health(&self, health: i32) -> f64 {
        normalize(health, &self.health)
    }

    /// Quality score: normalized health minus normalized calories, floored at 0.
    pub fn quality(&self, calories: i32, health: i32) -> f64 {
        (self.normalized_health(health) - self.normalized_calories(calories)).max(0.0)
    }
}

fn check_width(field: &'static str, range: &RangeInclusive<i32>) -> Result<()> {
    if range.start() >= range.end() {
        return Err(KitchenError::InvalidRange {
            field,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}

fn normalize(value: i32, range: &RangeInclusive<i32>) -> f64 {
    let min = f64::from(*range.start());
    let width = f64::from(*range.end()) - min;
    (f64::from(value) - min) * QUALITY_SCALE / width
}
