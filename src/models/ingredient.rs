use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{KitchenError, Result};
use crate::models::KosherType;
use crate::scoring::Limits;

/// A single ingredient with dietary, nutritional and cost data.
///
/// Instances only exist in a valid state: every constructor checks the
/// configured ranges. The cost is the one field that may change afterwards,
/// through [`Ingredient::change_cost`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", try_from = "IngredientRecord")]
pub struct Ingredient {
    name: String,
    kosher_type: KosherType,
    calories: i32,
    health: i32,
    cost: f64,
}

/// Unchecked wire shape; converted through the same validation as `new`.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct IngredientRecord {
    name: String,
    kosher_type: KosherType,
    calories: i32,
    health: i32,
    cost: f64,
}

impl TryFrom<IngredientRecord> for Ingredient {
    type Error = KitchenError;

    fn try_from(r: IngredientRecord) -> Result<Self> {
        Ingredient::new(r.name, r.kosher_type, r.calories, r.health, r.cost)
    }
}

impl Ingredient {
    /// Build an ingredient checked against the default [`Limits`].
    ///
    /// Checks run in field order and the first failure is returned:
    /// name, calories, health, cost.
    pub fn new(
        name: impl Into<String>,
        kosher_type: KosherType,
        calories: i32,
        health: i32,
        cost: f64,
    ) -> Result<Self> {
        Self::with_limits(name, kosher_type, calories, health, cost, &Limits::default())
    }

    /// Build an ingredient checked against custom limits.
    pub fn with_limits(
        name: impl Into<String>,
        kosher_type: KosherType,
        calories: i32,
        health: i32,
        cost: f64,
        limits: &Limits,
    ) -> Result<Self> {
        let name = name.into();
        let len = name.chars().count();
        if len == 0 || len > limits.max_name_length() {
            return Err(KitchenError::BadName(name));
        }
        if !limits.calories().contains(&calories) {
            return Err(KitchenError::BadCalories(calories));
        }
        if !limits.health().contains(&health) {
            return Err(KitchenError::BadHealth(health));
        }
        if !cost.is_finite() || cost < 0.0 {
            return Err(KitchenError::BadCost(cost));
        }

        Ok(Self {
            name,
            kosher_type,
            calories,
            health,
            cost,
        })
    }

    /// Ingredient name, exactly as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Copy the name out for a destination holding `capacity` bytes.
    ///
    /// The destination must fit the UTF-8 name plus a terminator byte.
    pub fn name_for_buffer(&self, capacity: usize) -> Result<String> {
        let needed = self.name.len() + 1;
        if capacity < needed {
            return Err(KitchenError::SmallBuffer { needed, capacity });
        }
        Ok(self.name.clone())
    }

    /// Dietary category.
    pub fn kosher_type(&self) -> KosherType {
        self.kosher_type
    }

    /// Calories per serving.
    pub fn calories(&self) -> i32 {
        self.calories
    }

    /// Health score.
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Current cost, after any discount.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Set a new cost: `base_cost` reduced by `discount_percent`.
    ///
    /// e.g. a base of 300 with a 20% discount gives 240. Both the base and the
    /// discounted cost must be positive (`BadCost`, checked first); the
    /// discount must be a whole number in 0..=100 (`BadDiscount`). The cost is
    /// left untouched on error.
    pub fn change_cost(&mut self, base_cost: f64, discount_percent: f64) -> Result<()> {
        let discounted = base_cost * (1.0 - discount_percent / 100.0);
        if !base_cost.is_finite() || base_cost <= 0.0 {
            return Err(KitchenError::BadCost(base_cost));
        }
        if !discounted.is_finite() || discounted <= 0.0 {
            return Err(KitchenError::BadCost(discounted));
        }
        if discount_percent.fract() != 0.0 || !(0.0..=100.0).contains(&discount_percent) {
            return Err(KitchenError::BadDiscount(discount_percent));
        }

        debug!(
            ingredient = %self.name,
            old = self.cost,
            new = discounted,
            "Ingredient cost changed"
        );
        self.cost = discounted;
        Ok(())
    }

    /// Quality on the default scale; see [`Ingredient::quality_with`].
    pub fn quality(&self) -> f64 {
        self.quality_with(&Limits::default())
    }

    /// Normalized health minus normalized calories, floored at 0.
    pub fn quality_with(&self, limits: &Limits) -> f64 {
        limits.quality(self.calories, self.health)
    }

    /// Strictly cheaper than `other`; equal costs are not cheaper.
    pub fn is_cheaper(&self, other: &Ingredient) -> bool {
        self.cost < other.cost
    }

    fn has_fewer_calories(&self, other: &Ingredient) -> bool {
        self.calories < other.calories
    }

    fn is_healthier(&self, other: &Ingredient) -> bool {
        self.health > other.health
    }

    /// Cheaper, lighter and healthier than `other`, all strictly.
    pub fn is_better(&self, other: &Ingredient) -> bool {
        self.is_cheaper(other) && self.has_fewer_calories(other) && self.is_healthier(other)
    }

    /// Whether both ingredients may go into the same dish.
    pub fn is_compatible_with(&self, other: &Ingredient) -> bool {
        self.kosher_type.is_compatible_with(other.kosher_type)
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} cal, health {}, cost {:.2}",
            self.name, self.kosher_type, self.calories, self.health, self.cost
        )
    }
}
