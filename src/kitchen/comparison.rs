use crate::error::{KitchenError, Result};
use crate::kitchen::Dish;
use crate::scoring::Limits;

impl Dish {
    /// Mean ingredient quality on the default scale.
    pub fn quality(&self) -> Result<f64> {
        self.quality_with(&Limits::default())
    }

    /// Mean ingredient quality, summed in held order.
    pub fn quality_with(&self, limits: &Limits) -> Result<f64> {
        if self.ingredients.is_empty() {
            return Err(KitchenError::IsEmpty);
        }
        let total: f64 = self
            .ingredients
            .iter()
            .map(|ing| ing.quality_with(limits))
            .sum();
        Ok(total / self.ingredients.len() as f64)
    }

    /// Sum of the held ingredients' costs, recomputed on every call.
    pub fn total_cost(&self) -> f64 {
        self.ingredients.iter().map(|ing| ing.cost()).sum()
    }

    /// Whether this dish beats `other` on quality without costing too much more.
    ///
    /// `flexibility` (0..=1) is how much more, as a fraction of `other`'s cost,
    /// the caller will pay: 0.4 accepts up to 40% extra. Requires strictly
    /// higher quality and `cost <= other_cost * (1 + flexibility)`.
    pub fn is_better(&self, other: &Dish, flexibility: f64) -> Result<bool> {
        self.is_better_with(other, flexibility, &Limits::default())
    }

    /// Same as [`Dish::is_better`], with both qualities measured under `limits`.
    pub fn is_better_with(&self, other: &Dish, flexibility: f64, limits: &Limits) -> Result<bool> {
        if !(0.0..=1.0).contains(&flexibility) {
            return Err(KitchenError::InvalidFlexibility(flexibility));
        }

        let quality = self.quality_with(limits)?;
        let other_quality = other.quality_with(limits)?;

        let higher_quality = quality > other_quality;
        let affordable = self.total_cost() <= other.total_cost() * (1.0 + flexibility);

        Ok(higher_quality && affordable)
    }
}
