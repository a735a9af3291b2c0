use tracing::debug;

use crate::error::{KitchenError, Result};
use crate::kitchen::Dish;

impl Dish {
    /// Record one tasting. Never blocked, even on an already-tasted dish.
    ///
    /// Counters saturate, so a maxed-out dish stays tasted.
    pub fn taste(&mut self, liked: bool) {
        self.times_tasted = self.times_tasted.saturating_add(1);
        if liked {
            self.times_liked = self.times_liked.saturating_add(1);
        }
        debug!(
            dish = %self.name,
            liked,
            tasted = self.times_tasted,
            "Dish tasted"
        );
    }

    /// Tasted at least once; the ingredient list is frozen from then on.
    pub fn is_tasted(&self) -> bool {
        self.times_tasted > 0
    }

    /// Number of tastings recorded so far.
    pub fn times_tasted(&self) -> u64 {
        self.times_tasted
    }

    /// Number of tastings that liked the dish.
    pub fn times_liked(&self) -> u64 {
        self.times_liked
    }

    /// Share of tastings that liked the dish.
    pub fn tastiness(&self) -> Result<f64> {
        if self.times_tasted == 0 {
            return Err(KitchenError::NeverTasted);
        }
        Ok(self.times_liked as f64 / self.times_tasted as f64)
    }
}
