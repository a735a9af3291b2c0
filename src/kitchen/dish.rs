use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{KitchenError, Result};
use crate::models::Ingredient;

/// A dish: a bounded, ordered list of ingredients plus tasting statistics.
///
/// Rules enforced by every mutator:
/// - never more than `capacity` ingredients;
/// - no Meaty ingredient alongside a Milky one;
/// - once tasted, the ingredient list is frozen.
///
/// Strings and ingredients handed in are owned by the dish from then on.
/// `Dish` is not `Clone`: [`Dish::duplicate`] makes a copy that starts
/// untasted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dish {
    pub(super) name: String,
    pub(super) cook: String,
    pub(super) capacity: usize,
    pub(super) ingredients: Vec<Ingredient>,
    pub(super) times_tasted: u64,
    pub(super) times_liked: u64,
}

impl Dish {
    /// Create an empty, untasted dish that can hold up to `capacity` ingredients.
    pub fn new(name: impl Into<String>, cook: impl Into<String>, capacity: usize) -> Result<Self> {
        if capacity < 1 {
            return Err(KitchenError::InvalidCapacity);
        }

        let mut ingredients: Vec<Ingredient> = Vec::new();
        ingredients.try_reserve_exact(capacity)?;

        Ok(Self {
            name: name.into(),
            cook: cook.into(),
            capacity,
            ingredients,
            times_tasted: 0,
            times_liked: 0,
        })
    }

    /// Copy name, cook, capacity and ingredients into a dish nobody has tasted.
    pub fn duplicate(&self) -> Result<Self> {
        let mut copy = Dish::new(self.name.as_str(), self.cook.as_str(), self.capacity)?;
        copy.ingredients.extend(self.ingredients.iter().cloned());

        debug!(
            dish = %self.name,
            ingredients = copy.ingredients.len(),
            "Dish duplicated"
        );
        Ok(copy)
    }

    /// Current dish name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the dish; allowed even after tasting.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!(old = %self.name, new = %name, "Dish renamed");
        self.name = name;
    }

    /// Cook given at creation.
    pub fn cook(&self) -> &str {
        &self.cook
    }

    /// Maximum number of ingredients.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of ingredients held.
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// Check if the dish holds no ingredients.
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Check if no more ingredients fit.
    pub fn is_full(&self) -> bool {
        self.ingredients.len() >= self.capacity
    }

    /// Held ingredients, in the order they were added.
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Get the ingredient at `index`, if held.
    pub fn ingredient(&self, index: usize) -> Option<&Ingredient> {
        self.ingredients.get(index)
    }

    /// Append an ingredient.
    ///
    /// Rejections, in order: the dish is full, the ingredient clashes with
    /// any held ingredient, the dish was already tasted.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> Result<()> {
        self.check_addable(&ingredient).inspect_err(|e| {
            debug!(dish = %self.name, ingredient = %ingredient.name(), error = %e, "Add rejected");
        })?;

        debug!(dish = %self.name, ingredient = %ingredient.name(), "Ingredient added");
        self.ingredients.push(ingredient);
        Ok(())
    }

    fn check_addable(&self, ingredient: &Ingredient) -> Result<()> {
        if self.is_full() {
            return Err(KitchenError::IsFull(self.capacity));
        }
        if let Some(held) = self
            .ingredients
            .iter()
            .find(|held| !ingredient.is_compatible_with(held))
        {
            return Err(KitchenError::KosherViolation {
                new: ingredient.name().to_string(),
                new_type: ingredient.kosher_type(),
                held: held.name().to_string(),
                held_type: held.kosher_type(),
            });
        }
        if self.is_tasted() {
            return Err(KitchenError::AlreadyTasted);
        }
        Ok(())
    }

    /// Remove the ingredient at `index`, shifting later ones down.
    ///
    /// An unknown index is reported before the tasted-lock.
    pub fn remove_ingredient(&mut self, index: usize) -> Result<Ingredient> {
        if index >= self.ingredients.len() {
            debug!(dish = %self.name, index, "Remove rejected: no such ingredient");
            return Err(KitchenError::IngredientNotFound(index));
        }
        if self.is_tasted() {
            debug!(dish = %self.name, index, "Remove rejected: already tasted");
            return Err(KitchenError::AlreadyTasted);
        }

        let removed = self.ingredients.remove(index);
        debug!(dish = %self.name, ingredient = %removed.name(), index, "Ingredient removed");
        Ok(removed)
    }

    /// Whether any two held ingredients share exactly the same name.
    pub fn has_duplicate_ingredients(&self) -> Result<bool> {
        if self.ingredients.is_empty() {
            return Err(KitchenError::IsEmpty);
        }

        let found = self.ingredients.iter().enumerate().any(|(i, a)| {
            self.ingredients[i + 1..]
                .iter()
                .any(|b| a.name() == b.name())
        });
        Ok(found)
    }
}

impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} ({}/{} ingredients, tasted {} times)",
            self.name,
            self.cook,
            self.ingredients.len(),
            self.capacity,
            self.times_tasted
        )
    }
}
