//! Recipe model
//!
//! A recipe accumulates weighted contributions from raw materials and exposes
//! its values per 100g of finished recipe.

use std::fmt;

use crate::food::{FoodError, FoodResult};
use super::{Nutrition, NutritionalElement, RawMaterial};

/// One ingredient line: a raw material and the grams used
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub material: String,
    pub grams: f64,
}

/// A recipe built from raw materials
///
/// `totals` holds the sum of `value_per_100g * grams` over all ingredients and
/// `total_grams` the sum of grams. Reading a value divides the two, which is
/// the per-100g value of the finished recipe.
///
/// Recipes are only created through [`Food::create_recipe`], so every
/// ingredient is resolved against the registry:
///
/// ```compile_fail
/// use diet::models::{RawMaterial, Recipe};
///
/// let mut recipe = Recipe::new("Outside");
/// recipe.add_material(&RawMaterial::new("Ghost", 999.0, 0.0, 0.0, 0.0), 10.0);
/// ```
///
/// [`Food::create_recipe`]: crate::food::Food::create_recipe
#[derive(Debug, Clone)]
pub struct Recipe {
    name: String,
    totals: Nutrition,
    total_grams: f64,
    ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            totals: Nutrition::zero(),
            total_grams: 0.0,
            ingredients: Vec::new(),
        }
    }

    /// Add `grams` of an already resolved raw material
    pub(crate) fn add_material(&mut self, material: &RawMaterial, grams: f64) -> &mut Self {
        self.totals += material.nutrition().scale(grams);
        self.total_grams += grams;
        self.ingredients.push(Ingredient {
            material: material.name().to_string(),
            grams,
        });
        self
    }

    /// Ingredients in the order they were added
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Total grams of all ingredients added so far
    pub fn total_grams(&self) -> f64 {
        self.total_grams
    }

    /// A recipe without weight, including one made only of 0g ingredients
    pub fn is_empty(&self) -> bool {
        self.total_grams == 0.0
    }

    /// Values per 100g, or an error while the recipe has no weight
    pub fn per_100g_values(&self) -> FoodResult<Nutrition> {
        if self.is_empty() {
            return Err(FoodError::EmptyRecipe(self.name.clone()));
        }
        Ok(self.totals.divide(self.total_grams))
    }

    /// NaN stands for "undefined" while the recipe is empty
    fn per_100g_of(&self, total: f64) -> f64 {
        if self.is_empty() {
            f64::NAN
        } else {
            total / self.total_grams
        }
    }
}

impl NutritionalElement for Recipe {
    fn name(&self) -> &str {
        &self.name
    }

    fn calories(&self) -> f64 {
        self.per_100g_of(self.totals.calories)
    }

    fn proteins(&self) -> f64 {
        self.per_100g_of(self.totals.proteins)
    }

    fn carbs(&self) -> f64 {
        self.per_100g_of(self.totals.carbs)
    }

    fn fat(&self) -> f64 {
        self.per_100g_of(self.totals.fat)
    }

    fn per_100g(&self) -> bool {
        true
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ingredient in &self.ingredients {
            writeln!(f, "{} : {:.1}", ingredient.material, ingredient.grams)?;
        }
        Ok(())
    }
}
