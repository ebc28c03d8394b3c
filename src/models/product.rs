//! Product model
//!
//! A packaged product whose nutrient values describe one whole unit.

use serde::{Deserialize, Serialize};

use super::{Nutrition, NutritionalElement};

/// A packaged product with values per unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    #[serde(flatten)]
    nutrition: Nutrition,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        calories: f64,
        proteins: f64,
        carbs: f64,
        fat: f64,
    ) -> Self {
        Self {
            name: name.into(),
            nutrition: Nutrition::new(calories, proteins, carbs, fat),
        }
    }
}

impl NutritionalElement for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn calories(&self) -> f64 {
        self.nutrition.calories
    }

    fn proteins(&self) -> f64 {
        self.nutrition.proteins
    }

    fn carbs(&self) -> f64 {
        self.nutrition.carbs
    }

    fn fat(&self) -> f64 {
        self.nutrition.fat
    }

    fn per_100g(&self) -> bool {
        false
    }

    fn nutrition(&self) -> Nutrition {
        self.nutrition
    }
}
