//! Raw material model
//!
//! An ingredient whose nutrient values are given per 100 grams.

use serde::{Deserialize, Serialize};

use super::{Nutrition, NutritionalElement};

/// A raw material with values per 100g
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMaterial {
    name: String,
    #[serde(flatten)]
    nutrition: Nutrition,
}

impl RawMaterial {
    /// Values are stored verbatim, no validation is applied
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

impl NutritionalElement for RawMaterial {
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
        true
    }

    fn nutrition(&self) -> Nutrition {
        self.nutrition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_material_is_per_100g() {
        let sugar = RawMaterial::new("Sugar", 400.0, 0.0, 100.0, 0.0);
        assert!(sugar.per_100g());
        assert_eq!(sugar.name(), "Sugar");
        assert_eq!(sugar.calories(), 400.0);
        assert_eq!(sugar.carbs(), 100.0);
    }

    #[test]
    fn test_raw_material_keeps_negative_values() {
        let odd = RawMaterial::new("Odd", -1.0, 0.0, 0.0, -2.5);
        assert_eq!(odd.calories(), -1.0);
        assert_eq!(odd.fat(), -2.5);
    }
}
