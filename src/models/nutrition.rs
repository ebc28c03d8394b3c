//! Shared nutrition data structure
//!
//! Used by raw materials, products, recipes and menus.

use serde::{Deserialize, Serialize};

/// The four tracked nutrient values
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64, // kcal
    pub proteins: f64, // grams
    pub carbs: f64,    // grams
    pub fat: f64,      // grams
}

impl Nutrition {
    pub fn new(calories: f64, proteins: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            proteins,
            carbs,
            fat,
        }
    }

    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            proteins: self.proteins * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
        }
    }

    /// Divide every value by the same divisor
    pub fn divide(&self, divisor: f64) -> Self {
        Self {
            calories: self.calories / divisor,
            proteins: self.proteins / divisor,
            carbs: self.carbs / divisor,
            fat: self.fat / divisor,
        }
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            proteins: self.proteins + other.proteins,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::ops::AddAssign for Nutrition {
    fn add_assign(&mut self, other: Nutrition) {
        *self = Nutrition::add(self, &other);
    }
}

impl std::ops::Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, multiplier: f64) -> Nutrition {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_and_add() {
        let n = Nutrition::new(100.0, 10.0, 20.0, 5.0);
        let doubled = n * 2.0;
        assert_eq!(doubled, Nutrition::new(200.0, 20.0, 40.0, 10.0));

        let total = n + doubled;
        assert_eq!(total, Nutrition::new(300.0, 30.0, 60.0, 15.0));
    }

    #[test]
    fn test_sum_of_empty_iterator_is_zero() {
        let total: Nutrition = Vec::<Nutrition>::new().into_iter().sum();
        assert_eq!(total, Nutrition::zero());
    }

    #[test]
    fn test_divide() {
        let n = Nutrition::new(5000.0, 500.0, 0.0, 250.0).divide(50.0);
        assert_eq!(n, Nutrition::new(100.0, 10.0, 0.0, 5.0));
    }
}
