//! Nutritional element capability
//!
//! Raw materials, products, recipes and menus all expose the same read-only
//! view of their nutrient values through [`NutritionalElement`].

use super::Nutrition;

/// Read-only view over anything that carries nutrient values
///
/// Whether the values describe 100 grams or one whole unit is told by
/// [`NutritionalElement::per_100g`].
pub trait NutritionalElement {
    fn name(&self) -> &str;

    /// Calories (kcal)
    fn calories(&self) -> f64;

    /// Proteins (grams)
    fn proteins(&self) -> f64;

    /// Carbohydrates (grams)
    fn carbs(&self) -> f64;

    /// Fat (grams)
    fn fat(&self) -> f64;

    /// True if the values refer to 100g, false if they refer to one unit
    fn per_100g(&self) -> bool;

    /// All four values bundled together
    fn nutrition(&self) -> Nutrition {
        Nutrition::new(self.calories(), self.proteins(), self.carbs(), self.fat())
    }
}

/// Sum the calories of a collection of elements, whatever their kind
pub fn total_calories<'a, E, I>(elements: I) -> f64
where
    E: NutritionalElement + ?Sized + 'a,
    I: IntoIterator<Item = &'a E>,
{
    elements.into_iter().map(|e| e.calories()).sum()
}

/// Sum all nutrient values of a collection of elements
pub fn total_nutrition<'a, E, I>(elements: I) -> Nutrition
where
    E: NutritionalElement + ?Sized + 'a,
    I: IntoIterator<Item = &'a E>,
{
    elements.into_iter().map(|e| e.nutrition()).sum()
}
