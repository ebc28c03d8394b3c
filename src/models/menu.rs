//! Menu model
//!
//! A menu sums portions of recipes (weighed in grams) and whole units of
//! products. Its values describe the entire menu, not 100g of it.

use serde::Serialize;
use tracing::{debug, warn};

use crate::food::{ElementKind, Food, FoodError, FoodResult};
use super::{Nutrition, NutritionalElement};

/// One entry of a menu
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuItem {
    Recipe { name: String, grams: f64 },
    Product { name: String, units: u32 },
}

/// A menu whose items are resolved against a [`Food`] registry
///
/// Built with [`Food::create_menu`]:
///
/// ```compile_fail
/// use diet::food::Food;
/// use diet::models::Menu;
///
/// let food = Food::new();
/// let menu = Menu::new("Outside", &food);
/// ```
#[derive(Debug, Clone)]
pub struct Menu<'food> {
    name: String,
    food: &'food Food,
    totals: Nutrition,
    items: Vec<MenuItem>,
}

fn not_found(kind: ElementKind, menu: &str, name: &str) -> FoodError {
    warn!("Menu '{}' references unknown {} '{}'", menu, kind, name);
    FoodError::ReferenceNotFound {
        kind,
        name: name.to_string(),
    }
}

impl<'food> Menu<'food> {
    pub(crate) fn new(name: impl Into<String>, food: &'food Food) -> Self {
        Self {
            name: name.into(),
            food,
            totals: Nutrition::zero(),
            items: Vec::new(),
        }
    }

    /// Add `grams` of the named recipe
    ///
    /// The recipe must exist and have at least one ingredient.
    pub fn add_recipe(&mut self, recipe: &str, grams: f64) -> FoodResult<&mut Self> {
        let found = self
            .food
            .get_recipe(recipe)
            .ok_or_else(|| not_found(ElementKind::Recipe, &self.name, recipe))?;
        let per_100g = found.per_100g_values()?;

        self.totals += per_100g.scale(grams).divide(100.0);
        self.items.push(MenuItem::Recipe {
            name: recipe.to_string(),
            grams,
        });
        debug!("Added {}g of recipe '{}' to menu '{}'", grams, recipe, self.name);
        Ok(self)
    }

    /// Add one unit of the named product
    pub fn add_product(&mut self, product: &str) -> FoodResult<&mut Self> {
        self.add_products(product, 1)
    }

    /// Add several units of the named product
    pub fn add_products(&mut self, product: &str, units: u32) -> FoodResult<&mut Self> {
        let found = self
            .food
            .get_product(product)
            .ok_or_else(|| not_found(ElementKind::Product, &self.name, product))?;

        self.totals += found.nutrition().scale(f64::from(units));
        self.items.push(MenuItem::Product {
            name: product.to_string(),
            units,
        });
        debug!("Added {} x product '{}' to menu '{}'", units, product, self.name);
        Ok(self)
    }

    /// Items in the order they were added
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

impl NutritionalElement for Menu<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn calories(&self) -> f64 {
        self.totals.calories
    }

    fn proteins(&self) -> f64 {
        self.totals.proteins
    }

    fn carbs(&self) -> f64 {
        self.totals.carbs
    }

    fn fat(&self) -> f64 {
        self.totals.fat
    }

    fn per_100g(&self) -> bool {
        false
    }

    fn nutrition(&self) -> Nutrition {
        self.totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kitchen() -> Food {
        let mut food = Food::new();
        food.define_raw_material("Pasta", 350.0, 12.0, 72.0, 1.5).unwrap();
        food.define_raw_material("Tomato", 20.0, 1.0, 4.0, 0.0).unwrap();
        food.define_product("Juice", 90.0, 0.5, 21.0, 0.0).unwrap();
        food.define_product("Yogurt", 60.0, 5.0, 7.0, 1.0).unwrap();
        food.create_recipe("Pasta al pomodoro")
            .unwrap()
            .add_ingredient("Pasta", 100.0)
            .unwrap()
            .add_ingredient("Tomato", 100.0)
            .unwrap();
        food.create_recipe("Nothing yet").unwrap();
        food.create_recipe("Pinch")
            .unwrap()
            .add_ingredient("Tomato", 0.0)
            .unwrap();
        food
    }

    #[test]
    fn test_menu_totals() {
        let food = kitchen();
        let mut menu = food.create_menu("Lunch");
        menu.add_recipe("Pasta al pomodoro", 300.0)
            .unwrap()
            .add_product("Juice")
            .unwrap()
            .add_products("Yogurt", 2)
            .unwrap();

        // recipe is 185 kcal/100g, 300g of it is 555 kcal
        assert!((menu.calories() - (555.0 + 90.0 + 120.0)).abs() < 0.001);
        assert!((menu.proteins() - (19.5 + 0.5 + 10.0)).abs() < 0.001);
        assert!(!menu.per_100g());
        assert_eq!(menu.name(), "Lunch");
        assert_eq!(menu.items().len(), 3);
    }

    #[test]
    fn test_empty_menu_is_zero() {
        let food = kitchen();
        let menu = food.create_menu("Fasting");
        assert_eq!(menu.nutrition(), Nutrition::zero());
        assert!(!menu.per_100g());
    }

    #[test]
    fn test_unknown_items_leave_menu_unchanged() {
        let food = kitchen();
        let mut menu = food.create_menu("Dinner");
        menu.add_product("Juice").unwrap();

        let err = menu.add_recipe("Lasagne", 200.0).map(|_| ()).unwrap_err();
        assert_eq!(
            err,
            FoodError::ReferenceNotFound {
                kind: ElementKind::Recipe,
                name: "Lasagne".to_string(),
            }
        );

        let err = menu.add_product("Pasta").map(|_| ()).unwrap_err();
        assert!(matches!(err, FoodError::ReferenceNotFound { kind: ElementKind::Product, .. }));

        assert_eq!(menu.calories(), 90.0);
        assert_eq!(menu.items().len(), 1);
    }

    #[test]
    fn test_empty_recipe_in_menu_is_rejected() {
        let food = kitchen();
        let mut menu = food.create_menu("Dinner");

        let err = menu.add_recipe("Nothing yet", 100.0).map(|_| ()).unwrap_err();
        assert_eq!(err, FoodError::EmptyRecipe("Nothing yet".to_string()));
        assert_eq!(menu.calories(), 0.0);
    }

    #[test]
    fn test_zero_weight_recipe_in_menu_is_rejected() {
        let food = kitchen();
        assert_eq!(food.get_recipe("Pinch").unwrap().ingredients().len(), 1);

        let mut menu = food.create_menu("Dinner");
        let err = menu.add_recipe("Pinch", 50.0).map(|_| ()).unwrap_err();
        assert_eq!(err.to_string(), "Recipe has no weight: Pinch");
        assert!(menu.items().is_empty());
    }
}
