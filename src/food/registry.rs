//! Food registry
//!
//! Owns every raw material, product and recipe, in registration order.
//! Names are unique within each collection.

use tracing::{debug, warn};

use crate::models::{Menu, NutritionalElement, Product, RawMaterial, Recipe};
use crate::nutrition::to_grams;
use super::{ElementKind, FoodError, FoodResult};

/// Registry of raw materials, products and recipes
#[derive(Debug, Clone, Default)]
pub struct Food {
    raw_materials: Vec<RawMaterial>,
    products: Vec<Product>,
    recipes: Vec<Recipe>,
}

/// Borrow every element sorted by name, leaving registration order untouched
fn sorted_by_name<T: NutritionalElement>(items: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| a.name().cmp(b.name()));
    sorted
}

/// First element with exactly this name
fn find_by_name<'a, T: NutritionalElement>(items: &'a [T], name: &str) -> Option<&'a T> {
    items.iter().find(|item| item.name() == name)
}

fn ensure_unique<T: NutritionalElement>(
    items: &[T],
    kind: ElementKind,
    name: &str,
) -> FoodResult<()> {
    if find_by_name(items, name).is_some() {
        warn!("Rejected duplicate {} '{}'", kind, name);
        return Err(FoodError::DuplicateName {
            kind,
            name: name.to_string(),
        });
    }
    Ok(())
}

impl Food {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a new raw material, values given per 100g
    pub fn define_raw_material(
        &mut self,
        name: impl Into<String>,
        calories: f64,
        proteins: f64,
        carbs: f64,
        fat: f64,
    ) -> FoodResult<()> {
        let name = name.into();
        ensure_unique(&self.raw_materials, ElementKind::RawMaterial, &name)?;

        debug!("Defined raw material '{}'", name);
        self.raw_materials.push(RawMaterial::new(name, calories, proteins, carbs, fat));
        Ok(())
    }

    /// All raw materials sorted by name
    pub fn raw_materials(&self) -> Vec<&RawMaterial> {
        sorted_by_name(&self.raw_materials)
    }

    pub fn get_raw_material(&self, name: &str) -> Option<&RawMaterial> {
        find_by_name(&self.raw_materials, name)
    }

    /// Define a new packaged product, values given per unit
    pub fn define_product(
        &mut self,
        name: impl Into<String>,
        calories: f64,
        proteins: f64,
        carbs: f64,
        fat: f64,
    ) -> FoodResult<()> {
        let name = name.into();
        ensure_unique(&self.products, ElementKind::Product, &name)?;

        debug!("Defined product '{}'", name);
        self.products.push(Product::new(name, calories, proteins, carbs, fat));
        Ok(())
    }

    /// All products sorted by name
    pub fn products(&self) -> Vec<&Product> {
        sorted_by_name(&self.products)
    }

    pub fn get_product(&self, name: &str) -> Option<&Product> {
        find_by_name(&self.products, name)
    }

    /// Create an empty recipe and return an editor for adding ingredients
    ///
    /// ```
    /// use diet::food::{Food, FoodResult};
    /// use diet::models::NutritionalElement;
    ///
    /// fn main() -> FoodResult<()> {
    ///     let mut food = Food::new();
    ///     food.define_raw_material("Flour", 364.0, 10.0, 76.0, 1.0)?;
    ///     food.define_raw_material("Water", 0.0, 0.0, 0.0, 0.0)?;
    ///
    ///     food.create_recipe("Dough")?
    ///         .add_ingredient("Flour", 300.0)?
    ///         .add_ingredient("Water", 200.0)?;
    ///
    ///     let dough = food.get_recipe("Dough").unwrap();
    ///     assert!((dough.calories() - 218.4).abs() < 0.001);
    ///     Ok(())
    /// }
    /// ```
    pub fn create_recipe(&mut self, name: impl Into<String>) -> FoodResult<RecipeEditor<'_>> {
        let name = name.into();
        ensure_unique(&self.recipes, ElementKind::Recipe, &name)?;

        debug!("Created recipe '{}'", name);
        self.recipes.push(Recipe::new(name));
        let index = self.recipes.len() - 1;
        Ok(RecipeEditor { food: self, index })
    }

    /// Reopen an existing recipe to add more ingredients
    pub fn edit_recipe(&mut self, name: &str) -> Option<RecipeEditor<'_>> {
        let index = self.recipes.iter().position(|r| r.name() == name)?;
        Some(RecipeEditor { food: self, index })
    }

    /// All recipes sorted by name
    pub fn recipes(&self) -> Vec<&Recipe> {
        sorted_by_name(&self.recipes)
    }

    pub fn get_recipe(&self, name: &str) -> Option<&Recipe> {
        find_by_name(&self.recipes, name)
    }

    /// Create a menu that resolves its items against this registry
    ///
    /// Menus are not stored in the registry.
    pub fn create_menu(&self, name: impl Into<String>) -> Menu<'_> {
        Menu::new(name, self)
    }
}

/// Adds ingredients to one recipe owned by a [`Food`] registry
///
/// Holds the registry mutably so ingredient names can be resolved against the
/// raw-material table while the recipe is updated.
#[derive(Debug)]
pub struct RecipeEditor<'food> {
    food: &'food mut Food,
    index: usize,
}

impl RecipeEditor<'_> {
    pub fn recipe(&self) -> &Recipe {
        &self.food.recipes[self.index]
    }

    pub fn name(&self) -> &str {
        self.recipe().name()
    }

    /// Add `grams` of the named raw material
    ///
    /// Fails with [`FoodError::ReferenceNotFound`] and leaves the recipe
    /// untouched if no such raw material is registered.
    pub fn add_ingredient(&mut self, material: &str, grams: f64) -> FoodResult<&mut Self> {
        let food = &mut *self.food;

        let Some(raw) = find_by_name(&food.raw_materials, material) else {
            warn!(
                "Recipe '{}' references unknown raw material '{}'",
                food.recipes[self.index].name(),
                material
            );
            return Err(FoodError::ReferenceNotFound {
                kind: ElementKind::RawMaterial,
                name: material.to_string(),
            });
        };

        let recipe = &mut food.recipes[self.index];
        recipe.add_material(raw, grams);
        debug!("Added {}g of '{}' to recipe '{}'", grams, material, recipe.name());

        Ok(self)
    }

    /// Add a quantity of the named raw material expressed in any weight unit
    ///
    /// `unit` may be a plain weight unit ("kg", "oz") or an annotated one
    /// such as "slice (28g)".
    pub fn add_ingredient_in(
        &mut self,
        material: &str,
        quantity: f64,
        unit: &str,
    ) -> FoodResult<&mut Self> {
        let grams = to_grams(quantity, unit)
            .ok_or_else(|| FoodError::UnsupportedUnit(unit.to_string()))?;
        self.add_ingredient(material, grams)
    }
}
