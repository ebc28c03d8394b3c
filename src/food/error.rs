//! Registry error types

use std::fmt;

use thiserror::Error;

/// Which registry table a name belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    RawMaterial,
    Product,
    Recipe,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::RawMaterial => "raw material",
            ElementKind::Product => "product",
            ElementKind::Recipe => "recipe",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FoodError {
    #[error("Unknown {kind}: {name}")]
    ReferenceNotFound { kind: ElementKind, name: String },

    #[error("Duplicate {kind} name: {name}")]
    DuplicateName { kind: ElementKind, name: String },

    #[error("Recipe has no weight: {0}")]
    EmptyRecipe(String),

    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(String),
}

/// Result type for registry operations
pub type FoodResult<T> = Result<T, FoodError>;
