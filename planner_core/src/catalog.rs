//! Exercise and meal catalog.
//!
//! The built-in catalog is authored as TOML under `catalog/` and embedded in
//! the binary. A directory with the same two files can replace it at runtime.

use crate::types::*;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

const EXERCISES_TOML: &str = include_str!("../catalog/exercises.toml");
const MEALS_TOML: &str = include_str!("../catalog/meals.toml");

pub const EXERCISES_FILE: &str = "exercises.toml";
pub const MEALS_FILE: &str = "meals.toml";

/// Cached default catalog - parsed once and shared read-only
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_toml_strs(EXERCISES_TOML, MEALS_TOML)
        .expect("embedded catalog must parse; covered by catalog tests")
});

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds a fresh copy of the default catalog
///
/// **Note**: Prefer `get_default_catalog()`; this is for tests and for
/// callers that want to modify a copy.
pub fn build_default_catalog() -> Catalog {
    DEFAULT_CATALOG.clone()
}

#[derive(Debug, Deserialize)]
struct ExerciseFile {
    #[serde(default, rename = "exercise")]
    exercises: Vec<Exercise>,
}

#[derive(Debug, Deserialize)]
struct MealFile {
    #[serde(default, rename = "meal")]
    meals: Vec<Meal>,
}

impl Catalog {
    /// Parse a catalog from the contents of an exercises file and a meals file
    pub fn from_toml_strs(exercises: &str, meals: &str) -> Result<Self> {
        let exercises: ExerciseFile = toml::from_str(exercises)?;
        let meals: MealFile = toml::from_str(meals)?;
        Ok(Catalog {
            exercises: exercises.exercises,
            meals: meals.meals,
        })
    }

    /// Load a catalog from a directory holding `exercises.toml` and `meals.toml`
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let exercises = std::fs::read_to_string(dir.join(EXERCISES_FILE))?;
        let meals = std::fs::read_to_string(dir.join(MEALS_FILE))?;
        let catalog = Self::from_toml_strs(&exercises, &meals)?;
        tracing::info!(
            "Loaded catalog from {:?}: {} exercises, {} meals",
            dir,
            catalog.exercises.len(),
            catalog.meals.len()
        );
        Ok(catalog)
    }

    /// Load from a directory and reject it if validation finds problems
    pub fn load_validated(dir: &Path) -> Result<Self> {
        let catalog = Self::load_from_dir(dir)?;
        let errors = catalog.validate();
        if !errors.is_empty() {
            return Err(Error::CatalogValidation(errors.join("; ")));
        }
        Ok(catalog)
    }

    pub fn exercise(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.name == name)
    }

    pub fn meal(&self, name: &str) -> Option<&Meal> {
        self.meals.iter().find(|m| m.name == name)
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let mut seen = HashSet::new();
        for exercise in &self.exercises {
            if exercise.name.trim().is_empty() {
                errors.push("Exercise has empty name".to_string());
            } else if !seen.insert(exercise.name.as_str()) {
                errors.push(format!("Duplicate exercise '{}'", exercise.name));
            }
            if exercise.minutes == 0 {
                errors.push(format!("Exercise '{}' has zero minutes", exercise.name));
            }
        }

        let mut seen = HashSet::new();
        for meal in &self.meals {
            if meal.name.trim().is_empty() {
                errors.push("Meal has empty name".to_string());
            } else if !seen.insert(meal.name.as_str()) {
                errors.push(format!("Duplicate meal '{}'", meal.name));
            }
            if meal.calories == 0 {
                errors.push(format!("Meal '{}' has zero calories", meal.name));
            }
            if !meal.cost.is_finite() || meal.cost < 0.0 {
                errors.push(format!("Meal '{}' has invalid cost {}", meal.name, meal.cost));
            }
            if meal.vegan && !meal.vegetarian {
                errors.push(format!(
                    "Meal '{}' is vegan but not vegetarian",
                    meal.name
                ));
            }
            if meal.ingredients.is_empty() {
                errors.push(format!("Meal '{}' has no ingredients", meal.name));
            }
        }

        for group in MuscleGroup::ALL {
            if !self.exercises.iter().any(|e| e.muscle_group == group) {
                errors.push(format!("Catalog has no {} exercises", group.label()));
            }
        }

        errors
    }
}
