//! Profile input adapter.
//!
//! `ProfileInput` is the loose, form-shaped view of a user profile that both
//! the interactive prompts and profile files produce: free-text enums,
//! comma-separated term lists, missing fields. `into_profile` turns it into a
//! strict `UserProfile`, clamping and defaulting instead of failing.

use crate::config::ProfileDefaults;
use crate::{
    ActivityLevel, DietPreference, Equipment, Error, Experience, Goal, Result, Schedule, Sex,
    UserProfile,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A list of terms given either as `"a, b"` or as `["a", "b"]`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TermList {
    Csv(String),
    List(Vec<String>),
}

impl TermList {
    fn terms(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            TermList::Csv(s) => s.split(',').collect(),
            TermList::List(items) => items.iter().map(String::as_str).collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl From<&str> for TermList {
    fn from(s: &str) -> Self {
        TermList::Csv(s.to_string())
    }
}

/// Raw profile answers, as typed by a user or stored in a profile file
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ProfileInput {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub sex: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub activity_level: Option<String>,
    pub experience: Option<String>,
    pub goal: Option<String>,

    pub vegetarian: bool,
    pub vegan: bool,
    pub lactose_free: bool,
    pub gluten_free: bool,
    pub halal: bool,
    pub allergies: Option<TermList>,
    pub disliked_ingredients: Option<TermList>,
    pub preferred_cuisines: Option<TermList>,

    pub gym: bool,
    pub dumbbells: bool,
    pub resistance_bands: bool,
    pub yoga_mat: bool,
    pub outdoor_running: bool,

    pub workout_days_per_week: Option<i64>,
    pub minutes_per_session: Option<i64>,
    pub daily_food_budget: Option<f64>,

    pub region: Option<String>,
}

impl ProfileInput {
    /// Load profile answers from a `.json` or `.toml` file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let input = if is_json {
            serde_json::from_str(&contents)?
        } else {
            toml::from_str(&contents).map_err(|e| {
                Error::Profile(format!("Failed to parse profile {:?}: {}", path, e))
            })?
        };

        tracing::info!("Loaded profile from {:?}", path);
        Ok(input)
    }

    /// Convert using the built-in fallback answers
    pub fn into_profile(self) -> UserProfile {
        self.into_profile_with(&ProfileDefaults::default())
    }

    /// Convert, filling blanks from `defaults`
    pub fn into_profile_with(self, defaults: &ProfileDefaults) -> UserProfile {
        let diet = DietPreference {
            vegetarian: self.vegetarian,
            vegan: self.vegan,
            lactose_free: self.lactose_free,
            gluten_free: self.gluten_free,
            halal: self.halal,
            allergies: lowercase_terms(self.allergies.as_ref()),
            disliked_ingredients: lowercase_terms(self.disliked_ingredients.as_ref()),
            preferred_cuisines: self
                .preferred_cuisines
                .as_ref()
                .map(TermList::terms)
                .unwrap_or_default(),
        };

        let equipment = Equipment {
            gym: self.gym,
            dumbbells: self.dumbbells,
            resistance_bands: self.resistance_bands,
            yoga_mat: self.yoga_mat,
            outdoor_running: self.outdoor_running,
        };

        let schedule = Schedule::clamped(
            self.workout_days_per_week
                .unwrap_or(defaults.workout_days_per_week),
            self.minutes_per_session
                .unwrap_or(defaults.minutes_per_session),
            self.daily_food_budget.unwrap_or(defaults.daily_food_budget),
        );

        UserProfile {
            name: non_blank(self.name).unwrap_or_else(|| defaults.name.clone()),
            age: self.age.unwrap_or(defaults.age),
            sex: parse_sex(self.sex.as_deref()),
            height_cm: self.height_cm.unwrap_or(defaults.height_cm),
            weight_kg: self.weight_kg.unwrap_or(defaults.weight_kg),
            activity_level: parse_activity(self.activity_level.as_deref()),
            experience: parse_experience(self.experience.as_deref()),
            goal: parse_goal(self.goal.as_deref()),
            diet,
            equipment,
            schedule,
            region: non_blank(self.region).unwrap_or_else(|| defaults.region.clone()),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn lowercase_terms(list: Option<&TermList>) -> Vec<String> {
    list.map(TermList::terms)
        .unwrap_or_default()
        .into_iter()
        .map(|t| t.to_lowercase())
        .collect()
}

/// Lowercase and fold spaces/dashes into underscores ("Very Active" → "very_active")
fn normalize(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .replace(['-', ' '], "_")
}

/// Anything starting with "f" is female; everything else, including blank, is male
pub fn parse_sex(value: Option<&str>) -> Sex {
    match value.map(normalize) {
        Some(s) if s.starts_with('f') => Sex::Female,
        _ => Sex::Male,
    }
}

/// Unknown or missing levels fall back to sedentary
pub fn parse_activity(value: Option<&str>) -> ActivityLevel {
    let Some(raw) = value else {
        return ActivityLevel::Sedentary;
    };
    match normalize(raw).as_str() {
        "sedentary" => ActivityLevel::Sedentary,
        "light" => ActivityLevel::Light,
        "moderate" => ActivityLevel::Moderate,
        "active" => ActivityLevel::Active,
        "very" | "very_active" => ActivityLevel::VeryActive,
        other => {
            tracing::warn!("Unknown activity level '{}', using sedentary", other);
            ActivityLevel::Sedentary
        }
    }
}

/// Unknown or missing tiers fall back to beginner
pub fn parse_experience(value: Option<&str>) -> Experience {
    let Some(raw) = value else {
        return Experience::Beginner;
    };
    match normalize(raw).as_str() {
        "beginner" => Experience::Beginner,
        "intermediate" => Experience::Intermediate,
        "advanced" => Experience::Advanced,
        other => {
            tracing::warn!("Unknown experience '{}', using beginner", other);
            Experience::Beginner
        }
    }
}

/// Unknown or missing goals fall back to maintain (no calorie adjustment)
///
/// A blank goal is never read as lose-fat: a missing answer must not cut
/// calories.
pub fn parse_goal(value: Option<&str>) -> Goal {
    let Some(raw) = value else {
        return Goal::Maintain;
    };
    match normalize(raw).as_str() {
        "lose" | "lose_fat" => Goal::LoseFat,
        "maintain" => Goal::Maintain,
        "gain" | "gain_muscle" => Goal::GainMuscle,
        other => {
            tracing::warn!("Unknown goal '{}', using maintain", other);
            Goal::Maintain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_uses_defaults() {
        let profile = ProfileInput::default().into_profile();
        assert_eq!(profile.name, "Student");
        assert_eq!(profile.age, 20);
        assert_eq!(profile.sex, Sex::Male);
        assert_eq!(profile.height_cm, 170.0);
        assert_eq!(profile.weight_kg, 65.0);
        assert_eq!(profile.activity_level, ActivityLevel::Sedentary);
        assert_eq!(profile.experience, Experience::Beginner);
        assert_eq!(profile.goal, Goal::Maintain);
        assert_eq!(profile.schedule.workout_days_per_week, 4);
        assert_eq!(profile.schedule.minutes_per_session, 45);
        assert_eq!(profile.schedule.daily_food_budget, 250.0);
        assert_eq!(profile.region, "India");
        assert_eq!(profile.diet, DietPreference::default());
        assert_eq!(profile.equipment, Equipment::default());
    }

    #[test]
    fn test_schedule_is_clamped() {
        let low = ProfileInput {
            workout_days_per_week: Some(0),
            minutes_per_session: Some(5),
            ..ProfileInput::default()
        }
        .into_profile();
        assert_eq!(low.schedule.workout_days_per_week, 2);
        assert_eq!(low.schedule.minutes_per_session, 20);

        let high = ProfileInput {
            workout_days_per_week: Some(9),
            minutes_per_session: Some(300),
            ..ProfileInput::default()
        }
        .into_profile();
        assert_eq!(high.schedule.workout_days_per_week, 6);
        assert_eq!(high.schedule.minutes_per_session, 90);
    }

    #[test]
    fn test_term_lists_are_split_and_normalized() {
        let profile = ProfileInput {
            allergies: Some(" Peanut, EGG ,,".into()),
            disliked_ingredients: Some(TermList::List(vec!["Tofu ".into(), "".into()])),
            preferred_cuisines: Some("South Indian, Western".into()),
            ..ProfileInput::default()
        }
        .into_profile();

        assert_eq!(profile.diet.allergies, vec!["peanut", "egg"]);
        assert_eq!(profile.diet.disliked_ingredients, vec!["tofu"]);
        // Cuisine case is kept; matching is case-insensitive later
        assert_eq!(profile.diet.preferred_cuisines, vec!["South Indian", "Western"]);
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!(parse_sex(Some("F")), Sex::Female);
        assert_eq!(parse_sex(Some("female")), Sex::Female);
        assert_eq!(parse_sex(Some("M")), Sex::Male);
        assert_eq!(parse_sex(Some("other")), Sex::Male);
        assert_eq!(parse_sex(None), Sex::Male);

        assert_eq!(parse_activity(Some("Very Active")), ActivityLevel::VeryActive);
        assert_eq!(parse_activity(Some("very")), ActivityLevel::VeryActive);
        assert_eq!(parse_activity(Some("MODERATE")), ActivityLevel::Moderate);
        assert_eq!(parse_activity(Some("couch")), ActivityLevel::Sedentary);

        assert_eq!(parse_experience(Some("Advanced")), Experience::Advanced);
        assert_eq!(parse_experience(Some("pro")), Experience::Beginner);

        assert_eq!(parse_goal(Some("gain")), Goal::GainMuscle);
        assert_eq!(parse_goal(Some("LOSE_FAT")), Goal::LoseFat);
        assert_eq!(parse_goal(Some("lose-fat")), Goal::LoseFat);
        assert_eq!(parse_goal(Some("bulk")), Goal::Maintain);
    }

    #[test]
    fn test_custom_defaults() {
        let defaults = ProfileDefaults {
            name: "Asha".into(),
            region: "USA".into(),
            daily_food_budget: 20.0,
            ..ProfileDefaults::default()
        };
        let profile = ProfileInput {
            name: Some("   ".into()),
            ..ProfileInput::default()
        }
        .into_profile_with(&defaults);
        assert_eq!(profile.name, "Asha");
        assert_eq!(profile.region, "USA");
        assert_eq!(profile.schedule.daily_food_budget, 20.0);
    }

    #[test]
    fn test_load_toml_profile() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("me.toml");
        std::fs::write(
            &path,
            r#"
name = "Ravi"
age = 30
sex = "male"
height_cm = 175.0
weight_kg = 70.0
activity_level = "moderate"
experience = "intermediate"
goal = "maintain"
gym = true
dumbbells = true
allergies = ["peanut"]
preferred_cuisines = "South Indian"
workout_days_per_week = 4
minutes_per_session = 45
daily_food_budget = 300.0
region = "India"
"#,
        )
        .unwrap();

        let profile = ProfileInput::load_from(&path).unwrap().into_profile();
        assert_eq!(profile.name, "Ravi");
        assert_eq!(profile.experience, Experience::Intermediate);
        assert!(profile.equipment.gym);
        assert!(!profile.equipment.resistance_bands);
        assert_eq!(profile.diet.allergies, vec!["peanut"]);
        assert_eq!(profile.diet.preferred_cuisines, vec!["South Indian"]);
        assert_eq!(profile.schedule.daily_food_budget, 300.0);
    }

    #[test]
    fn test_load_json_profile() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("me.json");
        std::fs::write(
            &path,
            r#"{"name": "Mei", "sex": "F", "vegan": true, "disliked_ingredients": "Soy, tofu"}"#,
        )
        .unwrap();

        let profile = ProfileInput::load_from(&path).unwrap().into_profile();
        assert_eq!(profile.name, "Mei");
        assert_eq!(profile.sex, Sex::Female);
        assert!(profile.diet.vegan);
        assert_eq!(profile.diet.disliked_ingredients, vec!["soy", "tofu"]);
    }

    #[test]
    fn test_malformed_profile_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("bad.toml");
        std::fs::write(&path, "age = \"thirty\"").unwrap();

        assert!(matches!(
            ProfileInput::load_from(&path),
            Err(Error::Profile(_))
        ));
    }
}
