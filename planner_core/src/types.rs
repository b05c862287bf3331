//! Core domain types for the weekly planner.
//!
//! This module defines the fundamental types used throughout the system:
//! - The user profile and its parts (diet, equipment, schedule)
//! - Catalog entries (exercises and meals)
//! - Plan output (day plans and the weekly plan)

use chrono::Weekday;
use serde::{Deserialize, Serialize};

// ============================================================================
// Profile Types
// ============================================================================

/// Biological sex used by the BMR formula
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

/// Day-to-day activity outside of planned workouts
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

/// Training experience tier, also used as an exercise's minimum level
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

/// Body composition goal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseFat,
    Maintain,
    GainMuscle,
}

/// Dietary restrictions and tastes
///
/// Term sets are matched case-insensitively by the meal selector.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct DietPreference {
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub lactose_free: bool,
    #[serde(default)]
    pub gluten_free: bool,
    #[serde(default)]
    pub halal: bool,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub disliked_ingredients: Vec<String>,
    #[serde(default)]
    pub preferred_cuisines: Vec<String>,
}

/// Equipment the user has access to
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Equipment {
    #[serde(default)]
    pub gym: bool,
    #[serde(default)]
    pub dumbbells: bool,
    #[serde(default)]
    pub resistance_bands: bool,
    #[serde(default)]
    pub yoga_mat: bool,
    #[serde(default)]
    pub outdoor_running: bool,
}

impl Equipment {
    /// Whether an exercise with the given requirement can be performed
    pub fn satisfies(&self, requirement: EquipmentRequirement) -> bool {
        match requirement {
            EquipmentRequirement::None => true,
            EquipmentRequirement::Dumbbells => self.dumbbells || self.gym,
            EquipmentRequirement::Bands => self.resistance_bands || self.gym,
            EquipmentRequirement::Gym => self.gym,
        }
    }
}

pub const MIN_WORKOUT_DAYS: u8 = 2;
pub const MAX_WORKOUT_DAYS: u8 = 6;
pub const MIN_SESSION_MINUTES: u32 = 20;
pub const MAX_SESSION_MINUTES: u32 = 90;

/// Weekly training schedule and food budget
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Schedule {
    pub workout_days_per_week: u8,
    pub minutes_per_session: u32,
    /// Daily food budget in the user's currency
    pub daily_food_budget: f64,
}

impl Schedule {
    /// Build a schedule with days and minutes clamped to their supported ranges
    pub fn clamped(workout_days_per_week: i64, minutes_per_session: i64, daily_food_budget: f64) -> Self {
        Self {
            workout_days_per_week: workout_days_per_week
                .clamp(MIN_WORKOUT_DAYS as i64, MAX_WORKOUT_DAYS as i64)
                as u8,
            minutes_per_session: minutes_per_session
                .clamp(MIN_SESSION_MINUTES as i64, MAX_SESSION_MINUTES as i64)
                as u32,
            daily_food_budget,
        }
    }
}

/// Everything the planner knows about a user
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub age: i32,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub experience: Experience,
    pub goal: Goal,
    pub diet: DietPreference,
    pub equipment: Equipment,
    pub schedule: Schedule,
    pub region: String,
}

// ============================================================================
// Catalog Types
// ============================================================================

/// Muscle group an exercise trains
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Push,
    Pull,
    Legs,
    FullBody,
    Cardio,
    Core,
}

impl MuscleGroup {
    pub const ALL: [MuscleGroup; 6] = [
        MuscleGroup::Push,
        MuscleGroup::Pull,
        MuscleGroup::Legs,
        MuscleGroup::FullBody,
        MuscleGroup::Cardio,
        MuscleGroup::Core,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MuscleGroup::Push => "Push",
            MuscleGroup::Pull => "Pull",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::FullBody => "Full Body",
            MuscleGroup::Cardio => "Cardio",
            MuscleGroup::Core => "Core",
        }
    }
}

/// Equipment an exercise needs
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentRequirement {
    None,
    Dumbbells,
    Bands,
    Gym,
}

impl EquipmentRequirement {
    pub fn label(&self) -> &'static str {
        match self {
            EquipmentRequirement::None => "none",
            EquipmentRequirement::Dumbbells => "dumbbells",
            EquipmentRequirement::Bands => "bands",
            EquipmentRequirement::Gym => "gym",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

impl Intensity {
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Moderate => "moderate",
            Intensity::High => "high",
        }
    }
}

/// A catalog exercise (e.g., "DB Row")
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub equipment: EquipmentRequirement,
    pub intensity: Intensity,
    pub minutes: u32,
    pub level: Experience,
    #[serde(default)]
    pub outdoor: bool,
}

/// A catalog meal with per-serving nutrition and cost
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    pub name: String,
    pub cuisine: String,
    pub vegetarian: bool,
    pub vegan: bool,
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
    pub cost: f64,
    #[serde(default = "default_true")]
    pub halal: bool,
    #[serde(default)]
    pub lactose_free: bool,
    #[serde(default)]
    pub gluten_free: bool,
    pub ingredients: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// The complete catalog of exercises and meals
///
/// Entries keep their authored order; selection depends on it.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub exercises: Vec<Exercise>,
    pub meals: Vec<Meal>,
}

// ============================================================================
// Plan Types
// ============================================================================

/// Aggregated nutrition and cost for a list of meals
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct DayTotals {
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
    pub cost: f64,
}

impl DayTotals {
    /// Exact sums over the given meals, with cost rounded to cents
    pub fn from_meals(meals: &[Meal]) -> Self {
        let mut totals = meals.iter().fold(DayTotals::default(), |mut acc, m| {
            acc.calories += m.calories;
            acc.protein_g += m.protein_g;
            acc.carbs_g += m.carbs_g;
            acc.fat_g += m.fat_g;
            acc.cost += m.cost;
            acc
        });
        totals.cost = round2(totals.cost);
        totals
    }
}

/// One day of the weekly plan
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    pub weekday: Weekday,
    pub rest_day: bool,
    pub exercises: Vec<Exercise>,
    pub meals: Vec<Meal>,
    pub target_calories: u32,
    pub totals: DayTotals,
}

impl DayPlan {
    pub fn workout_minutes(&self) -> u32 {
        self.exercises.iter().map(|e| e.minutes).sum()
    }

    /// True when filtering left nothing to eat for this day
    pub fn has_no_meals(&self) -> bool {
        self.meals.is_empty()
    }
}

/// Seven Monday-indexed days plus weekly aggregates derived from them
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeeklyPlan {
    pub days: Vec<DayPlan>,
    pub weekly_target_calories: u32,
    pub weekly_budget: f64,
    pub weekly_cost: f64,
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
