//! Weekly planning engine.
//!
//! One entry point turns a profile into a seven-day plan:
//! - Daily calorie target from the calorie model, shared by every day
//! - Workout days from a fixed mask keyed on days-per-week
//! - Workouts on active days, meals on every day
//!
//! Each call seeds its own generator, so plans are reproducible per seed and
//! independent across calls.

use crate::calories::target_calories;
use crate::meals::plan_meals;
use crate::workout::plan_workout;
use crate::{round2, Catalog, DayPlan, DayTotals, UserProfile, WeeklyPlan};
use chrono::Weekday;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Seed used when the caller does not pick one
pub const DEFAULT_SEED: u64 = 42;

pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Monday-indexed workout days for a days-per-week setting
///
/// Six or more days yields five active days; kept as-is.
pub fn workout_mask(days_per_week: u8) -> [bool; 7] {
    let pattern: [u8; 7] = match days_per_week {
        0..=3 => [1, 0, 1, 0, 1, 0, 0],
        4 => [1, 0, 1, 0, 1, 0, 1],
        5 => [1, 0, 1, 1, 0, 1, 0],
        _ => [1, 1, 1, 0, 1, 1, 0],
    };
    pattern.map(|d| d == 1)
}

/// A planner bound to one catalog
///
/// Holds no generator; every `plan` call builds a fresh one from the seed.
#[derive(Clone, Copy, Debug)]
pub struct Planner<'a> {
    catalog: &'a Catalog,
    seed: u64,
}

impl<'a> Planner<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn plan(&self, profile: &UserProfile) -> WeeklyPlan {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        plan_week_with(self.catalog, profile, &mut rng)
    }
}

/// Generate a weekly plan with a generator seeded from `seed`
pub fn generate_weekly_plan(catalog: &Catalog, profile: &UserProfile, seed: u64) -> WeeklyPlan {
    Planner::new(catalog).with_seed(seed).plan(profile)
}

/// Generate a weekly plan drawing from a caller-supplied generator
pub fn plan_week_with<R: Rng>(catalog: &Catalog, profile: &UserProfile, rng: &mut R) -> WeeklyPlan {
    let target = target_calories(profile);
    let mask = workout_mask(profile.schedule.workout_days_per_week);

    tracing::info!(
        "Planning week for {}: {} kcal/day, {} workout days",
        profile.name,
        target,
        mask.iter().filter(|d| **d).count()
    );

    let mut days = Vec::with_capacity(WEEK.len());
    for (weekday, active) in WEEK.into_iter().zip(mask) {
        let exercises = if active {
            plan_workout(catalog, profile, rng)
        } else {
            Vec::new()
        };
        let meals = plan_meals(&catalog.meals, profile, target);
        let totals = DayTotals::from_meals(&meals);

        if meals.is_empty() {
            tracing::warn!("{}: no suitable meal options", weekday);
        }

        days.push(DayPlan {
            weekday,
            rest_day: !active,
            exercises,
            meals,
            target_calories: target,
            totals,
        });
    }

    let weekly_cost = round2(days.iter().map(|d| d.totals.cost).sum());

    WeeklyPlan {
        days,
        weekly_target_calories: target * 7,
        weekly_budget: round2(profile.schedule.daily_food_budget * 7.0),
        weekly_cost,
    }
}

/// Count of each ingredient across every meal of the week
///
/// Keys are ingredient strings exactly as stored in the catalog.
pub fn shopping_list(plan: &WeeklyPlan) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for meal in plan.days.iter().flat_map(|d| &d.meals) {
        for ingredient in &meal.ingredients {
            *counts.entry(ingredient.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Everything a caller renders for one planning run
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlanReport {
    pub profile: UserProfile,
    pub seed: u64,
    pub target_calories: u32,
    pub plan: WeeklyPlan,
    pub shopping_list: BTreeMap<String, usize>,
}

impl PlanReport {
    pub fn build(planner: &Planner<'_>, profile: UserProfile) -> Self {
        let plan = planner.plan(&profile);
        let shopping_list = shopping_list(&plan);
        Self {
            target_calories: target_calories(&profile),
            seed: planner.seed(),
            profile,
            plan,
            shopping_list,
        }
    }

    /// Days that ended up with nothing to eat
    pub fn empty_meal_days(&self) -> Vec<Weekday> {
        self.plan
            .days
            .iter()
            .filter(|d| d.has_no_meals())
            .map(|d| d.weekday)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::get_default_catalog;
    use crate::input::ProfileInput;
    use crate::logging;

    fn scenario() -> UserProfile {
        ProfileInput {
            name: Some("Ravi".into()),
            age: Some(30),
            sex: Some("male".into()),
            height_cm: Some(175.0),
            weight_kg: Some(70.0),
            activity_level: Some("moderate".into()),
            experience: Some("intermediate".into()),
            goal: Some("maintain".into()),
            gym: true,
            dumbbells: true,
            workout_days_per_week: Some(4),
            minutes_per_session: Some(45),
            daily_food_budget: Some(300.0),
            region: Some("India".into()),
            ..ProfileInput::default()
        }
        .into_profile()
    }

    #[test]
    fn test_workout_masks() {
        let m = |bits: [u8; 7]| bits.map(|b| b == 1);
        assert_eq!(workout_mask(2), m([1, 0, 1, 0, 1, 0, 0]));
        assert_eq!(workout_mask(3), m([1, 0, 1, 0, 1, 0, 0]));
        assert_eq!(workout_mask(4), m([1, 0, 1, 0, 1, 0, 1]));
        assert_eq!(workout_mask(5), m([1, 0, 1, 1, 0, 1, 0]));
        assert_eq!(workout_mask(6), m([1, 1, 1, 0, 1, 1, 0]));
    }

    #[test]
    fn test_six_days_gives_five_active() {
        assert_eq!(workout_mask(6).iter().filter(|d| **d).count(), 5);
    }

    #[test]
    fn test_scenario_week() {
        logging::init_test();
        let plan = generate_weekly_plan(get_default_catalog(), &scenario(), DEFAULT_SEED);

        assert_eq!(plan.days.len(), 7);
        assert_eq!(
            plan.days.iter().map(|d| d.weekday).collect::<Vec<_>>(),
            WEEK.to_vec()
        );
        assert_eq!(
            plan.days.iter().map(|d| !d.rest_day).collect::<Vec<_>>(),
            vec![true, false, true, false, true, false, true]
        );

        assert_eq!(plan.weekly_target_calories, 2556 * 7);
        assert_eq!(plan.weekly_budget, 2100.0);
        assert_eq!(plan.weekly_cost, 1610.0);

        for day in &plan.days {
            assert_eq!(day.target_calories, 2556);
            assert_eq!(day.meals.len(), 9);
            assert_eq!(day.totals.calories, 2450);
            assert_eq!(day.totals.cost, 230.0);
            if day.rest_day {
                assert!(day.exercises.is_empty());
            } else {
                assert!((3..=10).contains(&day.exercises.len()));
            }
        }
    }

    #[test]
    fn test_same_seed_same_plan() {
        let profile = scenario();
        let a = generate_weekly_plan(get_default_catalog(), &profile, 7);
        let b = generate_weekly_plan(get_default_catalog(), &profile, 7);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_planner_matches_free_function() {
        let profile = scenario();
        let planner = Planner::new(get_default_catalog()).with_seed(11);
        assert_eq!(
            planner.plan(&profile),
            generate_weekly_plan(get_default_catalog(), &profile, 11)
        );
    }

    #[test]
    fn test_weekly_values_follow_days() {
        for days in 2..=6 {
            let mut profile = scenario();
            profile.schedule.workout_days_per_week = days;
            profile.schedule.daily_food_budget = 180.0;
            let plan = generate_weekly_plan(get_default_catalog(), &profile, 3);

            let first = plan.days[0].target_calories;
            assert!(plan.days.iter().all(|d| d.target_calories == first));
            assert_eq!(plan.weekly_target_calories, first * 7);

            let sum: f64 = plan.days.iter().map(|d| d.totals.cost).sum();
            assert!((plan.weekly_cost - sum).abs() < 0.005);

            for day in &plan.days {
                assert_eq!(day.totals, DayTotals::from_meals(&day.meals));
                assert!(day.exercises.len() <= 10);
            }
        }
    }

    #[test]
    fn test_restricted_diet_never_violated() {
        let mut profile = scenario();
        profile.diet.vegan = true;
        profile.diet.gluten_free = true;
        profile.diet.allergies = vec!["peanut".into()];
        profile.schedule.daily_food_budget = 50.0;

        let plan = generate_weekly_plan(get_default_catalog(), &profile, 1);
        for meal in plan.days.iter().flat_map(|d| &d.meals) {
            assert!(meal.vegan && meal.vegetarian && meal.gluten_free, "{}", meal.name);
            assert!(!meal.ingredients.iter().any(|i| i == "peanut"));
        }
        assert!(plan.days.iter().all(|d| d.meals.len() >= 3));
    }

    #[test]
    fn test_empty_pool_degrades_silently() {
        let mut profile = scenario();
        profile.region = "USA".into();
        profile.diet.preferred_cuisines = vec!["Mexican".into()];

        let plan = generate_weekly_plan(get_default_catalog(), &profile, DEFAULT_SEED);
        assert!(plan.days.iter().all(|d| d.has_no_meals()));
        assert!(plan.days.iter().all(|d| d.totals == DayTotals::default()));
        assert_eq!(plan.weekly_cost, 0.0);
        // Workouts are unaffected
        assert!(!plan.days[0].exercises.is_empty());
    }

    #[test]
    fn test_shopping_list_counts() {
        let plan = generate_weekly_plan(get_default_catalog(), &scenario(), DEFAULT_SEED);
        let list = shopping_list(&plan);
        assert_eq!(list["chana"], 35);
        assert_eq!(list["chicken"], 7);
        assert_eq!(list["tortilla"], 7);
        assert_eq!(list["seasonal fruit"], 7);
        assert_eq!(list["spices"], 7);
        assert!(!list.contains_key("paneer"));

        let total: usize = list.values().sum();
        let expected: usize = plan
            .days
            .iter()
            .flat_map(|d| &d.meals)
            .map(|m| m.ingredients.len())
            .sum();
        assert_eq!(total, expected);
    }

    #[test]
    fn test_shopping_list_empty_plan() {
        let mut profile = scenario();
        profile.region = "USA".into();
        profile.diet.preferred_cuisines = vec!["Mexican".into()];
        let plan = generate_weekly_plan(get_default_catalog(), &profile, DEFAULT_SEED);
        assert!(shopping_list(&plan).is_empty());
    }

    #[test]
    fn test_report() {
        let planner = Planner::new(get_default_catalog());
        let report = PlanReport::build(&planner, scenario());
        assert_eq!(report.seed, DEFAULT_SEED);
        assert_eq!(report.target_calories, 2556);
        assert_eq!(report.shopping_list, shopping_list(&report.plan));
        assert!(report.empty_meal_days().is_empty());
    }
}
