//! Meal selection for a single day.
//!
//! 1. Filter the catalog by diet flags, allergies/dislikes and cuisine
//! 2. Seed with a protein-dense, a carb-dense, a breakfast and a snack item
//! 3. Fill cheapest-first toward the calorie target within budget
//! 4. Repair by dropping the least efficient meals while over budget or target
//!
//! An empty pool is not an error: the day simply has no meals.

use crate::{DayTotals, Meal, UserProfile};
use std::cmp::Ordering;

pub const BREAKFAST_KEYWORDS: [&str; 8] = [
    "oats", "poha", "upma", "dosa", "idli", "paratha", "omelette", "smoothie",
];

pub const SNACK_KEYWORDS: [&str; 7] = [
    "chana", "sprouts", "nuts", "curd", "yogurt", "fruit", "salad",
];

/// Keep filling while more than this far under target
pub const FILL_SHORTFALL_KCAL: u32 = 150;

/// A fill item may overshoot the remaining gap by this much
pub const FILL_SLACK_KCAL: u32 = 250;

pub const MAX_FILL_ITERATIONS: usize = 20;

/// Repair kicks in above target plus this margin
pub const REPAIR_OVERSHOOT_KCAL: u32 = 200;

/// Repair never goes below this many meals
pub const MIN_REPAIRED_MEALS: usize = 3;

/// The Indian-cuisine fallback applies to this region
const FALLBACK_REGION: &str = "india";
const FALLBACK_CUISINE: &str = "indian";

/// Whether a meal passes the profile's diet flags and ingredient exclusions
pub fn diet_allows(profile: &UserProfile, meal: &Meal) -> bool {
    let diet = &profile.diet;
    if diet.vegan && !meal.vegan
        || diet.vegetarian && !meal.vegetarian
        || diet.halal && !meal.halal
        || diet.lactose_free && !meal.lactose_free
        || diet.gluten_free && !meal.gluten_free
    {
        return false;
    }

    let mut excluded = diet.allergies.iter().chain(&diet.disliked_ingredients);
    !excluded.any(|term| meal.ingredients.iter().any(|i| same_text(i, term)))
}

/// Case-insensitive comparison that also folds non-ASCII letters ("Ñ" = "ñ")
fn same_text(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Whether a meal's cuisine fits the profile's preferences
///
/// No preferences admit everything. Users in India also get any cuisine
/// tagged "...Indian" even if not listed.
pub fn cuisine_allows(profile: &UserProfile, meal: &Meal) -> bool {
    let preferred = &profile.diet.preferred_cuisines;
    if preferred.is_empty() {
        return true;
    }
    if preferred.iter().any(|c| same_text(c, &meal.cuisine)) {
        return true;
    }
    profile.region.to_lowercase() == FALLBACK_REGION
        && meal.cuisine.to_lowercase().contains(FALLBACK_CUISINE)
}

/// Catalog meals the profile may eat, in catalog order
pub fn meal_pool<'a>(meals: &'a [Meal], profile: &UserProfile) -> Vec<&'a Meal> {
    meals
        .iter()
        .filter(|m| diet_allows(profile, m))
        .filter(|m| cuisine_allows(profile, m))
        .collect()
}

/// Heuristic for which meal to drop first: calorie- and cost-heavy, protein-light
pub fn removal_score(meal: &Meal) -> f64 {
    meal.calories as f64 * 0.002 - meal.protein_g as f64 * 0.05 + meal.cost * 0.02
}

fn protein_density(meal: &Meal) -> f64 {
    meal.protein_g as f64 / meal.calories.max(1) as f64
}

fn carb_density(meal: &Meal) -> f64 {
    meal.carbs_g as f64 / meal.calories.max(1) as f64
}

fn name_has_keyword(meal: &Meal, keywords: &[&str]) -> bool {
    let name = meal.name.to_lowercase();
    keywords.iter().any(|k| name.contains(k))
}

/// Pool items are distinct catalog entries, so identity is pointer identity
fn contains(day: &[&Meal], meal: &Meal) -> bool {
    day.iter().any(|m| std::ptr::eq(*m, meal))
}

/// Add the highest-`key` pool meal not already chosen
fn push_top_by<'a>(pool: &[&'a Meal], day: &mut Vec<&'a Meal>, key: fn(&Meal) -> f64) {
    let mut ranked = pool.to_vec();
    // Stable: equal keys keep catalog order
    ranked.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
    if let Some(pick) = ranked.into_iter().find(|m| !contains(day.as_slice(), m)) {
        day.push(pick);
    }
}

/// Add the first pool meal whose name has one of `keywords`, unless already chosen
fn push_first_named<'a>(pool: &[&'a Meal], day: &mut Vec<&'a Meal>, keywords: &[&str]) {
    if let Some(pick) = pool.iter().copied().find(|m| name_has_keyword(m, keywords)) {
        if !contains(day, pick) {
            day.push(pick);
        }
    }
}

/// Plan one day's meals against a calorie target and the daily budget
pub fn plan_meals(meals: &[Meal], profile: &UserProfile, target_calories: u32) -> Vec<Meal> {
    let pool = meal_pool(meals, profile);
    if pool.is_empty() {
        tracing::warn!("No meals pass the diet and cuisine filters");
        return Vec::new();
    }

    let mut day: Vec<&Meal> = Vec::new();
    push_top_by(&pool, &mut day, protein_density);
    push_top_by(&pool, &mut day, carb_density);
    push_first_named(&pool, &mut day, &BREAKFAST_KEYWORDS);
    push_first_named(&pool, &mut day, &SNACK_KEYWORDS);

    let budget = profile.schedule.daily_food_budget;
    let target = target_calories as i64;
    let mut kcal: i64 = day.iter().map(|m| m.calories as i64).sum();
    let mut cost: f64 = day.iter().map(|m| m.cost).sum();

    let mut by_cost = pool.clone();
    by_cost.sort_by(|a, b| a.cost.partial_cmp(&b.cost).unwrap_or(Ordering::Equal));

    let mut iterations = 0;
    while kcal < target - FILL_SHORTFALL_KCAL as i64
        && cost <= budget
        && iterations < MAX_FILL_ITERATIONS
    {
        let gap = target - kcal;
        let budget_left = budget - cost;
        let Some(add) = by_cost
            .iter()
            .copied()
            .find(|m| m.cost <= budget_left && (m.calories as i64) <= gap + FILL_SLACK_KCAL as i64)
        else {
            break;
        };
        day.push(add);
        kcal += add.calories as i64;
        cost += add.cost;
        iterations += 1;
    }

    let over = |kcal: i64, cost: f64| {
        cost > budget || kcal > target + REPAIR_OVERSHOOT_KCAL as i64
    };
    while over(kcal, cost) && day.len() > MIN_REPAIRED_MEALS {
        let Some(worst) = index_of_highest_score(&day) else {
            break;
        };
        let removed = day.remove(worst);
        kcal -= removed.calories as i64;
        cost -= removed.cost;
        tracing::debug!("Dropped '{}' to fit budget/target", removed.name);
    }

    let chosen: Vec<Meal> = day.into_iter().cloned().collect();
    let totals = DayTotals::from_meals(&chosen);
    tracing::debug!(
        "Planned {} meals: {} of {} kcal, cost {:.2} of {:.2}",
        chosen.len(),
        totals.calories,
        target_calories,
        totals.cost,
        budget
    );
    chosen
}

/// Highest removal score; among equal scores the latest meal goes first
fn index_of_highest_score(day: &[&Meal]) -> Option<usize> {
    day.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            removal_score(a)
                .partial_cmp(&removal_score(b))
                .unwrap_or(Ordering::Equal)
        })
        .map(|(i, _)| i)
}
