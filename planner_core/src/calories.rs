//! Daily calorie target.
//!
//! Mifflin–St Jeor BMR, scaled by an activity factor, shifted by the goal,
//! rounded and clamped. The same target applies to every day of the week.

use crate::{ActivityLevel, Goal, Sex, UserProfile};

pub const MIN_TARGET_CALORIES: u32 = 1400;
pub const MAX_TARGET_CALORIES: u32 = 3500;

/// Basal metabolic rate in kcal/day
pub fn bmr(sex: Sex, weight_kg: f64, height_cm: f64, age: i32) -> f64 {
    let sex_offset = match sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64 + sex_offset
}

pub fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

pub fn goal_adjustment(goal: Goal) -> f64 {
    match goal {
        Goal::LoseFat => -400.0,
        Goal::Maintain => 0.0,
        Goal::GainMuscle => 300.0,
    }
}

/// Daily calorie target for a profile, always within [1400, 3500]
pub fn target_calories(profile: &UserProfile) -> u32 {
    let tdee = bmr(
        profile.sex,
        profile.weight_kg,
        profile.height_cm,
        profile.age,
    ) * activity_factor(profile.activity_level);
    let target = (tdee + goal_adjustment(profile.goal)).round();

    // NaN from garbage input lands on the floor
    if target.is_nan() {
        return MIN_TARGET_CALORIES;
    }
    target.clamp(MIN_TARGET_CALORIES as f64, MAX_TARGET_CALORIES as f64) as u32
}
