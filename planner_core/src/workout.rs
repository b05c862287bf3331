//! Workout selection for a single training day.
//!
//! Builds a session from the equipment-filtered catalog:
//! - Warm-up and core anchors first
//! - One exercise per main muscle group, preferring the user's level
//! - Trim to the time budget, then pad with cardio/core fillers

use crate::{Catalog, Exercise, Experience, MuscleGroup, UserProfile};
use rand::Rng;

/// Always scheduled first when the equipment filter keeps them
pub const ANCHOR_EXERCISES: [&str; 2] = ["Jumping Jacks", "Plank"];

/// One pick per group, in this order
pub const GROUP_ORDER: [MuscleGroup; 5] = [
    MuscleGroup::Push,
    MuscleGroup::Pull,
    MuscleGroup::Legs,
    MuscleGroup::FullBody,
    MuscleGroup::Cardio,
];

/// Trimming never goes below this many exercises
pub const MIN_TRIMMED_EXERCISES: usize = 3;

/// Filling never goes above this many exercises
pub const MAX_EXERCISES: usize = 10;

/// The time budget never drops below this
pub const MIN_BUDGET_MINUTES: u32 = 10;

/// Catalog exercises the profile's equipment allows, in catalog order
pub fn equipment_pool<'a>(catalog: &'a Catalog, profile: &UserProfile) -> Vec<&'a Exercise> {
    catalog
        .exercises
        .iter()
        .filter(|e| profile.equipment.satisfies(e.equipment))
        .collect()
}

/// Plan one training day
pub fn plan_workout<R: Rng>(
    catalog: &Catalog,
    profile: &UserProfile,
    rng: &mut R,
) -> Vec<Exercise> {
    let pool = equipment_pool(catalog, profile);
    let mut plan: Vec<&Exercise> = Vec::new();

    for name in ANCHOR_EXERCISES {
        if let Some(anchor) = pool.iter().copied().find(|e| e.name == name) {
            plan.push(anchor);
        }
    }

    for group in GROUP_ORDER {
        if let Some(choice) = pick_by_group(&pool, group, profile.experience, rng) {
            plan.push(choice);
        }
    }

    let budget = profile.schedule.minutes_per_session.max(MIN_BUDGET_MINUTES);
    let mut total = total_minutes(&plan);

    if total > budget {
        // Shortest first; ties keep their current order
        plan.sort_by_key(|e| e.minutes);
        while total > budget && plan.len() > MIN_TRIMMED_EXERCISES {
            let removed = plan.remove(0);
            total -= removed.minutes;
        }
        tracing::debug!("Trimmed workout to {} exercises ({} min)", plan.len(), total);
    }

    let offset_range = (pool.len() / 4).max(1);
    while total < budget && plan.len() < MAX_EXERCISES {
        let offset = rng.gen_range(0..offset_range);
        let Some(filler) = pool
            .iter()
            .copied()
            .filter(|e| matches!(e.muscle_group, MuscleGroup::Cardio | MuscleGroup::Core))
            .nth(offset)
        else {
            break;
        };
        plan.push(filler);
        total += filler.minutes;
    }

    tracing::debug!(
        "Planned workout: {} exercises, {} of {} min",
        plan.len(),
        total,
        budget
    );

    plan.into_iter().cloned().collect()
}

/// Uniform pick from a muscle group, preferring the exact experience level
///
/// Returns None (and draws nothing) when the group is empty.
pub fn pick_by_group<'a, R: Rng>(
    pool: &[&'a Exercise],
    group: MuscleGroup,
    experience: Experience,
    rng: &mut R,
) -> Option<&'a Exercise> {
    let in_group: Vec<&Exercise> = pool
        .iter()
        .copied()
        .filter(|e| e.muscle_group == group)
        .collect();
    if in_group.is_empty() {
        return None;
    }

    let at_level: Vec<&Exercise> = in_group
        .iter()
        .copied()
        .filter(|e| e.level == experience)
        .collect();
    let source = if at_level.is_empty() {
        &in_group
    } else {
        &at_level
    };

    Some(source[rng.gen_range(0..source.len())])
}

fn total_minutes(plan: &[&Exercise]) -> u32 {
    plan.iter().map(|e| e.minutes).sum()
}
