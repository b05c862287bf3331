//! Console rendering of a planning run.

use planner_core::{Catalog, DayPlan, PlanReport, UserProfile};
use std::collections::BTreeMap;

pub fn print_report(report: &PlanReport) {
    print_summary(report);
    print_workouts(&report.plan.days);
    print_meals(&report.plan.days);
    print_shopping_list(&report.shopping_list);
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

fn print_profile(p: &UserProfile) {
    println!("Name: {}", p.name);
    println!(
        "Age: {}  Sex: {:?}  Height: {:.1} cm  Weight: {:.1} kg",
        p.age, p.sex, p.height_cm, p.weight_kg
    );
    println!(
        "Goal: {:?}  Activity: {:?}  Experience: {:?}",
        p.goal, p.activity_level, p.experience
    );
    let d = &p.diet;
    println!(
        "Diet: vegetarian {}, vegan {}, lactose-free {}, gluten-free {}, halal {}",
        yes_no(d.vegetarian),
        yes_no(d.vegan),
        yes_no(d.lactose_free),
        yes_no(d.gluten_free),
        yes_no(d.halal)
    );
    println!(
        "  Allergies: {}  Dislikes: {}  Cuisines: {}",
        join_or_none(&d.allergies),
        join_or_none(&d.disliked_ingredients),
        join_or_none(&d.preferred_cuisines)
    );
    let e = &p.equipment;
    println!(
        "Equipment: gym {}, dumbbells {}, bands {}, mat {}, outdoor {}",
        yes_no(e.gym),
        yes_no(e.dumbbells),
        yes_no(e.resistance_bands),
        yes_no(e.yoga_mat),
        yes_no(e.outdoor_running)
    );
    println!(
        "Schedule: {} days/week, {} min/session",
        p.schedule.workout_days_per_week, p.schedule.minutes_per_session
    );
    println!("Region: {}", p.region);
}

fn print_summary(report: &PlanReport) {
    let plan = &report.plan;
    println!("================ SUMMARY ================");
    print_profile(&report.profile);
    println!();
    println!(
        "Target calories/day: {}  (weekly target: {})",
        report.target_calories, plan.weekly_target_calories
    );
    println!(
        "Daily budget: {:.2}  Weekly budget: {:.2}  Weekly cost: {:.2}",
        report.profile.schedule.daily_food_budget, plan.weekly_budget, plan.weekly_cost
    );
    println!("Seed: {}", report.seed);
    println!();
}

fn print_workouts(days: &[DayPlan]) {
    println!("=============== WORKOUT PLAN (7 days) ===============");
    for day in days {
        if day.rest_day {
            println!("{}: REST", day.weekday);
            continue;
        }
        println!("{}: WORKOUT (~{} min)", day.weekday, day.workout_minutes());
        for e in &day.exercises {
            println!(
                "  - {:<24} | {:<10} | {:<9} | {:<8} | ~{} min",
                e.name,
                e.muscle_group.label(),
                e.equipment.label(),
                e.intensity.label(),
                e.minutes
            );
        }
    }
    println!();
}

fn print_meals(days: &[DayPlan]) {
    println!("================ MEAL PLAN (7 days) ================");
    for day in days {
        let t = &day.totals;
        println!(
            "{}: kcal {}/{} | P:{}g C:{}g F:{}g | Cost: {:.2}",
            day.weekday, t.calories, day.target_calories, t.protein_g, t.carbs_g, t.fat_g, t.cost
        );
        if day.has_no_meals() {
            println!("  (no suitable meal options)");
            continue;
        }
        for (i, m) in day.meals.iter().enumerate() {
            println!(
                "  {}) {:<28} | {:<14} | {:>4} kcal | P:{:>2}g C:{:>3}g F:{:>2}g | {:.0}",
                i + 1,
                m.name,
                m.cuisine,
                m.calories,
                m.protein_g,
                m.carbs_g,
                m.fat_g,
                m.cost
            );
        }
    }
    println!();
}

pub fn print_shopping_list(list: &BTreeMap<String, usize>) {
    println!("================ SHOPPING LIST (aggregated) ================");
    if list.is_empty() {
        println!("(nothing to buy)");
    }
    for (ingredient, count) in list {
        println!("- {} x{}", ingredient, count);
    }
    println!();
}

pub fn print_catalog(catalog: &Catalog) {
    println!("Exercises ({}):", catalog.exercises.len());
    for e in &catalog.exercises {
        println!(
            "  {:<24} | {:<10} | {:<9} | {:<8} | {:>2} min | {:?}",
            e.name,
            e.muscle_group.label(),
            e.equipment.label(),
            e.intensity.label(),
            e.minutes,
            e.level
        );
    }
    println!();
    println!("Meals ({}):", catalog.meals.len());
    for m in &catalog.meals {
        println!(
            "  {:<28} | {:<14} | {:>4} kcal | P:{:>2}g | {:.2}",
            m.name, m.cuisine, m.calories, m.protein_g, m.cost
        );
    }
    println!();
}
