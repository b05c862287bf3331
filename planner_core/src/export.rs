//! CSV export of a weekly plan and its shopping list.
//!
//! Files are replaced, not appended to; each export is a full snapshot.

use crate::{DayPlan, Result, WeeklyPlan};
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

/// One exercise or meal of the plan
#[derive(Debug, serde::Serialize)]
struct PlanRow<'a> {
    day: String,
    kind: &'static str,
    name: &'a str,
    minutes: Option<u32>,
    calories: Option<u32>,
    cost: Option<f64>,
}

impl<'a> PlanRow<'a> {
    fn rows(day: &'a DayPlan) -> impl Iterator<Item = PlanRow<'a>> + 'a {
        let exercises = day.exercises.iter().map(move |e| PlanRow {
            day: day.weekday.to_string(),
            kind: "exercise",
            name: &e.name,
            minutes: Some(e.minutes),
            calories: None,
            cost: None,
        });
        let meals = day.meals.iter().map(move |m| PlanRow {
            day: day.weekday.to_string(),
            kind: "meal",
            name: &m.name,
            minutes: None,
            calories: Some(m.calories),
            cost: Some(m.cost),
        });
        exercises.chain(meals)
    }
}

#[derive(Debug, serde::Serialize)]
struct ShoppingRow<'a> {
    ingredient: &'a str,
    count: usize,
}

fn create(path: &Path) -> Result<csv::Writer<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(csv::Writer::from_writer(File::create(path)?))
}

fn finish(writer: csv::Writer<File>) -> Result<()> {
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;
    Ok(())
}

/// Write every exercise and meal of the week, day by day
///
/// Returns the number of rows written (header excluded).
pub fn write_plan_csv(plan: &WeeklyPlan, path: &Path) -> Result<usize> {
    let mut writer = create(path)?;
    let mut count = 0;
    for row in plan.days.iter().flat_map(PlanRow::rows) {
        writer.serialize(row)?;
        count += 1;
    }
    finish(writer)?;

    tracing::info!("Wrote {} plan rows to {:?}", count, path);
    Ok(count)
}

/// Write the aggregated shopping list, one ingredient per row
pub fn write_shopping_csv(list: &BTreeMap<String, usize>, path: &Path) -> Result<usize> {
    let mut writer = create(path)?;
    for (ingredient, count) in list {
        writer.serialize(ShoppingRow {
            ingredient,
            count: *count,
        })?;
    }
    finish(writer)?;

    tracing::info!("Wrote {} shopping list rows to {:?}", list.len(), path);
    Ok(list.len())
}
