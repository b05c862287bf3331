//! Interactive profile questions.
//!
//! Questions go to the writer (stderr in the binary) so stdout carries only
//! the plan. Blank answers, and end of input, leave a field unset so the
//! configured defaults apply.

use planner_core::input::TermList;
use planner_core::{ProfileDefaults, ProfileInput, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Trimmed answer, None when blank
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}: ", question)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let answer = line.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    fn ask_number<T: FromStr>(
        &mut self,
        question: &str,
        default: impl std::fmt::Display,
    ) -> Result<Option<T>> {
        let answer = self.ask(&format!("{} [{}]", question, default))?;
        Ok(answer.and_then(|a| match a.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Could not read '{}' as a number, using default", a);
                None
            }
        }))
    }

    /// Anything starting with "y" is yes
    fn ask_yes(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(&format!("{} (y/n)", question))?;
        Ok(answer.is_some_and(|a| a.to_lowercase().starts_with('y')))
    }

    fn ask_terms(&mut self, question: &str) -> Result<Option<TermList>> {
        Ok(self.ask(question)?.map(TermList::Csv))
    }

    pub fn collect(&mut self, defaults: &ProfileDefaults) -> Result<ProfileInput> {
        writeln!(self.output, "=== Weekly Workout & Meal Planner ===")?;

        let mut input = ProfileInput {
            name: self.ask(&format!("Your name [{}]", defaults.name))?,
            age: self.ask_number("Age", defaults.age)?,
            sex: self.ask("Sex (M/F)")?,
            height_cm: self.ask_number("Height (cm)", defaults.height_cm)?,
            weight_kg: self.ask_number("Weight (kg)", defaults.weight_kg)?,
            activity_level: self.ask("Activity (sedentary/light/moderate/active/very)")?,
            experience: self.ask("Experience (beginner/intermediate/advanced)")?,
            goal: self.ask("Goal (lose/maintain/gain)")?,
            ..ProfileInput::default()
        };

        input.vegetarian = self.ask_yes("Vegetarian?")?;
        input.vegan = self.ask_yes("Vegan?")?;
        input.lactose_free = self.ask_yes("Lactose-free?")?;
        input.gluten_free = self.ask_yes("Gluten-free?")?;
        input.halal = self.ask_yes("Halal?")?;
        input.allergies = self.ask_terms("Allergies (comma-separated, blank for none)")?;
        input.disliked_ingredients = self.ask_terms("Disliked ingredients (comma-separated)")?;
        input.preferred_cuisines =
            self.ask_terms("Preferred cuisines (comma-separated, e.g. Indian, Western)")?;

        input.gym = self.ask_yes("Gym access?")?;
        input.dumbbells = self.ask_yes("Dumbbells?")?;
        input.resistance_bands = self.ask_yes("Resistance bands?")?;
        input.yoga_mat = self.ask_yes("Yoga mat?")?;
        input.outdoor_running = self.ask_yes("Can run outside?")?;

        input.workout_days_per_week =
            self.ask_number("Workout days per week (2-6)", defaults.workout_days_per_week)?;
        input.minutes_per_session =
            self.ask_number("Minutes per workout (20-90)", defaults.minutes_per_session)?;
        input.daily_food_budget =
            self.ask_number("Daily food budget", defaults.daily_food_budget)?;
        input.region = self.ask(&format!("Region [{}]", defaults.region))?;

        writeln!(self.output)?;
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(answers: &str) -> ProfileInput {
        let mut out = Vec::new();
        Prompter::new(answers.as_bytes(), &mut out)
            .collect(&ProfileDefaults::default())
            .unwrap()
    }

    #[test]
    fn test_blank_answers_leave_fields_unset() {
        let input = collect("");
        assert_eq!(input, ProfileInput::default());
        let profile = input.into_profile();
        assert_eq!(profile.name, "Student");
        assert_eq!(profile.schedule.daily_food_budget, 250.0);
    }

    #[test]
    fn test_full_answers() {
        let answers = [
            "Asha", "28", "F", "160", "55.5", "light", "advanced", "lose",
            "y", "no", "Yes", "", "n",
            "Peanut, shrimp", "", "South Indian",
            "n", "y", "y", "", "",
            "5", "30", "180", "India",
        ]
        .join("\n");
        let input = collect(&answers);
        assert_eq!(input.name.as_deref(), Some("Asha"));
        assert_eq!(input.age, Some(28));
        assert_eq!(input.weight_kg, Some(55.5));
        assert!(input.vegetarian && !input.vegan && input.lactose_free && !input.gluten_free);
        assert!(!input.gym && input.dumbbells && input.resistance_bands && !input.yoga_mat);
        assert_eq!(input.workout_days_per_week, Some(5));

        let profile = input.into_profile();
        assert_eq!(profile.diet.allergies, vec!["peanut", "shrimp"]);
        assert_eq!(profile.diet.preferred_cuisines, vec!["South Indian"]);
        assert_eq!(profile.schedule.minutes_per_session, 30);
    }

    #[test]
    fn test_bad_number_falls_back() {
        let input = collect("Bo\nforty\n");
        assert_eq!(input.name.as_deref(), Some("Bo"));
        assert_eq!(input.age, None);
    }
}
