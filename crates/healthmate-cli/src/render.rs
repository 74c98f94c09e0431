//! Plain-text output for resolved exercises.

use healthmate_core::utils::{capitalize, capitalized_list, numbered_steps, truncate_string};
use healthmate_core::{ExerciseRecord, ExerciseView, Resolved};

/// Maximum description width in list output
const LIST_DESCRIPTION_WIDTH: usize = 60;

pub fn print_list(title: &str, resolved: &Resolved) {
    println!("{} ({} exercises, source: {})\n", title, resolved.exercises.len(), resolved.source);
    for (i, exercise) in resolved.exercises.iter().enumerate() {
        println!("{:>3}. {}  [{}]", i + 1, capitalize(&exercise.name), exercise.id);
        println!(
            "     Body part: {} | Target: {} | Equipment: {}",
            capitalize(&exercise.body_part),
            capitalize(&exercise.target),
            capitalize(&exercise.equipment)
        );
        if let Some(ref description) = exercise.description {
            println!("     {}", truncate_string(description, LIST_DESCRIPTION_WIDTH));
        }
    }
}

pub fn print_detail(exercise: &ExerciseView, resolved: &Resolved) {
    println!("{}  (source: {})", capitalize(&exercise.name), resolved.source);
    println!();
    println!("Body part:  {}", capitalize(&exercise.body_part));
    println!("Target:     {}", capitalize(&exercise.target));
    println!("Equipment:  {}", capitalize(&exercise.equipment));
    if let Some(difficulty) = exercise.difficulty {
        println!("Difficulty: {}", difficulty);
    }
    if let Some(minutes) = exercise.duration_minutes {
        println!("Duration:   {} min", minutes);
    }
    if let Some(calories) = exercise.calories_burned {
        println!("Calories:   {}", calories);
    }
    if !exercise.secondary_muscles.is_empty() {
        println!("Secondary:  {}", capitalized_list(&exercise.secondary_muscles));
    }
    if let Some(ref description) = exercise.description {
        println!();
        println!("{}", description);
    }
    println!();
    println!("Instructions:");
    println!("{}", numbered_steps(&exercise.instructions));
    if let Some(ref url) = exercise.media_url {
        println!();
        println!("Demo: {}", url);
    }
}

pub fn print_records(records: &[ExerciseRecord]) {
    for record in records {
        println!(
            "{:<10} {:<20} {:<10} {:<7} {:>3} min {:>4} kcal",
            record.id,
            truncate_string(&record.name, 20),
            record.category.display_name(),
            record.difficulty.to_string(),
            record.duration_minutes,
            record.calories_burned
        );
    }
}
