//! Default exercises written into a freshly created cache.

use crate::models::{Category, Difficulty, ExerciseRecord};

struct SeedExercise {
    id: &'static str,
    name: &'static str,
    category: Category,
    description: &'static str,
    instructions: &'static str,
    duration_minutes: u32,
    calories_burned: u32,
    difficulty: Difficulty,
}

const DEFAULT_EXERCISES: &[SeedExercise] = &[
    // Arms
    SeedExercise {
        id: "arm-1",
        name: "Push-Ups",
        category: Category::Arms,
        description: "Classic bodyweight exercise for upper body strength",
        instructions: "1. Start in a plank position with hands shoulder-width apart\n2. Lower your body until your chest nearly touches the floor\n3. Push yourself back up\n4. Repeat",
        duration_minutes: 15,
        calories_burned: 150,
        difficulty: Difficulty::Medium,
    },
    SeedExercise {
        id: "arm-2",
        name: "Bicep Curls",
        category: Category::Arms,
        description: "Isolation exercise targeting the biceps",
        instructions: "1. Stand with feet shoulder-width apart holding dumbbells\n2. Keeping elbows close to your body, curl the weights up\n3. Lower back down with control\n4. Repeat",
        duration_minutes: 10,
        calories_burned: 120,
        difficulty: Difficulty::Easy,
    },
    // Chest
    SeedExercise {
        id: "chest-1",
        name: "Chest Press",
        category: Category::Chest,
        description: "Compound exercise for chest development",
        instructions: "1. Lie on a bench with feet on the floor\n2. Hold dumbbells at chest level\n3. Press weights up until arms are extended\n4. Lower weights back to chest\n5. Repeat",
        duration_minutes: 12,
        calories_burned: 180,
        difficulty: Difficulty::Medium,
    },
    SeedExercise {
        id: "chest-2",
        name: "Chest Fly",
        category: Category::Chest,
        description: "Isolation exercise for chest muscles",
        instructions: "1. Lie on a bench holding dumbbells above your chest\n2. Lower arms out to sides in an arc\n3. Return to starting position\n4. Repeat",
        duration_minutes: 12,
        calories_burned: 150,
        difficulty: Difficulty::Medium,
    },
    // Back
    SeedExercise {
        id: "back-1",
        name: "Bent Over Row",
        category: Category::Back,
        description: "Compound exercise for back strength",
        instructions: "1. Stand with feet shoulder-width apart\n2. Bend at the waist keeping back straight\n3. Pull weights up to your ribs\n4. Lower weights with control\n5. Repeat",
        duration_minutes: 12,
        calories_burned: 200,
        difficulty: Difficulty::Medium,
    },
    SeedExercise {
        id: "back-2",
        name: "Pull-Ups",
        category: Category::Back,
        description: "Advanced bodyweight exercise for upper back",
        instructions: "1. Grip a pull-up bar with palms facing away\n2. Pull yourself up until chin is over the bar\n3. Lower with control\n4. Repeat",
        duration_minutes: 8,
        calories_burned: 180,
        difficulty: Difficulty::Hard,
    },
    // Abs
    SeedExercise {
        id: "abs-1",
        name: "Crunches",
        category: Category::Abs,
        description: "Basic exercise for abdominal muscles",
        instructions: "1. Lie on your back with knees bent\n2. Place hands behind head\n3. Lift shoulders off the ground using abs\n4. Lower with control\n5. Repeat",
        duration_minutes: 20,
        calories_burned: 120,
        difficulty: Difficulty::Easy,
    },
    SeedExercise {
        id: "abs-2",
        name: "Plank",
        category: Category::Abs,
        description: "Isometric exercise for core stability",
        instructions: "1. Start in a push-up position with arms straight\n2. Lower onto your forearms\n3. Keep body in a straight line\n4. Hold position",
        // A 60 second hold
        duration_minutes: 1,
        calories_burned: 150,
        difficulty: Difficulty::Medium,
    },
    // Legs
    SeedExercise {
        id: "legs-1",
        name: "Squats",
        category: Category::Legs,
        description: "Compound exercise for leg strength",
        instructions: "1. Stand with feet shoulder-width apart\n2. Lower your body as if sitting in a chair\n3. Keep back straight and knees over toes\n4. Return to standing\n5. Repeat",
        duration_minutes: 15,
        calories_burned: 220,
        difficulty: Difficulty::Medium,
    },
    SeedExercise {
        id: "legs-2",
        name: "Lunges",
        category: Category::Legs,
        description: "Unilateral exercise for legs and balance",
        instructions: "1. Stand with feet together\n2. Step forward with one leg\n3. Lower until both knees are at 90 degrees\n4. Push back to starting position\n5. Alternate legs\n6. Repeat",
        duration_minutes: 12,
        calories_burned: 200,
        difficulty: Difficulty::Medium,
    },
    // Full body
    SeedExercise {
        id: "full-1",
        name: "Burpees",
        category: Category::FullBody,
        description: "High-intensity full body exercise",
        instructions: "1. Start standing\n2. Drop to a squat position\n3. Kick feet back to a plank\n4. Perform a push-up\n5. Return to squat position\n6. Jump up\n7. Repeat",
        duration_minutes: 10,
        calories_burned: 250,
        difficulty: Difficulty::Hard,
    },
    SeedExercise {
        id: "full-2",
        name: "Mountain Climbers",
        category: Category::FullBody,
        description: "Dynamic full body exercise",
        instructions: "1. Start in plank position\n2. Bring one knee toward chest\n3. Switch legs in a running motion\n4. Maintain plank position\n5. Repeat quickly",
        duration_minutes: 30,
        calories_burned: 200,
        difficulty: Difficulty::Medium,
    },
];

/// The fixed dataset a new cache starts with, two exercises per category.
pub fn default_exercises() -> Vec<ExerciseRecord> {
    DEFAULT_EXERCISES
        .iter()
        .map(|e| ExerciseRecord {
            id: e.id.to_string(),
            name: e.name.to_string(),
            category: e.category,
            description: e.description.to_string(),
            instructions: e.instructions.to_string(),
            duration_minutes: e.duration_minutes,
            calories_burned: e.calories_burned,
            difficulty: e.difficulty,
        })
        .collect()
}
