//! Built-in exercise suggestions per muscle group.
//!
//! Offer data only: the routine model accepts any free-text exercise name.

/// Ordered built-in suggestions for a muscle group. Unknown groups get an
/// empty list.
pub fn suggestions(muscle_group: &str) -> &'static [&'static str] {
    match muscle_group {
        "Chest" => &[
            "Bench Press",
            "Incline Dumbbell Press",
            "Chest Fly",
            "Push-Up",
            "Cable Crossover",
            "Dips",
        ],
        "Back" => &[
            "Pull-Up",
            "Lat Pulldown",
            "Barbell Row",
            "Seated Cable Row",
            "Deadlift",
            "Face Pull",
        ],
        "Shoulders" => &[
            "Overhead Press",
            "Lateral Raise",
            "Front Raise",
            "Arnold Press",
            "Rear Delt Fly",
        ],
        "Biceps" => &[
            "Barbell Curl",
            "Dumbbell Curl",
            "Hammer Curl",
            "Preacher Curl",
            "Cable Curl",
        ],
        "Triceps" => &[
            "Triceps Pushdown",
            "Skull Crusher",
            "Overhead Triceps Extension",
            "Close-Grip Bench Press",
            "Bench Dip",
        ],
        "Legs" => &[
            "Back Squat",
            "Leg Press",
            "Lunge",
            "Leg Extension",
            "Bulgarian Split Squat",
        ],
        "Hamstrings" => &[
            "Romanian Deadlift",
            "Leg Curl",
            "Good Morning",
            "Nordic Curl",
        ],
        "Calves" => &["Standing Calf Raise", "Seated Calf Raise", "Donkey Calf Raise"],
        "Glutes" => &["Hip Thrust", "Glute Bridge", "Cable Kickback", "Step-Up"],
        "Core" => &["Plank", "Crunch", "Hanging Leg Raise", "Russian Twist", "Ab Wheel Rollout"],
        "Hip Flexors" => &["Hanging Knee Raise", "Mountain Climber", "Psoas March"],
        "Isometrics" => &["Wall Sit", "Hollow Hold", "Isometric Lunge Hold"],
        "Cardio" => &["Treadmill Run", "Rowing Machine", "Stationary Bike", "Jump Rope"],
        _ => &[],
    }
}
