//! Achievement catalog.

use super::{Achievement, AchievementType};

/// The fixed achievement catalog, in evaluation order.
pub fn all_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "ach_1",
            "First Steps",
            "Complete your first workout",
            AchievementType::WorkoutCount,
            1,
        ),
        Achievement::new(
            "ach_2",
            "Regular Runner",
            "Complete 10 workouts",
            AchievementType::WorkoutCount,
            10,
        ),
        Achievement::new(
            "ach_3",
            "Fitness Fanatic",
            "Complete 50 workouts",
            AchievementType::WorkoutCount,
            50,
        ),
        Achievement::new(
            "ach_4",
            "Healthy Eater",
            "Log 20 meals",
            AchievementType::MealCount,
            20,
        ),
        Achievement::new(
            "ach_5",
            "Goal Getter",
            "Complete 5 goals",
            AchievementType::GoalCompleted,
            5,
        ),
        Achievement::new(
            "ach_6",
            "Week Warrior",
            "7-day workout streak",
            AchievementType::StreakDays,
            7,
        ),
        Achievement::new(
            "ach_7",
            "Month Master",
            "30-day workout streak",
            AchievementType::StreakDays,
            30,
        ),
    ]
}

/// Icon resource name for an achievement id.
pub fn icon_for(id: &str) -> &'static str {
    match id {
        "ach_1" => "ic_achievement_first",
        "ach_2" => "ic_achievement_regular",
        "ach_3" => "ic_achievement_fanatic",
        "ach_4" => "ic_achievement_eater",
        "ach_5" => "ic_achievement_goals",
        "ach_6" => "ic_achievement_streak",
        "ach_7" => "ic_achievement_master",
        _ => "ic_achievement_default",
    }
}
