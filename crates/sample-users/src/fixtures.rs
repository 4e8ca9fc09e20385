//! The sample accounts seeded into the demo environment.

use crate::models::{SkillLevel, UserRecord};

/// Password shared by every sample account.
pub const SAMPLE_PASSWORD: &str = "TestPassword123!";

pub const SAMPLE_USERS: &[UserRecord] = &[
    UserRecord {
        email: "sarah.chen@example.com",
        password: SAMPLE_PASSWORD,
        username: "sarahchen",
        display_name: "Sarah Chen",
        bio: "Home cook passionate about Asian fusion cuisine. Love experimenting with traditional recipes!",
        skill_level: SkillLevel::Intermediate,
        dietary_restrictions: &[],
        cuisine_preferences: &["Asian", "Fusion", "Chinese"],
    },
    UserRecord {
        email: "marcus.j@example.com",
        password: SAMPLE_PASSWORD,
        username: "marcusj",
        display_name: "Marcus Johnson",
        bio: "BBQ enthusiast and grilling master. Always ready for a cookout!",
        skill_level: SkillLevel::Advanced,
        dietary_restrictions: &[],
        cuisine_preferences: &["American", "BBQ", "Southern"],
    },
    UserRecord {
        email: "emma.rodriguez@example.com",
        password: SAMPLE_PASSWORD,
        username: "emmarod",
        display_name: "Emma Rodriguez",
        bio: "Vegetarian chef specializing in healthy, plant-based meals. Food photographer on the side!",
        skill_level: SkillLevel::Intermediate,
        dietary_restrictions: &["Vegetarian"],
        cuisine_preferences: &["Mediterranean", "Mexican", "Vegetarian"],
    },
    UserRecord {
        email: "james.wilson@example.com",
        password: SAMPLE_PASSWORD,
        username: "jamesw",
        display_name: "James Wilson",
        bio: "Professional chef sharing restaurant-quality recipes for home cooks.",
        skill_level: SkillLevel::Advanced,
        dietary_restrictions: &[],
        cuisine_preferences: &["French", "Italian", "Contemporary"],
    },
    UserRecord {
        email: "priya.patel@example.com",
        password: SAMPLE_PASSWORD,
        username: "priyap",
        display_name: "Priya Patel",
        bio: "Sharing authentic Indian family recipes passed down through generations.",
        skill_level: SkillLevel::Advanced,
        dietary_restrictions: &[],
        cuisine_preferences: &["Indian", "Vegetarian", "Vegan"],
    },
    UserRecord {
        email: "david.kim@example.com",
        password: SAMPLE_PASSWORD,
        username: "davidkim",
        display_name: "David Kim",
        bio: "Korean food lover and meal prep enthusiast. Quick and easy recipes for busy weekdays!",
        skill_level: SkillLevel::Intermediate,
        dietary_restrictions: &[],
        cuisine_preferences: &["Korean", "Asian", "Meal Prep"],
    },
    UserRecord {
        email: "maria.garcia@example.com",
        password: SAMPLE_PASSWORD,
        username: "mariag",
        display_name: "Maria Garcia",
        bio: "Passionate about Spanish and Latin American cuisine. Love sharing traditional dishes!",
        skill_level: SkillLevel::Intermediate,
        dietary_restrictions: &[],
        cuisine_preferences: &["Spanish", "Mexican", "Latin American"],
    },
    UserRecord {
        email: "alex.thompson@example.com",
        password: SAMPLE_PASSWORD,
        username: "alext",
        display_name: "Alex Thompson",
        bio: "Beginner cook learning to make delicious meals on a budget. Sharing my journey!",
        skill_level: SkillLevel::Beginner,
        dietary_restrictions: &[],
        cuisine_preferences: &["American", "Comfort Food"],
    },
    UserRecord {
        email: "sophie.martin@example.com",
        password: SAMPLE_PASSWORD,
        username: "sophiem",
        display_name: "Sophie Martin",
        bio: "Baking enthusiast and dessert lover. Specializing in French pastries and cakes.",
        skill_level: SkillLevel::Advanced,
        dietary_restrictions: &[],
        cuisine_preferences: &["French", "Baking", "Desserts"],
    },
    UserRecord {
        email: "ryan.oconnor@example.com",
        password: SAMPLE_PASSWORD,
        username: "ryano",
        display_name: "Ryan O'Connor",
        bio: "Fitness-focused meal prep recipes. High protein, nutritious, and delicious!",
        skill_level: SkillLevel::Intermediate,
        dietary_restrictions: &[],
        cuisine_preferences: &["Healthy", "High Protein", "Meal Prep"],
    },
];
