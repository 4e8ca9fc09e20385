use serde::Serialize;
use uuid::Uuid;

/// Table holding application profiles, keyed by the Auth user id.
pub const PROFILE_TABLE: &str = "users";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }
}

/// A sample account, defined at compile time.
#[derive(Debug, Clone, Copy)]
pub struct UserRecord {
    pub email: &'static str,
    pub password: &'static str,
    pub username: &'static str,
    pub display_name: &'static str,
    pub bio: &'static str,
    pub skill_level: SkillLevel,
    pub dietary_restrictions: &'static [&'static str],
    pub cuisine_preferences: &'static [&'static str],
}

/// An account the Auth service accepted during this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedUser {
    pub email: String,
    pub id: Uuid,
}

/// Body of the profile insert.
///
/// List fields are stored as JSON text, not as native arrays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRow {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub display_name: String,
    pub bio: String,
    pub skill_level: SkillLevel,
    pub dietary_restrictions: String,
    pub cuisine_preferences: String,
    pub chef_score: f64,
}

impl ProfileRow {
    /// Builds the profile row for a freshly created account.
    pub fn new(id: Uuid, record: &UserRecord) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id,
            email: record.email.to_string(),
            username: record.username.to_string(),
            display_name: record.display_name.to_string(),
            bio: record.bio.to_string(),
            skill_level: record.skill_level,
            dietary_restrictions: serde_json::to_string(record.dietary_restrictions)?,
            cuisine_preferences: serde_json::to_string(record.cuisine_preferences)?,
            chef_score: 0.0,
        })
    }
}
