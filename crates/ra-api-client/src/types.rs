//! Wire models for the RetroAchievements web API.
//!
//! Field names follow the PascalCase JSON the API returns. Anything the API
//! omits for older titles is defaulted rather than treated as an error.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Host serving achievement badge images.
pub const MEDIA_BASE_URL: &str = "https://media.retroachievements.org";

/// One unlockable achievement as returned by `API_GetGameExtended.php`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Achievement {
    #[serde(rename = "ID")]
    pub id: u32,
    pub title: String,
    pub description: String,
    pub points: u32,
    #[serde(default)]
    pub true_ratio: u32,
    #[serde(default)]
    pub author: Option<String>,
    pub badge_name: String,
    #[serde(default)]
    pub num_awarded: u32,
    #[serde(default)]
    pub num_awarded_hardcore: u32,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub date_modified: Option<String>,
    #[serde(default)]
    pub mem_addr: Option<String>,
}

impl Achievement {
    /// Absolute URL of the badge image referenced by `badge_name`.
    #[must_use]
    pub fn badge_url(&self) -> String {
        format!("{MEDIA_BASE_URL}/Badge/{}", self.badge_name)
    }
}

/// Extended game record: metadata plus the full achievement set.
///
/// Achievements are keyed by achievement id. `BTreeMap` keeps iteration in
/// ascending id order, matching the enumeration order of the upstream JSON
/// object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameExtended {
    #[serde(rename = "ID")]
    pub id: u32,
    pub title: String,
    #[serde(rename = "ConsoleID", default)]
    pub console_id: u32,
    #[serde(default)]
    pub console_name: String,
    #[serde(rename = "ForumTopicID", default)]
    pub forum_topic_id: Option<u32>,
    #[serde(default)]
    pub image_icon: Option<String>,
    #[serde(default)]
    pub image_title: Option<String>,
    #[serde(default)]
    pub image_ingame: Option<String>,
    #[serde(default)]
    pub image_box_art: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub developer: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub num_achievements: u32,
    #[serde(default)]
    pub num_distinct_players: u32,
    #[serde(default, deserialize_with = "achievement_map")]
    pub achievements: BTreeMap<u32, Achievement>,
}

// The upstream PHP serializes an empty achievement set as `[]` instead of `{}`.
fn achievement_map<'de, D>(deserializer: D) -> Result<BTreeMap<u32, Achievement>, D::Error>
where
    D: Deserializer<'de>,
{
    struct MapOrListVisitor;

    impl<'de> Visitor<'de> for MapOrListVisitor {
        type Value = BTreeMap<u32, Achievement>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map keyed by achievement id, or a list of achievements")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut achievements = BTreeMap::new();
            while let Some((id, achievement)) = access.next_entry::<u32, Achievement>()? {
                achievements.insert(id, achievement);
            }
            Ok(achievements)
        }

        fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut achievements = BTreeMap::new();
            while let Some(achievement) = access.next_element::<Achievement>()? {
                achievements.insert(achievement.id, achievement);
            }
            Ok(achievements)
        }
    }

    deserializer.deserialize_any(MapOrListVisitor)
}
