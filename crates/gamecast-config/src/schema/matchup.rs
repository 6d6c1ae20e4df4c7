//! Match description types used to fill in the scene prompt.

use serde::{Deserialize, Serialize};

/// The map being played and both team rosters, as free text.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatchConfig {
    pub map: String,
    pub blue_team: String,
    pub red_team: String,
}
