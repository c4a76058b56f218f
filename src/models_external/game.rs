use serde::Deserialize;

use crate::models::GameSummary;

use super::lenient;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct GameRsp {
    #[serde(deserialize_with = "lenient")]
    pub data: Game,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Game {
    #[serde(deserialize_with = "lenient")]
    pub names: GameNames,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct GameNames {
    #[serde(deserialize_with = "lenient")]
    pub international: String,
}

impl From<GameRsp> for GameSummary {
    fn from(value: GameRsp) -> Self {
        GameSummary { name: value.data.names.international }
    }
}
