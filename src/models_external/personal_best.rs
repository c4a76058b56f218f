use serde::Deserialize;

use crate::models::PersonalBestRecord;

use super::{lenient, lenient_vec, Link};

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PbsRsp {
    #[serde(deserialize_with = "lenient_vec")]
    pub data: Vec<PbEntry>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PbEntry {
    #[serde(deserialize_with = "lenient")]
    pub place: u32,
    #[serde(deserialize_with = "lenient")]
    pub run: Run,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Run {
    #[serde(deserialize_with = "lenient")]
    pub id: String,
    #[serde(deserialize_with = "lenient")]
    pub times: RunTimes,
    #[serde(deserialize_with = "lenient_vec")]
    pub links: Vec<Link>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RunTimes {
    #[serde(deserialize_with = "lenient")]
    pub primary: String,
}

impl From<PbEntry> for PersonalBestRecord {
    fn from(value: PbEntry) -> Self {
        PersonalBestRecord {
            place: value.place,
            run_id: value.run.id,
            primary_time: value.run.times.primary,
            links: value.run.links.into_iter().map(|e| e.into()).collect(),
        }
    }
}
