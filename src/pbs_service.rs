use std::time::Instant;

use futures::future::try_join_all;
use reqwest::Error;
use tracing::log;

use crate::models::{PbLine, PersonalBestRecord};
use crate::rest_client::SpeedrunClient;

pub struct PbsService {
    client: SpeedrunClient,
    parallel: bool,
}

impl PbsService {
    pub fn new(client: SpeedrunClient, parallel: bool) -> PbsService {
        PbsService { client, parallel }
    }

    /// Fetches the personal bests of `user` and renders them as one summary line.
    /// Any transport error aborts the whole summary.
    pub async fn summarize(&self, user: &str) -> Result<String, Error> {
        let before = Instant::now();
        let url = self.client.get_personal_bests_url(user);
        let records = self.client.get_personal_bests(user).await?
            .warn_defaulted(&url);

        let lines = if self.parallel {
            try_join_all(records.iter().map(|e| self.resolve(e))).await?
        } else {
            let mut lines = Vec::with_capacity(records.len());
            for record in &records {
                lines.push(self.resolve(record).await?);
            }
            lines
        };

        log::info!("[PBS] Summarized {} pbs for {user} {:.2?}", lines.len(), before.elapsed());
        Ok(render_summary(&lines))
    }

    async fn resolve(&self, record: &PersonalBestRecord) -> Result<PbLine, Error> {
        let game = match record.game_uri() {
            Some(uri) => self.client.get_game(uri).await?.warn_defaulted(uri).name,
            None => String::new(),
        };
        let category = match record.category_uri() {
            Some(uri) => self.client.get_category(uri).await?.warn_defaulted(uri).name,
            None => String::new(),
        };
        Ok(PbLine { game, category, duration: record.duration() })
    }
}

pub fn render_summary(lines: &[PbLine]) -> String {
    let mut result = lines.iter()
        .map(|e| e.to_string())
        .collect::<Vec<String>>()
        .join(",");
    if !lines.is_empty() {
        result.push('.');
    }
    result
}
