use std::time::{Duration, Instant};

use reqwest::{Client, Error};
use serde::de::DeserializeOwned;
use tracing::log;

use crate::config_handler::Config;
use crate::models::{CategorySummary, Decoded, GameSummary, PersonalBestRecord};
use crate::models_external::category::CategoryRsp;
use crate::models_external::game::GameRsp;
use crate::models_external::personal_best::PbsRsp;
use crate::LogResult;

pub const AUTH_HEADER: &str = "X-API-Key";

#[derive(Clone)]
pub struct SpeedrunClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl SpeedrunClient {
    pub fn new(config: &Config) -> Result<SpeedrunClient, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout_s {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let api_key = if config.attach_api_key {
            if config.api_key.is_none() {
                log::warn!("[REST] attach_api_key is set but no api_key configured");
            }
            config.api_key.clone()
        } else {
            None
        };
        Ok(SpeedrunClient {
            client: builder.build()?,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn get_personal_bests_url(&self, user: &str) -> String {
        format!("{}/users/{user}/personal-bests", self.base_url)
    }

    pub async fn get_personal_bests(&self, user: &str) -> Result<Decoded<Vec<PersonalBestRecord>>, Error> {
        log::info!("[REST] Getting pbs for user {user}");
        let url = self.get_personal_bests_url(user);
        let rsp: Decoded<PbsRsp> = self.get_call(&url).await
            .err_log(&format!("[REST] Failed getting pbs for user {user}"))?;
        Ok(rsp.map(|e| e.data.into_iter().map(PersonalBestRecord::from).collect()))
    }

    pub async fn get_game(&self, game_uri: &str) -> Result<Decoded<GameSummary>, Error> {
        let rsp: Decoded<GameRsp> = self.get_call(game_uri).await
            .err_log("[REST] Failed to get game name")?;
        Ok(rsp.map(GameSummary::from))
    }

    pub async fn get_category(&self, category_uri: &str) -> Result<Decoded<CategorySummary>, Error> {
        let rsp: Decoded<CategoryRsp> = self.get_call(category_uri).await
            .err_log("[REST] Failed to get category name")?;
        Ok(rsp.map(CategorySummary::from))
    }

    async fn get_call<T: DeserializeOwned + Default>(&self, url: &str) -> Result<Decoded<T>, Error> {
        let before = Instant::now();
        let mut request = self.client.get(url);
        if let Some(api_key) = &self.api_key {
            request = request.header(AUTH_HEADER, api_key);
        }
        let rsp = request.send().await?;
        let status = rsp.status();
        let body = rsp.bytes().await?;
        log::info!("[REST] Call {url} {status} {:.2?}", before.elapsed());
        Ok(Decoded::from_slice(&body))
    }
}
