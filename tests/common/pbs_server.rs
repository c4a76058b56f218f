use std::process::{Child, Command};

use assert_cmd::prelude::CommandCargoExt;
use predicates::{function::FnPredicate, Predicate};
use speedrun_pbs_server::{api::Api, config_handler::Config};
use tokio::task::JoinHandle;

pub struct PbsServer {
    port: u16,
    child_process: Option<Child>,
    handle: Option<JoinHandle<()>>,
}

impl Drop for PbsServer {
    fn drop(&mut self) {
        if let Some(child) = self.child_process.as_mut() {
            child.kill().expect("Should kill");
        }
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

impl PbsServer {
    pub fn new(port: u16) -> PbsServer {
        PbsServer { port, child_process: None, handle: None }
    }

    pub fn config(&self, external_url: &str) -> Config {
        Config {
            port: self.port,
            api_base_url: external_url.to_string(),
            ..Default::default()
        }
    }

    /// Runs the api inside the test runtime.
    pub async fn start(&mut self, config: Config) {
        self.handle = Some(tokio::spawn(async move {
            Api::serve(config).await.expect("server to run");
        }));
        self.wait_until_up().await;
    }

    /// Spawns the compiled binary with a config file written to `path`.
    pub async fn spawn(&mut self, path: &str, config: Config, envs: Vec<(&str, &str)>) {
        let config_str = serde_json::to_string(&config).unwrap();
        let config_path = format!("{path}/config.json");
        std::fs::write(config_path.clone(), config_str).unwrap();
        let child_process = Command::cargo_bin("speedrun-pbs-server")
            .unwrap()
            .env("CONFIG_PATH", config_path)
            .env_remove("PORT")
            .env_remove("API_BASE_URL")
            .env_remove("API_KEY")
            .env_remove("ATTACH_API_KEY")
            .envs(envs)
            .spawn()
            .expect("should start");

        self.child_process = Some(child_process);
        self.wait_until_up().await;
    }

    pub async fn get(&self, path: &str) -> Result<String, Box<dyn std::error::Error>> {
        Ok(reqwest::get(format!("http://127.0.0.1:{}{path}", self.port))
            .await?.error_for_status()?.text().await?)
    }

    pub async fn get_pbs(&self, user: &str) -> Result<String, Box<dyn std::error::Error>> {
        self.get(&format!("/api/pbs?user={user}")).await
    }

    pub async fn wait_until_up(&self) -> String {
        let predicate = predicates::function::function(|e: &String| e.starts_with("See API documentation at: "));
        self.retry_until("/api/index", predicate, 100).await
    }

    pub async fn retry_until<F>(&self, path: &str, predicate: FnPredicate<F, String>, retry_ms: u64) -> String
    where
        F: Fn(&String) -> bool,
    {
        let mut nr_loops = 0;
        loop {
            if let Ok(body) = self.get(path).await {
                if predicate.eval(&body) {
                    return body;
                }
            }
            tokio::time::sleep(std::time::Duration::from_millis(retry_ms)).await;
            nr_loops += 1;
            if nr_loops > 100 {
                panic!("retry failed");
            }
        }
    }
}
