use std::fmt::Display;

use tracing::log;

pub mod api;
pub mod config_handler;
pub mod models;
pub mod models_external;
pub mod pbs_service;
pub mod rest_client;

pub trait LogResult<T, E: Display> {
    fn ok_log(self, msg: &str) -> Option<T>;
    fn err_log(self, msg: &str) -> Result<T, E>;
}

impl<T, E: Display> LogResult<T, E> for Result<T, E> {
    fn ok_log(self, msg: &str) -> Option<T> {
        match self {
            Ok(o) => Some(o),
            Err(e) => {
                log::error!("{}: {}", msg, e);
                None
            }
        }
    }

    fn err_log(self, msg: &str) -> Result<T, E> {
        if let Err(e) = &self {
            log::error!("{}: {}", msg, e);
        }
        self
    }
}
