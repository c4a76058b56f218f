use std::{net::SocketAddr, sync::Arc};

use axum::{Router, extract::{Query, State}, response::IntoResponse};
use reqwest::StatusCode;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::log;

use crate::{config_handler::Config, pbs_service::PbsService, rest_client::SpeedrunClient};

pub const MISSING_USER_MSG: &str = "Please provide a non-empty user";

#[derive(Clone)]
pub struct ApiState {
    pub pbs_service: Arc<PbsService>,
    pub deployment_url_var: String,
}

pub struct Api;
impl Api {
    pub fn router(config: &Config) -> Result<Router, reqwest::Error> {
        let state = ApiState {
            pbs_service: Arc::new(PbsService::new(SpeedrunClient::new(config)?, config.parallel_resolve)),
            deployment_url_var: config.deployment_url_var.clone(),
        };
        let app = Router::new()
            .route("/api/pbs", axum::routing::get(Api::get_pbs))
            .route("/api/index", axum::routing::get(Api::index))
            .route("/", axum::routing::get(Api::index))
            .with_state(state)
            .layer(ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
            );
        Ok(app)
    }

    pub async fn serve(config: Config) -> Result<(), anyhow::Error> {
        let app = Api::router(&config)?;
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        log::info!("[API] Listening on {}", addr);
        axum::Server::try_bind(&addr)?
            .serve(app.into_make_service())
            .await?;
        Ok(())
    }

    async fn index(State(state): State<ApiState>) -> impl IntoResponse {
        let host = std::env::var(&state.deployment_url_var).unwrap_or_default();
        (StatusCode::OK, format!("See API documentation at: {host}\n"))
    }

    async fn get_pbs(query: Option<Query<Vec<(String, String)>>>, State(state): State<ApiState>) -> impl IntoResponse {
        let user = query.and_then(|Query(params)| first_user(params)).filter(|e| !e.is_empty());
        let Some(user) = user else {
            log::info!("[API] No user in query params");
            return (StatusCode::OK, format!("{MISSING_USER_MSG}\n"));
        };

        match state.pbs_service.summarize(&user).await {
            Ok(summary) => (StatusCode::OK, format!("{summary}\n")),
            Err(e) => {
                log::error!("[API] Failed pbs for {user}: {e}");
                (StatusCode::OK, format!("{e}\n"))
            }
        }
    }
}

// first value wins when `user` is repeated
fn first_user(params: Vec<(String, String)>) -> Option<String> {
    params.into_iter()
        .find(|(key, _)| key == "user")
        .map(|(_, value)| value)
}
