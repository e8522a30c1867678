use std::{sync::Arc, time::Duration};

use axum::{
    Form,
    Router,
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    cli::{DatasetArgs, EstimationArgs},
    forecast::Forecast,
    prelude::*,
    render::{DATA_UNAVAILABLE, IndexPage, PredictionPage},
};

/// Application context shared by the handlers.
pub struct AppState {
    dataset: DatasetArgs,
    estimation: EstimationArgs,
}

impl AppState {
    pub const fn new(dataset: DatasetArgs, estimation: EstimationArgs) -> Self {
        Self { dataset, estimation }
    }
}

pub async fn serve(bind_address: &str, state: AppState) -> Result {
    let listener =
        TcpListener::bind(bind_address).await.context("failed to bind to the address")?;
    info!(bind_address, "serving…");
    axum::serve(listener, router(state)).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_index))
        .route("/predict", post(post_predict))
        .with_state(Arc::new(state))
        .layer((TraceLayer::new_for_http(), TimeoutLayer::new(Duration::from_secs(10))))
}

/// Per <https://github.com/tokio-rs/axum/blob/main/examples/graceful-shutdown/src/main.rs>.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutting down…");
}

#[instrument(skip_all)]
async fn get_index(State(state): State<Arc<AppState>>) -> Html<String> {
    match state.dataset.load() {
        Ok(dataset) => Html(IndexPage(&dataset).to_string()),
        Err(error) => {
            error!("{:#}", Error::from(error));
            Html(DATA_UNAVAILABLE.to_owned())
        }
    }
}

#[derive(Deserialize)]
struct PredictForm {
    year: String,
}

#[instrument(skip_all)]
async fn post_predict(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PredictForm>,
) -> Result<Html<String>, (StatusCode, String)> {
    let year = form
        .year
        .trim()
        .parse::<i64>()
        .with_context(|| format!("invalid year `{}`", form.year))
        .map_err(|error| {
            warn!("{error:#}");
            (StatusCode::BAD_REQUEST, format!("failed to handle /predict: {error:#}"))
        })?;

    let dataset = match state.dataset.load() {
        Ok(dataset) => dataset,
        Err(error) => {
            error!("{:#}", Error::from(error));
            return Ok(Html(DATA_UNAVAILABLE.to_owned()));
        }
    };
    let forecast = Forecast::run(
        &dataset,
        &state.dataset.column,
        year,
        &state.estimation.estimator(),
        &mut state.estimation.sampler(),
    );
    Ok(Html(PredictionPage(&forecast).to_string()))
}
