mod classifier;
mod config;
mod dashboard;
mod errors;
mod matching;
mod models;
mod prediction;
mod routes;
mod seed;
mod state;

#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::classifier::ClassifierClient;
use crate::config::Config;
use crate::dashboard::{CompanyDashboard, StudentDashboard};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting InternMatch API v{}", env!("CARGO_PKG_VERSION"));

    let classifier = ClassifierClient::new(
        config.classifier_url.clone(),
        Duration::from_secs(config.classifier_timeout_secs),
    )
    .context("Failed to build classifier HTTP client")?;
    info!(
        "Classifier client initialized ({}, timeout {}s)",
        classifier.base_url(),
        config.classifier_timeout_secs
    );

    let students = seed::students();
    let company = CompanyDashboard::new(students.clone());
    let student_dashboard = StudentDashboard::new(students, seed::company_roles());
    info!("Seed data loaded");

    let state = AppState::new(config.clone(), Arc::new(classifier), company, student_dashboard);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
