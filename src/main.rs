//! Quadro task-board server.
//!
//! Serves the private dashboard and the public task pages over in-memory
//! stand-ins for the hosted document store and identity service.
//!
//! # Usage
//!
//! ```bash
//! # Run on the default address 0.0.0.0:3000
//! cargo run
//!
//! # Run on a custom address with a custom share-link base
//! cargo run -- --bind 127.0.0.1:8080 --public-base-url https://board.example
//!
//! # Or via environment variables
//! QUADRO_ADDR=127.0.0.1:8080 cargo run
//! ```

use clap::Parser;
use mockable::DefaultClock;
use std::sync::Arc;

use quadro::comment::adapters::memory::InMemoryCommentRepository;
use quadro::comment::ports::CommentRepository;
use quadro::comment::services::CommentThreadService;
use quadro::config::{BoardCliArgs, BoardConfig};
use quadro::identity::adapters::memory::InMemoryIdentityProvider;
use quadro::identity::domain::{DisplayName, EmailAddress, IdentityDomainError, UserProfile};
use quadro::identity::ports::IdentityProvider;
use quadro::task::adapters::memory::InMemoryTaskRepository;
use quadro::task::ports::TaskRepository;
use quadro::task::services::TaskBoardService;
use quadro::web::pages::PageRenderer;
use quadro::web::routes::router;
use quadro::web::state::AppState;

#[tokio::main]
async fn main() {
    let cli = BoardCliArgs::parse();

    // Initialize tracing with the CLI log level before anything can fail.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = match BoardConfig::load(&cli) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "failed to load configuration");
            std::process::exit(1);
        }
    };

    let profile = match demo_profile(&config) {
        Ok(profile) => profile,
        Err(error) => {
            tracing::error!(%error, "invalid demo user configuration");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %config.bind_addr, user = %profile.email(), "starting quadro server");

    let identity: Arc<dyn IdentityProvider> = Arc::new(InMemoryIdentityProvider::new(profile));
    let task_repository: Arc<dyn TaskRepository> = Arc::new(InMemoryTaskRepository::new());
    let comment_repository: Arc<dyn CommentRepository> =
        Arc::new(InMemoryCommentRepository::new());
    let clock = Arc::new(DefaultClock);

    let tasks = TaskBoardService::new(
        task_repository,
        Arc::clone(&clock),
        config.public_base_url.clone(),
    );
    let comments = CommentThreadService::new(comment_repository, clock);
    let pages = match PageRenderer::new() {
        Ok(pages) => pages,
        Err(error) => {
            tracing::error!(%error, "template setup failed");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(identity, tasks, comments, pages));
    let app = router(state);

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%error, addr = %config.bind_addr, "failed to bind server address");
            std::process::exit(1);
        }
    };
    tracing::info!(addr = %config.bind_addr, "quadro server listening");

    if let Err(error) = axum::serve(listener, app).await {
        tracing::error!(%error, "server failed");
        std::process::exit(1);
    }
}

/// Builds the stand-in demo profile from configuration.
fn demo_profile(config: &BoardConfig) -> Result<UserProfile, IdentityDomainError> {
    Ok(UserProfile::new(
        EmailAddress::new(config.demo_user_email.clone())?,
        DisplayName::new(config.demo_user_name.clone())?,
    ))
}
