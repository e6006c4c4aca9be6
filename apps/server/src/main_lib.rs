use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use stakeboard_core::{
    events::DomainEventSink,
    goals::{GoalService, GoalServiceTrait},
    leaderboard::{LeaderboardService, LeaderboardServiceTrait},
    profiles::{ProfileService, ProfileServiceTrait},
};
use stakeboard_storage_sqlite::{
    db::{self, write_actor},
    goals::GoalRepository,
    profiles::ProfileRepository,
};

use crate::{
    auth::AuthManager, config::Config, domain_events::ServerDomainEventSink, events::EventBus,
};

pub struct AppState {
    /// Kept alive for the lifetime of the server; services hold clones.
    #[allow(dead_code)]
    pub domain_event_sink: Arc<dyn DomainEventSink>,
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub profile_service: Arc<dyn ProfileServiceTrait>,
    pub leaderboard_service: Arc<dyn LeaderboardServiceTrait>,
    pub auth: Arc<AuthManager>,
    pub event_bus: EventBus,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("SB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.data_dir)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    // The sink buffers events until the worker starts, so services can be
    // wired up before the EventBus exists.
    let domain_event_sink = Arc::new(ServerDomainEventSink::new());

    let goal_repository = Arc::new(GoalRepository::new(pool.clone(), writer.clone()));
    let profile_repository = Arc::new(ProfileRepository::new(pool.clone(), writer.clone()));

    let goal_service = Arc::new(GoalService::new(
        goal_repository.clone(),
        domain_event_sink.clone(),
    ));
    let profile_service = Arc::new(ProfileService::new(
        profile_repository.clone(),
        domain_event_sink.clone(),
    ));
    let leaderboard_service = Arc::new(LeaderboardService::new(
        goal_repository,
        profile_repository,
    ));

    let event_bus = EventBus::new(256);
    domain_event_sink.start_worker(event_bus.clone());

    let auth = Arc::new(AuthManager::new(
        &config.jwt_secret,
        config.token_ttl_hours,
    ));

    Ok(Arc::new(AppState {
        domain_event_sink,
        goal_service,
        profile_service,
        leaderboard_service,
        auth,
        event_bus,
        db_path,
    }))
}
