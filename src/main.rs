use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use std::sync::Arc;
use tracing::{error, info};

use tindog_feed::config::Settings;
use tindog_feed::core::{ordering, DecisionRecorder, FeedSelector};
use tindog_feed::routes::{self, AppState};
use tindog_feed::services::{
    LogNotifier, MatchNotifier, PgProfileStore, ProfileCache, WebhookNotifier,
};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Tindog feed service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the PostgreSQL profile store
    let db_max_conn = settings.database.max_connections.unwrap_or(10);

    let store = Arc::new(
        PgProfileStore::from_settings(
            &settings.database.url,
            settings.database.max_connections,
            settings.database.min_connections,
            settings.feed.candidate_limit,
        )
        .await
        .unwrap_or_else(|e| {
            error!("Failed to connect to PostgreSQL: {}", e);
            panic!("PostgreSQL connection error: {}", e);
        }),
    );

    info!("Profile store initialized (max: {} connections)", db_max_conn);

    // Initialize the profile cache
    let cache_capacity = settings.cache.capacity.unwrap_or(1000);
    let cache_ttl = settings.cache.ttl_secs.unwrap_or(300);
    let cache = ProfileCache::new(cache_capacity, cache_ttl);

    info!("Profile cache initialized ({} entries, TTL: {}s)", cache_capacity, cache_ttl);

    // Initialize the feed selector with the configured ordering strategy
    let ordering = ordering::from_name(&settings.feed.ordering).unwrap_or_else(|| {
        error!("Unknown feed ordering: {}", settings.feed.ordering);
        panic!("Configuration error: unknown feed ordering '{}'", settings.feed.ordering);
    });

    info!("Feed selector initialized (ordering: {})", ordering.name());
    let feed = FeedSelector::new(ordering);

    // Initialize the match notifier
    let notifier: Arc<dyn MatchNotifier> = match &settings.notifier.webhook_url {
        Some(url) => {
            let timeout = settings.notifier.timeout_secs.unwrap_or(10);
            info!("Match notifier: webhook -> {}", url);
            Arc::new(
                WebhookNotifier::new(url.clone(), timeout).unwrap_or_else(|e| {
                    error!("Failed to build webhook client: {}", e);
                    panic!("Webhook notifier error: {}", e);
                }),
            )
        }
        None => {
            info!("Match notifier: log only (no webhook configured)");
            Arc::new(LogNotifier)
        }
    };

    let recorder = DecisionRecorder::new(notifier);

    // Build application state
    let app_state = AppState {
        store,
        cache,
        feed,
        recorder,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
