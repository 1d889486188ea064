use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use lume_compat::config::{LogFormat, LoggingSettings, Settings};
use lume_compat::core::{LocalPredictor, Predictor};
use lume_compat::models::ScoringWeights;
use lume_compat::routes::{self, predict::AppState};
use lume_compat::services::RemotePredictor;
use tracing::{info, error, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingSettings) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true);

    match logging.log_format() {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging so `[logging]` can shape the subscriber
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    // Initialize logging (LOG_LEVEL / LOG_FORMAT override the config file)
    init_tracing(&settings.logging.clone().with_env_overrides());

    info!("Starting Lume Compat prediction service...");
    info!("Configuration loaded successfully");

    // Initialize remote predictor (requests fall back to local scoring without a key)
    let remote = RemotePredictor::new(&settings.remote).map_err(|e| {
        error!("Failed to create HTTP client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    if remote.has_credential() {
        info!("Remote predictor configured: {:?}", settings.remote);
    } else {
        warn!("No API key configured, predictions use the local scorer unless a request supplies one");
    }

    // Initialize local predictor with configured weights
    let weights = ScoringWeights::from(&settings.scoring.weights);
    let local = LocalPredictor::new(weights);

    info!("Local predictor initialized with weights: {:?}", weights);

    // Build application state
    let app_state = AppState {
        predictor: Predictor::new(remote, local),
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
            .app_data(routes::json_config())
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
