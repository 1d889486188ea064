use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{PredictRequest, HealthResponse, ErrorResponse};
use crate::core::Predictor;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub predictor: Predictor,
}

/// Configure all prediction routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/predict", web::post().to(predict));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        remote_configured: state.predictor.remote().has_credential(),
    })
}

/// Compatibility prediction endpoint
///
/// POST /api/v1/predict
///
/// Request body:
/// ```json
/// {
///   "person1": {"name": "string", "gender": "string", "birthday": "YYYY-MM-DD", "hobbies": ["string"]},
///   "person2": {"name": "string", "gender": "string", "birthday": "YYYY-MM-DD", "hobbies": ["string"]},
///   "apiKey": "string"
/// }
/// ```
///
/// Always answers 200 for a valid request: remote failures fall back to the
/// local scorer.
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictRequest>,
) -> impl Responder {
    let request_id = uuid::Uuid::new_v4();

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for predict request {}: {:?}", request_id, errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();

    let predictor = match req.credential() {
        Some(key) => state.predictor.with_credential(key),
        None => state.predictor.clone(),
    };

    tracing::info!(
        "Predicting compatibility for {} / {} (request {})",
        req.person1.name,
        req.person2.name,
        request_id
    );

    let result = predictor.predict(req.person1, req.person2).await;

    tracing::info!(
        "Returning score {} from {:?} predictor (request {})",
        result.score,
        result.source,
        request_id
    );

    HttpResponse::Ok().json(result)
}
