pub mod health;
pub mod resumes;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/score", post(resumes::handle_score_resume))
        .route("/api/v1/resumes", get(resumes::handle_list_resumes))
        .with_state(state)
}
