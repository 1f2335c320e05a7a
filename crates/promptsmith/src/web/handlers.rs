use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Json};
use axum::Form;
use serde::{Deserialize, Serialize};

use promptsmith_logging::Surface;

use super::page::{render_page, Panel};
use super::AppState;
use crate::critique::{is_submittable, run_logged};

pub const EMPTY_PROMPT_MESSAGE: &str = "Please enter a prompt to analyze!";

#[derive(Debug, Deserialize)]
pub struct CritiqueForm {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct CritiqueRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct CritiqueResponse {
    pub ok: bool,
    pub result: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: String,
}

pub async fn index() -> Html<String> {
    Html(render_page("", &Panel::Empty))
}

/// Form submission: one critique per non-blank prompt, rendered inline.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<CritiqueForm>,
) -> Html<String> {
    if !is_submittable(&form.prompt) {
        return Html(render_page(
            &form.prompt,
            &Panel::Notice(EMPTY_PROMPT_MESSAGE.to_string()),
        ));
    }

    let outcome = run_logged(
        state.critic.as_ref(),
        &state.logger,
        Surface::Web,
        &form.prompt,
    )
    .await;

    Html(render_page(&form.prompt, &Panel::Result(outcome.into_text())))
}

/// JSON endpoint. Request errors still answer 200 with `ok: false`.
pub async fn critique_api(
    State(state): State<AppState>,
    Json(req): Json<CritiqueRequest>,
) -> Result<Json<CritiqueResponse>, (StatusCode, String)> {
    if !is_submittable(&req.prompt) {
        return Err((StatusCode::BAD_REQUEST, EMPTY_PROMPT_MESSAGE.to_string()));
    }

    let outcome = run_logged(
        state.critic.as_ref(),
        &state.logger,
        Surface::Api,
        &req.prompt,
    )
    .await;

    Ok(Json(CritiqueResponse {
        ok: outcome.is_completed(),
        result: outcome.into_text(),
    }))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model: state.model.clone(),
    })
}
