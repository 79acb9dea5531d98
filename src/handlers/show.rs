//! Authenticated metric lookup.
//! Used by: server.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::Form;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::state::AppState;
use crate::view::ViewState;

/// Absent fields arrive as empty strings and are passed on unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ShowForm {
    pub username: String,
    pub password: String,
    pub metric: String,
}

/// A body that does not decode as a form is treated as a form with no fields,
/// so the caller still gets the rendered 401 view from the auth step.
pub async fn show(
    State(state): State<AppState>,
    form: std::result::Result<Form<ShowForm>, FormRejection>,
) -> Result<ViewState> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable form body, using empty fields");
            ShowForm::default()
        }
    };
    let outcome = lookup(&state, form).await;
    match &outcome {
        Ok(_) => state.metrics.record_served(),
        Err(e) => state.metrics.record_failure(e),
    }
    outcome
}

async fn lookup(state: &AppState, form: ShowForm) -> Result<ViewState> {
    if !state.credentials.validate(&form.username, &form.password).await {
        return Err(Error::AuthenticationRejected);
    }

    let record = state
        .store
        .find_by_metric(&form.metric)
        .await?
        .ok_or_else(|| Error::RecordNotFound(form.metric.clone()))?;

    tracing::info!(username = %form.username, metric = %form.metric, "analytics record served");
    Ok(ViewState::found(record))
}
