use std::sync::Arc;

use axum::{extract::State, response::Redirect};

/// Handle `GET /` by sending the browser to the index page
pub async fn redirect(State(state): State<Arc<crate::AppState>>) -> Redirect {
    Redirect::temporary(&state.index_path)
}
