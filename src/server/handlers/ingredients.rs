// src/server/handlers/ingredients.rs
//! Ingredient list, create, edit and delete handlers
//!
//! Handlers translate HTTP into workflow calls: a GET shows a form, a POST
//! is a submission. Redirects carry their notification through the flash
//! store, keyed by the session cookie.

use crate::db::models::Ingredient;
use crate::form::{Payload, Violation};
use crate::notification::Notification;
use crate::pagination::Page;
use crate::server::SharedState;
use crate::server::handlers::{ApiResult, run_blocking};
use crate::server::routes::{INGREDIENT_LIST, INGREDIENT_NEW, delete_path, edit_path};
use crate::server::session::ensure_session;
use crate::store::SqliteStore;
use crate::workflow::{FormState, IngredientWorkflow, Outcome};
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::SecondsFormat;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Ingredient as shown to the client
#[derive(Debug, Serialize)]
pub struct IngredientView {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_url: Option<String>,
}

impl From<&Ingredient> for IngredientView {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            id: ingredient.id(),
            name: ingredient.name.clone(),
            price: ingredient.price,
            created_at: ingredient
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            edit_url: ingredient.id().map(edit_path),
            delete_url: ingredient.id().map(delete_path),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListView {
    pub ingredients: Page<IngredientView>,
    pub flashes: Vec<Notification>,
}

#[derive(Debug, Serialize)]
pub struct FormView {
    /// Where the form posts to
    pub action: String,
    pub ingredient: IngredientView,
    pub submitted: bool,
    pub errors: Vec<Violation>,
    pub flashes: Vec<Notification>,
}

enum Operation {
    Create(Option<Payload>),
    Edit(i64, Option<Payload>),
    Delete(i64),
}

/// GET /ingredient
pub async fn list(
    State(state): State<SharedState>,
    Query(params): Query<Vec<(String, String)>>,
    jar: CookieJar,
) -> ApiResult<Response> {
    let (jar, session) = ensure_session(jar, &state.config.session_cookie);
    let page = page_param(&params);

    let worker = Arc::clone(&state);
    let page = run_blocking(move || {
        let conn = worker.open_db()?;
        let mut store = SqliteStore::new(&conn);
        let workflow =
            IngredientWorkflow::new(&mut store).with_page_size(worker.config.page_size);
        workflow.list(page)
    })
    .await?;

    let view = ListView {
        ingredients: page.map(|ingredient| IngredientView::from(&ingredient)),
        flashes: state.flashes.take(&session),
    };
    Ok((jar, Json(view)).into_response())
}

/// GET /ingredient/nouveau
pub async fn new_form(State(state): State<SharedState>, jar: CookieJar) -> ApiResult<Response> {
    let outcome = execute(&state, Operation::Create(None)).await?;
    Ok(respond(&state, jar, INGREDIENT_NEW.to_string(), outcome))
}

/// POST /ingredient/nouveau
pub async fn new_submit(
    State(state): State<SharedState>,
    jar: CookieJar,
    Form(payload): Form<Payload>,
) -> ApiResult<Response> {
    let outcome = execute(&state, Operation::Create(Some(payload))).await?;
    Ok(respond(&state, jar, INGREDIENT_NEW.to_string(), outcome))
}

/// GET /ingredient/modification/:id
pub async fn edit_form(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    jar: CookieJar,
) -> ApiResult<Response> {
    let Some(id) = parse_id(&id) else {
        return Ok(redirect_not_found(&state, jar));
    };
    let outcome = execute(&state, Operation::Edit(id, None)).await?;
    Ok(respond(&state, jar, edit_path(id), outcome))
}

/// POST /ingredient/modification/:id
pub async fn edit_submit(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    jar: CookieJar,
    Form(payload): Form<Payload>,
) -> ApiResult<Response> {
    let Some(id) = parse_id(&id) else {
        return Ok(redirect_not_found(&state, jar));
    };
    let outcome = execute(&state, Operation::Edit(id, Some(payload))).await?;
    Ok(respond(&state, jar, edit_path(id), outcome))
}

/// GET /ingredient/suppression/:id
pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    jar: CookieJar,
) -> ApiResult<Response> {
    let Some(id) = parse_id(&id) else {
        return Ok(redirect_not_found(&state, jar));
    };
    let outcome = execute(&state, Operation::Delete(id)).await?;
    Ok(respond(&state, jar, delete_path(id), outcome))
}

async fn execute(state: &SharedState, operation: Operation) -> ApiResult<Outcome> {
    let worker = Arc::clone(state);
    run_blocking(move || {
        let conn = worker.open_db()?;
        let mut store = SqliteStore::new(&conn);
        let mut workflow =
            IngredientWorkflow::new(&mut store).with_page_size(worker.config.page_size);

        match operation {
            Operation::Create(payload) => workflow.create(payload.as_ref()),
            Operation::Edit(id, payload) => workflow.edit(id, payload.as_ref()),
            Operation::Delete(id) => workflow.delete(id),
        }
    })
    .await
}

fn respond(state: &SharedState, jar: CookieJar, action: String, outcome: Outcome) -> Response {
    let (jar, session) = ensure_session(jar, &state.config.session_cookie);

    match outcome {
        Outcome::RedirectToList(notification) => {
            debug!(
                "Redirecting to list with {} notification",
                notification.category.as_str()
            );
            state.flashes.push(&session, notification);
            (jar, Redirect::to(INGREDIENT_LIST)).into_response()
        }
        Outcome::ShowForm(form) => {
            let status = form_status(&form);
            let view = FormView {
                action,
                ingredient: IngredientView::from(&form.ingredient),
                submitted: form.submitted,
                errors: form.violations,
                flashes: state.flashes.take(&session),
            };
            (status, jar, Json(view)).into_response()
        }
    }
}

fn redirect_not_found(state: &SharedState, jar: CookieJar) -> Response {
    respond(
        state,
        jar,
        INGREDIENT_LIST.to_string(),
        Outcome::RedirectToList(Notification::not_found()),
    )
}

fn form_status(form: &FormState) -> StatusCode {
    if form.submitted && !form.is_valid() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::OK
    }
}

/// First `page` value in the query string; anything that is not an integer means page 1
fn page_param(params: &[(String, String)]) -> Option<i64> {
    params
        .iter()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.trim().parse().ok())
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_page_param() {
        assert_eq!(page_param(&params(&[])), None);
        assert_eq!(page_param(&params(&[("page", "3")])), Some(3));
        assert_eq!(page_param(&params(&[("page", "2"), ("page", "1")])), Some(2));
        assert_eq!(page_param(&params(&[("page", "abc")])), None);
        assert_eq!(page_param(&params(&[("sort", "name"), ("page", " 4 ")])), Some(4));
    }
}
