use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::AppError;
use crate::models::{Entry, MAX_MESSAGE_CHARS, MAX_NAME_CHARS, TIMESTAMP_FMT};
use crate::store::GuestbookStore;
use crate::AppState;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    entries: Vec<EntryView>,
    max_name: usize,
    max_message: usize,
    static_hash: &'static str,
}

#[derive(Template)]
#[template(path = "message_list.html")]
struct MessageListTemplate {
    entries: Vec<EntryView>,
}

struct EntryView {
    name: String,
    message: String,
    posted_at: String,
}

impl From<Entry> for EntryView {
    fn from(entry: Entry) -> Self {
        EntryView {
            name: entry.name,
            message: entry.message,
            posted_at: entry.posted_at.format(TIMESTAMP_FMT).to_string(),
        }
    }
}

#[derive(Deserialize)]
pub struct SubmitForm {
    name: String,
    message: String,
}

fn validate_submission(form: &SubmitForm) -> HashMap<String, String> {
    let mut errors = HashMap::new();

    if form.name.trim().is_empty() {
        errors.insert("name".to_string(), "Name is required".to_string());
    } else if form.name.chars().count() > MAX_NAME_CHARS {
        errors.insert(
            "name".to_string(),
            format!("Name must be at most {MAX_NAME_CHARS} characters"),
        );
    }

    if form.message.trim().is_empty() {
        errors.insert("message".to_string(), "Message is required".to_string());
    } else if form.message.chars().count() > MAX_MESSAGE_CHARS {
        errors.insert(
            "message".to_string(),
            format!("Message must be at most {MAX_MESSAGE_CHARS} characters"),
        );
    }

    errors
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/submit-message", post(submit_message))
}

/// Newest first. The sort is stable, so entries stamped within the same
/// second keep their sheet order.
async fn sorted_entries(store: &GuestbookStore) -> Result<Vec<EntryView>, AppError> {
    let mut entries = store.get_messages().await?;
    entries.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
    Ok(entries.into_iter().map(EntryView::from).collect())
}

async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let template = IndexTemplate {
        entries: sorted_entries(&state.store).await?,
        max_name: MAX_NAME_CHARS,
        max_message: MAX_MESSAGE_CHARS,
        static_hash: crate::STATIC_HASH,
    };
    Ok(Html(template.render()?))
}

async fn submit_message(
    State(state): State<AppState>,
    Form(form): Form<SubmitForm>,
) -> Result<impl IntoResponse, AppError> {
    let errors = validate_submission(&form);
    if !errors.is_empty() {
        let mut reasons: Vec<String> = errors.into_values().collect();
        reasons.sort();
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, reasons.join("\n")).into_response());
    }

    state.store.add_message(&form.name, &form.message).await?;

    // htmx swaps this fragment in for #message-list
    let template = MessageListTemplate {
        entries: sorted_entries(&state.store).await?,
    };
    Ok(Html(template.render()?).into_response())
}
