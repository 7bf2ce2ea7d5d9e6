use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

const PASTE_MISSING: &str = "Paste does not exist.";
const LOGIN_REQUIRED: &str = "You must be logged in to do that.";
const NOT_OWNER: &str = "You do not own that paste.";
const EMPTY_PASTE: &str = "Paste cannot be empty.";
const OWN_FORK: &str = "You cannot fork your own paste.";

const ANONYMOUS: &str = "anonymous";
const DEFAULT_LANGUAGE: &str = "Plain Text";
const PASTE_DATE: &str = "2012-01-04T01:44:22.964Z";
const SITE_URL: &str = "https://www.refheap.com";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Paste {
    pub lines: u32,
    pub views: u32,
    pub date: String,
    #[serde(rename = "paste-id")]
    pub id: String,
    pub language: String,
    pub private: bool,
    pub url: String,
    pub user: String,
    pub contents: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Highlighted {
    pub content: String,
}

#[derive(Deserialize)]
pub struct PasteForm {
    pub username: Option<String>,
    pub token: Option<String>,
    pub contents: Option<String>,
    pub language: Option<String>,
    pub private: Option<bool>,
}

#[derive(Deserialize)]
pub struct AuthQuery {
    pub username: Option<String>,
    pub token: Option<String>,
}

#[derive(Default)]
pub struct MockState {
    pastes: HashMap<String, Paste>,
    next_id: u64,
}

impl MockState {
    // Public pastes get the sequential ids refheap shows on its site;
    // private ones get opaque hex so the id works as a capability token.
    fn mint_id(&mut self, private: bool) -> String {
        if private {
            Uuid::new_v4().simple().to_string()
        } else {
            self.next_id += 1;
            self.next_id.to_string()
        }
    }
}

pub type Db = Arc<RwLock<MockState>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(MockState::default()));
    Router::new()
        .route("/paste", post(create_paste))
        .route(
            "/paste/{id}",
            get(get_paste).post(save_paste).delete(delete_paste),
        )
        .route("/paste/{id}/fork", post(fork_paste))
        .route("/paste/{id}/highlight", get(highlight_paste))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

struct ServiceError(StatusCode, &'static str);

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        (self.0, Json(serde_json::json!({ "error": self.1 }))).into_response()
    }
}

fn paste_missing() -> ServiceError {
    ServiceError(StatusCode::NOT_FOUND, PASTE_MISSING)
}

fn require_login(username: &Option<String>) -> Result<&str, ServiceError> {
    match username.as_deref() {
        Some(user) if !user.is_empty() => Ok(user),
        _ => Err(ServiceError(StatusCode::FORBIDDEN, LOGIN_REQUIRED)),
    }
}

fn count_lines(contents: &str) -> u32 {
    contents.lines().count() as u32
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

async fn create_paste(
    State(db): State<Db>,
    Form(form): Form<PasteForm>,
) -> Result<(StatusCode, Json<Paste>), ServiceError> {
    let contents = match form.contents {
        Some(contents) if !contents.is_empty() => contents,
        _ => return Err(ServiceError(StatusCode::BAD_REQUEST, EMPTY_PASTE)),
    };
    let user = form
        .username
        .filter(|user| !user.is_empty())
        .unwrap_or_else(|| ANONYMOUS.to_string());
    let language = form
        .language
        .filter(|language| !language.is_empty())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    let private = form.private.unwrap_or(false);

    let mut state = db.write().await;
    let id = state.mint_id(private);
    let paste = Paste {
        lines: count_lines(&contents),
        views: 0,
        date: PASTE_DATE.to_string(),
        id: id.clone(),
        language,
        private,
        url: format!("{SITE_URL}/{id}"),
        user,
        contents,
    };
    state.pastes.insert(id, paste.clone());
    Ok((StatusCode::CREATED, Json(paste)))
}

async fn get_paste(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Paste>, ServiceError> {
    let mut state = db.write().await;
    let paste = state.pastes.get_mut(&id).ok_or_else(paste_missing)?;
    paste.views += 1;
    Ok(Json(paste.clone()))
}

async fn save_paste(
    State(db): State<Db>,
    Path(id): Path<String>,
    Form(form): Form<PasteForm>,
) -> Result<Json<Paste>, ServiceError> {
    let mut state = db.write().await;
    let paste = state.pastes.get_mut(&id).ok_or_else(paste_missing)?;
    let user = require_login(&form.username)?;
    if paste.user != user {
        return Err(ServiceError(StatusCode::FORBIDDEN, NOT_OWNER));
    }
    if let Some(contents) = form.contents {
        if contents.is_empty() {
            return Err(ServiceError(StatusCode::BAD_REQUEST, EMPTY_PASTE));
        }
        paste.lines = count_lines(&contents);
        paste.contents = contents;
    }
    if let Some(language) = form.language {
        if !language.is_empty() {
            paste.language = language;
        }
    }
    if let Some(private) = form.private {
        paste.private = private;
    }
    Ok(Json(paste.clone()))
}

async fn delete_paste(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(query): Query<AuthQuery>,
) -> Result<StatusCode, ServiceError> {
    let mut state = db.write().await;
    let paste = state.pastes.get(&id).ok_or_else(paste_missing)?;
    let user = require_login(&query.username)?;
    if paste.user != user {
        return Err(ServiceError(StatusCode::FORBIDDEN, NOT_OWNER));
    }
    state.pastes.remove(&id);
    Ok(StatusCode::NO_CONTENT)
}

async fn fork_paste(
    State(db): State<Db>,
    Path(id): Path<String>,
    Form(form): Form<PasteForm>,
) -> Result<(StatusCode, Json<Paste>), ServiceError> {
    let mut state = db.write().await;
    let source = state.pastes.get(&id).ok_or_else(paste_missing)?.clone();
    let user = require_login(&form.username)?;
    if source.user == user {
        return Err(ServiceError(StatusCode::BAD_REQUEST, OWN_FORK));
    }
    let fork_id = state.mint_id(source.private);
    let paste = Paste {
        lines: source.lines,
        views: 0,
        date: PASTE_DATE.to_string(),
        id: fork_id.clone(),
        language: source.language,
        private: source.private,
        url: format!("{SITE_URL}/{fork_id}"),
        user: user.to_string(),
        contents: source.contents,
    };
    state.pastes.insert(fork_id, paste.clone());
    Ok((StatusCode::CREATED, Json(paste)))
}

async fn highlight_paste(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Highlighted>, ServiceError> {
    let state = db.read().await;
    let paste = state.pastes.get(&id).ok_or_else(paste_missing)?;
    Ok(Json(Highlighted {
        content: format!(
            "<div class=\"highlight\"><pre>{}</pre></div>",
            escape(&paste.contents)
        ),
    }))
}
