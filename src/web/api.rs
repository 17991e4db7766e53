use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{Locale, ShortestPathAlgorithm};
use crate::config::ServerConfig;
use crate::graph::{normalize_label, sample::sample_graph, LabeledGraph};
use crate::render::{render_diagram_with, DiagramOptions};
use crate::web::models::*;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state. The graph is never mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<LabeledGraph<u64>>,
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub locale: Locale,
    pub diagram: Arc<DiagramOptions>,
    pub max_sessions: usize,
    pub session_timeout: Duration,
}

impl AppState {
    pub fn new(graph: LabeledGraph<u64>, config: &ServerConfig) -> Self {
        Self {
            graph: Arc::new(graph),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            locale: config.locale,
            diagram: Arc::new(config.diagram.clone()),
            max_sessions: config.max_sessions.max(1),
            session_timeout: Duration::from_secs(config.session_timeout_minutes.saturating_mul(60)),
        }
    }

    /// Computes the route for `request` and renders the diagram for it
    pub fn answer(&self, request: &PathRequest) -> PathResponse {
        let start = normalize_label(&request.start);
        let end = normalize_label(&request.end);

        let result = Dijkstra::new()
            .with_locale(self.locale)
            .find_path(self.graph.as_ref(), &start, &end);
        info!("Path query {} -> {}: {:?}", start, end, result.status);

        let diagram = render_diagram_with(self.graph.as_ref(), &result.path, &self.diagram);
        PathResponse::new(result, diagram)
    }

    fn is_expired(&self, session: &Session, now: DateTime<Utc>) -> bool {
        (now - session.created_at)
            .to_std()
            .map_or(false, |age| age > self.session_timeout)
    }

    /// Locks the session store with expired sessions already dropped
    fn lock_sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        let mut sessions = self.sessions.lock().map_err(|_| {
            warn!("Session store lock poisoned");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("session_store_unavailable", "Session store is unavailable")),
            )
        })?;

        let now = Utc::now();
        let before = sessions.len();
        sessions.retain(|_, session| !self.is_expired(session, now));
        if sessions.len() < before {
            debug!("Expired {} sessions", before - sessions.len());
        }

        Ok(sessions)
    }

    /// Evicts the oldest sessions until one more fits under `max_sessions`
    fn make_room(&self, sessions: &mut HashMap<Uuid, Session>) {
        while sessions.len() >= self.max_sessions {
            let Some(oldest) = sessions.values().min_by_key(|s| s.created_at).map(|s| s.id) else {
                break;
            };
            sessions.remove(&oldest);
            info!("Evicted session {} to stay within {} sessions", oldest, self.max_sessions);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(sample_graph(), &ServerConfig::default())
    }
}

fn session_not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("session_not_found", "Session not found")),
    )
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/graph", get(get_graph))
        .route("/api/path", post(find_path))
        .route("/api/sessions", get(list_sessions).post(create_session))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/sessions/:session_id/path", post(run_session_path))
        .route("/api/sessions/:session_id/diagram", get(get_session_diagram))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Nodes and edges of the served graph
pub async fn get_graph(State(state): State<AppState>) -> Json<WebGraph> {
    Json(WebGraph::from(state.graph.as_ref()))
}

/// Stateless path query
pub async fn find_path(
    State(state): State<AppState>,
    Json(request): Json<PathRequest>,
) -> Json<PathResponse> {
    Json(state.answer(&request))
}

/// Open a new display session
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Session>), ApiError> {
    let session = Session::new();
    let mut sessions = state.lock_sessions()?;
    state.make_room(&mut sessions);
    sessions.insert(session.id, session.clone());
    drop(sessions);
    info!("Created session {}", session.id);
    Ok((StatusCode::CREATED, Json(session)))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> Result<Json<Vec<Uuid>>, ApiError> {
    let sessions = state.lock_sessions()?;
    Ok(Json(sessions.keys().cloned().collect()))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    let sessions = state.lock_sessions()?;
    sessions
        .get(&session_id)
        .cloned()
        .map(Json)
        .ok_or_else(session_not_found)
}

/// Compute a route and make it the session's latest result
pub async fn run_session_path(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<PathRequest>,
) -> Result<Json<PathResponse>, ApiError> {
    if !state.lock_sessions()?.contains_key(&session_id) {
        return Err(session_not_found());
    }

    let response = state.answer(&request);

    let mut sessions = state.lock_sessions()?;
    let session = sessions.get_mut(&session_id).ok_or_else(session_not_found)?;
    session.last_result = Some(response.clone());

    Ok(Json(response))
}

/// Diagram for the session's latest route, or the bare graph before any query
pub async fn get_session_diagram(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<String, ApiError> {
    let sessions = state.lock_sessions()?;
    let session = sessions.get(&session_id).ok_or_else(session_not_found)?;

    match &session.last_result {
        Some(result) => Ok(result.diagram.clone()),
        None => Ok(render_diagram_with(state.graph.as_ref(), &[] as &[String], &state.diagram)),
    }
}
