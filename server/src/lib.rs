use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use parking_lot::RwLock;
use search_core::{DocId, Document, SearchServer, MAX_RESULT_DOCUMENT_COUNT};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub stop_words: String,
    /// JSONL file of `{"id": .., "text": ..}` records indexed at startup
    pub corpus: Option<PathBuf>,
    pub max_results: usize,
    pub admin_token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { stop_words: String::new(), corpus: None, max_results: MAX_RESULT_DOCUMENT_COUNT, admin_token: None }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub k: Option<usize>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<Document>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InputDoc {
    pub id: DocId,
    pub text: String,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub document_count: usize,
    pub term_count: usize,
    pub stop_word_count: usize,
    pub stop_words: Vec<String>,
    pub max_results: usize,
}

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RwLock<SearchServer>>,
    pub admin_token: Option<String>,
}

pub fn build_app(config: ServerConfig) -> Result<Router> {
    let mut engine = SearchServer::with_max_results(config.max_results);
    engine.set_stop_words(&config.stop_words);
    if let Some(corpus) = &config.corpus {
        let loaded = load_corpus(&mut engine, corpus).with_context(|| format!("loading corpus {}", corpus.display()))?;
        tracing::info!(loaded, corpus = %corpus.display(), "corpus indexed");
    }
    let app_state = AppState { engine: Arc::new(RwLock::new(engine)), admin_token: config.admin_token };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/documents", post(add_document_handler))
        .route("/stats", get(stats_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());
    Ok(app)
}

/// Index every record of a JSONL file, returning how many were added.
pub fn load_corpus(engine: &mut SearchServer, path: &Path) -> Result<usize> {
    let reader = BufReader::new(File::open(path)?);
    let mut loaded = 0;
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let doc: InputDoc = serde_json::from_str(&line).with_context(|| format!("line {}", lineno + 1))?;
        engine.add_document(doc.id, &doc.text);
        loaded += 1;
    }
    Ok(loaded)
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let engine = state.engine.read();
    let limit = params.k.unwrap_or(engine.max_results());
    let (total_hits, results) = engine.find_top_documents_with_total(&params.q, limit);
    drop(engine);

    let elapsed = start.elapsed();
    Json(SearchResponse { query: params.q, took_s: elapsed.as_secs_f64(), total_hits, results })
}

pub async fn add_document_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(doc): Json<InputDoc>,
) -> Result<(StatusCode, Json<serde_json::Value>), (StatusCode, String)> {
    authorize(&state, &headers)?;
    let mut engine = state.engine.write();
    engine.add_document(doc.id, &doc.text);
    let document_count = engine.document_count();
    Ok((StatusCode::CREATED, Json(serde_json::json!({ "document_id": doc.id, "document_count": document_count }))))
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let engine = state.engine.read();
    Json(StatsResponse {
        document_count: engine.document_count(),
        term_count: engine.index().term_count(),
        stop_word_count: engine.stop_words().len(),
        stop_words: engine.stop_words().iter().map(str::to_string).collect(),
        max_results: engine.max_results(),
    })
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), (StatusCode, String)> {
    let required = match &state.admin_token {
        Some(t) => t,
        None => return Err((StatusCode::UNAUTHORIZED, "ADMIN_TOKEN not set".into())),
    };
    let provided = headers.get("X-ADMIN-TOKEN").and_then(|v| v.to_str().ok()).unwrap_or("");
    if provided == required {
        Ok(())
    } else {
        Err((StatusCode::UNAUTHORIZED, "invalid admin token".into()))
    }
}
