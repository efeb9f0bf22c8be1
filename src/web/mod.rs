//! # Módulo Web — A Superfície HTTP do Canvas
//!
//! Construída com **Axum** + **HTMX** + **Maud**.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Browser (HTMX + script de resize)                        │
//! ├─────────────────────────────────────────────────────────┤
//! │ Axum Router (este módulo)                               │
//! │  ├── GET /                     → página completa         │
//! │  ├── GET /canvas/layout        → fragment de layout      │
//! │  ├── GET /canvas/blocks/{id}   → fragment do modal       │
//! │  ├── GET /canvas/modal/close   → fragment vazio          │
//! │  └── GET /canvas/data          → JSON do conteúdo        │
//! ├─────────────────────────────────────────────────────────┤
//! │ Static Assets (tower_http::ServeDir → /assets/)         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | `AppState` com conteúdo memoizado |
//! | [`handlers`] | Handlers Axum |
//! | [`templates`] | Página e layouts (Maud) |
//! | [`modal`] | Detail Modal |

pub mod handlers;
pub mod modal;
pub mod state;
pub mod templates;

use std::path::Path;

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use state::AppState;

/// Seletor HTMX do contêiner do modal.
pub const MODAL_SLOT: &str = "#canvas-modal-slot";

/// Rota que devolve o slot do modal vazio.
pub const CLOSE_MODAL_PATH: &str = "/canvas/modal/close";

/// Rota do fragment de layout.
pub const LAYOUT_PATH: &str = "/canvas/layout";

/// Rota do modal de um bloco.
pub fn block_path(id: &str) -> String {
    format!("/canvas/blocks/{}", id)
}

/// Cria o router Axum com todas as rotas do canvas.
pub fn create_router(state: AppState, assets_dir: impl AsRef<Path>) -> Router {
    Router::new()
        // ── Página ────────────────────────────────────────────
        .route("/", get(handlers::index))
        // ── HTMX fragments ───────────────────────────────────
        .route(LAYOUT_PATH, get(handlers::layout))
        .route("/canvas/blocks/{id}", get(handlers::block_detail))
        .route(CLOSE_MODAL_PATH, get(handlers::close_modal))
        // ── API JSON ──────────────────────────────────────────
        .route("/canvas/data", get(handlers::canvas_json))
        // ── Arquivos estáticos ────────────────────────────────
        .nest_service("/assets", ServeDir::new(assets_dir.as_ref()))
        .with_state(state)
}
