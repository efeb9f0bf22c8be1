//! # Handlers HTTP — Os Endpoints do Canvas
//!
//! Cada função pública é um handler Axum mapeado em
//! [`super::create_router()`]. Os fragments seguem o padrão HTMX: o
//! servidor devolve HTML pronto e o `hx-swap` do cliente injeta no DOM.
//!
//! | Handler | Método | Retorno | Uso |
//! |---------|--------|---------|-----|
//! | `index` | GET | HTML completo | Página para `?width=&block=` |
//! | `layout` | GET | HTMX fragment | `#canvas-layout` após cruzar o breakpoint |
//! | `block_detail` | GET | HTMX fragment | Modal do bloco clicado |
//! | `close_modal` | GET | HTMX fragment | Slot do modal vazio |
//! | `canvas_json` | GET | JSON | Exportação do conteúdo |
//!
//! ## Renderização da página
//!
//! `index` monta um [`CanvasRoot`] sobre um [`Viewport`] com a largura
//! informada, aplica o clique (se houver), renderiza o snapshot e desmonta. A
//! inscrição de resize vive só durante a requisição.

use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::Json;
use serde::Deserialize;

use super::modal::detail_modal;
use super::state::AppState;
use super::templates;
use crate::canvas::{CanvasRoot, Layout, Viewport};
use crate::content::CanvasData;
use crate::error::{CanvasError, CanvasResult};

/// Query da página principal.
#[derive(Debug, Default, Deserialize)]
pub struct CanvasQuery {
    /// Largura do viewport em px lógicos.
    pub width: Option<u32>,
    /// Id do bloco aberto no modal (ex: `b2`).
    pub block: Option<String>,
}

/// Query do fragment de layout.
#[derive(Debug, Default, Deserialize)]
pub struct LayoutQuery {
    pub width: Option<u32>,
}

/// Converte Maud Markup em resposta Html<String> do Axum.
fn markup_to_html(m: maud::Markup) -> Html<String> {
    Html(m.into_string())
}

/// GET `/` — Página completa do canvas.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CanvasQuery>,
) -> CanvasResult<Html<String>> {
    let width = query.width.unwrap_or(state.default_width);
    let viewport = Viewport::new(width);
    let root = CanvasRoot::mount(state.data.clone(), &viewport);

    if let Some(id) = query.block.as_deref() {
        root.click_block(id)?;
    }

    tracing::info!(
        width,
        layout = ?root.layout(),
        block = query.block.as_deref().unwrap_or("-"),
        "Renderizando canvas"
    );
    let page = templates::canvas_page(&state.data, &root.snapshot(), &state.meta);
    root.unmount();

    Ok(markup_to_html(page))
}

/// GET `/canvas/layout?width=` — Seção de layout para a nova largura.
pub async fn layout(
    State(state): State<AppState>,
    Query(query): Query<LayoutQuery>,
) -> Html<String> {
    let width = query.width.unwrap_or(state.default_width);
    let layout = Layout::for_width(width);
    tracing::debug!(width, ?layout, "Trocando layout");
    markup_to_html(templates::layout_section(&state.data, layout))
}

/// GET `/canvas/blocks/{id}` — Modal de detalhes do bloco.
pub async fn block_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CanvasResult<Html<String>> {
    let block = state
        .data
        .block(&id)
        .ok_or_else(|| CanvasError::UnknownBlock(id.clone()))?;
    tracing::debug!(block = %block.id, "Abrindo modal");
    Ok(markup_to_html(detail_modal(Some(block))))
}

/// GET `/canvas/modal/close` — Slot do modal vazio.
pub async fn close_modal() -> Html<String> {
    markup_to_html(detail_modal(None))
}

/// GET `/canvas/data` — Conteúdo do canvas em JSON.
pub async fn canvas_json(State(state): State<AppState>) -> Json<CanvasData> {
    Json(CanvasData::clone(&state.data))
}
