//! # Estado da Aplicação Web
//!
//! O conteúdo é construído uma única vez na inicialização e
//! compartilhado por todos os handlers via `Arc`. Nada aqui é mutável:
//! o estado de visualização vive no [`CanvasRoot`](crate::canvas::CanvasRoot)
//! montado por requisição.

use std::sync::Arc;

use crate::content::{canvas_data, page_meta, CanvasData, PageMeta};

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    /// Conteúdo do canvas, memoizado para toda a vida do processo.
    pub data: Arc<CanvasData>,
    /// Título e meta description da página.
    pub meta: Arc<PageMeta>,
    /// Largura assumida quando o cliente ainda não informou a sua.
    pub default_width: u32,
}

impl AppState {
    pub fn new(default_width: u32) -> Self {
        Self {
            data: Arc::new(canvas_data()),
            meta: Arc::new(page_meta()),
            default_width,
        }
    }
}
