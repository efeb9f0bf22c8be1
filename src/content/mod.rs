//! # Módulo Content — O Conteúdo do Canvas
//!
//! Agrupa o modelo de dados ([`model`]) e a fábrica estática que o
//! preenche ([`provider`]). O fluxo é unidirecional:
//!
//! ```text
//! canvas_data() ──► CanvasRoot ──► DetailModal | nós/cards
//! ```

/// Tipos imutáveis: [`CoreEntity`], [`Block`], [`Connection`], [`Accent`].
pub mod model;

/// Fábrica [`canvas_data()`] e metadados [`page_meta()`].
pub mod provider;

pub use model::{Accent, Block, CanvasData, Connection, CoreEntity, PageMeta};
pub use provider::{canvas_data, page_meta};
