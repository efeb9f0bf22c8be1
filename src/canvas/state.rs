//! # ViewState — Estado Efêmero do Canvas
//!
//! O espaço de estados é o produto `{Desktop, Mobile} × {NoSelection, Showing}`:
//!
//! ```text
//!                 select(b)                 resize(w)
//! NoSelection ─────────────► Showing(b) ◄──────────────┐
//!      ▲                        │   │                   │
//!      └──────── close() ───────┘   └───────────────────┘
//! ```
//!
//! O layout não é armazenado: é derivado da largura a cada leitura, o que
//! evita duas flags mutáveis independentes.

use serde::Serialize;

use super::layout::Layout;
use crate::content::Block;

/// Fase de seleção do modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    NoSelection,
    Showing,
}

/// Estado de visualização: largura atual do viewport e bloco selecionado.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    viewport_width: u32,
    selected: Option<Block>,
}

impl ViewState {
    /// Estado inicial: layout derivado de `width`, nenhum bloco aberto.
    pub fn new(width: u32) -> Self {
        Self {
            viewport_width: width,
            selected: None,
        }
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn layout(&self) -> Layout {
        Layout::for_width(self.viewport_width)
    }

    pub fn selected(&self) -> Option<&Block> {
        self.selected.as_ref()
    }

    pub fn phase(&self) -> Phase {
        match self.selected {
            Some(_) => Phase::Showing,
            None => Phase::NoSelection,
        }
    }

    /// Aplica uma nova largura. Retorna `true` se o breakpoint foi cruzado.
    ///
    /// A seleção nunca é afetada.
    pub fn resize(&mut self, width: u32) -> bool {
        let before = self.layout();
        self.viewport_width = width;
        before != self.layout()
    }

    /// Abre o modal para `block`. Clicar de novo no mesmo bloco é no-op.
    pub fn select(&mut self, block: Block) {
        self.selected = Some(block);
    }

    /// Fecha o modal, qualquer que seja o bloco aberto.
    pub fn close(&mut self) {
        self.selected = None;
    }
}
