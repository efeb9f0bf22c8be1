//! # Detail Modal
//!
//! Componente sem estado: recebe `Option<&Block>` e devolve o overlay
//! ou nada. Quem decide se o modal aparece é o chamador; a ação de
//! fechar (botão "Fechar", "X" do header ou clique no backdrop) apenas
//! pede ao servidor o slot vazio via HTMX.
//!
//! ```text
//! ┌──────────────── canvas-modal ────────────────┐
//! │ backdrop (clique → fechar)                    │
//! │  ┌──────── dialog role="dialog" ──────────┐   │
//! │  │ [badge] Título                     [X] │   │
//! │  │ Pergunta-Chave  "…"                    │   │
//! │  │ Evidências no Projeto  • … • …         │   │
//! │  │ Impacto Gerado  …                      │   │
//! │  │                             [Fechar]   │   │
//! │  └────────────────────────────────────────┘   │
//! └───────────────────────────────────────────────┘
//! ```

use maud::{html, Markup};

use super::{CLOSE_MODAL_PATH, MODAL_SLOT};
use crate::content::Block;
use crate::icons::Icon;

/// Renderiza o modal de detalhes, ou markup vazio sem bloco.
pub fn detail_modal(block: Option<&Block>) -> Markup {
    let Some(block) = block else {
        return html! {};
    };

    html! {
        div class="canvas-modal" data-block=(block.id) {
            div class="canvas-modal__backdrop"
                hx-get=(CLOSE_MODAL_PATH)
                hx-target=(MODAL_SLOT)
                hx-swap="innerHTML" {}
            div class="canvas-modal__dialog" role="dialog" aria-modal="true"
                aria-labelledby="canvas-modal-title" {
                div class="canvas-modal__header" {
                    div class="canvas-modal__title" {
                        span class=(format!("canvas-icon-badge canvas-icon-badge--{}", block.accent.css_tag())) {
                            (block.icon.render(20))
                        }
                        h3 id="canvas-modal-title" { (block.title) }
                    }
                    button class="canvas-modal__close" type="button" aria-label="Fechar"
                        hx-get=(CLOSE_MODAL_PATH)
                        hx-target=(MODAL_SLOT)
                        hx-swap="innerHTML" {
                        (Icon::Close.render(18))
                    }
                }
                div class="canvas-modal__body" {
                    div class="canvas-modal__card" {
                        p class="canvas-modal__label" { "Pergunta-Chave" }
                        p class="canvas-modal__question" { "\"" (block.question) "\"" }
                    }
                    div class="canvas-modal__section" {
                        p class="canvas-modal__label" { "Evidências no Projeto" }
                        ul class="canvas-modal__list" {
                            @for evidence in &block.evidences {
                                li class="canvas-modal__evidence" {
                                    span aria-hidden="true" { "•" }
                                    " " (evidence)
                                }
                            }
                        }
                    }
                    div class="canvas-modal__card canvas-modal__card--impact" {
                        p class="canvas-modal__label" { "Impacto Gerado" }
                        p class="canvas-modal__impact" { (block.impact) }
                    }
                }
                div class="canvas-modal__footer" {
                    button class="canvas-modal__button" type="button"
                        hx-get=(CLOSE_MODAL_PATH)
                        hx-target=(MODAL_SLOT)
                        hx-swap="innerHTML" {
                        "Fechar"
                    }
                }
            }
        }
    }
}
