//! # Templates Maud — Página do Canvas
//!
//! Renderização server-side com [`maud`]. O layout mobile e o desktop
//! saem do mesmo [`CanvasData`]; só a forma muda.
//!
//! | Função | Tipo | Descrição |
//! |--------|------|-----------|
//! | [`canvas_page()`] | Página completa | Header, visão geral, layout, footer, slot do modal |
//! | [`layout_section()`] | Fragment HTMX | Seção `#canvas-layout` para a largura atual |
//!
//! ## Página (`canvas_page`)
//!
//! ```text
//! ┌──────────────── canvas-header ───────────────┐
//! │ </> Autoconhecimento          [Knowledge Graph]│
//! ├──────────────────────────────────────────────┤
//! │ Visão Geral                                   │
//! │ #canvas-layout  (mobile: cards | desktop: SVG)│
//! ├──────────────────────────────────────────────┤
//! │ 🎯 footer                                     │
//! └──────────────────────────────────────────────┘
//!   #canvas-modal-slot  (fora do layout)
//! ```
//!
//! O slot do modal fica fora de `#canvas-layout`: trocar o layout no
//! resize nunca mexe na seleção.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::modal::detail_modal;
use super::{block_path, LAYOUT_PATH, MODAL_SLOT};
use crate::canvas::layout::{self, DesktopSlot, Layout, MOBILE_BREAKPOINT};
use crate::canvas::ViewState;
use crate::content::{CanvasData, PageMeta};
use crate::icons::Icon;

/// Script inline: reporta a largura da janela e troca o layout via `canvasLoad`
/// só quando o breakpoint é cruzado.
const RESIZE_SCRIPT: &str = r#"<script>
(function() {
  function currentLayout() {
    return window.innerWidth < __BREAKPOINT__ ? 'mobile' : 'desktop';
  }

  function syncLayout() {
    var section = document.getElementById('canvas-layout');
    if (!section || section.dataset.layout === currentLayout()) return;
    canvasLoad('__LAYOUT_PATH__?width=' + window.innerWidth, '#canvas-layout', 'outerHTML');
  }

  document.addEventListener('DOMContentLoaded', syncLayout);
  window.addEventListener('resize', syncLayout);
})();
</script>"#;

/// Página completa do canvas para o estado `state`.
pub fn canvas_page(data: &CanvasData, state: &ViewState, meta: &PageMeta) -> Markup {
    let script = RESIZE_SCRIPT
        .replace("__BREAKPOINT__", &MOBILE_BREAKPOINT.to_string())
        .replace("__LAYOUT_PATH__", LAYOUT_PATH);

    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (meta.title) }
                meta name="description" content=(meta.description);
                link rel="stylesheet" href="/assets/canvas.css";
                script src="/assets/htmx.min.js" {}
                script src="/assets/canvas.js" {}
            }
            body {
                div class="canvas-page" {
                    div class="canvas-dot-pattern" aria-hidden="true" {}

                    header class="canvas-header" {
                        div class="canvas-header__titles" {
                            h1 {
                                (Icon::Code.render_decorative(24, "canvas-header__icon"))
                                " Autoconhecimento"
                            }
                            p { "Thássio Gomes Silva · Knowledge Graph EMBRAPII" }
                        }
                        div class="canvas-header__pill" { "Knowledge Graph" }
                    }

                    main class="canvas-main" {
                        section class="canvas-overview" {
                            h2 { "Visão Geral" }
                            p {
                                "Este canvas, no estilo Knowledge Graph, mostra como desenvolvi a "
                                "competência de Inteligência Emocional (Autoconhecimento) durante "
                                "o projeto de um software de gestão, usando PBL."
                            }
                        }
                        (layout_section(data, state.layout()))
                    }

                    footer class="canvas-footer" {
                        "🎯 Desenvolvimento emocional conectado à prática técnica (PBL)."
                    }

                    div id="canvas-modal-slot" {
                        (detail_modal(state.selected()))
                    }
                }
                (PreEscaped(script))
            }
        }
    }
}

/// Seção de layout (`#canvas-layout`) para `layout`.
pub fn layout_section(data: &CanvasData, layout: Layout) -> Markup {
    html! {
        div id="canvas-layout" data-layout=(layout.css_tag()) {
            @match layout {
                Layout::Mobile => { (mobile_layout(data)) }
                Layout::Desktop => { (desktop_layout(data)) }
            }
        }
    }
}

fn mobile_layout(data: &CanvasData) -> Markup {
    let core = &data.core;
    html! {
        section class="canvas-mobile" {
            div class="canvas-mobile__core" {
                span class="canvas-icon-badge canvas-icon-badge--purple" {
                    (core.icon.render(28))
                }
                h2 { (core.title) }
                p class="canvas-mobile__subtitle" { (core.subtitle) }
                p class="canvas-mobile__description" { (core.description) }
            }

            div class="canvas-mobile__label" { "Blocos de Desenvolvimento" }

            div class="canvas-mobile__grid" {
                @for block in &data.blocks {
                    button type="button"
                        class=(format!("canvas-card canvas-card--{}", block.accent.css_tag()))
                        data-block=(block.id)
                        hx-get=(block_path(&block.id))
                        hx-target=(MODAL_SLOT)
                        hx-swap="innerHTML" {
                        div class="canvas-card__heading" {
                            span class=(format!("canvas-icon-badge canvas-icon-badge--{}", block.accent.css_tag())) {
                                (block.icon.render(20))
                            }
                            h3 { (block.title) }
                            (Icon::Expand.render_decorative(16, "canvas-card__expand"))
                        }
                        @if let Some(preview) = block.preview() {
                            p class="canvas-card__preview" { (preview) }
                        }
                    }
                }
            }

            div class="canvas-connections" {
                h3 {
                    (Icon::Share.render_decorative(16, "canvas-connections__icon"))
                    " Conexões do Sistema"
                }
                ul {
                    @for connection in &data.connections {
                        li class="canvas-connection" {
                            span { (connection.from) }
                            " → "
                            strong { (connection.label) }
                            " → "
                            span { (connection.to) }
                        }
                    }
                }
            }
        }
    }
}

fn desktop_layout(data: &CanvasData) -> Markup {
    let core = &data.core;
    html! {
        section class="canvas-desktop" {
            svg class="canvas-lines" viewBox="0 0 100 100" preserveAspectRatio="none" aria-hidden="true" {
                defs {
                    marker id="canvas-arrow" markerWidth="4" markerHeight="3" refX="3" refY="1.5" orient="auto" {
                        polygon points="0 0, 4 1.5, 0 3" fill="#7c7fff" {}
                    }
                }
                @for spoke in layout::spokes() {
                    line class="canvas-lines__spoke"
                        x1=(spoke.from.0) y1=(spoke.from.1)
                        x2=(spoke.to.0) y2=(spoke.to.1) {}
                }
                @for curve in layout::DECORATIVE_CURVES {
                    path class="canvas-lines__curve" d=(curve) marker-end="url(#canvas-arrow)" {}
                }
            }

            div class="canvas-core" {
                div class="canvas-core__card" {
                    span class="canvas-icon-badge canvas-icon-badge--purple" {
                        (core.icon.render(30))
                    }
                    h2 { (core.title) }
                    p class="canvas-core__subtitle" { (core.subtitle) }
                    p class="canvas-core__description" { (core.description) }
                }
            }

            @for (index, block) in data.blocks.iter().enumerate() {
                @let slot = DesktopSlot::for_index(index);
                button type="button"
                    class=(format!(
                        "canvas-node canvas-node--{} canvas-node--{}",
                        slot.css_tag(),
                        block.accent.css_tag()
                    ))
                    data-block=(block.id)
                    hx-get=(block_path(&block.id))
                    hx-target=(MODAL_SLOT)
                    hx-swap="innerHTML" {
                    div class="canvas-node__content" {
                        div class="canvas-node__icons" {
                            span class=(format!("canvas-icon-badge canvas-icon-badge--{}", block.accent.css_tag())) {
                                (block.icon.render(20))
                            }
                            (Icon::Expand.render_decorative(14, "canvas-node__expand"))
                        }
                        h3 { (block.title) }
                        p { "\"" (block.question) "\"" }
                    }
                }
            }

            div class="canvas-legend" { "Clique nos cards para expandir" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{canvas_data, page_meta};

    #[test]
    fn desktop_has_center_and_five_nodes_without_connections() {
        let data = canvas_data();
        let html = layout_section(&data, Layout::Desktop).into_string();
        assert!(html.contains("canvas-core__card"));
        assert_eq!(html.matches("class=\"canvas-node ").count(), 5);
        assert_eq!(html.matches("canvas-lines__spoke").count(), 5);
        assert_eq!(html.matches("canvas-lines__curve").count(), 2);
        assert!(!html.contains("Conexões do Sistema"));
        assert!(!html.contains("canvas-connection"));
        for c in &data.connections {
            let triple = format!("<span>{}</span> → <strong>{}</strong>", c.from, c.label);
            assert!(!html.contains(&triple), "conexão no desktop: {}", c.label);
        }
    }

    #[test]
    fn desktop_nodes_take_slots_by_index() {
        let data = canvas_data();
        let html = layout_section(&data, Layout::Desktop).into_string();
        let expected = [
            ("b1", "top-left"),
            ("b2", "top-right"),
            ("b3", "bottom-right"),
            ("b4", "bottom-left"),
            ("b5", "bottom-center"),
        ];
        for (id, slot) in expected {
            let block = data.block(id).unwrap();
            let class = format!(
                "canvas-node canvas-node--{} canvas-node--{}",
                slot,
                block.accent.css_tag()
            );
            assert!(html.contains(&class), "{} deveria estar em {}", id, slot);
        }
    }

    #[test]
    fn mobile_lists_cards_and_connections_in_order() {
        let data = canvas_data();
        let html = layout_section(&data, Layout::Mobile).into_string();
        assert_eq!(html.matches("class=\"canvas-card ").count(), 5);
        assert!(html.contains("Blocos de Desenvolvimento"));

        let mut last = 0;
        for c in &data.connections {
            let triple = format!(
                "<span>{}</span> → <strong>{}</strong> → <span>{}</span>",
                c.from, c.label, c.to
            );
            let at = html.find(&triple).expect("conexão ausente");
            assert!(at >= last);
            last = at;
        }
    }

    #[test]
    fn mobile_cards_preview_first_evidence() {
        let data = canvas_data();
        let html = layout_section(&data, Layout::Mobile).into_string();
        for block in &data.blocks {
            let preview = format!(
                "<p class=\"canvas-card__preview\">{}</p>",
                block.evidences[0]
            );
            assert!(html.contains(&preview));
        }
        assert!(!html.contains(&data.blocks[0].evidences[1]));
    }

    #[test]
    fn page_injects_metadata() {
        let data = canvas_data();
        let meta = page_meta();
        let html = canvas_page(&data, &ViewState::new(1024), &meta).into_string();
        assert!(html.contains("<title>Canvas de Autoconhecimento | Thássio Silva</title>"));
        assert!(html.contains(r#"<meta name="description""#));
        assert!(html.contains(r#"data-layout="desktop""#));
        assert!(html.contains("window.innerWidth < 768"));
    }

    #[test]
    fn page_loads_only_local_scripts() {
        let data = canvas_data();
        let html = canvas_page(&data, &ViewState::new(1024), &page_meta()).into_string();
        assert!(html.contains(r#"<script src="/assets/htmx.min.js">"#));
        assert!(html.contains(r#"<script src="/assets/canvas.js">"#));
        assert!(!html.contains("https://"));
    }

    #[test]
    fn resize_with_open_modal_renders_mobile_and_keeps_dialog() {
        let data = canvas_data();
        let mut state = ViewState::new(1024);
        state.select(data.block("b3").unwrap().clone());
        state.resize(500);
        let html = canvas_page(&data, &state, &page_meta()).into_string();
        assert!(html.contains(r#"data-layout="mobile""#));
        assert!(html.contains(r#"role="dialog""#));
        assert!(html.contains("Mais engajamento, melhor clima e aumento da produtividade."));
    }

    #[test]
    fn modal_slot_sits_outside_layout() {
        let data = canvas_data();
        let mut state = ViewState::new(500);
        state.select(data.blocks[1].clone());
        let html = canvas_page(&data, &state, &page_meta()).into_string();
        let slot = html.find(r#"id="canvas-modal-slot""#).unwrap();
        let dialog = html.find(r#"role="dialog""#).unwrap();
        let footer = html.find("canvas-footer").unwrap();
        assert!(footer < slot && slot < dialog);
    }
}
