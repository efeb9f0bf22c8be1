//! # Ícones — Mapeamento Estático Tag → Glifo SVG
//!
//! Cada entidade do canvas referencia um [`Icon`]. A resolução para um
//! glifo renderizável é um `match` estático que devolve SVG inline
//! (traços no estilo lucide, `stroke="currentColor"`), então a cor vem
//! do CSS do badge onde o ícone é inserido.

use maud::{html, Markup, PreEscaped};
use serde::Serialize;

/// Conjunto fechado de ícones usados pelo canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Brain,
    Heart,
    ShieldCheck,
    Users,
    GitPullRequest,
    BookOpen,
    /// "X" do botão de fechar.
    Close,
    /// Affordance de expandir (cards e nós).
    Expand,
    Share,
    Code,
}

impl Icon {
    /// Nome estável do ícone, usado como `data-icon` no SVG.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Brain => "brain",
            Icon::Heart => "heart",
            Icon::ShieldCheck => "shield-check",
            Icon::Users => "users",
            Icon::GitPullRequest => "git-pull-request",
            Icon::BookOpen => "book-open",
            Icon::Close => "x",
            Icon::Expand => "maximize-2",
            Icon::Share => "share-2",
            Icon::Code => "code",
        }
    }

    fn body(&self) -> &'static str {
        match self {
            Icon::Brain => concat!(
                r#"<path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z"/>"#,
                r#"<path d="M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z"/>"#,
                r#"<path d="M12 5v13"/>"#,
            ),
            Icon::Heart => {
                r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#
            }
            Icon::ShieldCheck => concat!(
                r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10"/>"#,
                r#"<path d="m9 12 2 2 4-4"/>"#,
            ),
            Icon::Users => concat!(
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>"#,
                r#"<circle cx="9" cy="7" r="4"/>"#,
                r#"<path d="M22 21v-2a4 4 0 0 0-3-3.87"/>"#,
                r#"<path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#,
            ),
            Icon::GitPullRequest => concat!(
                r#"<circle cx="18" cy="18" r="3"/>"#,
                r#"<circle cx="6" cy="6" r="3"/>"#,
                r#"<path d="M13 6h3a2 2 0 0 1 2 2v7"/>"#,
                r#"<line x1="6" x2="6" y1="9" y2="21"/>"#,
            ),
            Icon::BookOpen => concat!(
                r#"<path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/>"#,
                r#"<path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/>"#,
            ),
            Icon::Close => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            Icon::Expand => concat!(
                r#"<polyline points="15 3 21 3 21 9"/>"#,
                r#"<polyline points="9 21 3 21 3 15"/>"#,
                r#"<line x1="21" x2="14" y1="3" y2="10"/>"#,
                r#"<line x1="3" x2="10" y1="21" y2="14"/>"#,
            ),
            Icon::Share => concat!(
                r#"<circle cx="18" cy="5" r="3"/>"#,
                r#"<circle cx="6" cy="12" r="3"/>"#,
                r#"<circle cx="18" cy="19" r="3"/>"#,
                r#"<line x1="8.59" x2="15.42" y1="13.51" y2="17.49"/>"#,
                r#"<line x1="15.41" x2="8.59" y1="6.51" y2="10.49"/>"#,
            ),
            Icon::Code => {
                r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#
            }
        }
    }

    /// Renderiza o glifo como SVG inline com lado `size` px.
    pub fn render(&self, size: u32) -> Markup {
        self.render_with_class(size, None)
    }

    /// Igual a [`Icon::render`], com classe CSS extra e `aria-hidden`.
    pub fn render_decorative(&self, size: u32, class: &str) -> Markup {
        self.render_with_class(size, Some(class))
    }

    fn render_with_class(&self, size: u32, class: Option<&str>) -> Markup {
        let class_attr = class
            .map(|c| format!(r#" class="{}" aria-hidden="true""#, c))
            .unwrap_or_default();
        html! {
            (PreEscaped(format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" data-icon="{name}"{class_attr}>{body}</svg>"#,
                size = size,
                name = self.name(),
                class_attr = class_attr,
                body = self.body(),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_carries_size_and_name() {
        let svg = Icon::ShieldCheck.render(20).into_string();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="20""#));
        assert!(svg.contains(r#"data-icon="shield-check""#));
        assert!(!svg.contains("aria-hidden"));
    }

    #[test]
    fn decorative_icons_are_hidden_from_assistive_tech() {
        let svg = Icon::Expand.render_decorative(16, "canvas-card__expand").into_string();
        assert!(svg.contains(r#"class="canvas-card__expand""#));
        assert!(svg.contains(r#"aria-hidden="true""#));
    }
}
