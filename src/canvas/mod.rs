//! # Módulo Canvas — Layout, Estado e Ciclo de Vida
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`layout`] | `Layout::for_width`, slots radiais e geometria do SVG |
//! | [`state`] | `ViewState`: {Desktop, Mobile} × {NoSelection, Showing} |
//! | [`viewport`] | Eventos de resize e inscrição com liberação no `Drop` |
//! | [`root`] | `CanvasRoot`: mount, clique, fechar, render, unmount |

pub mod layout;
pub mod root;
pub mod state;
pub mod viewport;

pub use layout::{DesktopSlot, Layout, MOBILE_BREAKPOINT};
pub use root::CanvasRoot;
pub use state::{Phase, ViewState};
pub use viewport::{ResizeEvent, ResizeSubscription, Viewport};
