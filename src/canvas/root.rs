//! # CanvasRoot — O Componente Montado
//!
//! Orquestra o ciclo de vida do canvas:
//!
//! ```text
//! mount(data, viewport)
//!   ├── ViewState::new(viewport.width())
//!   └── viewport.subscribe(resize → state.resize, se seq for mais novo)
//!
//! click_block(id) → state.select(block)
//! close_modal()   → state.close()
//! snapshot()      → ViewState (a camada web renderiza)
//!
//! unmount() / Drop → ResizeSubscription liberada
//! ```
//!
//! O conteúdo chega pronto (`Arc<CanvasData>`), construído uma única vez
//! pelo provedor; a raiz nunca o recria.

use std::sync::Arc;

use parking_lot::RwLock;

use super::layout::Layout;
use super::state::ViewState;
use super::viewport::{ResizeEvent, ResizeSubscription, Viewport};
use crate::content::{Block, CanvasData};
use crate::error::{CanvasError, CanvasResult};

struct RootState {
    view: ViewState,
    /// `seq` do último resize aplicado.
    applied_seq: u64,
}

impl RootState {
    /// Aplica `event` só se for mais novo que o último aplicado.
    fn apply_resize(&mut self, event: ResizeEvent) -> Option<bool> {
        if event.seq <= self.applied_seq {
            return None;
        }
        self.applied_seq = event.seq;
        Some(self.view.resize(event.width))
    }
}

/// Canvas montado sobre um [`Viewport`].
pub struct CanvasRoot {
    data: Arc<CanvasData>,
    state: Arc<RwLock<RootState>>,
    _resize: ResizeSubscription,
}

impl CanvasRoot {
    /// Monta o canvas: lê a largura inicial e inscreve-se nos resizes.
    pub fn mount(data: Arc<CanvasData>, viewport: &Viewport) -> Self {
        let initial = viewport.current();
        let state = Arc::new(RwLock::new(RootState {
            view: ViewState::new(initial.width),
            applied_seq: initial.seq,
        }));

        let handler_state = state.clone();
        let resize = viewport.subscribe(move |event| {
            match handler_state.write().apply_resize(event) {
                Some(true) => {
                    tracing::debug!(width = event.width, "Breakpoint cruzado, layout alterado")
                }
                Some(false) => {}
                None => tracing::trace!(seq = event.seq, "Resize antigo descartado"),
            }
        });

        tracing::debug!(
            width = initial.width,
            layout = ?Layout::for_width(initial.width),
            "Canvas montado"
        );

        Self {
            data,
            state,
            _resize: resize,
        }
    }

    pub fn layout(&self) -> Layout {
        self.state.read().view.layout()
    }

    /// Bloco aberto no modal, se houver.
    pub fn selected(&self) -> Option<Block> {
        self.state.read().view.selected().cloned()
    }

    /// Cópia do estado atual, entrada da renderização.
    pub fn snapshot(&self) -> ViewState {
        self.state.read().view.clone()
    }

    /// Clique no card (mobile) ou nó (desktop) do bloco `id`.
    ///
    /// # Erros
    ///
    /// [`CanvasError::UnknownBlock`] se nenhum bloco tiver esse id; o
    /// estado não é alterado.
    pub fn click_block(&self, id: &str) -> CanvasResult<()> {
        let block = self
            .data
            .block(id)
            .cloned()
            .ok_or_else(|| CanvasError::UnknownBlock(id.to_string()))?;
        self.state.write().view.select(block);
        Ok(())
    }

    /// Ação de fechar do modal (botão ou backdrop).
    pub fn close_modal(&self) {
        self.state.write().view.close();
    }

    /// Desmonta explicitamente. Equivale a soltar o valor.
    pub fn unmount(self) {
        tracing::debug!("Canvas desmontado");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::state::Phase;
    use crate::content::canvas_data;
    use std::sync::mpsc;
    use std::thread;
    use parking_lot::Mutex;

    fn mounted(width: u32) -> (Viewport, CanvasRoot) {
        let viewport = Viewport::new(width);
        let root = CanvasRoot::mount(Arc::new(canvas_data()), &viewport);
        (viewport, root)
    }

    #[test]
    fn mount_derives_layout_from_width() {
        let (_vp, root) = mounted(1024);
        assert_eq!(root.layout(), Layout::Desktop);
        let (_vp, root) = mounted(500);
        assert_eq!(root.layout(), Layout::Mobile);
    }

    #[test]
    fn mount_starts_with_nothing_selected() {
        let (_vp, root) = mounted(1024);
        assert!(root.selected().is_none());
        assert_eq!(root.snapshot().phase(), Phase::NoSelection);
    }

    #[test]
    fn clicking_each_block_selects_it() {
        let (_vp, root) = mounted(500);
        for block in canvas_data().blocks {
            root.click_block(&block.id).unwrap();
            assert_eq!(root.selected().as_ref(), Some(&block));
        }
    }

    #[test]
    fn unknown_block_keeps_state() {
        let (_vp, root) = mounted(500);
        root.click_block("b1").unwrap();
        let err = root.click_block("b42").unwrap_err();
        assert_eq!(err, CanvasError::UnknownBlock("b42".to_string()));
        assert_eq!(root.selected().map(|b| b.id), Some("b1".to_string()));
    }

    #[test]
    fn close_clears_selection() {
        let (_vp, root) = mounted(1024);
        root.click_block("b4").unwrap();
        root.close_modal();
        assert!(root.selected().is_none());
    }

    #[test]
    fn mobile_click_selects_b2_with_four_evidences() {
        let (_vp, root) = mounted(500);
        root.click_block("b2").unwrap();
        let state = root.snapshot();
        let block = state.selected().unwrap();
        assert_eq!(block.title, "2. Autoconfiança Técnica");
        assert_eq!(block.evidences.len(), 4);
    }

    #[test]
    fn resize_with_open_modal_switches_layout_only() {
        let (viewport, root) = mounted(1024);
        root.click_block("b3").unwrap();
        let before = root.selected();

        viewport.resize(500);

        assert_eq!(root.layout(), Layout::Mobile);
        assert_eq!(root.selected(), before);
    }

    #[test]
    fn stale_resize_is_ignored() {
        let (_vp, root) = mounted(1024);
        let mut state = root.state.write();
        assert_eq!(state.apply_resize(ResizeEvent { width: 500, seq: 2 }), Some(true));
        assert_eq!(state.apply_resize(ResizeEvent { width: 1024, seq: 1 }), None);
        assert_eq!(state.view.layout(), Layout::Mobile);
    }

    #[test]
    fn concurrent_resizes_end_on_latest_width() {
        let viewport = Viewport::new(1024);

        // Segura o resize(500) antes que chegue ao handler do canvas.
        let (entered_tx, entered_rx) = mpsc::channel::<()>();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let entered_tx = Mutex::new(entered_tx);
        let release_rx = Mutex::new(release_rx);
        let _gate = viewport.subscribe(move |event| {
            if event.width == 500 {
                entered_tx.lock().send(()).unwrap();
                release_rx.lock().recv().unwrap();
            }
        });
        let root = CanvasRoot::mount(Arc::new(canvas_data()), &viewport);

        let slow = {
            let viewport = viewport.clone();
            thread::spawn(move || viewport.resize(500))
        };
        entered_rx.recv().unwrap();

        viewport.resize(1024);
        release_tx.send(()).unwrap();
        slow.join().unwrap();

        assert_eq!(viewport.width(), 1024);
        assert_eq!(root.layout(), Layout::for_width(viewport.width()));
    }

    #[test]
    fn unmount_releases_resize_listener() {
        let (viewport, root) = mounted(1024);
        let state = root.state.clone();
        assert_eq!(viewport.listener_count(), 1);

        root.unmount();
        assert_eq!(viewport.listener_count(), 0);

        viewport.resize(500);
        assert_eq!(state.read().view.layout(), Layout::Desktop);
    }
}
