//! # Viewport — Fonte de Eventos de Resize
//!
//! Representa o lado "janela" do host: guarda a largura atual e
//! despacha eventos de resize para os listeners inscritos.
//!
//! A inscrição devolve um [`ResizeSubscription`], que remove o listener
//! no `Drop`. Assim o handler nunca é chamado depois que o componente
//! dono foi desmontado, em qualquer caminho de saída.
//!
//! ```text
//! Viewport::resize(w)
//!   ├── grava largura + seq++ (mesmo lock)
//!   ├── snapshot dos listeners (lock liberado)
//!   └── chama cada handler(ResizeEvent { width, seq })
//! ```
//!
//! Com resizes concorrentes os handlers podem receber eventos fora de
//! ordem; o `seq` permite descartar o que for mais antigo que o último
//! aplicado, de modo que o evento mais recente sempre vence.

use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use uuid::Uuid;

/// Um evento de resize. `seq` cresce estritamente a cada `resize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeEvent {
    pub width: u32,
    pub seq: u64,
}

type ResizeHandler = Arc<dyn Fn(ResizeEvent) + Send + Sync>;

struct ViewportInner {
    current: RwLock<ResizeEvent>,
    listeners: Mutex<Vec<(Uuid, ResizeHandler)>>,
}

/// Viewport compartilhado (clonar compartilha o mesmo estado).
#[derive(Clone)]
pub struct Viewport {
    inner: Arc<ViewportInner>,
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self {
            inner: Arc::new(ViewportInner {
                current: RwLock::new(ResizeEvent { width, seq: 0 }),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Largura atual em px lógicos.
    pub fn width(&self) -> u32 {
        self.inner.current.read().width
    }

    /// Largura e sequência do último resize (seq 0 = largura inicial).
    pub fn current(&self) -> ResizeEvent {
        *self.inner.current.read()
    }

    /// Atualiza a largura e notifica todos os listeners vivos.
    ///
    /// O lock da lista é solto antes dos handlers rodarem, para que um
    /// handler possa desinscrever-se sem deadlock.
    pub fn resize(&self, width: u32) {
        let event = {
            let mut current = self.inner.current.write();
            *current = ResizeEvent {
                width,
                seq: current.seq + 1,
            };
            *current
        };
        let handlers: Vec<ResizeHandler> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        tracing::trace!(
            width,
            seq = event.seq,
            listeners = handlers.len(),
            "Resize despachado"
        );
        for handler in handlers {
            handler(event);
        }
    }

    /// Inscreve `handler` nos eventos de resize.
    pub fn subscribe<F>(&self, handler: F) -> ResizeSubscription
    where
        F: Fn(ResizeEvent) + Send + Sync + 'static,
    {
        let id = Uuid::new_v4();
        self.inner.listeners.lock().push((id, Arc::new(handler)));
        tracing::debug!(%id, "Listener de resize inscrito");
        ResizeSubscription {
            id,
            viewport: Arc::downgrade(&self.inner),
        }
    }

    /// Número de listeners ainda inscritos.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }
}

/// Guarda de uma inscrição de resize. Soltar a guarda remove o listener.
pub struct ResizeSubscription {
    id: Uuid,
    viewport: Weak<ViewportInner>,
}

impl ResizeSubscription {
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        // Viewport já descartado: nada a liberar.
        let Some(inner) = self.viewport.upgrade() else {
            return;
        };
        inner.listeners.lock().retain(|(id, _)| *id != self.id);
        tracing::debug!(id = %self.id, "Listener de resize liberado");
    }
}
