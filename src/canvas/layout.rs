//! # Layout — Mobile vs Desktop e Geometria Radial
//!
//! O layout é uma função pura da largura do viewport:
//!
//! ```text
//! largura < 768  →  Mobile   (pilha vertical de cards)
//! largura ≥ 768  →  Desktop  (diagrama radial com linhas)
//! ```
//!
//! No desktop, o core fica no centro `(50, 50)` de um viewBox 100×100 e
//! cada bloco ocupa um dos cinco [`DesktopSlot`] por índice.

use serde::Serialize;

/// Largura (px lógicos) a partir da qual o layout é desktop.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Centro do diagrama no viewBox do SVG.
pub const CENTER: (u32, u32) = (50, 50);

/// Curvas decorativas entre slots externos adjacentes.
///
/// Não derivam das [`Connection`](crate::content::Connection)s; as conexões
/// só aparecem como texto no layout mobile.
pub const DECORATIVE_CURVES: [&str; 2] = ["M 18 25 Q 50 8 82 25", "M 82 28 Q 92 55 82 82"];

/// Modo de renderização do canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Desktop,
    Mobile,
}

impl Layout {
    /// Deriva o layout da largura do viewport. 768 exato é desktop.
    pub fn for_width(width: u32) -> Self {
        if width < MOBILE_BREAKPOINT {
            Layout::Mobile
        } else {
            Layout::Desktop
        }
    }

    pub fn css_tag(&self) -> &'static str {
        match self {
            Layout::Desktop => "desktop",
            Layout::Mobile => "mobile",
        }
    }
}

/// Slots radiais do desktop, na ordem em que os blocos são atribuídos.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DesktopSlot {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    BottomCenter,
}

impl DesktopSlot {
    /// Ordem fixa de atribuição: índice 0 → top-left, …, 4 → bottom-center.
    pub const ORDER: [DesktopSlot; 5] = [
        DesktopSlot::TopLeft,
        DesktopSlot::TopRight,
        DesktopSlot::BottomRight,
        DesktopSlot::BottomLeft,
        DesktopSlot::BottomCenter,
    ];

    /// Slot do bloco de índice `index`.
    ///
    /// Não existe slot dedicado além do quinto. Blocos extras caem em
    /// `TopLeft` e se sobrepõem ao primeiro nó, como no componente
    /// original (`desktopPositions[index] || "top-left"`); o quinto slot
    /// não é reaproveitado.
    pub fn for_index(index: usize) -> Self {
        Self::ORDER
            .get(index)
            .copied()
            .unwrap_or(DesktopSlot::TopLeft)
    }

    pub fn css_tag(&self) -> &'static str {
        match self {
            DesktopSlot::TopLeft => "top-left",
            DesktopSlot::TopRight => "top-right",
            DesktopSlot::BottomRight => "bottom-right",
            DesktopSlot::BottomLeft => "bottom-left",
            DesktopSlot::BottomCenter => "bottom-center",
        }
    }

    /// Ponto de ancoragem do slot no viewBox 100×100.
    pub fn anchor(&self) -> (u32, u32) {
        match self {
            DesktopSlot::TopLeft => (20, 20),
            DesktopSlot::TopRight => (80, 20),
            DesktopSlot::BottomRight => (80, 80),
            DesktopSlot::BottomLeft => (20, 80),
            DesktopSlot::BottomCenter => (50, 90),
        }
    }
}

/// Segmento reto do centro até um slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spoke {
    pub from: (u32, u32),
    pub to: (u32, u32),
}

/// Uma linha do centro para cada slot, na ordem de [`DesktopSlot::ORDER`].
pub fn spokes() -> impl Iterator<Item = Spoke> {
    DesktopSlot::ORDER.iter().map(|slot| Spoke {
        from: CENTER,
        to: slot.anchor(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_boundaries() {
        assert_eq!(Layout::for_width(0), Layout::Mobile);
        assert_eq!(Layout::for_width(500), Layout::Mobile);
        assert_eq!(Layout::for_width(767), Layout::Mobile);
        assert_eq!(Layout::for_width(768), Layout::Desktop);
        assert_eq!(Layout::for_width(1024), Layout::Desktop);
        assert_eq!(Layout::for_width(u32::MAX), Layout::Desktop);
    }

    #[test]
    fn slots_follow_fixed_order() {
        let tags: Vec<&str> = (0..5).map(|i| DesktopSlot::for_index(i).css_tag()).collect();
        assert_eq!(
            tags,
            ["top-left", "top-right", "bottom-right", "bottom-left", "bottom-center"]
        );
    }

    #[test]
    fn index_past_last_slot_falls_back_to_top_left() {
        assert_eq!(DesktopSlot::for_index(5), DesktopSlot::TopLeft);
        assert_eq!(DesktopSlot::for_index(42), DesktopSlot::TopLeft);
    }

    #[test]
    fn spokes_leave_from_center() {
        let all: Vec<Spoke> = spokes().collect();
        assert_eq!(all.len(), 5);
        assert!(all.iter().all(|s| s.from == CENTER));
        assert_eq!(all[4].to, (50, 90));
    }
}
