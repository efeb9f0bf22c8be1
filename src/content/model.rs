//! # Modelo de Conteúdo do Canvas
//!
//! Tipos imutáveis que descrevem o que o canvas mostra:
//!
//! | Tipo | Descrição |
//! |------|-----------|
//! | [`CoreEntity`] | Entidade central de onde o diagrama irradia |
//! | [`Block`] | Um dos cinco blocos temáticos (card no mobile, nó no desktop) |
//! | [`Connection`] | Relação rotulada entre dois conceitos em texto livre |
//! | [`Accent`] | Paleta fixa de cores para agrupar blocos |
//! | [`CanvasData`] | Agregado: core + blocos + conexões |
//! | [`PageMeta`] | Título e meta description da página hospedeira |
//!
//! A ordem dos blocos é semântica: o índice decide o slot radial no desktop.

use serde::Serialize;

use crate::icons::Icon;

/// Paleta fixa de cores de destaque.
///
/// `Purple` fica reservado para o badge da entidade central.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Red,
    Blue,
    Green,
    Yellow,
    Cyan,
    Purple,
}

impl Accent {
    /// Sufixo do modificador CSS (`canvas-icon-badge--red`, `canvas-node--red`, ...).
    pub fn css_tag(&self) -> &'static str {
        match self {
            Accent::Red => "red",
            Accent::Blue => "blue",
            Accent::Green => "green",
            Accent::Yellow => "yellow",
            Accent::Cyan => "cyan",
            Accent::Purple => "purple",
        }
    }
}

/// Entidade central — singleton, constante durante a vida da página.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CoreEntity {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub icon: Icon,
}

/// Bloco temático do canvas.
///
/// As evidências mantêm a ordem de declaração; a primeira serve de
/// prévia no card mobile.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Block {
    pub id: String,
    pub title: String,
    pub question: String,
    pub evidences: Vec<String>,
    pub impact: String,
    pub icon: Icon,
    pub accent: Accent,
}

impl Block {
    /// Primeira evidência, exibida como linha de prévia no card mobile.
    pub fn preview(&self) -> Option<&str> {
        self.evidences.first().map(String::as_str)
    }
}

/// Aresta dirigida e rotulada entre conceitos em texto livre.
///
/// Não é validada contra ids de [`Block`] ou [`CoreEntity`]; é puramente
/// ilustrativa.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
    pub label: String,
}

/// Conteúdo completo do canvas.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CanvasData {
    pub core: CoreEntity,
    pub blocks: Vec<Block>,
    pub connections: Vec<Connection>,
}

impl CanvasData {
    /// Busca um bloco pelo id (ex: `"b2"`).
    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }
}

/// Metadados injetados no `<head>` da página.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}
