#![allow(dead_code, unused_imports)]
//! # Canvas de Autoconhecimento
//!
//! **Ponto de entrada** do servidor que renderiza o canvas de
//! Autoconhecimento: um infográfico estilo knowledge graph com layout
//! radial no desktop, grid de cards no mobile e modal de detalhes.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging
//!   ├── Lê ServerConfig do ambiente
//!   ├── Constrói o conteúdo (uma vez) e monta AppState
//!   ├── Cria o Router
//!   └── Inicia servidor TCP
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! cargo run
//! RUST_LOG=debug cargo run
//! CANVAS_ADDR=127.0.0.1:8080 cargo run
//! ```

/// Módulo `canvas` — layout, estado de visualização e ciclo de vida.
mod canvas;

/// Módulo `config` — configuração do servidor.
mod config;

/// Módulo `content` — modelo e provedor do conteúdo estático.
mod content;

/// Módulo `error` — erros expostos pela superfície HTTP.
mod error;

/// Módulo `icons` — mapeamento ícone → SVG.
mod icons;

/// Módulo `web` — servidor axum, handlers e templates.
mod web;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::web::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG controla o nível; padrão "info".
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🧠 Canvas de Autoconhecimento — Starting...");

    let config = ServerConfig::from_env();
    let state = AppState::new(config.default_width);
    tracing::info!(
        blocks = state.data.blocks.len(),
        connections = state.data.connections.len(),
        "Conteúdo do canvas carregado"
    );

    let app = web::create_router(state, &config.assets_dir);

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    tracing::info!(addr = %config.addr, assets = %config.assets_dir.display(), "🚀 Server running");

    axum::serve(listener, app).await?;

    Ok(())
}
