//! # Erros do Canvas
//!
//! O conteúdo é constante, então o único caso de falha é externo: um id
//! de bloco que não existe (clique forjado ou URL digitada à mão).

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use maud::html;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CanvasError {
    #[error("Bloco não encontrado: {0}")]
    UnknownBlock(String),
}

pub type CanvasResult<T> = Result<T, CanvasError>;

impl IntoResponse for CanvasError {
    fn into_response(self) -> Response {
        let status = match &self {
            CanvasError::UnknownBlock(_) => StatusCode::NOT_FOUND,
        };
        tracing::warn!(error = %self, status = status.as_u16(), "Requisição rejeitada");

        let body = html! {
            div class="canvas-error" role="alert" {
                p { (self.to_string()) }
            }
        };
        (status, Html(body.into_string())).into_response()
    }
}
