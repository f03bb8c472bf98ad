use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::Display;
use serde::Serialize;

use crate::validation::ValidationError;

#[derive(Debug, Display)]
pub enum ApiError {
    #[display("{}", _0)]
    BadRequest(String),
    #[display("{}", _0)]
    NotFound(String),
    /// Menu lookups answer with a bare `{"message": ...}` body.
    #[display("{}", _0)]
    MenuItemNotFound(String),
    #[display("{mensagem}: {erro}")]
    Internal { mensagem: String, erro: String },
}

#[derive(Serialize)]
struct ErrBody<'a> {
    sucesso: bool,
    mensagem: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    erro: Option<&'a str>,
}

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

impl ApiError {
    /// Maps a store failure on the comandas collection to its HTTP shape.
    /// `context` becomes the `mensagem` of 500 responses.
    pub fn from_repo(err: RepoErr, context: &str) -> Self {
        match err {
            RepoErr::NotFound => Self::NotFound("Comanda não encontrada".into()),
            RepoErr::InvalidReference(id) => {
                Self::NotFound(format!("Item com ID {id} não encontrado no cardápio"))
            }
            RepoErr::Unavailable(e) => {
                tracing::error!(err = %e, "{context}");
                Self::Internal {
                    mensagem: context.to_string(),
                    erro: e,
                }
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) | Self::MenuItemNotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut res = HttpResponse::build(self.status_code());
        match self {
            Self::BadRequest(m) | Self::NotFound(m) => res.json(ErrBody {
                sucesso: false,
                mensagem: m,
                erro: None,
            }),
            Self::MenuItemNotFound(m) => res.json(MessageBody { message: m }),
            Self::Internal { mensagem, erro } => res.json(ErrBody {
                sucesso: false,
                mensagem,
                erro: Some(erro.as_str()),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoErr {
    #[error("not found")]
    NotFound,
    #[error("menu item {0} not found")]
    InvalidReference(i64),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(err: ApiError) -> serde_json::Value {
        let resp = err.error_response();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn invalid_reference_names_the_item() {
        let err = ApiError::from_repo(RepoErr::InvalidReference(42), "Erro ao criar comanda");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        let body = body_json(err).await;
        assert_eq!(body["sucesso"], false);
        assert_eq!(body["mensagem"], "Item com ID 42 não encontrado no cardápio");
        assert!(body.get("erro").is_none());
    }

    #[actix_web::test]
    async fn unavailable_store_is_500_with_detail() {
        let err = ApiError::from_repo(
            RepoErr::Unavailable("connection refused".into()),
            "Erro ao buscar comandas",
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(err).await;
        assert_eq!(body["sucesso"], false);
        assert_eq!(body["mensagem"], "Erro ao buscar comandas");
        assert_eq!(body["erro"], "connection refused");
    }

    #[actix_web::test]
    async fn menu_miss_uses_message_key() {
        let body = body_json(ApiError::MenuItemNotFound("Item não encontrado".into())).await;
        assert_eq!(body["message"], "Item não encontrado");
        assert!(body.get("sucesso").is_none());
    }
}
