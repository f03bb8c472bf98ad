pub mod health;
pub mod menu;
pub mod orders;
pub mod root;

use serde::Serialize;

/// Success envelope shared by the `/api` endpoints.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub sucesso: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mensagem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantidade: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dados: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn data(dados: T) -> Self {
        Self {
            sucesso: true,
            mensagem: None,
            quantidade: None,
            dados: Some(dados),
        }
    }

    pub fn with_message(mut self, mensagem: impl Into<String>) -> Self {
        self.mensagem = Some(mensagem.into());
        self
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    pub fn list(dados: Vec<T>) -> Self {
        let quantidade = Some(dados.len());
        Self {
            quantidade,
            ..Self::data(dados)
        }
    }
}

impl ApiResponse<()> {
    pub fn message(mensagem: impl Into<String>) -> Self {
        Self {
            sucesso: true,
            mensagem: Some(mensagem.into()),
            quantidade: None,
            dados: None,
        }
    }
}
