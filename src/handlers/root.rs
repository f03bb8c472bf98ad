use actix_web::{HttpResponse, Responder};
use serde_json::json;

pub async fn banner() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "mensagem": "Bem-vindo à API do Restaurante!",
        "versao": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "cardapio": "GET /api/cardapio",
            "itemCardapio": "GET /api/cardapio/:id",
            "listarComandas": "GET /api/comandas",
            "buscarComanda": "GET /api/comandas/:id",
            "criarComanda": "POST /api/comandas",
            "atualizarStatus": "PATCH /api/comandas/:id",
            "removerComanda": "DELETE /api/comandas/:id"
        }
    }))
}
