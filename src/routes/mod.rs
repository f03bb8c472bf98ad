use crate::errors::ApiError;
use crate::handlers;
use actix_web::web::{self, ServiceConfig};

/// Malformed bodies get the same 400 envelope as missing fields.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(format!("Corpo da requisição inválido: {err}")).into()
    })
}

pub fn config(cfg: &mut ServiceConfig) {
    cfg.route("/", web::get().to(handlers::root::banner))
        .route("/health", web::get().to(handlers::health::ping))
        .service(
            web::scope("/api")
                .app_data(json_config())
                .route("/cardapio", web::get().to(handlers::menu::list_menu))
                .route("/cardapio/{id}", web::get().to(handlers::menu::get_menu_item))
                .route("/comandas", web::get().to(handlers::orders::list_orders))
                .route("/comandas", web::post().to(handlers::orders::create_order))
                .route("/comandas/{id}", web::get().to(handlers::orders::get_order))
                .route(
                    "/comandas/{id}",
                    web::patch().to(handlers::orders::update_status),
                )
                .route(
                    "/comandas/{id}",
                    web::delete().to(handlers::orders::delete_order),
                ),
        );
}
