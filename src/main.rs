use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use dotenvy::dotenv;
use std::io;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

use restaurante_api::{
    config::{Config, StoreBackend},
    entities::menu_item::default_menu,
    repositories::{
        in_memory::{InMemoryOrderRepository, StaticMenuRepository},
        mongo::{MongoMenuRepository, MongoOrderRepository},
    },
    routes,
    state::AppState,
};

async fn build_state(store: &StoreBackend) -> io::Result<Data<AppState>> {
    match store {
        StoreBackend::Memory => {
            tracing::info!("using in-memory stores");
            Ok(AppState::new(
                StaticMenuRepository::seeded(),
                InMemoryOrderRepository::default(),
            ))
        }
        StoreBackend::Mongo { uri, database } => {
            tracing::info!(%database, "connecting to mongodb");
            let client = mongodb::Client::with_uri_str(uri)
                .await
                .map_err(io::Error::other)?;
            let db = client.database(database);

            let menu = MongoMenuRepository::new(&db);
            menu.seed_if_empty(default_menu())
                .await
                .map_err(io::Error::other)?;

            Ok(AppState::new(menu, MongoOrderRepository::new(&db)))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let config = Config::from_env().map_err(io::Error::other)?;
    let state = build_state(&config.store).await?;

    tracing::info!(addr = %config.server_addr, "starting restaurante-api");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::config)
    })
    .bind(&config.server_addr)?
    .run()
    .await
}
