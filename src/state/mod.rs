use crate::entities::order::{NewOrder, Order};
use crate::errors::RepoErr;
use crate::repositories::{MenuRepository, OrderRepository};
use actix_web::web::Data;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub menu: Arc<dyn MenuRepository>,
    pub orders: Arc<dyn OrderRepository>,
}

impl AppState {
    pub fn new<M, R>(menu: M, orders: R) -> Data<Self>
    where
        M: MenuRepository + 'static,
        R: OrderRepository + 'static,
    {
        Data::new(Self {
            menu: Arc::new(menu),
            orders: Arc::new(orders),
        })
    }

    /// Snapshots the requested items from the menu and stores the order.
    /// Nothing is persisted when an id is unknown.
    pub async fn place_order(&self, mesa: String, item_ids: &[i64]) -> Result<Order, RepoErr> {
        let itens = self.menu.snapshot(item_ids).await?;
        self.orders.create(NewOrder::new(mesa, itens)).await
    }
}
