pub mod in_memory;
pub mod mongo;

use async_trait::async_trait;

use crate::{
    entities::{
        menu_item::MenuItem,
        order::{NewOrder, Order, OrderItem, OrderStatus},
    },
    errors::RepoErr,
};

#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// All items, ordered by id ascending.
    async fn list(&self) -> Result<Vec<MenuItem>, RepoErr>;
    async fn get_by_id(&self, id: i64) -> Result<MenuItem, RepoErr>;

    /// Resolves `ids` in order into price snapshots. Fails on the first id
    /// that is not on the menu.
    async fn snapshot(&self, ids: &[i64]) -> Result<Vec<OrderItem>, RepoErr> {
        let mut itens = Vec::with_capacity(ids.len());
        for &id in ids {
            match self.get_by_id(id).await {
                Ok(item) => itens.push(OrderItem::from(&item)),
                Err(RepoErr::NotFound) => return Err(RepoErr::InvalidReference(id)),
                Err(e) => return Err(e),
            }
        }
        Ok(itens)
    }
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, new: NewOrder) -> Result<Order, RepoErr>;
    async fn get_by_id(&self, id: i64) -> Result<Order, RepoErr>;
    /// Most recent first.
    async fn list(&self) -> Result<Vec<Order>, RepoErr>;
    async fn set_status(&self, id: i64, status: OrderStatus) -> Result<(), RepoErr>;
    async fn delete(&self, id: i64) -> Result<(), RepoErr>;

    async fn ping(&self) -> Result<(), RepoErr> {
        Ok(())
    }
}
