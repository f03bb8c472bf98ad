use crate::entities::menu_item::{default_menu, MenuItem};
use crate::entities::order::{NewOrder, Order, OrderStatus};
use crate::errors::RepoErr;
use crate::repositories::{MenuRepository, OrderRepository};
use crate::utils::now_ms;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Menu held in memory, sorted by id.
#[derive(Clone)]
pub struct StaticMenuRepository {
    items: Arc<[MenuItem]>,
}

impl StaticMenuRepository {
    pub fn new(mut items: Vec<MenuItem>) -> Self {
        items.sort_by_key(|m| m.id);
        Self {
            items: items.into(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(default_menu())
    }
}

impl Default for StaticMenuRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl MenuRepository for StaticMenuRepository {
    async fn list(&self) -> Result<Vec<MenuItem>, RepoErr> {
        Ok(self.items.to_vec())
    }

    async fn get_by_id(&self, id: i64) -> Result<MenuItem, RepoErr> {
        self.items
            .binary_search_by_key(&id, |m| m.id)
            .map(|idx| self.items[idx].clone())
            .map_err(|_| RepoErr::NotFound)
    }
}

struct Inner {
    next_id: i64,
    orders: BTreeMap<i64, Order>,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            next_id: 1,
            orders: BTreeMap::new(),
        }
    }
}

#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryOrderRepository {
    /// Drops every order and restarts the id sequence. Test fixture.
    pub async fn reset(&self) {
        let mut w = self.inner.write().await;
        *w = Inner::default();
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, new: NewOrder) -> Result<Order, RepoErr> {
        let mut w = self.inner.write().await;
        let id = w.next_id;
        w.next_id += 1;
        let order = Order::new(id, new);
        w.orders.insert(id, order.clone());
        Ok(order)
    }

    async fn get_by_id(&self, id: i64) -> Result<Order, RepoErr> {
        let r = self.inner.read().await;
        r.orders.get(&id).cloned().ok_or(RepoErr::NotFound)
    }

    async fn list(&self) -> Result<Vec<Order>, RepoErr> {
        let r = self.inner.read().await;
        Ok(r.orders.values().rev().cloned().collect())
    }

    async fn set_status(&self, id: i64, status: OrderStatus) -> Result<(), RepoErr> {
        let mut w = self.inner.write().await;
        let o = w.orders.get_mut(&id).ok_or(RepoErr::NotFound)?;
        o.status = status;
        o.atualizado_em = now_ms();
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoErr> {
        let mut w = self.inner.write().await;
        w.orders.remove(&id).map(|_| ()).ok_or(RepoErr::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::entities::order::OrderItem;

    fn new_order(mesa: &str) -> NewOrder {
        NewOrder::new(
            mesa.to_string(),
            vec![OrderItem {
                id: 1,
                nome: "Prato Feito".into(),
                preco: dec!(25.00),
            }],
        )
    }

    #[tokio::test]
    async fn menu_lookup_by_id() {
        let menu = StaticMenuRepository::seeded();
        let item = menu.get_by_id(1).await.unwrap();
        assert_eq!(item.nome, "Prato Feito");
        assert_eq!(item.preco, dec!(25.00));
        assert_eq!(menu.get_by_id(999).await.unwrap_err(), RepoErr::NotFound);
    }

    #[tokio::test]
    async fn menu_list_is_sorted_even_when_seeded_out_of_order() {
        let menu = StaticMenuRepository::new(vec![
            MenuItem::new(9, "Café", dec!(4.00), ""),
            MenuItem::new(2, "Pão de Queijo", dec!(5.50), ""),
        ]);
        let ids: Vec<i64> = menu.list().await.unwrap().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 9]);
    }

    #[tokio::test]
    async fn snapshot_stops_at_first_unknown_id() {
        let menu = StaticMenuRepository::seeded();
        let err = menu.snapshot(&[1, 777, 888]).await.unwrap_err();
        assert_eq!(err, RepoErr::InvalidReference(777));

        let itens = menu.snapshot(&[2, 1, 2]).await.unwrap();
        let ids: Vec<i64> = itens.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1, 2]);
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids_and_lists_newest_first() {
        let repo = InMemoryOrderRepository::default();
        let a = repo.create(new_order("Mesa 1")).await.unwrap();
        let b = repo.create(new_order("Mesa 2")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        let list = repo.list().await.unwrap();
        let ids: Vec<i64> = list.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn set_status_updates_status_and_timestamp() {
        let repo = InMemoryOrderRepository::default();
        let created = repo.create(new_order("Mesa 4")).await.unwrap();

        repo.set_status(created.id, OrderStatus::new("preparando"))
            .await
            .unwrap();

        let after = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(after.status.as_str(), "preparando");
        assert!(after.atualizado_em >= created.atualizado_em);
        assert_eq!(after.criado_em, created.criado_em);
        assert_eq!(after.total, created.total);
    }

    #[tokio::test]
    async fn set_status_on_unknown_id_leaves_others_untouched() {
        let repo = InMemoryOrderRepository::default();
        let created = repo.create(new_order("Mesa 4")).await.unwrap();

        let err = repo
            .set_status(42, OrderStatus::new("pronto"))
            .await
            .unwrap_err();
        assert_eq!(err, RepoErr::NotFound);

        let same = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(same, created);
    }

    #[tokio::test]
    async fn delete_removes_order() {
        let repo = InMemoryOrderRepository::default();
        let created = repo.create(new_order("Mesa 8")).await.unwrap();

        repo.delete(created.id).await.unwrap();

        assert_eq!(repo.get_by_id(created.id).await.unwrap_err(), RepoErr::NotFound);
        assert_eq!(repo.delete(created.id).await.unwrap_err(), RepoErr::NotFound);
    }

    #[tokio::test]
    async fn list_counts_creates_minus_deletes() {
        let repo = InMemoryOrderRepository::default();
        for n in 0..5 {
            repo.create(new_order(&format!("Mesa {n}"))).await.unwrap();
        }
        repo.delete(2).await.unwrap();
        repo.delete(4).await.unwrap();
        assert_eq!(repo.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn reset_clears_orders_and_restarts_ids() {
        let repo = InMemoryOrderRepository::default();
        repo.create(new_order("Mesa 1")).await.unwrap();
        repo.create(new_order("Mesa 2")).await.unwrap();

        repo.reset().await;

        assert!(repo.list().await.unwrap().is_empty());
        let again = repo.create(new_order("Mesa 3")).await.unwrap();
        assert_eq!(again.id, 1);
    }
}
