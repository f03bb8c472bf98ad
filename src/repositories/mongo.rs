//! MongoDB-backed stores.
//!
//! Orders live in the `comandas` collection keyed by an integer `_id`. Ids
//! come from a per-collection sequence document in `counters`, bumped with an
//! atomic `$inc` so concurrent creates never share an id. The menu lives in
//! `cardapio` and is seeded from the built-in catalog when empty.

use async_trait::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::entities::menu_item::MenuItem;
use crate::entities::order::{NewOrder, Order, OrderItem, OrderStatus};
use crate::errors::RepoErr;
use crate::repositories::{MenuRepository, OrderRepository};
use crate::utils::now_ms;

const MENU_COLLECTION: &str = "cardapio";
const ORDERS_COLLECTION: &str = "comandas";
const COUNTERS_COLLECTION: &str = "counters";

fn unavailable(e: mongodb::error::Error) -> RepoErr {
    RepoErr::Unavailable(e.to_string())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub(crate) struct MenuItemDocument {
    #[serde(rename = "_id")]
    id: i64,
    nome: String,
    #[serde(with = "rust_decimal::serde::float")]
    preco: Decimal,
    #[serde(default)]
    descricao: String,
}

impl From<MenuItem> for MenuItemDocument {
    fn from(m: MenuItem) -> Self {
        Self {
            id: m.id,
            nome: m.nome,
            preco: m.preco,
            descricao: m.descricao,
        }
    }
}

impl From<MenuItemDocument> for MenuItem {
    fn from(d: MenuItemDocument) -> Self {
        Self {
            id: d.id,
            nome: d.nome,
            preco: d.preco,
            descricao: d.descricao,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub(crate) struct OrderDocument {
    #[serde(rename = "_id")]
    id: i64,
    mesa: String,
    itens: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    total: Decimal,
    status: OrderStatus,
    criado_em: i64,
    atualizado_em: i64,
}

impl From<Order> for OrderDocument {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            mesa: o.mesa,
            itens: o.itens,
            total: o.total,
            status: o.status,
            criado_em: o.criado_em,
            atualizado_em: o.atualizado_em,
        }
    }
}

impl From<OrderDocument> for Order {
    fn from(d: OrderDocument) -> Self {
        Self {
            id: d.id,
            mesa: d.mesa,
            itens: d.itens,
            total: d.total,
            status: d.status,
            criado_em: d.criado_em,
            atualizado_em: d.atualizado_em,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Counter {
    seq: i64,
}

#[derive(Clone)]
pub struct MongoMenuRepository {
    items: Collection<MenuItemDocument>,
}

impl MongoMenuRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            items: db.collection(MENU_COLLECTION),
        }
    }

    /// Inserts `items` only when the collection holds no documents yet.
    pub async fn seed_if_empty(&self, items: Vec<MenuItem>) -> Result<(), RepoErr> {
        let existing = self
            .items
            .count_documents(doc! {})
            .await
            .map_err(unavailable)?;
        if existing > 0 {
            debug!(existing, "menu already seeded");
            return Ok(());
        }
        let docs: Vec<MenuItemDocument> = items.into_iter().map(Into::into).collect();
        let n = docs.len();
        self.items.insert_many(docs).await.map_err(unavailable)?;
        info!(items = n, "seeded menu collection");
        Ok(())
    }
}

#[async_trait]
impl MenuRepository for MongoMenuRepository {
    async fn list(&self) -> Result<Vec<MenuItem>, RepoErr> {
        let cursor = self
            .items
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await
            .map_err(unavailable)?;
        let docs: Vec<MenuItemDocument> = cursor.try_collect().await.map_err(unavailable)?;
        Ok(docs.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<MenuItem, RepoErr> {
        self.items
            .find_one(doc! { "_id": id })
            .await
            .map_err(unavailable)?
            .map(Into::into)
            .ok_or(RepoErr::NotFound)
    }
}

#[derive(Clone)]
pub struct MongoOrderRepository {
    db: Database,
    orders: Collection<OrderDocument>,
    counters: Collection<Document>,
}

impl MongoOrderRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            db: db.clone(),
            orders: db.collection(ORDERS_COLLECTION),
            counters: db.collection(COUNTERS_COLLECTION),
        }
    }

    async fn next_id(&self) -> Result<i64, RepoErr> {
        let counter = self
            .counters
            .clone_with_type::<Counter>()
            .find_one_and_update(
                doc! { "_id": ORDERS_COLLECTION },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await
            .map_err(unavailable)?
            .ok_or_else(|| RepoErr::Unavailable("order sequence missing after upsert".into()))?;
        Ok(counter.seq)
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    #[instrument(skip(self, new), fields(mesa = %new.mesa, itens = new.itens.len()))]
    async fn create(&self, new: NewOrder) -> Result<Order, RepoErr> {
        let id = self.next_id().await?;
        let order = Order::new(id, new);
        self.orders
            .insert_one(OrderDocument::from(order.clone()))
            .await
            .map_err(unavailable)?;
        debug!(order_id = id, "inserted order");
        Ok(order)
    }

    async fn get_by_id(&self, id: i64) -> Result<Order, RepoErr> {
        self.orders
            .find_one(doc! { "_id": id })
            .await
            .map_err(unavailable)?
            .map(Into::into)
            .ok_or(RepoErr::NotFound)
    }

    async fn list(&self) -> Result<Vec<Order>, RepoErr> {
        let cursor = self
            .orders
            .find(doc! {})
            .sort(doc! { "_id": -1 })
            .await
            .map_err(unavailable)?;
        let docs: Vec<OrderDocument> = cursor.try_collect().await.map_err(unavailable)?;
        Ok(docs.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, status), fields(status = %status))]
    async fn set_status(&self, id: i64, status: OrderStatus) -> Result<(), RepoErr> {
        let res = self
            .orders
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "status": status.as_str(), "atualizado_em": now_ms() } },
            )
            .await
            .map_err(unavailable)?;
        if res.matched_count == 0 {
            return Err(RepoErr::NotFound);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), RepoErr> {
        let res = self
            .orders
            .delete_one(doc! { "_id": id })
            .await
            .map_err(unavailable)?;
        if res.deleted_count == 0 {
            return Err(RepoErr::NotFound);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepoErr> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(unavailable)
    }
}
