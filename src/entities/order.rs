use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::menu_item::MenuItem;
use crate::utils::now_ms;

/// Free-form order status. Any non-blank value is accepted on update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct OrderStatus(String);

impl OrderStatus {
    pub const PENDING: &'static str = "pending";

    pub fn pending() -> Self {
        Self(Self::PENDING.to_string())
    }

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Copy of a menu item taken when the order was placed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    pub id: i64,
    pub nome: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub preco: Decimal,
}

impl From<&MenuItem> for OrderItem {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            nome: item.nome.clone(),
            preco: item.preco,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: i64,
    pub mesa: String,
    pub itens: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub status: OrderStatus,
    pub criado_em: i64,
    pub atualizado_em: i64,
}

/// An order whose items have already been resolved against the menu.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub mesa: String,
    pub itens: Vec<OrderItem>,
}

impl NewOrder {
    pub fn new(mesa: String, itens: Vec<OrderItem>) -> Self {
        Self { mesa, itens }
    }
}

impl Order {
    pub fn new(id: i64, new: NewOrder) -> Self {
        let now = now_ms();
        let total = new.itens.iter().map(|i| i.preco).sum();
        Self {
            id,
            mesa: new.mesa,
            itens: new.itens,
            total,
            status: OrderStatus::pending(),
            criado_em: now,
            atualizado_em: now,
        }
    }
}
