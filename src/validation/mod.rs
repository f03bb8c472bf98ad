//! Request schemas and the structural checks applied before any store call.
//!
//! Fields are optional at the serde level so a missing field reaches the
//! validator instead of failing deserialization.

use serde::Deserialize;

use crate::entities::order::OrderStatus;

#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderPayload {
    pub mesa: Option<String>,
    pub itens: Option<Vec<i64>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateStatusPayload {
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", missing_field_message(.0))]
    MissingField(&'static str),
}

fn missing_field_message(field: &str) -> String {
    match field {
        "mesa" => "Mesa é obrigatória".into(),
        "itens" => "Itens são obrigatórios".into(),
        "status" => "Status é obrigatório".into(),
        other => format!("Campo obrigatório ausente: {other}"),
    }
}

/// A create request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCreateOrder {
    pub mesa: String,
    pub itens: Vec<i64>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn validate_create(payload: CreateOrderPayload) -> Result<ValidCreateOrder, ValidationError> {
    let mesa = non_blank(payload.mesa).ok_or(ValidationError::MissingField("mesa"))?;
    let itens = payload
        .itens
        .filter(|ids| !ids.is_empty())
        .ok_or(ValidationError::MissingField("itens"))?;
    Ok(ValidCreateOrder { mesa, itens })
}

pub fn validate_status(payload: UpdateStatusPayload) -> Result<OrderStatus, ValidationError> {
    non_blank(payload.status)
        .map(OrderStatus::new)
        .ok_or(ValidationError::MissingField("status"))
}
