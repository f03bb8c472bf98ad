use actix_web::{web, HttpResponse};
use tracing::info;

use crate::errors::ApiError;
use crate::handlers::ApiResponse;
use crate::state::AppState;
use crate::validation::{validate_create, validate_status, CreateOrderPayload, UpdateStatusPayload};

/// Non-numeric ids can never match a stored order.
fn order_id(path: web::Path<String>) -> Result<i64, ApiError> {
    path.parse()
        .map_err(|_| ApiError::NotFound("Comanda não encontrada".into()))
}

pub async fn create_order(
    state: web::Data<AppState>,
    payload: web::Json<CreateOrderPayload>,
) -> Result<HttpResponse, ApiError> {
    let valid = validate_create(payload.into_inner())?;
    let created = state
        .place_order(valid.mesa, &valid.itens)
        .await
        .map_err(|e| ApiError::from_repo(e, "Erro ao criar comanda"))?;
    info!(
        order_id = created.id,
        mesa = %created.mesa,
        total = %created.total,
        itens = created.itens.len(),
        "comanda created"
    );
    Ok(HttpResponse::Created()
        .json(ApiResponse::data(created).with_message("Comanda criada com sucesso")))
}

pub async fn list_orders(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let items = state
        .orders
        .list()
        .await
        .map_err(|e| ApiError::from_repo(e, "Erro ao buscar comandas"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::list(items)))
}

pub async fn get_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = order_id(path)?;
    let order = state
        .orders
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::from_repo(e, "Erro ao buscar comanda"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::data(order)))
}

pub async fn update_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpdateStatusPayload>,
) -> Result<HttpResponse, ApiError> {
    let status = validate_status(payload.into_inner())?;
    let id = order_id(path)?;
    state
        .orders
        .set_status(id, status.clone())
        .await
        .map_err(|e| ApiError::from_repo(e, "Erro ao atualizar comanda"))?;
    info!(order_id = id, %status, "comanda status updated");
    Ok(HttpResponse::Ok().json(ApiResponse::message("Status atualizado com sucesso")))
}

pub async fn delete_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = order_id(path)?;
    state
        .orders
        .delete(id)
        .await
        .map_err(|e| ApiError::from_repo(e, "Erro ao deletar comanda"))?;
    info!(order_id = id, "comanda deleted");
    Ok(HttpResponse::Ok().json(ApiResponse::message("Comanda deletada com sucesso")))
}
