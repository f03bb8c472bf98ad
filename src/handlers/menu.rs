use actix_web::{web, HttpResponse};

use crate::errors::{ApiError, RepoErr};
use crate::handlers::ApiResponse;
use crate::state::AppState;

const ITEM_NOT_FOUND: &str = "Item não encontrado no cardápio";

pub async fn list_menu(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let items = state
        .menu
        .list()
        .await
        .map_err(|e| ApiError::from_repo(e, "Erro ao buscar cardápio"))?;
    Ok(HttpResponse::Ok().json(ApiResponse::list(items)))
}

pub async fn get_menu_item(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id: i64 = path
        .parse()
        .map_err(|_| ApiError::MenuItemNotFound(ITEM_NOT_FOUND.into()))?;
    let item = state.menu.get_by_id(id).await.map_err(|e| match e {
        RepoErr::NotFound | RepoErr::InvalidReference(_) => {
            ApiError::MenuItemNotFound(ITEM_NOT_FOUND.into())
        }
        other => ApiError::from_repo(other, "Erro ao buscar item do cardápio"),
    })?;
    Ok(HttpResponse::Ok().json(item))
}
