use axum::{
    extract::{Path, State},
    response::Json,
};
use crate::core::command::Command;
use crate::core::context::RequestContext;
use crate::core::controller::{AppState, ServerError};
use crate::lookup::command::get_all_books_cmd::{GetAllBooksCommand, GetAllBooksCommandResponse};
use crate::lookup::command::get_book_by_author_cmd::{GetBookByAuthorCommand, GetBookByAuthorCommandRequest, GetBookByAuthorCommandResponse};
use crate::lookup::command::get_book_by_name_cmd::{GetBookByNameCommand, GetBookByNameCommandRequest, GetBookByNameCommandResponse};

pub async fn find_all_books(
    State(state): State<AppState>) -> Result<Json<GetAllBooksCommandResponse>, ServerError> {
    let ctx = RequestContext::new();
    let res = GetAllBooksCommand::new(state.lookup_service).execute(&ctx, ()).await?;
    Ok(Json(res))
}

pub async fn find_book_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>) -> Result<Json<GetBookByNameCommandResponse>, ServerError> {
    let ctx = RequestContext::new();
    let req = GetBookByNameCommandRequest { name };
    let res = GetBookByNameCommand::new(state.lookup_service).execute(&ctx, req).await?;
    Ok(Json(res))
}

pub async fn find_book_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>) -> Result<Json<GetBookByAuthorCommandResponse>, ServerError> {
    let ctx = RequestContext::new();
    let req = GetBookByAuthorCommandRequest { author };
    let res = GetBookByAuthorCommand::new(state.lookup_service).execute(&ctx, req).await?;
    Ok(Json(res))
}
