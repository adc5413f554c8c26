//! Notes controller - REST API over the file-backed note store.
//!
//! Every response uses the uniform envelope `{success, data?, message?, total?}`.

use actix_web::{web, HttpResponse, Responder};

use crate::error::StoreError;
use crate::models::NotePayload;
use crate::AppState;

/// List all notes, newest first, with a total count
async fn list_notes(data: web::Data<AppState>) -> impl Responder {
    let notes = data.store.read_all().await;
    let total = notes.len();

    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "data": notes,
        "total": total
    }))
}

/// Get a single note
async fn get_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match data.store.read_one(&id).await {
        Some(note) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "data": note
        })),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "success": false,
            "message": "Note not found"
        })),
    }
}

/// Create a new note
async fn create_note(data: web::Data<AppState>, body: web::Json<NotePayload>) -> impl Responder {
    let (title, content) = match body.validate() {
        Ok(fields) => fields,
        Err(message) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "message": message
            }));
        }
    };

    match data.store.create(title, content).await {
        Ok(note) => HttpResponse::Created().json(serde_json::json!({
            "success": true,
            "message": "Note created",
            "data": note
        })),
        Err(e) => {
            log::error!("Failed to create note: {}", e);
            internal_error(&e)
        }
    }
}

/// Update an existing note
async fn update_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<NotePayload>,
) -> impl Responder {
    let id = path.into_inner();

    let (title, content) = match body.validate() {
        Ok(fields) => fields,
        Err(message) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "message": message
            }));
        }
    };

    match data.store.update(&id, title, content).await {
        Ok(note) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Note updated",
            "data": note
        })),
        Err(StoreError::NotFound(_)) => HttpResponse::NotFound().json(serde_json::json!({
            "success": false,
            "message": "Note not found"
        })),
        Err(e) => {
            log::error!("Failed to update note {}: {}", id, e);
            internal_error(&e)
        }
    }
}

/// Delete a note. Existence is probed first so a missing id answers 404
/// without touching the store's delete path.
async fn delete_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    if data.store.read_one(&id).await.is_none() {
        return HttpResponse::NotFound().json(serde_json::json!({
            "success": false,
            "message": "Note not found"
        }));
    }

    match data.store.delete(&id).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Note deleted"
        })),
        Err(StoreError::NotFound(_)) => HttpResponse::NotFound().json(serde_json::json!({
            "success": false,
            "message": "Note not found"
        })),
        Err(e) => {
            log::error!("Failed to delete note {}: {}", id, e);
            internal_error(&e)
        }
    }
}

/// 500 envelope: generic message plus a short technical string. The full
/// cause stays in the log.
fn internal_error(e: &StoreError) -> HttpResponse {
    HttpResponse::InternalServerError().json(serde_json::json!({
        "success": false,
        "message": "Internal server error",
        "error": e.user_message()
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/recordatorios")
            .route("", web::get().to(list_notes))
            .route("", web::post().to(create_note))
            .route("/{id}", web::get().to(get_note))
            .route("/{id}", web::put().to(update_note))
            .route("/{id}", web::delete().to(delete_note)),
    );
}
