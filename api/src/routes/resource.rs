//! Generic resource handlers
//!
//! One set of handlers serves every entity; `crud_scope` mounts them under
//! a path with the fixed route layout:
//!
//! | Method | Path                 | Action              |
//! |--------|----------------------|---------------------|
//! | POST   | `/{r}`               | create              |
//! | GET    | `/{r}`, `/{r}/`      | list, or `?id=` one |
//! | GET    | `/{r}/{id}`          | read one            |
//! | PUT    | `/{r}/update`        | update              |
//! | DELETE | `/{r}/delete/{id}`   | delete              |

use actix_web::{web, HttpResponse, Route, Scope};

use rt_core::domain::Resource;
use rt_core::errors::ValidationError;
use rt_core::services::ResourceService;
use rt_shared::StatusResponse;

use crate::dto::ReadQuery;
use crate::handlers::error::{handle_domain_error, method_not_allowed};

/// Mount the standard routes for `E` on `scope`
///
/// `create` is the POST handler for the collection path. Services added to
/// `scope` beforehand take precedence over `/{id}`.
pub fn crud_scope<E: Resource>(scope: Scope, create: Route) -> Scope {
    scope
        .service(
            web::resource(["", "/"])
                .route(create)
                .route(web::get().to(read::<E>))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/update")
                .route(web::put().to(update::<E>))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/delete/{id}")
                .route(web::delete().to(delete::<E>))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/{id}")
                .route(web::get().to(read_one::<E>))
                .default_service(web::to(method_not_allowed)),
        )
}

/// `crud_scope` with the generic create handler
pub fn resource_scope<E: Resource>(path: &str) -> Scope {
    crud_scope::<E>(web::scope(path), web::post().to(create::<E>))
}

/// Parse a path or query identifier
pub fn parse_id(raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidIdentifier {
            value: raw.to_string(),
        })
}

/// POST /{r}
pub async fn create<E: Resource>(
    service: web::Data<ResourceService<E>>,
    body: web::Json<E>,
) -> HttpResponse {
    match service.create(body.into_inner()).await {
        Ok(entity) => HttpResponse::Created().json(entity),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /{r} and GET /{r}?id=
pub async fn read<E: Resource>(
    service: web::Data<ResourceService<E>>,
    query: web::Query<ReadQuery>,
) -> HttpResponse {
    match query.into_inner().id {
        Some(raw) => fetch_one(&service, &raw).await,
        None => match service.list().await {
            Ok(entities) => HttpResponse::Ok().json(entities),
            Err(e) => handle_domain_error(e),
        },
    }
}

/// GET /{r}/{id}
pub async fn read_one<E: Resource>(
    service: web::Data<ResourceService<E>>,
    path: web::Path<String>,
) -> HttpResponse {
    fetch_one(&service, &path).await
}

async fn fetch_one<E: Resource>(service: &ResourceService<E>, raw: &str) -> HttpResponse {
    let id = match parse_id(raw) {
        Ok(id) => id,
        Err(e) => return handle_domain_error(e.into()),
    };

    match service.get(id).await {
        Ok(entity) => HttpResponse::Ok().json(entity),
        Err(e) => handle_domain_error(e),
    }
}

/// PUT /{r}/update
pub async fn update<E: Resource>(
    service: web::Data<ResourceService<E>>,
    body: web::Json<E>,
) -> HttpResponse {
    match service.update(body.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(StatusResponse::updated()),
        Err(e) => handle_domain_error(e),
    }
}

/// DELETE /{r}/delete/{id}
pub async fn delete<E: Resource>(
    service: web::Data<ResourceService<E>>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = match parse_id(&path) {
        Ok(id) => id,
        Err(e) => return handle_domain_error(e.into()),
    };

    match service.delete(id).await {
        Ok(()) => HttpResponse::Ok().json(StatusResponse::deleted()),
        Err(e) => handle_domain_error(e),
    }
}
