use actix_web::{web, HttpResponse};

use rt_core::domain::entities::User;
use rt_core::services::CredentialService;

use crate::handlers::error::handle_domain_error;

/// Handler for POST /users
///
/// # Request Body
///
/// ```json
/// {
///     "firstName": "Pat",
///     "lastName": "Lee",
///     "email": "pat@example.com",
///     "password": "hunter2"
/// }
/// ```
///
/// # Response
///
/// 201 with `{"user": {...}, "token": "..."}`. The password is never echoed.
pub async fn register(
    credentials: web::Data<CredentialService>,
    body: web::Json<User>,
) -> HttpResponse {
    match credentials.register(body.into_inner()).await {
        Ok(registered) => HttpResponse::Created().json(registered),
        Err(e) => handle_domain_error(e),
    }
}
