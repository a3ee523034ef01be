use actix_web::{web, HttpResponse};
use validator::Validate;

use rt_core::services::CredentialService;

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::handle_domain_error;

/// Handler for POST /login
///
/// Unknown email and wrong password both answer 401 with the same body.
pub async fn login(
    credentials: web::Data<CredentialService>,
    request: web::Json<LoginRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        tracing::debug!(?errors, "Login request failed validation");
        return handle_domain_error(request.validation_error(&errors).into());
    }

    match credentials.login(&request.email, &request.password).await {
        Ok(issued) => HttpResponse::Ok().json(LoginResponse {
            token: issued.token,
        }),
        Err(e) => handle_domain_error(e),
    }
}
