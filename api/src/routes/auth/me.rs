use actix_web::{web, HttpResponse};

use rt_core::services::CredentialService;

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for GET /users/me, behind `JwtAuth`
pub async fn me(auth: AuthContext, credentials: web::Data<CredentialService>) -> HttpResponse {
    match credentials.current_user(auth.user_id).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => handle_domain_error(e),
    }
}
