//! Application state and factory
//!
//! This module wires repositories and services over one database pool and
//! provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error,
};

use rt_core::domain::entities::{
    ActivityLog, Lease, MaintenanceRequest, Payment, Property, PropertyUnit, Tenant, User,
};
use rt_core::domain::Resource;
use rt_core::errors::DomainResult;
use rt_core::repositories::{ResourceRepository, UserRepository};
use rt_core::services::{CredentialService, ResourceService, TokenService, TokenServiceConfig};
use rt_infra::{DatabasePool, SqlEntity, SqliteRepository};
use rt_shared::AppConfig;

use crate::handlers::error::{json_error_handler, method_not_allowed, not_found, query_error_handler};
use crate::middleware::auth::JwtAuth;
use crate::routes::{auth, health::health_check, resource};

/// Shared services, cloned into every worker
#[derive(Clone)]
pub struct AppState {
    pub pool: web::Data<DatabasePool>,
    pub tokens: web::Data<TokenService>,
    pub credentials: web::Data<CredentialService>,
    pub users: web::Data<ResourceService<User>>,
    pub properties: web::Data<ResourceService<Property>>,
    pub units: web::Data<ResourceService<PropertyUnit>>,
    pub tenants: web::Data<ResourceService<Tenant>>,
    pub leases: web::Data<ResourceService<Lease>>,
    pub payments: web::Data<ResourceService<Payment>>,
    pub maintenance: web::Data<ResourceService<MaintenanceRequest>>,
    pub activity: web::Data<ResourceService<ActivityLog>>,
    pub max_payload_size: usize,
}

impl AppState {
    /// Build every repository and service on top of `pool`
    pub fn new(pool: DatabasePool, config: &AppConfig) -> DomainResult<Self> {
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::from(
            &config.auth.jwt,
        ))?);

        let user_repo = Arc::new(SqliteRepository::<User>::new(pool.get_pool().clone()));
        let users: Arc<dyn ResourceRepository<User>> = user_repo.clone();
        let credentials: Arc<dyn UserRepository> = user_repo;
        let credential_service = CredentialService::new(users.clone(), credentials, tokens.clone())
            .with_hash_cost(config.auth.password_hash_cost);

        Ok(Self {
            tokens: web::Data::from(tokens),
            credentials: web::Data::new(credential_service),
            users: web::Data::new(ResourceService::new(users)),
            properties: service_for::<Property>(&pool),
            units: service_for::<PropertyUnit>(&pool),
            tenants: service_for::<Tenant>(&pool),
            leases: service_for::<Lease>(&pool),
            payments: service_for::<Payment>(&pool),
            maintenance: service_for::<MaintenanceRequest>(&pool),
            activity: service_for::<ActivityLog>(&pool),
            max_payload_size: config.server.max_payload_size,
            pool: web::Data::new(pool),
        })
    }
}

fn service_for<E: SqlEntity>(pool: &DatabasePool) -> web::Data<ResourceService<E>> {
    let repository: Arc<dyn ResourceRepository<E>> =
        Arc::new(SqliteRepository::<E>::new(pool.get_pool().clone()));
    web::Data::new(ResourceService::new(repository))
}

/// Create and configure the application with all dependencies
pub fn create_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default()
        .limit(state.max_payload_size)
        .error_handler(json_error_handler);
    let query_config = web::QueryConfig::default().error_handler(query_error_handler);

    App::new()
        .app_data(json_config)
        .app_data(query_config)
        .app_data(state.pool.clone())
        .app_data(state.tokens.clone())
        .app_data(state.credentials.clone())
        .app_data(state.users.clone())
        .app_data(state.properties.clone())
        .app_data(state.units.clone())
        .app_data(state.tenants.clone())
        .app_data(state.leases.clone())
        .app_data(state.payments.clone())
        .app_data(state.maintenance.clone())
        .app_data(state.activity.clone())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        .service(
            web::resource("/login")
                .route(web::post().to(auth::login))
                .default_service(web::to(method_not_allowed)),
        )
        .service(resource::crud_scope::<User>(
            web::scope("/users").service(
                web::resource("/me")
                    .route(web::get().to(auth::me).wrap(JwtAuth::new()))
                    .default_service(web::to(method_not_allowed)),
            ),
            web::post().to(auth::register),
        ))
        .service(resource::resource_scope::<Property>("/properties"))
        .service(resource::resource_scope::<PropertyUnit>("/units"))
        .service(resource::resource_scope::<Tenant>("/tenants"))
        .service(resource::resource_scope::<Lease>("/leases"))
        .service(resource::resource_scope::<Payment>("/payments"))
        .service(resource::resource_scope::<MaintenanceRequest>("/maintenance"))
        .service(resource::resource_scope::<ActivityLog>("/activity"))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Route prefix for each resource, for logs and docs
pub fn resource_paths() -> [(&'static str, &'static str); 8] {
    [
        ("/users", User::NAME),
        ("/properties", Property::NAME),
        ("/units", PropertyUnit::NAME),
        ("/tenants", Tenant::NAME),
        ("/leases", Lease::NAME),
        ("/payments", Payment::NAME),
        ("/maintenance", MaintenanceRequest::NAME),
        ("/activity", ActivityLog::NAME),
    ]
}
