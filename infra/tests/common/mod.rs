//! Shared fixtures for SQLite integration tests

#![allow(dead_code)]

use rt_core::domain::entities::{Lease, Property, PropertyUnit, Tenant, User};
use rt_core::repositories::ResourceRepository;
use rt_infra::{DatabasePool, SqliteRepository};
use rt_shared::DatabaseConfig;

/// Fresh in-memory database with every table created
pub async fn memory_pool() -> DatabasePool {
    let pool = DatabasePool::new(DatabaseConfig::in_memory())
        .await
        .expect("in-memory pool");
    pool.ensure_schema().await.expect("schema");
    pool
}

pub fn user(email: &str) -> User {
    User {
        id: None,
        first_name: "Pat".to_string(),
        last_name: "Lee".to_string(),
        email: email.to_string(),
        phone: "555-0100".to_string(),
        password: None,
        password_hash: Some("$2b$04$abcdefghijklmnopqrstuu5Hc3D0Ky2yXzYhZ0dM0Ao7Jg0JQjR6".to_string()),
        role: "owner".to_string(),
    }
}

pub fn tenant() -> Tenant {
    Tenant {
        id: None,
        first_name: "A".to_string(),
        last_name: "B".to_string(),
        email: "a@b.com".to_string(),
        phone: "555".to_string(),
    }
}

/// Ids of a user, property, unit, tenant and lease chained by foreign keys
pub struct Seeded {
    pub user_id: i64,
    pub property_id: i64,
    pub unit_id: i64,
    pub tenant_id: i64,
    pub lease_id: i64,
}

pub async fn seed_lease(pool: &DatabasePool) -> Seeded {
    let sqlite = pool.get_pool().clone();

    let user_id = SqliteRepository::<User>::new(sqlite.clone())
        .insert(&user("owner@example.com"))
        .await
        .unwrap();

    let property_id = SqliteRepository::<Property>::new(sqlite.clone())
        .insert(&Property {
            id: None,
            owner_user_id: user_id,
            name: "Maple Court".to_string(),
            street: "1 Maple St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip: "62701".to_string(),
            property_type: "duplex".to_string(),
            year_built: 1962,
            notes: String::new(),
        })
        .await
        .unwrap();

    let unit_id = SqliteRepository::<PropertyUnit>::new(sqlite.clone())
        .insert(&PropertyUnit {
            id: None,
            property_id,
            unit_number: "A".to_string(),
            beds: 2,
            baths: 1,
            sqft: 900,
            default_rent: 120_000,
            notes: String::new(),
        })
        .await
        .unwrap();

    let tenant_id = SqliteRepository::<Tenant>::new(sqlite.clone())
        .insert(&tenant())
        .await
        .unwrap();

    let lease_id = SqliteRepository::<Lease>::new(sqlite)
        .insert(&Lease {
            id: None,
            tenant_id,
            unit_id,
            start: 1_700_000_000,
            end: None,
            rent_amount: 120_000,
            security_deposit: 120_000,
            document_link: String::new(),
            status: "active".to_string(),
        })
        .await
        .unwrap();

    Seeded {
        user_id,
        property_id,
        unit_id,
        tenant_id,
        lease_id,
    }
}
