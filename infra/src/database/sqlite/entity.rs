//! Table and column mappings for each entity
//!
//! Column lists exclude `id`. The order of a column list is the order in
//! which `bind` pushes values.

use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::Row;

use rt_core::domain::entities::{
    ActivityLog, Lease, MaintenanceRequest, Payment, Property, PropertyUnit, Tenant, User,
};
use rt_core::domain::Resource;

/// A positional SQLite statement with arguments bound so far
pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// How an entity maps onto a single table
pub trait SqlEntity: Resource {
    /// Table name
    const TABLE: &'static str;

    /// Columns written on insert
    const COLUMNS: &'static [&'static str];

    /// Columns read back by the generic selects
    const SELECT_COLUMNS: &'static [&'static str] = Self::COLUMNS;

    /// Columns overwritten by update
    const UPDATE_COLUMNS: &'static [&'static str] = Self::COLUMNS;

    /// Bind values for `COLUMNS`, in order
    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;

    /// Bind values for `UPDATE_COLUMNS`, in order
    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        self.bind(query)
    }

    /// Convert a row selected with `id` plus `SELECT_COLUMNS`
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error>;
}

impl SqlEntity for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &[
        "first_name",
        "last_name",
        "email",
        "phone",
        "password_hash",
        "role",
    ];
    const SELECT_COLUMNS: &'static [&'static str] =
        &["first_name", "last_name", "email", "phone", "role"];
    const UPDATE_COLUMNS: &'static [&'static str] = Self::SELECT_COLUMNS;

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.first_name.as_str())
            .bind(self.last_name.as_str())
            .bind(self.email.as_str())
            .bind(self.phone.as_str())
            .bind(self.password_hash.as_deref())
            .bind(self.role.as_str())
    }

    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.first_name.as_str())
            .bind(self.last_name.as_str())
            .bind(self.email.as_str())
            .bind(self.phone.as_str())
            .bind(self.role.as_str())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(User {
            id: Some(row.try_get("id")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            password: None,
            password_hash: None,
            role: row.try_get("role")?,
        })
    }
}

impl SqlEntity for Property {
    const TABLE: &'static str = "properties";
    const COLUMNS: &'static [&'static str] = &[
        "owner_user_id",
        "name",
        "street",
        "city",
        "state",
        "zip",
        "property_type",
        "year_built",
        "notes",
    ];

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.owner_user_id)
            .bind(self.name.as_str())
            .bind(self.street.as_str())
            .bind(self.city.as_str())
            .bind(self.state.as_str())
            .bind(self.zip.as_str())
            .bind(self.property_type.as_str())
            .bind(self.year_built)
            .bind(self.notes.as_str())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Property {
            id: Some(row.try_get("id")?),
            owner_user_id: row.try_get("owner_user_id")?,
            name: row.try_get("name")?,
            street: row.try_get("street")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            zip: row.try_get("zip")?,
            property_type: row.try_get("property_type")?,
            year_built: row.try_get("year_built")?,
            notes: row.try_get("notes")?,
        })
    }
}

impl SqlEntity for PropertyUnit {
    const TABLE: &'static str = "property_units";
    const COLUMNS: &'static [&'static str] = &[
        "property_id",
        "unit_number",
        "beds",
        "baths",
        "sqft",
        "default_rent",
        "notes",
    ];

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.property_id)
            .bind(self.unit_number.as_str())
            .bind(self.beds)
            .bind(self.baths)
            .bind(self.sqft)
            .bind(self.default_rent)
            .bind(self.notes.as_str())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(PropertyUnit {
            id: Some(row.try_get("id")?),
            property_id: row.try_get("property_id")?,
            unit_number: row.try_get("unit_number")?,
            beds: row.try_get("beds")?,
            baths: row.try_get("baths")?,
            sqft: row.try_get("sqft")?,
            default_rent: row.try_get("default_rent")?,
            notes: row.try_get("notes")?,
        })
    }
}

impl SqlEntity for Tenant {
    const TABLE: &'static str = "tenants";
    const COLUMNS: &'static [&'static str] = &["first_name", "last_name", "email", "phone"];

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.first_name.as_str())
            .bind(self.last_name.as_str())
            .bind(self.email.as_str())
            .bind(self.phone.as_str())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Tenant {
            id: Some(row.try_get("id")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
        })
    }
}

impl SqlEntity for Lease {
    const TABLE: &'static str = "leases";
    const COLUMNS: &'static [&'static str] = &[
        "tenant_id",
        "unit_id",
        "start_date",
        "end_date",
        "rent_amount",
        "security_deposit",
        "document_link",
        "status",
    ];

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.tenant_id)
            .bind(self.unit_id)
            .bind(self.start)
            .bind(self.end)
            .bind(self.rent_amount)
            .bind(self.security_deposit)
            .bind(self.document_link.as_str())
            .bind(self.status.as_str())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Lease {
            id: Some(row.try_get("id")?),
            tenant_id: row.try_get("tenant_id")?,
            unit_id: row.try_get("unit_id")?,
            start: row.try_get("start_date")?,
            end: row.try_get("end_date")?,
            rent_amount: row.try_get("rent_amount")?,
            security_deposit: row.try_get("security_deposit")?,
            document_link: row.try_get("document_link")?,
            status: row.try_get("status")?,
        })
    }
}

impl SqlEntity for Payment {
    const TABLE: &'static str = "payments";
    const COLUMNS: &'static [&'static str] = &[
        "lease_id",
        "amount",
        "payment_date",
        "method",
        "notes",
        "confirmation",
    ];

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.lease_id)
            .bind(self.amount)
            .bind(self.date)
            .bind(self.method.as_str())
            .bind(self.notes.as_str())
            .bind(self.confirmation.as_slice())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Payment {
            id: Some(row.try_get("id")?),
            lease_id: row.try_get("lease_id")?,
            amount: row.try_get("amount")?,
            date: row.try_get("payment_date")?,
            method: row.try_get("method")?,
            notes: row.try_get("notes")?,
            confirmation: row.try_get("confirmation")?,
        })
    }
}

impl SqlEntity for MaintenanceRequest {
    const TABLE: &'static str = "maintenance_requests";
    const COLUMNS: &'static [&'static str] = &[
        "unit_id",
        "lease_id",
        "description",
        "priority",
        "category",
        "status",
        "created_at",
        "completed_at",
        "assignee",
    ];

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.unit_id)
            .bind(self.lease_id)
            .bind(self.description.as_str())
            .bind(self.priority.as_str())
            .bind(self.category.as_str())
            .bind(self.status.as_str())
            .bind(self.created)
            .bind(self.completed)
            .bind(self.assignee.as_str())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(MaintenanceRequest {
            id: Some(row.try_get("id")?),
            unit_id: row.try_get("unit_id")?,
            lease_id: row.try_get("lease_id")?,
            description: row.try_get("description")?,
            priority: row.try_get("priority")?,
            category: row.try_get("category")?,
            status: row.try_get("status")?,
            created: row.try_get("created_at")?,
            completed: row.try_get("completed_at")?,
            assignee: row.try_get("assignee")?,
        })
    }
}

impl SqlEntity for ActivityLog {
    const TABLE: &'static str = "activity_logs";
    const COLUMNS: &'static [&'static str] = &[
        "user_id",
        "entity_type",
        "entity_id",
        "action",
        "logged_at",
    ];

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.user_id)
            .bind(self.entity_type.as_str())
            .bind(self.entity_id)
            .bind(self.action.as_str())
            .bind(self.timestamp)
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(ActivityLog {
            id: Some(row.try_get("id")?),
            user_id: row.try_get("user_id")?,
            entity_type: row.try_get("entity_type")?,
            entity_id: row.try_get("entity_id")?,
            action: row.try_get("action")?,
            timestamp: row.try_get("logged_at")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_hash_is_insert_only() {
        assert!(User::COLUMNS.contains(&"password_hash"));
        assert!(!User::SELECT_COLUMNS.contains(&"password_hash"));
        assert!(!User::UPDATE_COLUMNS.contains(&"password_hash"));
    }

    #[test]
    fn test_defaults_reuse_insert_columns() {
        assert_eq!(Tenant::SELECT_COLUMNS, Tenant::COLUMNS);
        assert_eq!(Lease::UPDATE_COLUMNS, Lease::COLUMNS);
    }
}
