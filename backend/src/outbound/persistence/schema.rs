//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Student records. `email` carries a unique constraint.
    students (id) {
        id -> Int8,
        name -> Varchar,
        age -> Int2,
        gender -> Varchar,
        email -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
