//! Database access layer
//!
//! Raw SQL against PostgreSQL, one module per table. Connections come
//! from the shared pool and are released by scope on every exit path;
//! every statement here is a single atomic insert or read, so there is
//! no multi-statement transaction to roll back.

pub mod employees;
pub mod tasks;
