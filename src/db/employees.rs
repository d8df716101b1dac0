use serde::Serialize;
use sqlx::PgPool;

/// Full employee row. The password hash never leaves the service:
/// this struct deliberately has no `Serialize` impl.
#[derive(sqlx::FromRow)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub password_hash: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Client-visible employee fields
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct EmployeePublic {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Insert a new employee and return the public fields.
///
/// Email uniqueness is enforced by the store; a duplicate surfaces as
/// a unique-violation `sqlx::Error` from this single atomic statement.
pub async fn create(
    pool: &PgPool,
    name: &str,
    email: &str,
    role: &str,
    password_hash: &str,
) -> Result<EmployeePublic, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO employees (name, email, role, password_hash)
         VALUES ($1, $2, $3, $4)
         RETURNING id, name, email, role",
    )
    .bind(name)
    .bind(email)
    .bind(role)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM employees WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Resolve an employee id from an email (auth-gate subjects carry the
/// email, not the id)
pub async fn find_id_by_email(pool: &PgPool, email: &str) -> Result<Option<i32>, sqlx::Error> {
    let row: Option<(i32,)> = sqlx::query_as("SELECT id FROM employees WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|(id,)| id))
}
