use serde::Serialize;
use sqlx::PgPool;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub owner_id: i32,
}

/// Insert a task bound to its owner.
///
/// `owner_id` always comes from the authenticated caller, never from
/// client input. Single atomic statement: either the whole row lands
/// or nothing does.
pub async fn create(
    pool: &PgPool,
    title: &str,
    description: Option<&str>,
    is_completed: bool,
    owner_id: i32,
) -> Result<Task, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO tasks (title, description, is_completed, owner_id)
         VALUES ($1, $2, $3, $4)
         RETURNING id, title, description, is_completed, owner_id",
    )
    .bind(title)
    .bind(description)
    .bind(is_completed)
    .bind(owner_id)
    .fetch_one(pool)
    .await
}

/// Per-employee completion stats, shaped entirely by the database
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct DashboardRow {
    pub name: String,
    pub role: String,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    /// completed/total × 100, rounded to 2 decimals; NULL for an
    /// employee with zero tasks (no divide-by-zero)
    pub completion_rate: Option<f64>,
}

/// Aggregate completion rates per employee, busiest first.
///
/// The relational engine does all the work (join, group, case logic);
/// results pass through unmodified.
pub async fn completion_dashboard(pool: &PgPool) -> Result<Vec<DashboardRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT
            e.name,
            e.role,
            COUNT(t.id) AS total_tasks,
            COALESCE(SUM(CASE WHEN t.is_completed THEN 1 ELSE 0 END), 0)::BIGINT
                AS completed_tasks,
            ROUND(
                (SUM(CASE WHEN t.is_completed THEN 1 ELSE 0 END)::decimal
                    / NULLIF(COUNT(t.id), 0)) * 100, 2
            )::FLOAT8 AS completion_rate
        FROM employees e
        LEFT JOIN tasks t ON e.id = t.owner_id
        GROUP BY e.id, e.name, e.role
        ORDER BY total_tasks DESC
        "#,
    )
    .fetch_all(pool)
    .await
}
