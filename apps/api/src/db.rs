use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Ensures the scored-résumé table exists. The UNIQUE constraint on email is
/// what makes a second run for the same candidate fail with a duplicate key.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS parsed_resumes (
            id SERIAL PRIMARY KEY,
            filename VARCHAR(255) NOT NULL,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) UNIQUE NOT NULL,
            phone VARCHAR(50),
            total_years_experience DOUBLE PRECISION NOT NULL DEFAULT 0.0,
            highest_degree VARCHAR(100) NOT NULL DEFAULT '',
            skills JSONB NOT NULL DEFAULT '[]',
            job_description TEXT NOT NULL DEFAULT '',
            score DOUBLE PRECISION NOT NULL,
            parsing_date TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Table 'parsed_resumes' confirmed/created");
    Ok(())
}
