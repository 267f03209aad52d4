use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

pub async fn init_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(16)
        .connect(database_url)
        .await?;

    sqlx::query("PRAGMA foreign_keys = ON;")
        .execute(&pool)
        .await?;

    Ok(pool)
}

/// Idempotent bootstrap of the tables this crate owns. The journal's
/// production article/actor schema is managed by the main backend; this
/// keeps the dispatcher daemon and tests self-contained against a fresh
/// SQLite file.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let statements = [
        "CREATE TABLE IF NOT EXISTS actors (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            role TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        "CREATE TABLE IF NOT EXISTS articles (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            body TEXT NOT NULL,
            status TEXT NOT NULL,
            author_id TEXT NOT NULL REFERENCES actors(id),
            assigned_editor_id TEXT REFERENCES actors(id),
            editor_comments TEXT,
            pdf_path TEXT,
            submitted_at TEXT NOT NULL,
            published_at TEXT,
            updated_at TEXT NOT NULL
        )",
        "CREATE TABLE IF NOT EXISTS article_co_authors (
            article_id TEXT NOT NULL REFERENCES articles(id),
            actor_id TEXT NOT NULL REFERENCES actors(id),
            PRIMARY KEY (article_id, actor_id)
        )",
        "CREATE TABLE IF NOT EXISTS outbox_messages (
            id TEXT PRIMARY KEY,
            article_id TEXT,
            recipient TEXT NOT NULL,
            subject TEXT NOT NULL,
            html TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending',
            error TEXT,
            created_at TEXT NOT NULL,
            sent_at TEXT
        )",
        "CREATE INDEX IF NOT EXISTS idx_outbox_pending
            ON outbox_messages (status, created_at)",
    ];

    for statement in statements {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}
