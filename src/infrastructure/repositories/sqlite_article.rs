use crate::domain::actor::ActorId;
use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleReadRepository, ArticleStatus, ArticleTitle,
    ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::outbox::NewOutboxMessage;
use crate::infrastructure::repositories::sqlite_outbox::{insert_messages, map_error};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use std::sync::Arc;

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: String,
    title: String,
    body: String,
    status: String,
    author_id: String,
    assigned_editor_id: Option<String>,
    editor_comments: Option<String>,
    pdf_path: Option<String>,
    submitted_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
    updated_at: DateTime<Utc>,
}

impl ArticleRow {
    fn into_article(self, co_author_ids: Vec<ActorId>) -> DomainResult<Article> {
        Ok(Article {
            id: ArticleId::new(self.id)?,
            title: ArticleTitle::new(self.title)?,
            body: ArticleBody::new(self.body)?,
            status: ArticleStatus::parse(&self.status)?,
            author_id: ActorId::new(self.author_id)?,
            assigned_editor_id: self.assigned_editor_id.map(ActorId::new).transpose()?,
            co_author_ids,
            editor_comments: self.editor_comments,
            pdf_path: self.pdf_path,
            submitted_at: self.submitted_at,
            published_at: self.published_at,
            updated_at: self.updated_at,
        })
    }
}

const SELECT_ARTICLE: &str = "SELECT id, title, body, status, author_id, assigned_editor_id, \
     editor_comments, pdf_path, submitted_at, published_at, updated_at FROM articles";

async fn fetch_co_authors(
    conn: &mut SqliteConnection,
    article_id: &ArticleId,
) -> DomainResult<Vec<ActorId>> {
    let ids: Vec<(String,)> = sqlx::query_as(
        "SELECT actor_id FROM article_co_authors WHERE article_id = ? ORDER BY actor_id",
    )
    .bind(article_id.as_str())
    .fetch_all(&mut *conn)
    .await
    .map_err(map_error)?;

    ids.into_iter().map(|(id,)| ActorId::new(id)).collect()
}

async fn fetch_article(
    conn: &mut SqliteConnection,
    id: &ArticleId,
) -> DomainResult<Option<Article>> {
    let row = sqlx::query_as::<_, ArticleRow>(&format!("{SELECT_ARTICLE} WHERE id = ?"))
        .bind(id.as_str())
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_error)?;

    match row {
        Some(row) => {
            let co_authors = fetch_co_authors(conn, id).await?;
            row.into_article(co_authors).map(Some)
        }
        None => Ok(None),
    }
}

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(
        &self,
        article: NewArticle,
        notifications: Vec<NewOutboxMessage>,
    ) -> DomainResult<Article> {
        let mut tx = self.pool.begin().await.map_err(map_error)?;

        sqlx::query(
            "INSERT INTO articles (id, title, body, status, author_id, pdf_path, submitted_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(article.id.as_str())
        .bind(article.title.as_str())
        .bind(article.body.as_str())
        .bind(ArticleStatus::Submitted.as_str())
        .bind(article.author_id.as_str())
        .bind(article.pdf_path.as_deref())
        .bind(article.submitted_at)
        .bind(article.submitted_at)
        .execute(&mut *tx)
        .await
        .map_err(map_error)?;

        for co_author in &article.co_author_ids {
            sqlx::query("INSERT INTO article_co_authors (article_id, actor_id) VALUES (?, ?)")
                .bind(article.id.as_str())
                .bind(co_author.as_str())
                .execute(&mut *tx)
                .await
                .map_err(map_error)?;
        }

        insert_messages(&mut *tx, &notifications).await?;
        tx.commit().await.map_err(map_error)?;

        let NewArticle {
            id,
            title,
            body,
            author_id,
            co_author_ids,
            pdf_path,
            submitted_at,
        } = article;
        Ok(Article {
            id,
            title,
            body,
            status: ArticleStatus::Submitted,
            author_id,
            assigned_editor_id: None,
            co_author_ids,
            editor_comments: None,
            pdf_path,
            submitted_at,
            published_at: None,
            updated_at: submitted_at,
        })
    }

    async fn update(
        &self,
        update: ArticleUpdate,
        notifications: Vec<NewOutboxMessage>,
    ) -> DomainResult<Article> {
        let mut tx = self.pool.begin().await.map_err(map_error)?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(update.updated_at);
        if let Some(status) = update.status {
            builder.push(", status = ").push_bind(status.as_str());
        }
        if let Some(body) = &update.body {
            builder.push(", body = ").push_bind(body.as_str().to_owned());
        }
        if let Some(editor) = &update.assigned_editor_id {
            builder
                .push(", assigned_editor_id = ")
                .push_bind(editor.as_str().to_owned());
        }
        if let Some(comments) = &update.editor_comments {
            builder
                .push(", editor_comments = ")
                .push_bind(comments.clone());
        }
        if let Some(pdf_path) = &update.pdf_path {
            builder.push(", pdf_path = ").push_bind(pdf_path.clone());
        }
        if let Some(published_at) = update.published_at {
            builder.push(", published_at = ").push_bind(published_at);
        }
        builder.push(" WHERE id = ").push_bind(update.id.as_str().to_owned());

        let result = builder
            .build()
            .execute(&mut *tx)
            .await
            .map_err(map_error)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "article {} not found",
                update.id
            )));
        }

        insert_messages(&mut *tx, &notifications).await?;
        tx.commit().await.map_err(map_error)?;

        let mut conn = self.pool.acquire().await.map_err(map_error)?;
        fetch_article(&mut conn, &update.id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("article {} not found", update.id)))
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let mut conn = self.pool.acquire().await.map_err(map_error)?;
        fetch_article(&mut conn, id).await
    }

    async fn list_by_status(&self, status: ArticleStatus) -> DomainResult<Vec<Article>> {
        let mut conn = self.pool.acquire().await.map_err(map_error)?;
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "{SELECT_ARTICLE} WHERE status = ? ORDER BY submitted_at DESC"
        ))
        .bind(status.as_str())
        .fetch_all(&mut *conn)
        .await
        .map_err(map_error)?;

        let mut articles = Vec::with_capacity(rows.len());
        for row in rows {
            let id = ArticleId::new(row.id.clone())?;
            let co_authors = fetch_co_authors(&mut conn, &id).await?;
            articles.push(row.into_article(co_authors)?);
        }
        Ok(articles)
    }
}
