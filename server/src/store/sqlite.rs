use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    FromRow,
};
use todo_core::{NewTodo, Todo, TodoPatch};

use super::TodoStore;
use crate::error::StoreError;

// AUTOINCREMENT keeps sqlite from handing out the id of a deleted last row.
const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS todos (
        id     INTEGER PRIMARY KEY AUTOINCREMENT,
        title  VARCHAR(50) NOT NULL,
        detail TEXT NULL,
        done   BOOLEAN NOT NULL DEFAULT 0
    )";

const SELECT_ALL: &str = "SELECT id, title, detail, done FROM todos ORDER BY id";
const SELECT_ONE: &str = "SELECT id, title, detail, done FROM todos WHERE id = ?";

// A NULL parameter keeps the stored column.
const MERGE_ONE: &str = "
    UPDATE todos
    SET title  = COALESCE(?, title),
        detail = COALESCE(?, detail),
        done   = COALESCE(?, done)
    WHERE id = ?
    RETURNING id, title, detail, done";

#[derive(Debug, FromRow)]
struct TodoRow {
    id: i64,
    title: String,
    detail: Option<String>,
    done: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: row.id,
            title: row.title,
            detail: row.detail,
            done: row.done,
        }
    }
}

/// Durable store on a single `todos` table.
///
/// Each operation checks a connection out of the pool for its own duration
/// and hands it back when the connection guard drops, whether the operation
/// succeeded or not.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database at `url` and make sure the
    /// table exists.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        tracing::info!(url, max_connections, "connected to sqlite");
        Self::from_pool(pool).await
    }

    /// A private in-memory database. The pool is pinned to one connection
    /// that never expires, since the data lives only as long as it does.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(CREATE_TABLE).execute(&pool).await?;
        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl TodoStore for SqliteStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, TodoRow>(SELECT_ALL)
            .fetch_all(&mut *conn)
            .await?;
        tracing::debug!(count = rows.len(), "listed todos");
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn get(&self, id: i64) -> Result<Todo, StoreError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as::<_, TodoRow>(SELECT_ONE)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .map(Todo::from)
            .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, input: NewTodo) -> Result<Todo, StoreError> {
        input.validate()?;

        let mut conn = self.pool.acquire().await?;
        let id = sqlx::query("INSERT INTO todos (title, detail, done) VALUES (?, ?, 0)")
            .bind(input.title.as_str())
            .bind(input.detail.as_deref())
            .execute(&mut *conn)
            .await?
            .last_insert_rowid();
        tracing::info!(id, "todo created");
        Ok(input.into_todo(id))
    }

    async fn update(&self, id: i64, patch: TodoPatch) -> Result<Todo, StoreError> {
        patch.validate()?;

        // Merge in one statement so the write lock is taken up front and a
        // busy database is waited on rather than reported.
        let mut conn = self.pool.acquire().await?;
        let todo = sqlx::query_as::<_, TodoRow>(MERGE_ONE)
            .bind(patch.title.as_deref())
            .bind(patch.detail.as_deref())
            .bind(patch.done)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .map(Todo::from)
            .ok_or(StoreError::NotFound(id))?;
        tracing::debug!(id, "todo updated");
        Ok(todo)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        tracing::info!(id, "todo deleted");
        Ok(())
    }
}
