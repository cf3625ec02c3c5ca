//! List repository
//!
//! All list and todo statements live here. Two read models are exposed:
//! the detail view folds LEFT JOIN rows into lists carrying their todos,
//! and the summary view lets the database aggregate todo counts instead.

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use sqlx::{FromRow, PgPool, Row};

use crate::error::Result;
use crate::models::{ListName, TodoName};

/// Todo record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Todo {
    pub id: i64,
    pub list_id: i64,
    pub name: String,
    pub completed: bool,
}

/// List with its todos for detail display
#[derive(Debug, Clone, Serialize)]
pub struct List {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub todos: Vec<Todo>,
}

/// List with todo counts for overview display
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ListSummary {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub todos_count: i64,
    pub todos_remaining_count: i64,
}

/// One row of the lists/todos LEFT JOIN. Todo columns are NULL when the
/// list has no todos.
#[derive(Debug, FromRow)]
struct ListTodoRow {
    list_id: i64,
    list_name: String,
    list_created_at: DateTime<Utc>,
    todo_id: Option<i64>,
    todo_name: Option<String>,
    completed: Option<bool>,
}

/// Emit the statement and its parameter list before execution.
///
/// The installed tracing subscriber is the sink; with none installed
/// (tests) this is a no-op.
fn trace_statement(statement: &str, params: &[&dyn fmt::Debug]) {
    tracing::debug!(target: "todolists_db::sql", statement, params = ?params, "executing statement");
}

/// List repository
pub struct ListRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ListRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch one list with its todos, or `None` when no row matches.
    pub async fn find_list(&self, id: i64) -> Result<Option<List>> {
        let sql = r#"
            SELECT l.id AS list_id, l.name AS list_name, l.created_at AS list_created_at,
                   t.id AS todo_id, t.name AS todo_name, t.completed
            FROM lists l
            LEFT JOIN todos t ON t.list_id = l.id
            WHERE l.id = $1
            ORDER BY t.id
        "#;
        trace_statement(sql, &[&id]);

        let rows: Vec<ListTodoRow> = sqlx::query_as(sql).bind(id).fetch_all(self.pool).await?;
        Ok(collect_lists(rows).into_iter().next())
    }

    /// Fetch every list with its todos, ordered by list id.
    ///
    /// The LEFT JOIN keeps lists without todos in the result as rows
    /// with NULL todo columns, so they fold into empty collections.
    pub async fn all_lists(&self) -> Result<Vec<List>> {
        let sql = r#"
            SELECT l.id AS list_id, l.name AS list_name, l.created_at AS list_created_at,
                   t.id AS todo_id, t.name AS todo_name, t.completed
            FROM lists l
            LEFT JOIN todos t ON t.list_id = l.id
            ORDER BY l.id, t.id
        "#;
        trace_statement(sql, &[]);

        let rows: Vec<ListTodoRow> = sqlx::query_as(sql).fetch_all(self.pool).await?;
        Ok(collect_lists(rows))
    }

    /// Fetch one list's aggregate counts, or `None` when no row matches.
    ///
    /// The grouping happens in the database; each row maps 1:1 to a
    /// summary. `todos_remaining_count` counts todos whose completed
    /// flag is not true.
    pub async fn find_list_summary(&self, id: i64) -> Result<Option<ListSummary>> {
        let sql = r#"
            SELECT l.id, l.name, l.created_at,
                   COUNT(t.id) AS todos_count,
                   COUNT(t.id) FILTER (WHERE t.completed IS NOT TRUE) AS todos_remaining_count
            FROM lists l
            LEFT JOIN todos t ON t.list_id = l.id
            WHERE l.id = $1
            GROUP BY l.id, l.name, l.created_at
        "#;
        trace_statement(sql, &[&id]);

        let summary = sqlx::query_as(sql).bind(id).fetch_optional(self.pool).await?;
        Ok(summary)
    }

    /// Fetch aggregate counts for every list, ordered by name.
    pub async fn all_list_summaries(&self) -> Result<Vec<ListSummary>> {
        let sql = r#"
            SELECT l.id, l.name, l.created_at,
                   COUNT(t.id) AS todos_count,
                   COUNT(t.id) FILTER (WHERE t.completed IS NOT TRUE) AS todos_remaining_count
            FROM lists l
            LEFT JOIN todos t ON t.list_id = l.id
            GROUP BY l.id, l.name, l.created_at
            ORDER BY l.name
        "#;
        trace_statement(sql, &[]);

        let summaries = sqlx::query_as(sql).fetch_all(self.pool).await?;
        Ok(summaries)
    }

    /// Insert a list and hand back the created record.
    ///
    /// The id is assigned by the database.
    pub async fn create_new_list(&self, name: ListName) -> Result<List> {
        let sql = "INSERT INTO lists (name) VALUES ($1) RETURNING id, name, created_at";
        trace_statement(sql, &[&name.as_str()]);

        let row = sqlx::query(sql)
            .bind(name.as_str())
            .fetch_one(self.pool)
            .await?;

        Ok(List {
            id: row.get("id"),
            name: row.get("name"),
            created_at: row.get("created_at"),
            todos: Vec::new(),
        })
    }

    /// Delete a list. The schema cascades to its todos.
    pub async fn delete_list(&self, id: i64) -> Result<()> {
        let sql = "DELETE FROM lists WHERE id = $1";
        trace_statement(sql, &[&id]);

        sqlx::query(sql).bind(id).execute(self.pool).await?;
        Ok(())
    }

    /// Rename a list.
    pub async fn update_list_name(&self, id: i64, name: ListName) -> Result<()> {
        let sql = "UPDATE lists SET name = $1 WHERE id = $2";
        trace_statement(sql, &[&name.as_str(), &id]);

        sqlx::query(sql)
            .bind(name.as_str())
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }

    /// Insert a todo under a list and hand back the created record.
    ///
    /// A missing list surfaces as the database's foreign key violation,
    /// untranslated.
    pub async fn create_new_todo(&self, list_id: i64, name: TodoName) -> Result<Todo> {
        let sql = "INSERT INTO todos (name, list_id) VALUES ($1, $2) RETURNING id, list_id, name, completed";
        trace_statement(sql, &[&name.as_str(), &list_id]);

        let todo = sqlx::query_as(sql)
            .bind(name.as_str())
            .bind(list_id)
            .fetch_one(self.pool)
            .await?;
        Ok(todo)
    }

    /// Delete the todo matching both ids.
    ///
    /// Matching on the owning list as well keeps a stray todo id from
    /// touching another list's todo.
    pub async fn delete_todo_from_list(&self, list_id: i64, todo_id: i64) -> Result<()> {
        let sql = "DELETE FROM todos WHERE id = $1 AND list_id = $2";
        trace_statement(sql, &[&todo_id, &list_id]);

        sqlx::query(sql)
            .bind(todo_id)
            .bind(list_id)
            .execute(self.pool)
            .await?;
        Ok(())
    }

    /// Set the completed flag on the todo matching both ids.
    pub async fn update_todo_status(
        &self,
        list_id: i64,
        todo_id: i64,
        completed: bool,
    ) -> Result<()> {
        let sql = "UPDATE todos SET completed = $1 WHERE id = $2 AND list_id = $3";
        trace_statement(sql, &[&completed, &todo_id, &list_id]);

        sqlx::query(sql)
            .bind(completed)
            .bind(todo_id)
            .bind(list_id)
            .execute(self.pool)
            .await?;
        Ok(())
    }

    /// Complete every todo under a list. Idempotent.
    pub async fn mark_all_todos_as_completed(&self, list_id: i64) -> Result<()> {
        let sql = "UPDATE todos SET completed = TRUE WHERE list_id = $1";
        trace_statement(sql, &[&list_id]);

        sqlx::query(sql).bind(list_id).execute(self.pool).await?;
        Ok(())
    }

    /// Fetch a list's todos, ordered by todo id.
    pub async fn find_todos_for_list(&self, list_id: i64) -> Result<Vec<Todo>> {
        let sql = "SELECT id, list_id, name, completed FROM todos WHERE list_id = $1 ORDER BY id";
        trace_statement(sql, &[&list_id]);

        let todos = sqlx::query_as(sql).bind(list_id).fetch_all(self.pool).await?;
        Ok(todos)
    }
}

/// Fold LEFT JOIN rows into lists carrying their todos.
///
/// One pass, keyed by list id in an insertion-ordered map: the first row
/// for a list creates its entry, and every row with a non-NULL todo id
/// appends that todo. A row with NULL todo columns is a list without
/// todos and contributes only the entry itself.
fn collect_lists(rows: Vec<ListTodoRow>) -> Vec<List> {
    let mut lists: IndexMap<i64, List> = IndexMap::new();

    for row in rows {
        let ListTodoRow {
            list_id,
            list_name,
            list_created_at,
            todo_id,
            todo_name,
            completed,
        } = row;

        let list = lists.entry(list_id).or_insert_with(|| List {
            id: list_id,
            name: list_name,
            created_at: list_created_at,
            todos: Vec::new(),
        });

        if let Some(id) = todo_id {
            list.todos.push(Todo {
                id,
                list_id,
                name: todo_name.unwrap_or_default(),
                completed: completed.unwrap_or(false),
            });
        }
    }

    lists.into_values().collect()
}
