//! The storage-engine boundary.
//!
//! Everything that touches SQLite lives here: the connection handle, the
//! queue of deferred transaction bodies, and the per-transaction statement
//! execution context. The facade never calls `rusqlite` directly; it only
//! stages transaction bodies against a [`Connection`] and pumps them with
//! [`Connection::run_pending`].
//!
//! Transactions are deliberately *not* run inline when staged. A caller
//! chains `query(..)` and then `then(..)`; the result must not be delivered
//! until after the handler had a chance to bind. Queueing bodies and
//! draining them from a separate pump call preserves that ordering on a
//! single thread.

use std::collections::{HashMap, VecDeque};

use rusqlite::types::{ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use thiserror::Error;

/// Default storage quota, matching the conventional 10 MiB browser quota
/// the original interface was designed around.
pub const DEFAULT_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Core value types for statement parameters and result cells.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
    Boolean(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Owned(rusqlite::types::Value::Null),
            Value::Integer(i) => ToSqlOutput::Owned((*i).into()),
            Value::Real(f) => ToSqlOutput::Owned((*f).into()),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Value::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b)),
            Value::Boolean(b) => ToSqlOutput::Owned((*b as i64).into()),
        })
    }
}

impl From<ValueRef<'_>> for Value {
    fn from(v: ValueRef<'_>) -> Self {
        match v {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(f) => Value::Real(f),
            ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => Value::Blob(b.to_vec()),
        }
    }
}

/// Tabular output of one executed statement.
///
/// Rows are ordered as the engine produced them; each row maps column name
/// to cell value. For DML the row list is empty and `rows_affected` carries
/// the change count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub rows: Vec<HashMap<String, Value>>,
    pub rows_affected: usize,
    pub last_insert_id: Option<i64>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&HashMap<String, Value>> {
        self.rows.get(index)
    }
}

/// Errors produced at the engine boundary.
///
/// The facade does not distinguish these: all of them funnel into one error
/// sink, undifferentiated, and never surface through return values of the
/// chainable calls.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to open database {name:?}")]
    Open {
        name: String,
        #[source]
        source: rusqlite::Error,
    },
    #[error("statement execution failed: {sql}")]
    Statement {
        sql: String,
        #[source]
        source: rusqlite::Error,
    },
    #[error("transaction failed")]
    Transaction(#[from] rusqlite::Error),
    #[error("statement skipped after earlier failure in the same transaction: {sql}")]
    Aborted { sql: String },
}

/// Connection parameters, mirroring the engine's
/// `openConnection(name, version, description, sizeBytes)` contract.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionConfig {
    /// Database path, or `:memory:` for a transient database.
    pub name: String,
    pub version: String,
    pub description: String,
    /// Storage quota, applied as a `max_page_count` pragma.
    pub size_bytes: u64,
}

impl ConnectionConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: "1.0".to_string(),
            description: "Chainable SQLite data store".to_string(),
            size_bytes: DEFAULT_SIZE_BYTES,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(":memory:")
    }

    pub fn with_size_bytes(mut self, size_bytes: u64) -> Self {
        self.size_bytes = size_bytes;
        self
    }
}

type TxBody = Box<dyn FnOnce(&mut TransactionContext<'_>)>;

/// Handle to one open SQLite database plus its queue of staged transaction
/// bodies.
pub struct Connection {
    conn: rusqlite::Connection,
    pending: VecDeque<TxBody>,
}

impl Connection {
    /// Opens the database named by `config` and applies its storage quota.
    pub fn open(config: &ConnectionConfig) -> Result<Self, EngineError> {
        let conn = if config.name == ":memory:" {
            rusqlite::Connection::open_in_memory()
        } else {
            rusqlite::Connection::open(&config.name)
        }
        .map_err(|source| EngineError::Open {
            name: config.name.clone(),
            source,
        })?;

        if config.size_bytes > 0 {
            let page_size: i64 = conn.query_row("PRAGMA page_size", [], |row| row.get(0))?;
            let max_pages = config.size_bytes.div_ceil(page_size.max(1) as u64);
            // rusqlite is finicky about pragmas that return a row; query_row
            // is the reliable way to issue them.
            conn.query_row(&format!("PRAGMA max_page_count = {max_pages}"), [], |_row| {
                Ok(())
            })?;
        }

        tracing::debug!(
            name = %config.name,
            version = %config.version,
            description = %config.description,
            "opened sqlite connection"
        );

        Ok(Self {
            conn,
            pending: VecDeque::new(),
        })
    }

    /// Stages `body` to run inside its own transaction on the next pump.
    /// Never runs it inline.
    pub fn transaction<F>(&mut self, body: F)
    where
        F: FnOnce(&mut TransactionContext<'_>) + 'static,
    {
        self.pending.push_back(Box::new(body));
    }

    /// Number of staged transaction bodies not yet run.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Drains the pending queue, running each staged body inside one engine
    /// transaction. A body whose statements all succeeded is committed; a
    /// body in which any statement failed is rolled back as a whole.
    ///
    /// Returns the number of transactions run. Errors here are limited to
    /// transaction begin/commit/rollback failures; statement-level failures
    /// are reported through the body's own callbacks and do not stop the
    /// pump.
    pub fn run_pending(&mut self) -> Result<usize, EngineError> {
        let mut ran = 0;
        while let Some(body) = self.pending.pop_front() {
            let tx = self.conn.transaction()?;
            let mut ctx = TransactionContext { tx, failed: false };
            body(&mut ctx);
            let TransactionContext { tx, failed } = ctx;
            if failed {
                tx.rollback()?;
            } else {
                tx.commit()?;
            }
            ran += 1;
        }
        Ok(ran)
    }
}

/// Statement execution context handed to a transaction body.
///
/// Mirrors the `tx.executeStatement(sql, args, onSuccess, onError)` shape of
/// the engine contract: outcomes are reported through the callbacks, never
/// through return values. After the first failure the context is poisoned
/// and every further statement in the same body reports
/// [`EngineError::Aborted`] without touching the engine; the surrounding
/// transaction then rolls back.
pub struct TransactionContext<'conn> {
    tx: rusqlite::Transaction<'conn>,
    failed: bool,
}

impl TransactionContext<'_> {
    pub fn execute_statement<S, E>(&mut self, sql: &str, args: &[Value], on_success: S, on_error: E)
    where
        S: FnOnce(&mut Self, ResultSet),
        E: FnOnce(&mut Self, EngineError),
    {
        if self.failed {
            on_error(
                self,
                EngineError::Aborted {
                    sql: sql.to_string(),
                },
            );
            return;
        }
        match self.run_statement(sql, args) {
            Ok(results) => on_success(self, results),
            Err(source) => {
                self.failed = true;
                tracing::debug!(sql, error = %source, "statement failed, poisoning transaction");
                on_error(
                    self,
                    EngineError::Statement {
                        sql: sql.to_string(),
                        source,
                    },
                );
            }
        }
    }

    /// Whether an earlier statement in this transaction already failed.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    fn run_statement(&self, sql: &str, args: &[Value]) -> rusqlite::Result<ResultSet> {
        let mut stmt = self.tx.prepare(sql)?;

        if stmt.column_count() == 0 {
            // DML or DDL: no result columns to read back.
            let rows_affected = stmt.execute(rusqlite::params_from_iter(args))?;
            drop(stmt);
            let last_insert_id = if rows_affected > 0 {
                Some(self.tx.last_insert_rowid())
            } else {
                None
            };
            return Ok(ResultSet {
                rows: Vec::new(),
                rows_affected,
                last_insert_id,
            });
        }

        let names: Vec<String> = stmt
            .column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        let mut rows = stmt.query(rusqlite::params_from_iter(args))?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let mut cells = HashMap::with_capacity(names.len());
            for (index, name) in names.iter().enumerate() {
                cells.insert(name.clone(), Value::from(row.get_ref(index)?));
            }
            out.push(cells);
        }
        Ok(ResultSet {
            rows: out,
            rows_affected: 0,
            last_insert_id: None,
        })
    }
}
