//! The chainable query facade.
//!
//! A [`Database`] sequences SQL statements against the engine and delivers
//! each statement's result to the one-shot handler bound by the `then` call
//! immediately following it:
//!
//! ```text
//! db.query("select * from employees", &[]).then(|event| { .. });
//! db.begin()
//!     .query("insert into t values (?)", &[1.into()])
//!     .query("insert into t values (?)", &[2.into()])
//!     .execute(done, progress)
//!     .then(|event| { .. });
//! db.run_pending();
//! ```
//!
//! Statement failures never reach the caller through return values; they go
//! to the instance's error sink and the affected handler simply never fires.

use std::cell::RefCell;
use std::rc::Rc;

use crate::defer::{DeferKey, DeferRegistry, KeyGen};
use crate::engine::{Connection, ConnectionConfig, EngineError, ResultSet, Value};

/// Payload delivered to a one-shot handler bound via [`Database::then`].
#[derive(Debug)]
pub enum Event {
    /// The connection-open confirmation, bound to the constructor's key.
    Ready,
    /// One statement's result: the result set plus the statement and
    /// arguments that produced it.
    Statement {
        rows: ResultSet,
        sql: String,
        args: Vec<Value>,
    },
    /// The `execute` call's own completion, fired after every staged
    /// statement in the batch has been attempted (even if some failed).
    BatchDone,
}

/// Where engine failures go. Injected at construction so tests can capture
/// errors instead of scraping a diagnostic channel.
pub type ErrorSink = Rc<dyn Fn(&EngineError)>;

type Registry = Rc<RefCell<DeferRegistry<Event>>>;

/// A statement queued during batch mode, holding the key its result will
/// resolve once the batch executes.
struct StagedQuery {
    sql: String,
    args: Vec<Value>,
    key: DeferKey,
}

/// Chainable facade over one engine connection.
///
/// Batch state and the handler registry are per-instance and initialized in
/// the constructor; nothing is shared across instances. The facade is
/// single-threaded: `then` binds to a single mutable "next key" slot that
/// each new operation overwrites.
pub struct Database {
    conn: Connection,
    defer: Registry,
    keys: KeyGen,
    next: DeferKey,
    batching: bool,
    staged: Vec<StagedQuery>,
    on_error: ErrorSink,
}

impl Database {
    /// Opens `name` (a path, or `:memory:`) with the default storage quota
    /// and an error sink that logs through `tracing`.
    pub fn open(name: &str) -> Result<Self, EngineError> {
        Self::open_with(ConnectionConfig::new(name), default_error_sink())
    }

    /// Opens a transient in-memory database.
    pub fn in_memory() -> Result<Self, EngineError> {
        Self::open_with(ConnectionConfig::in_memory(), default_error_sink())
    }

    /// Opens a database with explicit connection parameters and error sink.
    ///
    /// Construction stages a no-op transaction that delivers [`Event::Ready`]
    /// to the constructor's own key, so a `then` call before any operation
    /// binds the connection-ready signal.
    pub fn open_with(config: ConnectionConfig, on_error: ErrorSink) -> Result<Self, EngineError> {
        let mut conn = Connection::open(&config)?;
        let defer: Registry = Rc::new(RefCell::new(DeferRegistry::new()));
        let mut keys = KeyGen::default();

        let ready_key = keys.next_key();
        let registry = Rc::clone(&defer);
        conn.transaction(move |_tx| {
            let handler = registry.borrow_mut().take(ready_key);
            handler(Event::Ready);
        });

        Ok(Self {
            conn,
            defer,
            keys,
            next: ready_key,
            batching: false,
            staged: Vec::new(),
            on_error,
        })
    }

    /// Issues one statement, or stages it if a batch is open.
    ///
    /// Outside a batch this stages a single-statement transaction whose
    /// result resolves the handler bound to this call's key. Inside a batch
    /// nothing touches the engine until [`Database::execute`].
    pub fn query(&mut self, sql: &str, args: &[Value]) -> &mut Self {
        let key = self.keys.next_key();
        self.next = key;

        if self.batching {
            self.staged.push(StagedQuery {
                sql: sql.to_string(),
                args: args.to_vec(),
                key,
            });
            return self;
        }

        let registry = Rc::clone(&self.defer);
        let sink = Rc::clone(&self.on_error);
        let sql = sql.to_string();
        let args = args.to_vec();
        self.conn.transaction(move |tx| {
            tx.execute_statement(
                &sql,
                &args,
                |_tx, rows| {
                    let handler = registry.borrow_mut().take(key);
                    handler(Event::Statement {
                        rows,
                        sql: sql.clone(),
                        args: args.clone(),
                    });
                },
                |_tx, err| sink(&err),
            );
        });
        self
    }

    /// Opens batch mode, discarding any previously staged, unexecuted
    /// statements.
    pub fn begin(&mut self) -> &mut Self {
        self.batching = true;
        self.staged.clear();
        self
    }

    /// Closes batch mode and stages every queued statement as one engine
    /// transaction.
    ///
    /// Per statement, success resolves its bound handler and then invokes
    /// `progress(count, total)`, or `done(total)` for the last statement. A
    /// failure goes to the error sink, suppresses `done`/`progress` for that
    /// and all later statements, and rolls the whole transaction back. The
    /// `execute` call reserves its own key, resolved with
    /// [`Event::BatchDone`], bindable via a following `then`.
    pub fn execute<D, P>(&mut self, done: D, mut progress: P) -> &mut Self
    where
        D: FnOnce(usize) + 'static,
        P: FnMut(usize, usize) + 'static,
    {
        let staged = std::mem::take(&mut self.staged);
        self.batching = false;

        let batch_key = self.keys.next_key();
        self.next = batch_key;

        let registry = Rc::clone(&self.defer);
        let sink = Rc::clone(&self.on_error);
        self.conn.transaction(move |tx| {
            let total = staged.len();
            let mut done = Some(done);
            for (index, staged_query) in staged.into_iter().enumerate() {
                let count = index + 1;
                let StagedQuery { sql, args, key } = staged_query;
                tx.execute_statement(
                    &sql,
                    &args,
                    |_tx, rows| {
                        let handler = registry.borrow_mut().take(key);
                        handler(Event::Statement {
                            rows,
                            sql: sql.clone(),
                            args: args.clone(),
                        });
                        if count == total {
                            if let Some(done) = done.take() {
                                done(total);
                            }
                        } else {
                            progress(count, total);
                        }
                    },
                    |_tx, err| sink(&err),
                );
            }
            let handler = registry.borrow_mut().take(batch_key);
            handler(Event::BatchDone);
        });
        self
    }

    /// Binds `handler` to the immediately preceding operation's key (or the
    /// connection-ready key if no operation was issued yet). Optional:
    /// without a `then`, that result is discarded on delivery.
    pub fn then<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnOnce(Event) + 'static,
    {
        self.defer.borrow_mut().register(self.next, handler);
        self
    }

    /// Runs every staged transaction, delivering results to their bound
    /// handlers. Returns the number of transactions run; pump-level engine
    /// failures are routed to the error sink and leave the remaining queue
    /// intact for a later pump.
    pub fn run_pending(&mut self) -> usize {
        match self.conn.run_pending() {
            Ok(ran) => ran,
            Err(err) => {
                (self.on_error)(&err);
                0
            }
        }
    }

    /// Number of staged transactions awaiting a pump.
    pub fn pending_len(&self) -> usize {
        self.conn.pending_len()
    }
}

fn default_error_sink() -> ErrorSink {
    Rc::new(|err: &EngineError| tracing::error!(error = %err, "statement execution failed"))
}
