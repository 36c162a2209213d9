//! Chainable SQLite data store with one-shot completion handlers.
//!
//! # Intention
//!
//! - Provide a thin, chainable convenience layer over SQLite for issuing
//!   single queries or batched transactional queries.
//! - Deliver each operation's result to at most one handler, bound by the
//!   `then` call immediately following the operation.
//! - Delegate durability, atomicity, and SQL execution entirely to the
//!   engine; this crate only orchestrates calls into it.
//!
//! # Architectural Boundaries
//!
//! - Only the facade, its one-shot handler registry, the engine boundary,
//!   and the demo fixture belong here.
//! - No SQL engine, storage format, or concurrency control of our own.
//!
//! # Example
//!
//! ```
//! use rust_datastore::{Database, Event};
//!
//! let mut db = Database::in_memory()?;
//! db.query("CREATE TABLE notes (body TEXT)", &[]);
//! db.begin()
//!     .query("INSERT INTO notes VALUES (?)", &["first".into()])
//!     .query("INSERT INTO notes VALUES (?)", &["second".into()])
//!     .execute(|total| println!("ran {total} statements"), |_, _| {})
//!     .then(|_| println!("batch attempted"));
//! db.query("SELECT body FROM notes", &[]).then(|event| {
//!     if let Event::Statement { rows, .. } = event {
//!         assert_eq!(rows.len(), 2);
//!     }
//! });
//! db.run_pending();
//! # Ok::<(), rust_datastore::EngineError>(())
//! ```

pub mod dataset;
pub mod defer;
pub mod engine;
pub mod facade;

pub use dataset::{demo_employees, Employee};
pub use defer::{DeferKey, DeferRegistry, KeyGen};
pub use engine::{Connection, ConnectionConfig, EngineError, ResultSet, TransactionContext, Value};
pub use facade::{Database, ErrorSink, Event};
