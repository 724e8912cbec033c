//! Envschema - schema-driven typed configuration from environment variables.
//!
//! A declarative schema tree names which environment variables to read, how
//! to coerce each value, and optional defaults. Resolution walks the tree
//! depth-first and produces a value tree of the same shape, collecting every
//! missing required variable into a single aggregated error instead of
//! failing on the first one.
//!
//! The environment is injected as an [`Environment`] lookup, so resolution
//! is pure and testable; [`ProcessEnv`] wires it to the live process
//! environment and [`MapEnv`] backs it with an in-memory map.
//!
//! # Example
//!
//! ```
//! use envschema::{resolve, MapEnv, Schema, Value};
//!
//! # fn main() -> anyhow::Result<()> {
//! let schema = Schema::group([(
//!     "db",
//!     Schema::group([
//!         ("host", Schema::string("DB_HOST")),
//!         ("port", Schema::integer_or("DB_PORT", 5432)),
//!     ]),
//! )]);
//!
//! let env: MapEnv = [("APP_DB_HOST", "localhost")].into_iter().collect();
//! let config = resolve(&env, "APP_", &schema)?;
//!
//! let db = config.get("db").unwrap();
//! assert_eq!(db.get("host").and_then(Value::as_str), Some("localhost"));
//! assert_eq!(db.get("port").and_then(Value::as_i64), Some(5432));
//! # Ok(())
//! # }
//! ```

pub mod env;
pub mod error;
pub mod resolver;
pub mod schema;
pub mod value;

// Re-export the public surface for convenience
pub use env::{Environment, MapEnv, ProcessEnv};
pub use error::ResolveError;
pub use resolver::{resolve, resolve_from_process_env};
pub use schema::{kind, Leaf, Schema};
pub use value::Value;
