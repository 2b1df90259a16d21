//! Declarative environment variable binding with derived prefixes
//!
//! This library loads groups of configuration values from environment
//! variables. A group is declared with a name and a set of fields with
//! literal defaults; the group name derives the environment prefix, and each
//! field's default decides the type its variable is coerced to.
//!
//! # Features
//!
//! - **Declarative**: name a group, declare fields, load eagerly
//! - **Derived prefixes**: group `SERVER` reads `SERVER_PORT`, `SERVER_HOST`;
//!   the reserved name `root` reads unprefixed variables
//! - **Typed defaults**: `8080` coerces as an integer, `false` as a boolean,
//!   `"addr"` is taken verbatim
//! - **Scope population**: flatten loaded groups into a caller-supplied
//!   mutable scope, keyed by environment variable name
//!
//! # Value Coercion
//!
//! Set variables are coerced to the kind of the field's default:
//! - Strings: taken verbatim
//! - Integers and floats: parsed with `FromStr`
//! - Booleans: `true`/`yes`/`1`/`on` and `false`/`no`/`0`/`off`,
//!   case-insensitive
//!
//! Unset variables fall back to the declared default. A set variable that
//! cannot be coerced fails the whole load with [`EnvBindError::Parse`].
//!
//! # Example
//!
//! ```rust
//! use envbind::Builder;
//!
//! # fn main() -> Result<(), envbind::EnvBindError> {
//! std::env::set_var("STUFF_FOO", "3");
//!
//! let stuff = Builder::new("STUFF")
//!     .field("FOO", 1)
//!     .field("BAR", 2)
//!     .load()?;
//!
//! assert_eq!(stuff.get("FOO").and_then(|v| v.as_int()), Some(3));
//! assert_eq!(stuff.get("BAR").and_then(|v| v.as_int()), Some(2));
//! # std::env::remove_var("STUFF_FOO");
//! # Ok(())
//! # }
//! ```
//!
//! # Deferred loading
//!
//! [`Builder::schema`] finishes a declaration without touching the
//! environment; the resulting [`Schema`] can be loaded any number of times,
//! with or without overrides:
//!
//! ```rust
//! use envbind::Builder;
//!
//! # fn main() -> Result<(), envbind::EnvBindError> {
//! let schema = Builder::new("WORKER").field("THREADS", 4).schema()?;
//!
//! let defaults = schema.load()?;
//! let pinned = schema.load_with([("THREADS", 16)])?;
//!
//! assert_eq!(defaults.get("THREADS").and_then(|v| v.as_int()), Some(4));
//! assert_eq!(pinned.get("THREADS").and_then(|v| v.as_int()), Some(16));
//! # Ok(())
//! # }
//! ```
//!
//! # Scope population
//!
//! A [`Scope`] is an explicit, caller-owned mapping. [`Scope::populate`]
//! flattens every binding in it into flat values named like the environment
//! variables they resolve from:
//!
//! ```rust
//! use envbind::{Builder, Scope};
//!
//! # fn main() -> Result<(), envbind::EnvBindError> {
//! std::env::set_var("CACHE_SIZE", "512");
//! let cache = Builder::new("CACHE").field("SIZE", 128).load()?;
//!
//! let mut scope = Scope::new();
//! scope.insert_binding("cache", cache);
//! scope.populate();
//!
//! assert_eq!(scope.get_value("CACHE_SIZE").and_then(|v| v.as_int()), Some(512));
//! # std::env::remove_var("CACHE_SIZE");
//! # Ok(())
//! # }
//! ```

mod binding;
mod de;
mod error;
mod schema;
mod scope;
mod value;

pub use binding::{Binding, FieldFilter};
pub use error::EnvBindError;
pub use schema::{Builder, FieldSpec, Schema};
pub use scope::{Entry, Scope};
pub use value::{ConfigValue, ValueKind};
