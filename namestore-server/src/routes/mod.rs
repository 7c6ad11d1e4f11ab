//! Route handlers for namestore-server.
//!
//! One resource, two routes:
//! - POST /store inserts a name
//! - GET /names lists every stored name

pub mod names;

pub use names::*;
