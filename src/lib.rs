pub mod config;
pub mod errors;
pub mod graph;
pub mod io;
pub mod logging;
pub mod session;
pub mod types;

pub use errors::{GraphError, Result};
pub use graph::Graph;
