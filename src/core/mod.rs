//! Core functionality: tree walking, concurrent lexing and resolution

pub mod driver;
pub mod resolver;
pub mod walker;

pub use driver::{CancelToken, GraphDriver};
pub use resolver::Resolver;
pub use walker::Walker;
