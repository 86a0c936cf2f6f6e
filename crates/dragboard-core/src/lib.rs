//! dragboard-core - observable project board
//!
//! This crate provides the state layer behind the dragboard front-end:
//!
//! - **Project**: the unit of work on the board (title, description,
//!   headcount, status)
//! - **Store**: the single authoritative holder of all projects, notifying
//!   subscribers with a snapshot after every mutation
//! - **Transfer**: the drag payload and the source/target capability traits
//!   by which a project's identity moves between columns
//! - **Validation**: required/length/range rules applied to raw form input
//!   before the store is ever invoked
//! - **Config**: optional TOML configuration layered over built-in defaults
//!
//! The board has exactly two columns:
//!
//! ```text
//! Active <-> Finished
//! ```
//!
//! and every status change flows through [`ProjectStore::change_status`].

pub mod config;
pub mod project;
pub mod store;
pub mod transfer;
pub mod validation;

pub use config::*;
pub use project::*;
pub use store::*;
pub use transfer::*;
pub use validation::*;
