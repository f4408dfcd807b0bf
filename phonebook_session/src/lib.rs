#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! The interactive phone book session.
//!
//! One [`Session`] owns the in-memory record set for the lifetime of a
//! run and drives the menu loop: display, add, edit, search, save-and-exit.
//! The session is generic over its input and output streams; the binary
//! wires it to stdin/stdout, tests script it with in-memory buffers.
//!
//! Every operation runs to completion before the next command is read.
//! Nothing touches the data file between the initial load and the final
//! save; changes made during a session that ends without choosing
//! save-and-exit are lost.

pub mod manager;
pub mod presenter;

pub use manager::{Session, SessionConfig, SessionError};
pub use presenter::display_records;
