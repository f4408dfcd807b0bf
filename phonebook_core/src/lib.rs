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

//! Core phone book model.
//!
//! A [`Record`] is one phone book entry: six ordered text fields with no
//! validation beyond arity. A [`PhoneBook`] owns the ordered record
//! sequence and is the only way to mutate it; records are addressed by
//! their position in the sequence, which is not a stable identifier across
//! structural changes.

pub mod book;
pub mod record;

pub use book::{Page, PhoneBook, PhoneBookError, pages};
pub use record::{FIELD_COUNT, Record};
