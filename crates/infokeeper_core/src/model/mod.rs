//! Domain model for person records.
//!
//! # Responsibility
//! - Define the record shape shared by both UI front-ends.
//! - Define the closed job-title and gender selections.
//!
//! # Invariants
//! - A persisted `Person` always has a non-zero `id`.
//! - `NotSelected` selections only exist in unsaved form input.

pub mod person;
