//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service/API orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `NewNote::validate()` before
//!   persistence.
//! - Repository reads reject invalid persisted state instead of masking
//!   it.

pub mod note_repo;
