//! Store module
//!
//! Concrete implementations of the transactional store seam defined in
//! [`crate::core::traits`]:
//! - `memory` - process-local DashMap-backed store

pub mod memory;

pub use memory::MemoryStore;
