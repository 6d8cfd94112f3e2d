//! # act-core
//!
//! Core types and pure logic for the activity tracker.
//!
//! This crate has no I/O. It provides:
//! - The `Ticket` entity and its enums (region, connect type, status)
//! - The discussion area / sub-area catalog
//! - Ticket ID generation
//! - Migration of previously persisted (legacy) ticket records
//! - The filter/search engine behind the visible ticket list
//! - Partner history lookup and identity auto-fill
//! - CSV export
//! - Draft validation applied when a ticket is saved

pub mod catalog;
pub mod collection;
pub mod draft;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod export;
pub mod filter;
pub mod ids;
pub mod migration;
pub mod partner;

#[cfg(test)]
mod test_support;
