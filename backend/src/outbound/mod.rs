//! Outbound adapters implementing the domain's driven ports.
//!
//! - `persistence`: PostgreSQL repositories via Diesel.
//! - `security`: bcrypt password hashing.
//! - `spreadsheet`: calamine workbook decoding.
//!
//! Adapters translate between domain types and infrastructure types and
//! contain no business rules.

pub mod persistence;
pub mod security;
pub mod spreadsheet;
