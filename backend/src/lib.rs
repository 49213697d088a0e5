//! Auto-parts catalogue service.
//!
//! A hexagonal application: [`domain`] holds entities, ports and services,
//! [`inbound`] adapts HTTP requests onto driving ports, and [`outbound`]
//! implements driven ports with PostgreSQL, bcrypt and calamine.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
