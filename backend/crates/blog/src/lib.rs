//! Blog Backend Module
//!
//! Posts owned by authenticated users:
//! - `domain/` - Post entity, payload schemas, repository trait
//! - `application/` - One use case per endpoint
//! - `infra/` - PostgreSQL and in-memory post stores
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Reads are public. Create, update and delete require a session, and only
//! a post's author may change or delete it.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


pub use error::{BlogError, BlogResult};
pub use infra::{memory::MemoryPostRepository, postgres::PgPostRepository};
pub use presentation::router::{blog_router, blog_router_generic};
