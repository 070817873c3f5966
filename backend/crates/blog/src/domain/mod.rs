//! Domain Layer

pub mod post;
pub mod repository;
pub mod schema;

pub use post::{NewPost, Post, PostDraft};
pub use repository::PostRepository;
