//! Repositories owning the in-memory application state

pub mod user;

pub use user::UserRepository;
