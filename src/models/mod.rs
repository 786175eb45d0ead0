pub mod build;
pub mod envelope;
pub mod error;
pub mod message;
