//! Runtime models that are not part of the domain itself.

pub mod config;
