//! Adapters: implementations of the domain ports against real services.

pub mod github;
pub mod site;
