//! Site probing adapter.

pub mod probe;

pub use probe::HttpSiteProbe;
