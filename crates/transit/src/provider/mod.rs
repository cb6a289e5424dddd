//! Built-in network data.

pub mod busan;
