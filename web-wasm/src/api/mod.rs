//! 推論API

pub mod predict;

pub use predict::FetchTransport;
