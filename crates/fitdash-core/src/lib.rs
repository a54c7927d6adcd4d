//! Core types and logic for fitdash
//!
//! This crate provides the remote-collection view machinery shared by the
//! fitdash binaries: each view fetches one resource collection from the
//! fitness API exactly once, tracks a three-state retrieval lifecycle
//! (loading, success, error), normalizes the two response envelopes the
//! server produces into one row sequence, and renders deterministically.
//!
//! The crate is presentation-free. It exposes no argument parsing and no
//! terminal I/O; the `fitdash` CLI and the `fitdash-tui` dashboard map
//! [`render::RenderedView`] values onto their own surfaces.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod fetch;
pub mod lifecycle;
pub mod logging;
pub mod normalize;
pub mod render;
pub mod resource;
pub mod view;

pub use endpoint::ResourceEndpoint;
pub use error::FetchError;
pub use lifecycle::{FetchOutcome, LifecycleState};
pub use normalize::Record;
pub use render::RenderedView;
pub use resource::{CellKind, ColumnSpec, ResourceSpec};
pub use view::CollectionView;
