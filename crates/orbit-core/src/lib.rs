pub mod attached;
pub mod blobs;
pub mod color;
pub mod config;
pub mod connectors;
pub mod constants;
pub mod error;
pub mod pointer;
pub mod projection;
pub mod render;
pub mod scene;
pub mod shape;
pub mod streams;
pub mod tabs;

pub use attached::*;
pub use blobs::*;
pub use color::*;
pub use config::*;
pub use connectors::*;
pub use constants::*;
pub use error::*;
pub use pointer::*;
pub use projection::*;
pub use render::*;
pub use scene::*;
pub use shape::*;
pub use streams::*;
pub use tabs::*;
