//! Client-side state layer: MVI traits, the observable store and the
//! cache-shaped slices the feature states are built from.

pub mod cache;
pub mod mvi;
mod store;

pub use cache::{page_key, page_offset, CommandStatus, PageCache, RequestToken, Resource};
pub use store::Store;
