#![forbid(unsafe_code)]

//! Data model for the gridflow layout engine.
//!
//! This crate holds the value types the engine computes over and nothing
//! else: no collision logic, no compaction, no coordinate mapping (those
//! live in `gridflow-engine`). Everything here is plain serde-shaped data
//! with small constructors and accessors.
//!
//! Two coordinate spaces appear throughout:
//!
//! - **Grid units** — integer columns/rows ([`LayoutItem`]).
//! - **Client pixels** — measurements from the host UI layer
//!   ([`PixelRect`], [`PointerPosition`]).

pub mod config;
pub mod geometry;
pub mod item;
pub mod pointer;
pub mod validate;

pub use config::{Axis, CompactType, GridConfig, RowHeight};
pub use geometry::{PixelRect, PointerPosition, ScrollDelta};
pub use item::{ItemId, LayoutItem};
pub use pointer::{DragContext, GroupDragContext};
pub use validate::{LayoutError, validate_layout};
