//! # Overlay Engine
//!
//! A dynamic text-overlay layout engine for frame-driven hosts.
//!
//! Given an ordered list of text items and a set of geometric constraints
//! (maximum width, maximum item count, margins, line spacing), the engine
//! computes a minimal bounding box and a sequence of possibly-truncated
//! display lines, recomputing whenever the source list changes.
//!
//! ## Architecture
//!
//! - [`layout::LayoutEngine`]: pure layout computation (truncation, fitting,
//!   bounding box)
//! - [`overlay::OverlayController`]: subscribes to list-change notifications
//!   and per-frame callbacks, caches the computed layout, and emits draw
//!   commands against a host-supplied surface
//! - [`text::TextMeasure`]: seam for the host's text measurement service
//! - [`overlay::DrawSurface`]: seam for the host's immediate-mode drawing
//!
//! The host (render loop, mutable list, font system) is an external
//! collaborator: it owns the event registries in [`events`] and supplies a
//! [`overlay::DrawSurface`] each frame.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use overlay_engine::config::OverlayConfig;
//! use overlay_engine::events::{FrameEvents, ListEvents};
//! use overlay_engine::layout::ListItem;
//! use overlay_engine::overlay::{CommandRecorder, OverlayController};
//! use overlay_engine::text::MonospaceMeasure;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let list_events = Rc::new(RefCell::new(ListEvents::new()));
//! let frame_events = Rc::new(RefCell::new(FrameEvents::new()));
//! let measure = Rc::new(MonospaceMeasure::new(12.0, 28.0)?);
//!
//! let mut controller = OverlayController::new(
//!     OverlayConfig::default(),
//!     measure,
//!     Rc::clone(&list_events),
//!     Rc::clone(&frame_events),
//!     &[], // list contents at construction time
//! );
//!
//! // Host: list mutated, notify subscribers.
//! let items = vec![ListItem::new("Feed the chickens")];
//! list_events.borrow_mut().notify(&items);
//!
//! // Host: frame callback with a drawing surface.
//! let mut surface = CommandRecorder::new();
//! frame_events.borrow_mut().dispatch(&mut surface);
//!
//! controller.dispose();
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod events;
pub mod foundation;
pub mod layout;
pub mod overlay;
pub mod text;

pub use config::{Config, ConfigError, OverlayConfig};
pub use layout::{DisplayLine, Layout, LayoutConstraints, LayoutEngine, ListItem};
pub use overlay::{DrawCommand, DrawSurface, OverlayController};
pub use text::{MeasureError, TextMeasure, TextSize};

/// Common imports for overlay users
pub mod prelude {
    pub use crate::{
        config::{Config, OverlayConfig},
        events::{FrameEvents, ListEvents, SubscriptionId},
        foundation::math::{Rect, Vec2, Vec4},
        layout::{DisplayLine, Layout, LayoutConstraints, LayoutEngine, ListItem},
        overlay::{CommandRecorder, DrawCommand, DrawSurface, OverlayController},
        text::{MeasureError, MonospaceMeasure, TextMeasure, TextSize},
    };
}
