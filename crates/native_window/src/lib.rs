//! # Native Window
//!
//! RAII wrappers and typed events on top of a native windowing library.
//!
//! - **Geometry**: `Point`, `PointF`, `Size`, `SizeF` value types
//! - **Handles**: every native window, surface and cursor is owned by exactly
//!   one wrapper and released exactly once
//! - **Events**: native window-event records are dispatched to ordered
//!   observer lists (`state_changed`, `size_changed`, `close`, ...)
//! - **Backends**: GLFW out of the box, behind the [`NativeBackend`] trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use native_window::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = share(GlfwBackend::new()?);
//!     let desc = WindowDescriptor::new("Hello").with_flags(WindowFlags::SHOWN | WindowFlags::RESIZABLE);
//!     let mut window = Window::create(&backend, &desc, None, None)?;
//!     window.events_mut().size_changed.subscribe(|info| println!("{:?} -> {}", info.kind, info.new_size));
//!
//!     for event in drain_events(&backend) {
//!         window.handle_event(&event);
//!     }
//!     window.dispose()?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod geometry;
pub mod logging;
pub mod native;

mod cursor;
mod error;
mod icon;
mod resource;
mod surface;
mod window;

pub use cursor::Cursor;
pub use error::{WindowError, WindowResult};
pub use icon::Icon;
pub use native::{drain_events, share, GlfwBackend, NativeBackend, NativeEvent, SharedBackend, WindowFlags};
pub use resource::ResourceId;
pub use surface::SurfaceHolder;
pub use window::{
    Event, KeyboardFocus, MouseFocus, ResizeInfo, SizeEventType, SubscriptionId, Window, WindowDescriptor, WindowEvents,
    WindowState,
};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, WindowConfig},
        drain_events,
        geometry::{Point, PointF, Size, SizeF},
        share, Cursor, GlfwBackend, Icon, NativeBackend, SharedBackend, Window, WindowDescriptor, WindowError,
        WindowEvents, WindowFlags, WindowResult, WindowState,
    };
}
