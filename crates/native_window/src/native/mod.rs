//! Native windowing layer
//!
//! Everything the wrapper types need from the underlying windowing library goes
//! through [`NativeBackend`]. The trait deliberately mirrors a C windowing ABI:
//!
//! - creation calls return a *null key* on failure and the reason is fetched
//!   afterwards with [`NativeBackend::last_error`]
//! - integer queries report failure through sentinels (`-1` for display index,
//!   `0` for window IDs)
//! - destruction calls never fail
//!
//! Translating those sentinels into [`WindowResult`](crate::WindowResult)s is the
//! job of the wrapper types, not of the backend.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Window / Icon / Cursor       │ ← RAII wrappers, typed events
//! └──────────────┬───────────────┘
//!                │ NativeHandle<K>
//!        ┌───────▼────────┐
//!        │ NativeBackend  │ ← sentinel-style contract (this module)
//!        └───────┬────────┘
//!                │ implemented by
//!        ┌───────▼────────┐
//!        │ GlfwBackend    │ ← glfw + image decoding
//!        └────────────────┘
//! ```

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use crate::geometry::{Point, Size};

pub mod event;
pub mod flags;
pub mod glfw_backend;
pub mod handle;
pub mod image_data;

#[cfg(test)]
pub(crate) mod mock;

pub use event::{EventType, NativeEvent, WindowEventId};
pub use flags::{WindowFlags, WINDOWPOS_CENTERED};
pub use glfw_backend::GlfwBackend;
pub use handle::NativeHandle;

slotmap::new_key_type! {
    /// Native window handle
    pub struct WindowKey;
    /// Native pixel surface handle
    pub struct SurfaceKey;
    /// Native cursor handle
    pub struct CursorKey;
}

/// Backend shared by every window, icon and cursor created from it
///
/// All access is single-threaded; borrows are held only for the duration of one
/// native call so event callbacks can freely use other wrappers.
pub type SharedBackend<B> = Rc<RefCell<B>>;

/// Wrap a backend for sharing between wrapper objects
pub fn share<B: NativeBackend>(backend: B) -> SharedBackend<B> {
    Rc::new(RefCell::new(backend))
}

/// Pump the native queue once and take every pending event
///
/// Dispatch the returned records after this call returns, so event callbacks
/// are free to make native calls of their own. Events arriving during dispatch
/// wait for the next call.
pub fn drain_events<B: NativeBackend>(backend: &SharedBackend<B>) -> Vec<NativeEvent> {
    let mut backend = backend.borrow_mut();
    backend.pump_events();
    std::iter::from_fn(|| backend.take_event()).collect()
}

/// Pixel layout of a native surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormatKind {
    /// 8 bits per channel, bytes in R, G, B, A memory order
    Rgba32,
}

/// Pixel-format description of a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelFormat {
    /// Layout identifier
    pub kind: PixelFormatKind,
    /// Bits per pixel
    pub bits_per_pixel: u8,
    /// Bytes per pixel
    pub bytes_per_pixel: u8,
    /// Red channel mask for a little-endian packed pixel
    pub r_mask: u32,
    /// Green channel mask
    pub g_mask: u32,
    /// Blue channel mask
    pub b_mask: u32,
    /// Alpha channel mask
    pub a_mask: u32,
}

impl PixelFormat {
    /// Format produced by every image decode in this crate
    pub const RGBA32: Self = Self {
        kind: PixelFormatKind::Rgba32,
        bits_per_pixel: 32,
        bytes_per_pixel: 4,
        r_mask: 0x0000_00FF,
        g_mask: 0x0000_FF00,
        b_mask: 0x00FF_0000,
        a_mask: 0xFF00_0000,
    };
}

/// Contract between the wrapper types and a native windowing library
pub trait NativeBackend {
    /// Reason for the most recent failure; empty when none was recorded
    fn last_error(&self) -> String;

    /// Create a window; returns a null key on failure
    fn create_window(&mut self, title: &str, position: Point, size: Size, flags: WindowFlags) -> WindowKey;

    /// Destroy a window; unknown keys are ignored
    fn destroy_window(&mut self, window: WindowKey);

    /// Current flag set of a window
    fn window_flags(&self, window: WindowKey) -> WindowFlags;

    /// Set the title bar text
    fn set_window_title(&mut self, window: WindowKey, title: &str);

    /// Index of the display containing the window; negative on failure
    fn window_display_index(&mut self, window: WindowKey) -> i32;

    /// Client area size
    fn window_size(&self, window: WindowKey) -> Size;

    /// Resize the client area
    fn set_window_size(&mut self, window: WindowKey, size: Size);

    /// Minimum client area size; zero when unconstrained
    fn window_minimum_size(&self, window: WindowKey) -> Size;

    /// Constrain the minimum client area size
    fn set_window_minimum_size(&mut self, window: WindowKey, size: Size);

    /// Maximum client area size; zero when unconstrained
    fn window_maximum_size(&self, window: WindowKey) -> Size;

    /// Constrain the maximum client area size
    fn set_window_maximum_size(&mut self, window: WindowKey, size: Size);

    /// Window opacity in `0.0..=1.0`
    fn window_opacity(&self, window: WindowKey) -> f32;

    /// Set window opacity
    fn set_window_opacity(&mut self, window: WindowKey, opacity: f32);

    /// Keep the window above others
    fn set_window_always_on_top(&mut self, window: WindowKey, on_top: bool);

    /// Window currently under the mouse; null key when none
    fn mouse_focus(&self) -> WindowKey;

    /// Position of the window's top-left corner
    fn window_position(&self, window: WindowKey) -> Point;

    /// Move the window
    fn set_window_position(&mut self, window: WindowKey, position: Point);

    /// Numeric window ID; `0` on failure
    fn window_id(&self, window: WindowKey) -> u32;

    /// Use a surface as the window icon; the surface stays owned by the caller
    fn set_window_icon(&mut self, window: WindowKey, surface: SurfaceKey);

    /// Decode an image file into a new surface; returns a null key on failure
    fn load_image(&mut self, path: &Path) -> SurfaceKey;

    /// Free a surface; unknown keys are ignored
    fn free_surface(&mut self, surface: SurfaceKey);

    /// Pixel format of a live surface
    fn surface_format(&self, surface: SurfaceKey) -> Option<&PixelFormat>;

    /// Dimensions of a live surface; zero for unknown keys
    fn surface_size(&self, surface: SurfaceKey) -> Size;

    /// Build a colour cursor from a surface; returns a null key on failure
    fn create_color_cursor(&mut self, surface: SurfaceKey, hotspot_x: i32, hotspot_y: i32) -> CursorKey;

    /// Make a cursor the active system cursor
    fn set_cursor(&mut self, cursor: CursorKey);

    /// Free a cursor; unknown keys are ignored
    fn free_cursor(&mut self, cursor: CursorKey);

    /// Move events pending in the native layer onto the backend queue
    fn pump_events(&mut self);

    /// Next queued event without pumping
    fn take_event(&mut self) -> Option<NativeEvent>;

    /// Next pending event, pumping once if the queue is empty
    fn poll_event(&mut self) -> Option<NativeEvent> {
        self.take_event().or_else(|| {
            self.pump_events();
            self.take_event()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::mock::MockBackend;

    #[test]
    fn test_drain_pumps_once() {
        let backend = share(MockBackend::new());
        backend.borrow_mut().push_event(NativeEvent::window(1, WindowEventId::Shown, 0, 0));
        backend.borrow_mut().push_event(NativeEvent::window(1, WindowEventId::Exposed, 0, 0));

        let events = drain_events(&backend);
        assert_eq!(events.len(), 2);
        assert_eq!(backend.borrow().pumps, 1);

        assert!(drain_events(&backend).is_empty());
        assert_eq!(backend.borrow().pumps, 2);
    }

    #[test]
    fn test_poll_pumps_only_when_queue_is_empty() {
        let mut backend = MockBackend::new();
        backend.push_event(NativeEvent::window(1, WindowEventId::Close, 0, 0));

        assert!(backend.poll_event().is_some());
        assert_eq!(backend.pumps, 0);
        assert!(backend.poll_event().is_none());
        assert_eq!(backend.pumps, 1);
    }
}
