//! Native window with typed events
//!
//! A [`Window`] owns exactly one native window. Its properties are thin
//! pass-throughs to the backend, except for the title and the always-on-top
//! toggle, which are cached to skip redundant native calls.
//!
//! Native events reach the window through [`Window::handle_event`], which the
//! host loop calls for every polled record:
//!
//! ```no_run
//! use native_window::{drain_events, share, GlfwBackend, Window, WindowDescriptor};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! # fn main() -> native_window::WindowResult<()> {
//! let backend = share(GlfwBackend::new()?);
//! let mut window = Window::create(&backend, &WindowDescriptor::new("Demo"), None, None)?;
//!
//! let running = Rc::new(Cell::new(true));
//! let flag = running.clone();
//! window.events_mut().close.subscribe(move |_| flag.set(false));
//!
//! while running.get() {
//!     for event in drain_events(&backend) {
//!         window.handle_event(&event);
//!     }
//! }
//! window.dispose()
//! # }
//! ```

mod descriptor;
mod events;

pub use descriptor::WindowDescriptor;
pub use events::{
    Event, KeyboardFocus, MouseFocus, ResizeInfo, SizeEventType, SubscriptionId, WindowEvents, WindowState,
};

use slotmap::Key as _;

use crate::cursor::Cursor;
use crate::error::{WindowError, WindowResult};
use crate::geometry::{Point, Size};
use crate::icon::Icon;
use crate::native::{NativeBackend, NativeEvent, NativeHandle, SharedBackend, WindowEventId, WindowFlags, WindowKey};
use crate::resource::ResourceId;

/// A native window
///
/// Icons and cursors installed on the window are referenced by id only; the
/// window never disposes them.
pub struct Window<B: NativeBackend> {
    backend: SharedBackend<B>,
    handle: NativeHandle<WindowKey>,
    title: String,
    always_on_top: bool,
    state: Option<WindowState>,
    icon: Option<ResourceId>,
    cursor: Option<ResourceId>,
    events: WindowEvents,
}

impl<B: NativeBackend> Window<B> {
    /// Create the native window, then bind `icon` and install `cursor` if given
    ///
    /// If binding either fails, the freshly created window is destroyed again.
    pub fn create(
        backend: &SharedBackend<B>,
        descriptor: &WindowDescriptor,
        icon: Option<&Icon<B>>,
        cursor: Option<&mut Cursor<B>>,
    ) -> WindowResult<Self> {
        let key = backend.borrow_mut().create_window(
            &descriptor.title,
            descriptor.position,
            descriptor.size,
            descriptor.flags,
        );
        if key.is_null() {
            return Err(WindowError::native(
                "Failed to create window",
                &backend.borrow().last_error(),
            ));
        }

        let mut window = Self {
            backend: backend.clone(),
            handle: NativeHandle::new(key, "Window")?,
            title: descriptor.title.clone(),
            always_on_top: descriptor.flags.contains(WindowFlags::ALWAYS_ON_TOP),
            state: None,
            icon: None,
            cursor: None,
            events: WindowEvents::default(),
        };
        log::debug!("Created window \"{}\" ({:?})", window.title, key);

        if let Some(icon) = icon {
            window.set_icon(icon)?;
        }
        if let Some(cursor) = cursor {
            window.set_cursor(cursor)?;
        }
        Ok(window)
    }

    fn key(&self) -> WindowResult<WindowKey> {
        self.handle.try_get()
    }

    /// Native key of the window
    pub fn native_key(&self) -> WindowResult<WindowKey> {
        self.key()
    }

    /// Subscriptions, read-only
    pub const fn events(&self) -> &WindowEvents {
        &self.events
    }

    /// Subscriptions
    pub fn events_mut(&mut self) -> &mut WindowEvents {
        &mut self.events
    }

    /// Last state reported by the native layer; `None` before the first one
    pub const fn state(&self) -> Option<WindowState> {
        self.state
    }

    /// Whether [`Self::dispose`] has run
    pub const fn is_disposed(&self) -> bool {
        self.handle.is_released()
    }

    /// Use `icon` as the window icon; the icon remains owned by the caller
    pub fn set_icon(&mut self, icon: &Icon<B>) -> WindowResult<()> {
        let key = self.key()?;
        let surface = icon.surface_key()?;
        self.backend.borrow_mut().set_window_icon(key, surface);
        self.icon = Some(icon.id());
        Ok(())
    }

    /// Install `cursor`; the cursor remains owned by the caller
    pub fn set_cursor(&mut self, cursor: &mut Cursor<B>) -> WindowResult<()> {
        self.key()?;
        cursor.install()?;
        self.cursor = Some(cursor.id());
        Ok(())
    }

    /// Id of the installed icon
    pub const fn icon_id(&self) -> Option<ResourceId> {
        self.icon
    }

    /// Id of the installed cursor
    pub const fn cursor_id(&self) -> Option<ResourceId> {
        self.cursor
    }

    /// Current native flags
    pub fn flags(&self) -> WindowResult<WindowFlags> {
        let key = self.key()?;
        Ok(self.backend.borrow().window_flags(key))
    }

    /// Title, served from the cache
    #[inline]
    pub fn title(&self) -> WindowResult<&str> {
        self.key()?;
        Ok(&self.title)
    }

    /// Set the title bar text
    pub fn set_title(&mut self, title: impl Into<String>) -> WindowResult<()> {
        let key = self.key()?;
        let title = title.into();
        self.backend.borrow_mut().set_window_title(key, &title);
        self.title = title;
        Ok(())
    }

    /// Index of the display the window is on
    pub fn display_index(&self) -> WindowResult<i32> {
        let key = self.key()?;
        let mut backend = self.backend.borrow_mut();
        let index = backend.window_display_index(key);
        if index < 0 {
            return Err(WindowError::native("Failed to get display index", &backend.last_error()));
        }
        Ok(index)
    }

    /// Client area size
    pub fn size(&self) -> WindowResult<Size> {
        let key = self.key()?;
        Ok(self.backend.borrow().window_size(key))
    }

    /// Resize the client area
    pub fn set_size(&mut self, size: Size) -> WindowResult<()> {
        let key = self.key()?;
        self.backend.borrow_mut().set_window_size(key, size);
        Ok(())
    }

    /// Minimum client area size
    pub fn min_size(&self) -> WindowResult<Size> {
        let key = self.key()?;
        Ok(self.backend.borrow().window_minimum_size(key))
    }

    /// Constrain the minimum client area size
    pub fn set_min_size(&mut self, size: Size) -> WindowResult<()> {
        let key = self.key()?;
        self.backend.borrow_mut().set_window_minimum_size(key, size);
        Ok(())
    }

    /// Maximum client area size
    pub fn max_size(&self) -> WindowResult<Size> {
        let key = self.key()?;
        Ok(self.backend.borrow().window_maximum_size(key))
    }

    /// Constrain the maximum client area size
    pub fn set_max_size(&mut self, size: Size) -> WindowResult<()> {
        let key = self.key()?;
        self.backend.borrow_mut().set_window_maximum_size(key, size);
        Ok(())
    }

    /// Window opacity
    pub fn opacity(&self) -> WindowResult<f32> {
        let key = self.key()?;
        Ok(self.backend.borrow().window_opacity(key))
    }

    /// Set window opacity
    pub fn set_opacity(&mut self, opacity: f32) -> WindowResult<()> {
        let key = self.key()?;
        self.backend.borrow_mut().set_window_opacity(key, opacity);
        Ok(())
    }

    /// Whether the window stays above others, served from the cache
    pub fn always_on_top(&self) -> WindowResult<bool> {
        self.key()?;
        Ok(self.always_on_top)
    }

    /// Keep the window above others; no native call when the value is unchanged
    pub fn set_always_on_top(&mut self, on_top: bool) -> WindowResult<()> {
        let key = self.key()?;
        if self.always_on_top == on_top {
            return Ok(());
        }
        self.backend.borrow_mut().set_window_always_on_top(key, on_top);
        self.always_on_top = on_top;
        Ok(())
    }

    /// Whether the pointer is over this window
    pub fn is_mouse_focused(&self) -> WindowResult<bool> {
        let key = self.key()?;
        Ok(self.backend.borrow().mouse_focus() == key)
    }

    /// Position of the top-left corner
    pub fn position(&self) -> WindowResult<Point> {
        let key = self.key()?;
        Ok(self.backend.borrow().window_position(key))
    }

    /// Move the window
    pub fn set_position(&mut self, position: Point) -> WindowResult<()> {
        let key = self.key()?;
        self.backend.borrow_mut().set_window_position(key, position);
        Ok(())
    }

    /// Numeric window ID
    pub fn id(&self) -> WindowResult<u32> {
        let key = self.key()?;
        let backend = self.backend.borrow();
        match backend.window_id(key) {
            0 => Err(WindowError::native(
                &format!("Failed to get ID for window {key:?}"),
                &backend.last_error(),
            )),
            id => Ok(id),
        }
    }

    /// Raise the typed event matching a native window-event record
    ///
    /// Records outside the window category are ignored, as are subtypes with no
    /// typed counterpart. A close request only raises [`WindowEvents::close`];
    /// tearing the window down is up to the subscriber. A disposed window
    /// ignores every record.
    pub fn handle_event(&mut self, event: &NativeEvent) {
        if self.is_disposed() || !event.is_window_event() {
            return;
        }
        let state = match event.window_event {
            WindowEventId::Shown => Some(WindowState::Shown),
            WindowEventId::Hidden => Some(WindowState::Hidden),
            WindowEventId::Exposed => Some(WindowState::Exposed),
            WindowEventId::Minimized => Some(WindowState::Minimized),
            WindowEventId::Maximized => Some(WindowState::Maximized),
            WindowEventId::Restored => Some(WindowState::Restored),
            _ => None,
        };
        if let Some(state) = state {
            self.state = Some(state);
            self.events.state_changed.emit(&state);
            return;
        }

        let data = Point::new(event.data1, event.data2);
        match event.window_event {
            WindowEventId::Moved => self.events.position_changed.emit(&data),
            WindowEventId::Resized => self
                .events
                .size_changed
                .emit(&ResizeInfo::new(SizeEventType::Resized, data.as_size())),
            WindowEventId::SizeChanged => self
                .events
                .size_changed
                .emit(&ResizeInfo::new(SizeEventType::Changed, data.as_size())),
            WindowEventId::Enter => self.events.mouse_focus_changed.emit(&MouseFocus::Gained),
            WindowEventId::Leave => self.events.mouse_focus_changed.emit(&MouseFocus::Lost),
            WindowEventId::FocusGained => self.events.keyboard_focus_changed.emit(&KeyboardFocus::Gained),
            WindowEventId::FocusLost => self.events.keyboard_focus_changed.emit(&KeyboardFocus::Lost),
            WindowEventId::TakeFocus => self.events.focus_offered.emit(&()),
            WindowEventId::DisplayChanged => self.events.display_changed.emit(&event.data1),
            WindowEventId::Close => self.events.close.emit(&()),
            _ => log::trace!("Ignoring window event {:?}", event.window_event),
        }
    }

    /// Destroy the native window and drop every subscription
    ///
    /// Installed icon and cursor are forgotten, not disposed. A second call
    /// fails with `AlreadyDisposed`.
    pub fn dispose(&mut self) -> WindowResult<()> {
        let key = self.handle.release()?;
        self.backend.borrow_mut().destroy_window(key);
        self.events.clear_all();
        self.title.clear();
        self.icon = None;
        self.cursor = None;
        log::debug!("Disposed window {:?}", key);
        Ok(())
    }
}

impl<B: NativeBackend> Drop for Window<B> {
    fn drop(&mut self) {
        // Native release only; subscriptions go away with the struct.
        if let Ok(key) = self.handle.release() {
            match self.backend.try_borrow_mut() {
                Ok(mut backend) => backend.destroy_window(key),
                Err(_) => log::warn!("Leaking window {:?}: backend is busy", key),
            }
        }
    }
}
