//! Typed window events and their observer lists

use std::fmt;

use crate::geometry::{Point, Size};

/// Visibility/placement state reported by the native layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowState {
    /// Window has been shown
    Shown,
    /// Window has been hidden
    Hidden,
    /// Window has been exposed and should be redrawn
    Exposed,
    /// Window has been minimized
    Minimized,
    /// Window has been maximized
    Maximized,
    /// Window has been restored to normal size and position
    Restored,
}

/// Which native size notification produced a [`ResizeInfo`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeEventType {
    /// Size changed by any means, API call included
    Changed,
    /// Size changed by an external event (user or window manager); a
    /// `Changed` notification follows
    Resized,
}

/// Mouse focus transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseFocus {
    /// Pointer entered the window
    Gained,
    /// Pointer left the window
    Lost,
}

/// Keyboard focus transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardFocus {
    /// Window gained keyboard focus
    Gained,
    /// Window lost keyboard focus
    Lost,
}

/// Payload of the size-changed event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeInfo {
    /// Notification kind
    pub kind: SizeEventType,
    /// New client area size
    pub new_size: Size,
}

impl ResizeInfo {
    /// Create a resize payload
    pub const fn new(kind: SizeEventType, new_size: Size) -> Self {
        Self { kind, new_size }
    }
}

/// Token returned by [`Event::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered list of callbacks for one event kind
///
/// Callbacks run synchronously in registration order.
pub struct Event<T> {
    handlers: Vec<(SubscriptionId, Box<dyn FnMut(&T)>)>,
    next_id: u64,
}

impl<T> Event<T> {
    /// Create an event with no subscribers
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a callback
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Remove a callback; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    /// Invoke every callback with `arg`
    pub fn emit(&mut self, arg: &T) {
        for (_, handler) in &mut self.handlers {
            handler(arg);
        }
    }

    /// Drop every callback
    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Number of registered callbacks
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no callback is registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<T> Default for Event<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event").field("subscribers", &self.handlers.len()).finish()
    }
}

/// Every event a window raises
#[derive(Debug, Default)]
pub struct WindowEvents {
    /// Shown, hidden, exposed, minimized, maximized or restored
    pub state_changed: Event<WindowState>,
    /// Window moved; carries the new position
    pub position_changed: Event<Point>,
    /// Window resized
    pub size_changed: Event<ResizeInfo>,
    /// Pointer entered or left
    pub mouse_focus_changed: Event<MouseFocus>,
    /// Keyboard focus gained or lost
    pub keyboard_focus_changed: Event<KeyboardFocus>,
    /// The window manager asks to close the window; the window stays alive
    pub close: Event<()>,
    /// The window is being offered focus
    pub focus_offered: Event<()>,
    /// Window moved to another display; carries the display index
    pub display_changed: Event<i32>,
}

impl WindowEvents {
    /// Drop every subscription of every event
    pub fn clear_all(&mut self) {
        self.state_changed.clear();
        self.position_changed.clear();
        self.size_changed.clear();
        self.mouse_focus_changed.clear();
        self.keyboard_focus_changed.clear();
        self.close.clear();
        self.focus_offered.clear();
        self.display_changed.clear();
    }

    /// Total number of subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.state_changed.len()
            + self.position_changed.len()
            + self.size_changed.len()
            + self.mouse_focus_changed.len()
            + self.keyboard_focus_changed.len()
            + self.close.len()
            + self.focus_offered.len()
            + self.display_changed.len()
    }
}
