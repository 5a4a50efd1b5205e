//! Native event records
//!
//! A [`NativeEvent`] is the flat record the backend's poll call hands out. Only
//! records whose category is [`EventType::Window`] carry window-event data; the
//! meaning of `data1`/`data2` depends on the subtype:
//!
//! | Subtype | `data1` | `data2` |
//! |---|---|---|
//! | `Moved` | x | y |
//! | `Resized`, `SizeChanged` | width | height |
//! | `DisplayChanged` | display index | unused |

/// Event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Window state or geometry change
    Window,
    /// Keyboard input
    Keyboard,
    /// Mouse input
    Mouse,
    /// Application quit request
    Quit,
    /// Anything else the backend reports
    Other,
}

/// Window-event subtype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowEventId {
    /// Not a window event
    None,
    /// Window has been shown
    Shown,
    /// Window has been hidden
    Hidden,
    /// Window has been exposed and should be redrawn
    Exposed,
    /// Window has been moved to `(data1, data2)`
    Moved,
    /// Window has been resized to `data1 x data2` by an external event
    Resized,
    /// Window size has changed, by any means
    SizeChanged,
    /// Window has been minimized
    Minimized,
    /// Window has been maximized
    Maximized,
    /// Window has been restored to normal size and position
    Restored,
    /// Window has gained mouse focus
    Enter,
    /// Window has lost mouse focus
    Leave,
    /// Window has gained keyboard focus
    FocusGained,
    /// Window has lost keyboard focus
    FocusLost,
    /// The window manager requests that the window be closed
    Close,
    /// Window is being offered focus
    TakeFocus,
    /// Window had a hit test that wasn't normal
    HitTest,
    /// Colour profile of the window's display changed
    IccProfileChanged,
    /// Window has been moved to display `data1`
    DisplayChanged,
}

/// Flat native event record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NativeEvent {
    /// Event category
    pub kind: EventType,
    /// Seconds since the backend was initialised
    pub timestamp: f64,
    /// Numeric ID of the window the event targets; `0` when none
    pub window_id: u32,
    /// Window-event subtype; `None` outside the window category
    pub window_event: WindowEventId,
    /// First subtype-specific value
    pub data1: i32,
    /// Second subtype-specific value
    pub data2: i32,
}

impl NativeEvent {
    /// Window-event record
    pub const fn window(window_id: u32, window_event: WindowEventId, data1: i32, data2: i32) -> Self {
        Self {
            kind: EventType::Window,
            timestamp: 0.0,
            window_id,
            window_event,
            data1,
            data2,
        }
    }

    /// Record of a non-window category
    pub const fn other(kind: EventType, window_id: u32) -> Self {
        Self {
            kind,
            timestamp: 0.0,
            window_id,
            window_event: WindowEventId::None,
            data1: 0,
            data2: 0,
        }
    }

    /// Set the timestamp (builder pattern)
    pub const fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Whether the record belongs to the window category
    pub fn is_window_event(&self) -> bool {
        self.kind == EventType::Window
    }
}
