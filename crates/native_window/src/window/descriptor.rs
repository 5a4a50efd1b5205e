//! Window creation parameters

use crate::geometry::{Point, Size};
use crate::native::{WindowFlags, WINDOWPOS_CENTERED};

/// Everything needed to create a window
#[derive(Debug, Clone, PartialEq)]
pub struct WindowDescriptor {
    /// Title bar text
    pub title: String,
    /// Top-left corner; either coordinate may be [`WINDOWPOS_CENTERED`]
    pub position: Point,
    /// Client area size
    pub size: Size,
    /// Behaviour flags
    pub flags: WindowFlags,
}

impl WindowDescriptor {
    /// Centred, shown, 640x480 window
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            position: Self::CENTERED,
            size: Size::new(640, 480),
            flags: WindowFlags::SHOWN,
        }
    }

    /// Position sentinel centring both axes
    pub const CENTERED: Point = Point::new(WINDOWPOS_CENTERED, WINDOWPOS_CENTERED);

    /// Set the position
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Centre on the display
    pub fn centered(mut self) -> Self {
        self.position = Self::CENTERED;
        self
    }

    /// Set the client area size
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Replace the flags
    pub fn with_flags(mut self, flags: WindowFlags) -> Self {
        self.flags = flags;
        self
    }
}

impl Default for WindowDescriptor {
    fn default() -> Self {
        Self::new("Window")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let desc = WindowDescriptor::new("Demo")
            .with_position(Point::new(10, 20))
            .with_size(Size::new(800, 600))
            .with_flags(WindowFlags::SHOWN | WindowFlags::RESIZABLE);
        assert_eq!(desc.title, "Demo");
        assert_eq!(desc.position, Point::new(10, 20));
        assert_eq!(desc.size, Size::new(800, 600));
        assert!(desc.flags.contains(WindowFlags::RESIZABLE));
        assert_eq!(desc.centered().position, WindowDescriptor::CENTERED);
    }
}
