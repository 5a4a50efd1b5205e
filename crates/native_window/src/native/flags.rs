//! Window behaviour flags

use bitflags::{bitflags, Flags};

/// Position sentinel asking the native layer to centre the window on its display
pub const WINDOWPOS_CENTERED: i32 = 0x2FFF_0000;

bitflags! {
    /// Window behaviour toggles, bit-compatible with the native flag word
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WindowFlags: u32 {
        /// Fullscreen on the primary display
        const FULLSCREEN = 0x0000_0001;
        /// OpenGL context requested
        const OPENGL = 0x0000_0002;
        /// Window is visible
        const SHOWN = 0x0000_0004;
        /// Window is not visible
        const HIDDEN = 0x0000_0008;
        /// No window decoration
        const BORDERLESS = 0x0000_0010;
        /// Window can be resized
        const RESIZABLE = 0x0000_0020;
        /// Window is minimized
        const MINIMIZED = 0x0000_0040;
        /// Window is maximized
        const MAXIMIZED = 0x0000_0080;
        /// Mouse is confined to the window
        const MOUSE_GRABBED = 0x0000_0100;
        /// Window has keyboard focus
        const INPUT_FOCUS = 0x0000_0200;
        /// Window has mouse focus
        const MOUSE_FOCUS = 0x0000_0400;
        /// Window was not created by this library
        const FOREIGN = 0x0000_0800;
        /// Fullscreen at desktop resolution
        const FULLSCREEN_DESKTOP = Self::FULLSCREEN.bits() | 0x0000_1000;
        /// High-DPI framebuffer requested
        const ALLOW_HIGH_DPI = 0x0000_2000;
        /// Mouse is captured
        const MOUSE_CAPTURE = 0x0000_4000;
        /// Window stays above others
        const ALWAYS_ON_TOP = 0x0000_8000;
        /// Window is not listed in the taskbar
        const SKIP_TASKBAR = 0x0001_0000;
        /// Utility window
        const UTILITY = 0x0002_0000;
        /// Tooltip window
        const TOOLTIP = 0x0004_0000;
        /// Popup menu window
        const POPUP_MENU = 0x0008_0000;
        /// Keyboard is grabbed
        const KEYBOARD_GRABBED = 0x0010_0000;
        /// Vulkan surface requested
        const VULKAN = 0x1000_0000;
        /// Metal surface requested
        const METAL = 0x2000_0000;
        /// Legacy name for mouse grab
        const INPUT_GRABBED = Self::MOUSE_GRABBED.bits();
    }
}

impl WindowFlags {
    /// Look up a single flag by its name, ignoring case, `-` and `_`
    ///
    /// Used by the configuration layer, e.g. `"resizable"` or `"always-on-top"`.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        Self::FLAGS
            .iter()
            .find(|flag| flag.name().replace('_', "") == normalized)
            .map(|flag| *flag.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_bit_values() {
        assert_eq!(WindowFlags::SHOWN.bits(), 0x4);
        assert_eq!(WindowFlags::RESIZABLE.bits(), 0x20);
        assert_eq!(WindowFlags::FULLSCREEN_DESKTOP.bits(), 0x1001);
        assert_eq!(WindowFlags::INPUT_GRABBED, WindowFlags::MOUSE_GRABBED);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(WindowFlags::from_name("resizable"), Some(WindowFlags::RESIZABLE));
        assert_eq!(WindowFlags::from_name("always-on-top"), Some(WindowFlags::ALWAYS_ON_TOP));
        assert_eq!(WindowFlags::from_name("Skip_Taskbar"), Some(WindowFlags::SKIP_TASKBAR));
        assert_eq!(WindowFlags::from_name("input-grabbed"), Some(WindowFlags::MOUSE_GRABBED));
        assert_eq!(WindowFlags::from_name("transparent"), None);
    }
}
