//! In-memory backend for unit tests
//!
//! Keeps native resources in arenas like the GLFW backend and exposes counters
//! so tests can check that nothing leaks. Image "files" are registered up front;
//! any other path fails to decode.

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};

use slotmap::SlotMap;

use super::image_data::ImageData;
use super::{CursorKey, NativeBackend, NativeEvent, PixelFormat, SurfaceKey, WindowFlags, WindowKey};
use crate::geometry::{Point, Size};

pub(crate) struct MockWindow {
    pub id: u32,
    pub title: String,
    pub position: Point,
    pub size: Size,
    pub min_size: Size,
    pub max_size: Size,
    pub opacity: f32,
    pub flags: WindowFlags,
    pub icon: Option<SurfaceKey>,
}

#[derive(Default)]
pub(crate) struct MockBackend {
    windows: SlotMap<WindowKey, MockWindow>,
    surfaces: SlotMap<SurfaceKey, ImageData>,
    cursors: SlotMap<CursorKey, (i32, i32)>,
    images: HashMap<PathBuf, ImageData>,
    queue: VecDeque<NativeEvent>,
    next_window_id: u32,
    last_error: String,

    pub fail_window_creation: bool,
    pub fail_cursor_creation: bool,
    pub zero_window_ids: bool,
    pub display_index: i32,
    pub hovered: WindowKey,
    pub active_cursor: Option<CursorKey>,
    pub title_calls: usize,
    pub always_on_top_calls: usize,
    pub destroyed_windows: usize,
    pub pumps: usize,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            next_window_id: 1,
            ..Self::default()
        }
    }

    /// Register a decodable image at `path`
    pub fn with_image(mut self, path: &str, width: u32, height: u32) -> Self {
        self.images
            .insert(PathBuf::from(path), ImageData::solid_color(width, height, [255, 255, 255, 255]));
        self
    }

    pub fn live_windows(&self) -> usize {
        self.windows.len()
    }

    pub fn live_surfaces(&self) -> usize {
        self.surfaces.len()
    }

    pub fn live_cursors(&self) -> usize {
        self.cursors.len()
    }

    pub fn window(&self, key: WindowKey) -> Option<&MockWindow> {
        self.windows.get(key)
    }

    pub fn cursor_hotspot(&self, key: CursorKey) -> Option<(i32, i32)> {
        self.cursors.get(key).copied()
    }

    pub fn push_event(&mut self, event: NativeEvent) {
        self.queue.push_back(event);
    }
}

impl NativeBackend for MockBackend {
    fn last_error(&self) -> String {
        self.last_error.clone()
    }

    fn create_window(&mut self, title: &str, position: Point, size: Size, flags: WindowFlags) -> WindowKey {
        if self.fail_window_creation {
            self.last_error = "mock: window creation disabled".to_string();
            return WindowKey::default();
        }
        let id = self.next_window_id;
        self.next_window_id += 1;
        self.windows.insert(MockWindow {
            id,
            title: title.to_string(),
            position,
            size,
            min_size: Size::ZERO,
            max_size: Size::ZERO,
            opacity: 1.0,
            flags,
            icon: None,
        })
    }

    fn destroy_window(&mut self, window: WindowKey) {
        if self.windows.remove(window).is_some() {
            self.destroyed_windows += 1;
        }
    }

    fn window_flags(&self, window: WindowKey) -> WindowFlags {
        self.windows.get(window).map_or(WindowFlags::empty(), |w| w.flags)
    }

    fn set_window_title(&mut self, window: WindowKey, title: &str) {
        self.title_calls += 1;
        if let Some(w) = self.windows.get_mut(window) {
            w.title = title.to_string();
        }
    }

    fn window_display_index(&mut self, window: WindowKey) -> i32 {
        if !self.windows.contains_key(window) || self.display_index < 0 {
            self.last_error = "mock: no display".to_string();
            return -1;
        }
        self.display_index
    }

    fn window_size(&self, window: WindowKey) -> Size {
        self.windows.get(window).map_or(Size::ZERO, |w| w.size)
    }

    fn set_window_size(&mut self, window: WindowKey, size: Size) {
        if let Some(w) = self.windows.get_mut(window) {
            w.size = size;
        }
    }

    fn window_minimum_size(&self, window: WindowKey) -> Size {
        self.windows.get(window).map_or(Size::ZERO, |w| w.min_size)
    }

    fn set_window_minimum_size(&mut self, window: WindowKey, size: Size) {
        if let Some(w) = self.windows.get_mut(window) {
            w.min_size = size;
        }
    }

    fn window_maximum_size(&self, window: WindowKey) -> Size {
        self.windows.get(window).map_or(Size::ZERO, |w| w.max_size)
    }

    fn set_window_maximum_size(&mut self, window: WindowKey, size: Size) {
        if let Some(w) = self.windows.get_mut(window) {
            w.max_size = size;
        }
    }

    fn window_opacity(&self, window: WindowKey) -> f32 {
        self.windows.get(window).map_or(1.0, |w| w.opacity)
    }

    fn set_window_opacity(&mut self, window: WindowKey, opacity: f32) {
        if let Some(w) = self.windows.get_mut(window) {
            w.opacity = opacity;
        }
    }

    fn set_window_always_on_top(&mut self, window: WindowKey, on_top: bool) {
        self.always_on_top_calls += 1;
        if let Some(w) = self.windows.get_mut(window) {
            w.flags.set(WindowFlags::ALWAYS_ON_TOP, on_top);
        }
    }

    fn mouse_focus(&self) -> WindowKey {
        self.hovered
    }

    fn window_position(&self, window: WindowKey) -> Point {
        self.windows.get(window).map_or(Point::ZERO, |w| w.position)
    }

    fn set_window_position(&mut self, window: WindowKey, position: Point) {
        if let Some(w) = self.windows.get_mut(window) {
            w.position = position;
        }
    }

    fn window_id(&self, window: WindowKey) -> u32 {
        if self.zero_window_ids {
            return 0;
        }
        self.windows.get(window).map_or(0, |w| w.id)
    }

    fn set_window_icon(&mut self, window: WindowKey, surface: SurfaceKey) {
        if let Some(w) = self.windows.get_mut(window) {
            w.icon = Some(surface);
        }
    }

    fn load_image(&mut self, path: &Path) -> SurfaceKey {
        match self.images.get(path) {
            Some(image) => self.surfaces.insert(image.clone()),
            None => {
                self.last_error = format!("mock: cannot open {}", path.display());
                SurfaceKey::default()
            }
        }
    }

    fn free_surface(&mut self, surface: SurfaceKey) {
        self.surfaces.remove(surface);
    }

    fn surface_format(&self, surface: SurfaceKey) -> Option<&PixelFormat> {
        self.surfaces.get(surface).map(|_| &PixelFormat::RGBA32)
    }

    fn surface_size(&self, surface: SurfaceKey) -> Size {
        self.surfaces.get(surface).map_or(Size::ZERO, ImageData::size)
    }

    fn create_color_cursor(&mut self, surface: SurfaceKey, hotspot_x: i32, hotspot_y: i32) -> CursorKey {
        if self.fail_cursor_creation || !self.surfaces.contains_key(surface) {
            self.last_error = "mock: cursor creation failed".to_string();
            return CursorKey::default();
        }
        self.cursors.insert((hotspot_x, hotspot_y))
    }

    fn set_cursor(&mut self, cursor: CursorKey) {
        if self.cursors.contains_key(cursor) {
            self.active_cursor = Some(cursor);
        }
    }

    fn free_cursor(&mut self, cursor: CursorKey) {
        self.cursors.remove(cursor);
        if self.active_cursor == Some(cursor) {
            self.active_cursor = None;
        }
    }

    fn pump_events(&mut self) {
        self.pumps += 1;
    }

    fn take_event(&mut self) -> Option<NativeEvent> {
        self.queue.pop_front()
    }
}
