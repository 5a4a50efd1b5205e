//! GLFW implementation of the native backend
//!
//! GLFW differs from the sentinel-style contract in a few places, which this
//! backend smooths over:
//!
//! - resources live in `slotmap` arenas so the null key is the zero sentinel
//! - window IDs are assigned here, starting at 1
//! - events arrive on one receiver per window and are flattened into a single
//!   queue of [`NativeEvent`] records
//! - GLFW cursors are per window; activating a cursor applies it to every live
//!   window and to windows created afterwards
//! - minimum/maximum sizes cannot be queried from GLFW and are cached per window

use std::collections::VecDeque;
use std::path::Path;

use slotmap::SlotMap;

use super::image_data::ImageData;
use super::{
    CursorKey, EventType, NativeBackend, NativeEvent, PixelFormat, SurfaceKey, WindowEventId, WindowFlags, WindowKey,
    WINDOWPOS_CENTERED,
};
use crate::error::{WindowError, WindowResult};
use crate::geometry::{Point, Size};

/// Flags that map onto GLFW hints or calls
const SUPPORTED_FLAGS: WindowFlags = WindowFlags::FULLSCREEN
    .union(WindowFlags::SHOWN)
    .union(WindowFlags::HIDDEN)
    .union(WindowFlags::BORDERLESS)
    .union(WindowFlags::RESIZABLE)
    .union(WindowFlags::MINIMIZED)
    .union(WindowFlags::MAXIMIZED)
    .union(WindowFlags::ALWAYS_ON_TOP)
    .union(WindowFlags::OPENGL)
    .union(WindowFlags::VULKAN);

struct WindowSlot {
    id: u32,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    min_size: Size,
    max_size: Size,
    display_index: i32,
    /// Size asked for through `set_window_size`, until GLFW reports a resize
    requested_size: Option<Size>,
}

struct SurfaceSlot {
    image: ImageData,
}

struct CursorSlot {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    hotspot: (u32, u32),
}

impl CursorSlot {
    fn to_glfw(&self) -> glfw::Cursor {
        let image = glfw::PixelImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        };
        glfw::Cursor::create_from_pixels(image, self.hotspot.0, self.hotspot.1)
    }
}

/// Native backend driving GLFW
pub struct GlfwBackend {
    glfw: glfw::Glfw,
    windows: SlotMap<WindowKey, WindowSlot>,
    surfaces: SlotMap<SurfaceKey, SurfaceSlot>,
    cursors: SlotMap<CursorKey, CursorSlot>,
    active_cursor: Option<CursorKey>,
    queue: VecDeque<NativeEvent>,
    next_window_id: u32,
    last_error: String,
}

impl GlfwBackend {
    /// Initialise GLFW; errors reported by GLFW afterwards go to the log
    pub fn new() -> WindowResult<Self> {
        let glfw = glfw::init(glfw::log_errors)
            .map_err(|e| WindowError::Native(format!("GLFW initialization failed: {e:?}")))?;

        log::info!("GLFW initialized: {}", glfw::get_version_string());

        Ok(Self {
            glfw,
            windows: SlotMap::with_key(),
            surfaces: SlotMap::with_key(),
            cursors: SlotMap::with_key(),
            active_cursor: None,
            queue: VecDeque::new(),
            next_window_id: 1,
            last_error: String::new(),
        })
    }

    fn fail<K: slotmap::Key>(&mut self, message: String) -> K {
        log::debug!("Native call failed: {}", message);
        self.last_error = message;
        K::null()
    }

    fn apply_hints(&mut self, flags: WindowFlags) {
        self.glfw.default_window_hints();
        if flags.contains(WindowFlags::VULKAN) || !flags.contains(WindowFlags::OPENGL) {
            self.glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        }
        self.glfw.window_hint(glfw::WindowHint::Visible(!flags.contains(WindowFlags::HIDDEN)));
        self.glfw.window_hint(glfw::WindowHint::Resizable(flags.contains(WindowFlags::RESIZABLE)));
        self.glfw.window_hint(glfw::WindowHint::Decorated(!flags.contains(WindowFlags::BORDERLESS)));
        self.glfw.window_hint(glfw::WindowHint::Floating(flags.contains(WindowFlags::ALWAYS_ON_TOP)));
        self.glfw.window_hint(glfw::WindowHint::Maximized(flags.contains(WindowFlags::MAXIMIZED)));

        let unsupported = flags.difference(SUPPORTED_FLAGS);
        if !unsupported.is_empty() {
            log::debug!("Ignoring window flags not supported by GLFW: {:?}", unsupported);
        }
    }

    /// Resolve the centred sentinel against the primary monitor's video mode
    fn resolve_position(&mut self, position: Point, size: Size) -> Point {
        if position.x != WINDOWPOS_CENTERED && position.y != WINDOWPOS_CENTERED {
            return position;
        }
        let display = self.glfw.with_primary_monitor(|_, monitor| {
            monitor.and_then(|m| {
                let (mx, my) = m.get_pos();
                m.get_video_mode().map(|mode| (mx, my, mode.width, mode.height))
            })
        });
        let Some((mx, my, mw, mh)) = display else {
            return Point::new(
                if position.x == WINDOWPOS_CENTERED { 0 } else { position.x },
                if position.y == WINDOWPOS_CENTERED { 0 } else { position.y },
            );
        };
        let centre = |origin: i32, extent: u32, window_extent: i32| {
            origin + (i32::try_from(extent).unwrap_or(i32::MAX) - window_extent) / 2
        };
        Point::new(
            if position.x == WINDOWPOS_CENTERED { centre(mx, mw, size.width) } else { position.x },
            if position.y == WINDOWPOS_CENTERED { centre(my, mh, size.height) } else { position.y },
        )
    }

    /// Index of the monitor whose work area contains `point`; `-1` when none
    fn display_index_at(glfw: &mut glfw::Glfw, point: Point) -> i32 {
        glfw.with_connected_monitors(|_, monitors| {
            monitors
                .iter()
                .position(|m| {
                    let (x, y, w, h) = m.get_workarea();
                    point.x >= x && point.x < x + w && point.y >= y && point.y < y + h
                })
                .and_then(|index| i32::try_from(index).ok())
                .unwrap_or(-1)
        })
    }

    fn window_centre(window: &glfw::PWindow) -> Point {
        let (x, y) = window.get_pos();
        let (w, h) = window.get_size();
        Point::new(x + w / 2, y + h / 2)
    }

    fn apply_size_limits(slot: &mut WindowSlot) {
        let limit = |v: i32| u32::try_from(v).ok().filter(|v| *v > 0);
        slot.window.set_size_limits(
            limit(slot.min_size.width),
            limit(slot.min_size.height),
            limit(slot.max_size.width),
            limit(slot.max_size.height),
        );
    }

    /// Translate one GLFW event into zero or more native records
    ///
    /// A size event consumes `requested`; when it matches, the resize came from
    /// the API and only `SizeChanged` is reported.
    fn translate(
        id: u32,
        timestamp: f64,
        event: &glfw::WindowEvent,
        requested: &mut Option<Size>,
        out: &mut Vec<NativeEvent>,
    ) {
        use glfw::WindowEvent as E;
        use WindowEventId as W;

        let record = |window_event, data1, data2| NativeEvent::window(id, window_event, data1, data2);
        let records = match *event {
            E::Pos(x, y) => vec![record(W::Moved, x, y)],
            E::Size(w, h) if requested.take() == Some(Size::new(w, h)) => vec![record(W::SizeChanged, w, h)],
            E::Size(w, h) => vec![record(W::Resized, w, h), record(W::SizeChanged, w, h)],
            E::Close => vec![record(W::Close, 0, 0)],
            E::Refresh => vec![record(W::Exposed, 0, 0)],
            E::Focus(true) => vec![record(W::FocusGained, 0, 0)],
            E::Focus(false) => vec![record(W::FocusLost, 0, 0)],
            E::Iconify(true) => vec![record(W::Minimized, 0, 0)],
            E::Iconify(false) | E::Maximize(false) => vec![record(W::Restored, 0, 0)],
            E::Maximize(true) => vec![record(W::Maximized, 0, 0)],
            E::CursorEnter(true) => vec![record(W::Enter, 0, 0)],
            E::CursorEnter(false) => vec![record(W::Leave, 0, 0)],
            E::Key(..) | E::Char(..) | E::CharModifiers(..) => vec![NativeEvent::other(EventType::Keyboard, id)],
            E::MouseButton(..) | E::CursorPos(..) | E::Scroll(..) => vec![NativeEvent::other(EventType::Mouse, id)],
            _ => vec![NativeEvent::other(EventType::Other, id)],
        };
        out.extend(records.into_iter().map(|r| r.with_timestamp(timestamp)));
    }

    fn pump(&mut self) {
        self.glfw.poll_events();

        let mut records = Vec::new();
        let mut rescaled = Vec::new();
        for (key, slot) in &mut self.windows {
            for (timestamp, event) in glfw::flush_messages(&slot.events) {
                if let glfw::WindowEvent::ContentScale(..) = event {
                    rescaled.push((key, timestamp));
                }
                Self::translate(slot.id, timestamp, &event, &mut slot.requested_size, &mut records);
            }
        }

        // A content-scale change is the only hint GLFW gives that the window
        // crossed onto another monitor.
        for (key, timestamp) in rescaled {
            let Some(centre) = self.windows.get(key).map(|slot| Self::window_centre(&slot.window)) else {
                continue;
            };
            let index = Self::display_index_at(&mut self.glfw, centre);
            if let Some(slot) = self.windows.get_mut(key) {
                if index >= 0 && index != slot.display_index {
                    slot.display_index = index;
                    records.push(
                        NativeEvent::window(slot.id, WindowEventId::DisplayChanged, index, 0).with_timestamp(timestamp),
                    );
                }
            }
        }

        self.queue.extend(records);
    }
}

impl NativeBackend for GlfwBackend {
    fn last_error(&self) -> String {
        self.last_error.clone()
    }

    fn create_window(&mut self, title: &str, position: Point, size: Size, flags: WindowFlags) -> WindowKey {
        let (Ok(width), Ok(height)) = (u32::try_from(size.width), u32::try_from(size.height)) else {
            return self.fail(format!("Invalid window size {size}"));
        };
        if width == 0 || height == 0 {
            return self.fail(format!("Invalid window size {size}"));
        }

        self.apply_hints(flags);
        let created = if flags.contains(WindowFlags::FULLSCREEN) {
            self.glfw.with_primary_monitor(|glfw, monitor| {
                let mode = monitor.map_or(glfw::WindowMode::Windowed, |m| glfw::WindowMode::FullScreen(&*m));
                glfw.create_window(width, height, title, mode)
            })
        } else {
            self.glfw.create_window(width, height, title, glfw::WindowMode::Windowed)
        };
        let Some((mut window, events)) = created else {
            return self.fail(format!("GLFW could not create window \"{title}\""));
        };

        if !flags.contains(WindowFlags::FULLSCREEN) {
            let position = self.resolve_position(position, size);
            window.set_pos(position.x, position.y);
        }
        if flags.contains(WindowFlags::MINIMIZED) {
            window.iconify();
        }

        window.set_pos_polling(true);
        window.set_size_polling(true);
        window.set_close_polling(true);
        window.set_refresh_polling(true);
        window.set_focus_polling(true);
        window.set_iconify_polling(true);
        window.set_maximize_polling(true);
        window.set_cursor_enter_polling(true);
        window.set_content_scale_polling(true);
        window.set_key_polling(true);
        window.set_mouse_button_polling(true);

        if let Some(cursor) = self.active_cursor.and_then(|key| self.cursors.get(key)) {
            window.set_cursor(Some(cursor.to_glfw()));
        }

        let id = self.next_window_id;
        self.next_window_id += 1;
        let display_index = Self::display_index_at(&mut self.glfw, Self::window_centre(&window));
        let visible = window.is_visible();

        let key = self.windows.insert(WindowSlot {
            id,
            window,
            events,
            min_size: Size::ZERO,
            max_size: Size::ZERO,
            display_index,
            requested_size: None,
        });
        if visible {
            self.queue.push_back(NativeEvent::window(id, WindowEventId::Shown, 0, 0));
        }
        log::debug!("Created GLFW window {} ({:?})", id, key);
        key
    }

    fn destroy_window(&mut self, window: WindowKey) {
        if let Some(slot) = self.windows.remove(window) {
            log::debug!("Destroyed GLFW window {}", slot.id);
        }
    }

    fn window_flags(&self, window: WindowKey) -> WindowFlags {
        let Some(slot) = self.windows.get(window) else {
            return WindowFlags::empty();
        };
        let w = &slot.window;
        let mut flags = WindowFlags::empty();
        flags.set(WindowFlags::SHOWN, w.is_visible());
        flags.set(WindowFlags::HIDDEN, !w.is_visible());
        flags.set(WindowFlags::RESIZABLE, w.is_resizable());
        flags.set(WindowFlags::BORDERLESS, !w.is_decorated());
        flags.set(WindowFlags::ALWAYS_ON_TOP, w.is_floating());
        flags.set(WindowFlags::MAXIMIZED, w.is_maximized());
        flags.set(WindowFlags::MINIMIZED, w.is_iconified());
        flags.set(WindowFlags::INPUT_FOCUS, w.is_focused());
        flags.set(WindowFlags::MOUSE_FOCUS, w.is_hovered());
        flags.set(
            WindowFlags::FULLSCREEN,
            w.with_window_mode(|mode| matches!(mode, glfw::WindowMode::FullScreen(_))),
        );
        flags
    }

    fn set_window_title(&mut self, window: WindowKey, title: &str) {
        if let Some(slot) = self.windows.get_mut(window) {
            slot.window.set_title(title);
        }
    }

    fn window_display_index(&mut self, window: WindowKey) -> i32 {
        let Some(centre) = self.windows.get(window).map(|slot| Self::window_centre(&slot.window)) else {
            self.last_error = format!("Invalid window {window:?}");
            return -1;
        };
        let index = Self::display_index_at(&mut self.glfw, centre);
        if index < 0 {
            self.last_error = format!("Window centre {centre} is not on any display");
        }
        index
    }

    fn window_size(&self, window: WindowKey) -> Size {
        self.windows
            .get(window)
            .map_or(Size::ZERO, |slot| slot.window.get_size().into())
    }

    fn set_window_size(&mut self, window: WindowKey, size: Size) {
        if let Some(slot) = self.windows.get_mut(window) {
            // GLFW stays silent when the size does not change.
            if Size::from(slot.window.get_size()) != size {
                slot.requested_size = Some(size);
            }
            slot.window.set_size(size.width, size.height);
        }
    }

    fn window_minimum_size(&self, window: WindowKey) -> Size {
        self.windows.get(window).map_or(Size::ZERO, |slot| slot.min_size)
    }

    fn set_window_minimum_size(&mut self, window: WindowKey, size: Size) {
        if let Some(slot) = self.windows.get_mut(window) {
            slot.min_size = size;
            Self::apply_size_limits(slot);
        }
    }

    fn window_maximum_size(&self, window: WindowKey) -> Size {
        self.windows.get(window).map_or(Size::ZERO, |slot| slot.max_size)
    }

    fn set_window_maximum_size(&mut self, window: WindowKey, size: Size) {
        if let Some(slot) = self.windows.get_mut(window) {
            slot.max_size = size;
            Self::apply_size_limits(slot);
        }
    }

    fn window_opacity(&self, window: WindowKey) -> f32 {
        self.windows.get(window).map_or(1.0, |slot| slot.window.get_opacity())
    }

    fn set_window_opacity(&mut self, window: WindowKey, opacity: f32) {
        if let Some(slot) = self.windows.get_mut(window) {
            slot.window.set_opacity(opacity.clamp(0.0, 1.0));
        }
    }

    fn set_window_always_on_top(&mut self, window: WindowKey, on_top: bool) {
        if let Some(slot) = self.windows.get_mut(window) {
            slot.window.set_floating(on_top);
        }
    }

    fn mouse_focus(&self) -> WindowKey {
        self.windows
            .iter()
            .find(|(_, slot)| slot.window.is_hovered())
            .map_or_else(WindowKey::default, |(key, _)| key)
    }

    fn window_position(&self, window: WindowKey) -> Point {
        self.windows
            .get(window)
            .map_or(Point::ZERO, |slot| slot.window.get_pos().into())
    }

    fn set_window_position(&mut self, window: WindowKey, position: Point) {
        let size = self.window_size(window);
        let position = self.resolve_position(position, size);
        if let Some(slot) = self.windows.get_mut(window) {
            slot.window.set_pos(position.x, position.y);
        }
    }

    fn window_id(&self, window: WindowKey) -> u32 {
        self.windows.get(window).map_or(0, |slot| slot.id)
    }

    fn set_window_icon(&mut self, window: WindowKey, surface: SurfaceKey) {
        let Some(image) = self.surfaces.get(surface).map(|s| &s.image) else {
            log::warn!("Ignoring icon from unknown surface {:?}", surface);
            return;
        };
        let pixels = glfw::PixelImage {
            width: image.width,
            height: image.height,
            pixels: image.packed_pixels(),
        };
        if let Some(slot) = self.windows.get_mut(window) {
            slot.window.set_icon_from_pixels(vec![pixels]);
        }
    }

    fn load_image(&mut self, path: &Path) -> SurfaceKey {
        match ImageData::from_file(path) {
            Ok(image) => self.surfaces.insert(SurfaceSlot { image }),
            Err(e) => self.fail(e.to_string()),
        }
    }

    fn free_surface(&mut self, surface: SurfaceKey) {
        if self.surfaces.remove(surface).is_some() {
            log::trace!("Freed surface {:?}", surface);
        }
    }

    fn surface_format(&self, surface: SurfaceKey) -> Option<&PixelFormat> {
        self.surfaces.get(surface).map(|_| &PixelFormat::RGBA32)
    }

    fn surface_size(&self, surface: SurfaceKey) -> Size {
        self.surfaces.get(surface).map_or(Size::ZERO, |s| s.image.size())
    }

    fn create_color_cursor(&mut self, surface: SurfaceKey, hotspot_x: i32, hotspot_y: i32) -> CursorKey {
        let Some(image) = self.surfaces.get(surface).map(|s| &s.image) else {
            return self.fail(format!("Invalid surface {surface:?}"));
        };
        let hotspot = match (u32::try_from(hotspot_x), u32::try_from(hotspot_y)) {
            (Ok(x), Ok(y)) if x < image.width && y < image.height => (x, y),
            _ => {
                let message = format!(
                    "Hotspot ({hotspot_x}, {hotspot_y}) lies outside the {}x{} cursor image",
                    image.width, image.height
                );
                return self.fail(message);
            }
        };
        let slot = CursorSlot {
            width: image.width,
            height: image.height,
            pixels: image.packed_pixels(),
            hotspot,
        };
        self.cursors.insert(slot)
    }

    fn set_cursor(&mut self, cursor: CursorKey) {
        let Some(slot) = self.cursors.get(cursor) else {
            log::warn!("Ignoring activation of unknown cursor {:?}", cursor);
            return;
        };
        for window in self.windows.values_mut() {
            window.window.set_cursor(Some(slot.to_glfw()));
        }
        self.active_cursor = Some(cursor);
    }

    fn free_cursor(&mut self, cursor: CursorKey) {
        if self.cursors.remove(cursor).is_none() {
            return;
        }
        if self.active_cursor == Some(cursor) {
            self.active_cursor = None;
            for window in self.windows.values_mut() {
                window.window.set_cursor(None);
            }
        }
    }

    fn pump_events(&mut self) {
        self.pump();
    }

    fn take_event(&mut self) -> Option<NativeEvent> {
        self.queue.pop_front()
    }
}
