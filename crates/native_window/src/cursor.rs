//! Colour cursor loaded from an image file

use std::path::{Path, PathBuf};

use slotmap::Key as _;

use crate::error::{WindowError, WindowResult};
use crate::geometry::Point;
use crate::icon::load_result;
use crate::native::{CursorKey, NativeBackend, NativeHandle, SharedBackend};
use crate::resource::ResourceId;
use crate::surface::SurfaceHolder;

/// Application cursor built from an image
///
/// The image is decoded at construction; the native cursor is only created when
/// a window installs it, since cursor creation needs a live window.
pub struct Cursor<B: NativeBackend> {
    id: ResourceId,
    backend: SharedBackend<B>,
    path: Option<PathBuf>,
    hotspot: Point,
    surface: SurfaceHolder<B>,
    cursor: Option<NativeHandle<CursorKey>>,
    disposed: bool,
}

impl<B: NativeBackend> Cursor<B> {
    /// Decode the image at `path`; the hotspot is fixed for the cursor's lifetime
    pub fn new(backend: &SharedBackend<B>, path: impl AsRef<Path>, hotspot_x: i32, hotspot_y: i32) -> WindowResult<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(WindowError::InvalidArgument("cursor path is empty".to_string()));
        }

        let key = backend.borrow_mut().load_image(path);
        let surface = load_result(backend, key, path)?;

        let id = ResourceId::next();
        log::debug!("Loaded cursor {} from {:?}", id, path);
        Ok(Self {
            id,
            backend: backend.clone(),
            path: Some(path.to_path_buf()),
            hotspot: Point::new(hotspot_x, hotspot_y),
            surface,
            cursor: None,
            disposed: false,
        })
    }

    /// Same as [`Self::new`] with the hotspot given as a point
    pub fn with_hotspot(backend: &SharedBackend<B>, path: impl AsRef<Path>, hotspot: Point) -> WindowResult<Self> {
        Self::new(backend, path, hotspot.x, hotspot.y)
    }

    /// Identity used by windows that install this cursor
    pub const fn id(&self) -> ResourceId {
        self.id
    }

    /// Source path; `None` after disposal
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Pixel offset of the logical click position
    pub const fn hotspot(&self) -> Point {
        self.hotspot
    }

    /// Whether the native cursor has been created
    pub const fn is_installed(&self) -> bool {
        self.cursor.is_some()
    }

    /// Whether [`Self::dispose`] has run
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Native cursor key, once installed
    pub fn native_key(&self) -> Option<CursorKey> {
        self.cursor.as_ref().and_then(|handle| handle.try_get().ok())
    }

    /// Create the native cursor and make it active
    ///
    /// Must run after a window exists. If native creation fails the cursor
    /// disposes itself before returning the error. Later calls re-activate the
    /// cursor created by the first one.
    pub(crate) fn install(&mut self) -> WindowResult<()> {
        if self.disposed {
            return Err(WindowError::AlreadyDisposed("Cursor"));
        }
        if let Some(handle) = &self.cursor {
            self.backend.borrow_mut().set_cursor(handle.get());
            return Ok(());
        }

        let surface = self.surface.key()?;
        let key = self
            .backend
            .borrow_mut()
            .create_color_cursor(surface, self.hotspot.x, self.hotspot.y);
        if key.is_null() {
            let err = WindowError::native("Failed to init cursor", &self.backend.borrow().last_error());
            if let Err(cleanup) = self.dispose() {
                log::warn!("Cursor cleanup after failed install: {}", cleanup);
            }
            return Err(err);
        }

        self.cursor = Some(NativeHandle::new(key, "Cursor")?);
        self.backend.borrow_mut().set_cursor(key);
        log::debug!("Installed cursor {} with hotspot {}", self.id, self.hotspot);
        Ok(())
    }

    /// Free the native cursor (if created) and the surface
    ///
    /// A second call fails with `AlreadyDisposed`.
    pub fn dispose(&mut self) -> WindowResult<()> {
        if self.disposed {
            return Err(WindowError::AlreadyDisposed("Cursor"));
        }
        self.release_cursor();
        if !self.surface.is_disposed() {
            self.surface.dispose()?;
        }
        self.path = None;
        self.disposed = true;
        Ok(())
    }

    fn release_cursor(&mut self) {
        if let Some(key) = self.cursor.take().and_then(|mut handle| handle.release().ok()) {
            match self.backend.try_borrow_mut() {
                Ok(mut backend) => backend.free_cursor(key),
                Err(_) => log::warn!("Leaking cursor {:?}: backend is busy", key),
            }
        }
    }
}

impl<B: NativeBackend> Drop for Cursor<B> {
    fn drop(&mut self) {
        // The surface frees itself when dropped.
        if !self.disposed {
            self.release_cursor();
        }
    }
}
