//! Owned native pixel surface

use std::cell::Ref;

use crate::error::{WindowError, WindowResult};
use crate::geometry::Size;
use crate::native::{NativeBackend, NativeHandle, PixelFormat, SharedBackend, SurfaceKey};

/// Owns a native pixel surface and frees it exactly once
pub struct SurfaceHolder<B: NativeBackend> {
    backend: SharedBackend<B>,
    handle: NativeHandle<SurfaceKey>,
}

impl<B: NativeBackend> SurfaceHolder<B> {
    /// Take ownership of a loaded surface
    ///
    /// Callers check the load result for the null sentinel first; wrapping a
    /// null key fails with `InvalidArgument`.
    pub fn new(backend: SharedBackend<B>, surface: SurfaceKey) -> WindowResult<Self> {
        let handle = NativeHandle::new(surface, "Surface")?;
        Ok(Self { backend, handle })
    }

    /// Native key of the surface
    pub fn key(&self) -> WindowResult<SurfaceKey> {
        self.handle.try_get()
    }

    /// Pixel format of the live surface, borrowed from the backend
    ///
    /// The returned guard borrows the backend; drop it before making other
    /// native calls.
    pub fn pixel_format(&self) -> WindowResult<Ref<'_, PixelFormat>> {
        let key = self.handle.try_get()?;
        Ref::filter_map(self.backend.borrow(), |backend| backend.surface_format(key))
            .map_err(|_| WindowError::native("Surface has no pixel format", &self.backend.borrow().last_error()))
    }

    /// Surface dimensions in pixels
    pub fn size(&self) -> WindowResult<Size> {
        let key = self.handle.try_get()?;
        Ok(self.backend.borrow().surface_size(key))
    }

    /// Whether [`Self::dispose`] has run
    pub const fn is_disposed(&self) -> bool {
        self.handle.is_released()
    }

    /// Free the native surface; a second call fails with `AlreadyDisposed`
    pub fn dispose(&mut self) -> WindowResult<()> {
        let key = self.handle.release()?;
        self.backend.borrow_mut().free_surface(key);
        log::trace!("Disposed surface {:?}", key);
        Ok(())
    }
}

impl<B: NativeBackend> Drop for SurfaceHolder<B> {
    fn drop(&mut self) {
        if let Ok(key) = self.handle.release() {
            match self.backend.try_borrow_mut() {
                Ok(mut backend) => backend.free_surface(key),
                Err(_) => log::warn!("Leaking surface {:?}: backend is busy", key),
            }
        }
    }
}
