//! Window icon loaded from an image file

use std::path::{Path, PathBuf};

use crate::error::{WindowError, WindowResult};
use crate::geometry::Size;
use crate::native::{NativeBackend, SharedBackend, SurfaceKey};
use crate::resource::ResourceId;
use crate::surface::SurfaceHolder;

/// Icon for one or more windows
///
/// The icon owns its surface. Windows it is installed on keep only its
/// [`ResourceId`], so the same icon can serve several windows; dispose it after
/// the last of them is gone.
pub struct Icon<B: NativeBackend> {
    id: ResourceId,
    path: Option<PathBuf>,
    surface: SurfaceHolder<B>,
}

impl<B: NativeBackend> Icon<B> {
    /// Decode the image at `path`
    pub fn new(backend: &SharedBackend<B>, path: impl AsRef<Path>) -> WindowResult<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(WindowError::InvalidArgument("icon path is empty".to_string()));
        }

        let key = backend.borrow_mut().load_image(path);
        let surface = load_result(backend, key, path)?;

        let id = ResourceId::next();
        log::debug!("Loaded icon {} from {:?}", id, path);
        Ok(Self {
            id,
            path: Some(path.to_path_buf()),
            surface,
        })
    }

    /// Identity used by windows that install this icon
    pub const fn id(&self) -> ResourceId {
        self.id
    }

    /// Source path; `None` after disposal
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Icon dimensions
    pub fn surface_size(&self) -> WindowResult<Size> {
        self.surface.size()
    }

    /// Whether the surface has been released
    pub const fn is_disposed(&self) -> bool {
        self.surface.is_disposed()
    }

    pub(crate) fn surface_key(&self) -> WindowResult<SurfaceKey> {
        self.surface.key().map_err(|_| WindowError::AlreadyDisposed("Icon"))
    }

    /// Release the surface; repeated calls do nothing
    pub fn dispose(&mut self) -> WindowResult<()> {
        if self.surface.is_disposed() {
            return Ok(());
        }
        self.path = None;
        self.surface.dispose()
    }
}

/// Wrap a freshly loaded surface, turning the null sentinel into a load error
pub(crate) fn load_result<B: NativeBackend>(
    backend: &SharedBackend<B>,
    key: SurfaceKey,
    path: &Path,
) -> WindowResult<SurfaceHolder<B>> {
    use slotmap::Key as _;

    if key.is_null() {
        return Err(WindowError::Load {
            path: path.to_path_buf(),
            reason: backend.borrow().last_error(),
        });
    }
    SurfaceHolder::new(backend.clone(), key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::mock::MockBackend;
    use crate::native::share;

    #[test]
    fn test_load_and_dispose() {
        let backend = share(MockBackend::new().with_image("icon.png", 32, 32));
        let mut icon = Icon::new(&backend, "icon.png").unwrap();
        assert_eq!(icon.path(), Some(Path::new("icon.png")));
        assert_eq!(icon.surface_size().unwrap(), Size::new(32, 32));
        assert_eq!(backend.borrow().live_surfaces(), 1);

        icon.dispose().unwrap();
        assert!(icon.is_disposed());
        assert_eq!(icon.path(), None);
        assert_eq!(backend.borrow().live_surfaces(), 0);
    }

    #[test]
    fn test_repeated_dispose_is_noop() {
        let backend = share(MockBackend::new().with_image("icon.png", 32, 32));
        let mut icon = Icon::new(&backend, "icon.png").unwrap();
        icon.dispose().unwrap();
        icon.dispose().unwrap();
        icon.dispose().unwrap();
        assert_eq!(icon.surface_key(), Err(WindowError::AlreadyDisposed("Icon")));
    }

    #[test]
    fn test_missing_file_leaves_nothing_allocated() {
        let backend = share(MockBackend::new());
        let result = Icon::new(&backend, "missing.png");
        match result {
            Err(WindowError::Load { path, reason }) => {
                assert_eq!(path, PathBuf::from("missing.png"));
                assert!(reason.contains("missing.png"));
            }
            _ => panic!("expected a load error"),
        }
        assert_eq!(backend.borrow().live_surfaces(), 0);
    }

    #[test]
    fn test_empty_path_rejected() {
        let backend = share(MockBackend::new());
        assert!(matches!(Icon::new(&backend, ""), Err(WindowError::InvalidArgument(_))));
    }

    #[test]
    fn test_drop_releases_surface() {
        let backend = share(MockBackend::new().with_image("icon.png", 32, 32));
        drop(Icon::new(&backend, "icon.png").unwrap());
        assert_eq!(backend.borrow().live_surfaces(), 0);
    }
}
