/// Size the swapchain was last configured at, plus whether that
/// configuration is still usable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceExtent {
    width: u32,
    height: u32,
    stale: bool,
}

impl SurfaceExtent {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            stale: false,
        }
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// The surface was lost or outdated; the next sync must reconfigure even
    /// if the size is unchanged.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Record a requested size. Returns true when the surface needs
    /// `configure`. Zero sizes are ignored and leave a stale extent stale.
    pub fn sync(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        if !self.stale && width == self.width && height == self.height {
            return false;
        }
        self.width = width;
        self.height = height;
        self.stale = false;
        true
    }
}
