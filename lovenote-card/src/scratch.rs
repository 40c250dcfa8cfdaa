//! Raster model of the scratch-off overlay: a fixed-size grid of opaque
//! pixels that pointer gestures erase circle by circle. The UI mirrors every
//! erase onto its canvas with destination-out compositing; this model is the
//! testable source of truth for coverage and the pointer coordinate mapping.

use thiserror::Error;

/// Logical pixel width of the card's scratch surface.
pub const SURFACE_WIDTH: u32 = 350;
/// Logical pixel height of the card's scratch surface.
pub const SURFACE_HEIGHT: u32 = 450;
/// Radius of the transparent hole punched per pointer sample, in surface pixels.
pub const ERASE_RADIUS: f64 = 40.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("surface dimensions must be non-zero, got {width}x{height}")]
    EmptySurface { width: u32, height: u32 },
    #[error("erase radius must be positive")]
    ZeroRadius,
}

/// The on-screen rectangle the surface is rendered into, in viewport
/// coordinates. CSS may scale it away from the surface's logical size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// The erasable opaque layer hiding the reveal content.
///
/// The raster starts uninitialized: until the cover image has loaded and
/// [`ScratchSurface::initialize`] runs, erase calls are no-ops, matching the
/// blank drawing context the UI has at that point. Once a pixel is erased it
/// never re-opaques within a session; only a full re-initialize resets it.
#[derive(Clone, Debug, PartialEq)]
pub struct ScratchSurface {
    width: u32,
    height: u32,
    radius: f64,
    initialized: bool,
    opaque: Vec<bool>,
}

impl ScratchSurface {
    /// Create an uninitialized surface.
    ///
    /// # Errors
    /// Returns an error when either dimension is zero or the radius is not
    /// positive.
    pub fn new(width: u32, height: u32, radius: f64) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::EmptySurface { width, height });
        }
        if !(radius > 0.0) {
            return Err(SurfaceError::ZeroRadius);
        }
        Ok(Self {
            width,
            height,
            radius,
            initialized: false,
            opaque: vec![false; (width as usize) * (height as usize)],
        })
    }

    /// The surface at the card's fixed dimensions and erase radius.
    #[must_use]
    pub fn card_default() -> Self {
        Self::new(SURFACE_WIDTH, SURFACE_HEIGHT, ERASE_RADIUS)
            .unwrap_or_else(|_| unreachable!("card dimensions are non-zero"))
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Reset the whole raster to fully opaque.
    ///
    /// Runs when the cover image finishes loading, and again on any defensive
    /// re-mount: a second call discards all prior erasure.
    pub fn initialize(&mut self) {
        self.opaque.fill(true);
        self.initialized = true;
    }

    /// Punch a transparent circle of the configured radius centered at
    /// `(x, y)` in surface-pixel coordinates.
    ///
    /// Erasure only ever removes opacity ("remove rather than draw"); a pixel
    /// inside the circle becomes transparent no matter what was there before.
    /// A no-op until [`ScratchSurface::initialize`] has run.
    pub fn erase_at(&mut self, x: f64, y: f64) {
        if !self.initialized {
            return;
        }
        let r = self.radius;
        let r2 = r * r;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let min_px = (x - r).floor().max(0.0) as u32;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let min_py = (y - r).floor().max(0.0) as u32;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let max_px = ((x + r).ceil().max(0.0) as u32).min(self.width.saturating_sub(1));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let max_py = ((y + r).ceil().max(0.0) as u32).min(self.height.saturating_sub(1));
        if min_px > max_px || min_py > max_py {
            return;
        }
        for py in min_py..=max_py {
            for px in min_px..=max_px {
                let dx = f64::from(px) + 0.5 - x;
                let dy = f64::from(py) + 0.5 - y;
                if dx * dx + dy * dy <= r2 {
                    self.opaque[(py as usize) * (self.width as usize) + (px as usize)] = false;
                }
            }
        }
    }

    /// Map a viewport pointer position into surface-pixel coordinates,
    /// compensating for any CSS scaling between the surface's logical size
    /// and its rendered bounding box.
    ///
    /// A degenerate (zero-sized) box falls back to 1:1 scale rather than
    /// dividing by zero.
    #[must_use]
    pub fn map_pointer(&self, client_x: f64, client_y: f64, bbox: BoundingBox) -> (f64, f64) {
        map_pointer_to_surface(client_x, client_y, bbox, self.width, self.height)
    }

    /// Number of pixels still covered by the overlay.
    #[must_use]
    pub fn opaque_pixels(&self) -> usize {
        self.opaque.iter().filter(|covered| **covered).count()
    }

    /// Whether the pixel at `(x, y)` is still covered. Out-of-range
    /// coordinates report `false`.
    #[must_use]
    pub fn is_opaque_at(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.opaque[(y as usize) * (self.width as usize) + (x as usize)]
    }
}

/// Pure form of the pointer mapping, shared with [`ScratchSurface::map_pointer`]:
/// `surface_x = (client_x - box_left) * (surface_w / box_display_w)`, and
/// analogously for Y.
#[must_use]
pub fn map_pointer_to_surface(
    client_x: f64,
    client_y: f64,
    bbox: BoundingBox,
    surface_width: u32,
    surface_height: u32,
) -> (f64, f64) {
    let scale_x = if bbox.width > 0.0 {
        f64::from(surface_width) / bbox.width
    } else {
        1.0
    };
    let scale_y = if bbox.height > 0.0 {
        f64::from(surface_height) / bbox.height
    } else {
        1.0
    };
    ((client_x - bbox.left) * scale_x, (client_y - bbox.top) * scale_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(left: f64, top: f64, width: f64, height: f64) -> BoundingBox {
        BoundingBox {
            left,
            top,
            width,
            height,
        }
    }

    #[test]
    fn rejects_degenerate_construction() {
        assert!(matches!(
            ScratchSurface::new(0, 450, 40.0),
            Err(SurfaceError::EmptySurface { .. })
        ));
        assert!(matches!(
            ScratchSurface::new(350, 0, 40.0),
            Err(SurfaceError::EmptySurface { .. })
        ));
        assert_eq!(
            ScratchSurface::new(350, 450, 0.0),
            Err(SurfaceError::ZeroRadius)
        );
    }

    #[test]
    fn maps_unscaled_pointer_one_to_one() {
        let surface = ScratchSurface::card_default();
        let (x, y) = surface.map_pointer(60.0, 70.0, bbox(10.0, 20.0, 350.0, 450.0));
        assert!((x - 50.0).abs() < f64::EPSILON);
        assert!((y - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn maps_scaled_pointer_with_compensation() {
        // Same viewport point over a half-size rendering lands twice as deep
        // into the surface.
        let surface = ScratchSurface::card_default();
        let (x, y) = surface.map_pointer(60.0, 70.0, bbox(10.0, 20.0, 175.0, 225.0));
        assert!((x - 100.0).abs() < f64::EPSILON);
        assert!((y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_sized_box_falls_back_to_unit_scale() {
        let surface = ScratchSurface::card_default();
        let (x, y) = surface.map_pointer(60.0, 70.0, bbox(10.0, 20.0, 0.0, 0.0));
        assert!((x - 50.0).abs() < f64::EPSILON);
        assert!((y - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn erase_before_initialize_is_a_noop() {
        let mut surface = ScratchSurface::card_default();
        surface.erase_at(100.0, 100.0);
        assert_eq!(surface.opaque_pixels(), 0);
        assert!(!surface.is_initialized());
    }

    #[test]
    fn erase_strictly_decreases_coverage_and_is_monotonic() {
        let mut surface = ScratchSurface::card_default();
        surface.initialize();
        let full = surface.opaque_pixels();
        assert_eq!(full, 350 * 450);

        surface.erase_at(100.0, 100.0);
        let after_one = surface.opaque_pixels();
        assert!(after_one < full);
        assert!(!surface.is_opaque_at(100, 100));

        // Repeating the same erase never restores opacity.
        surface.erase_at(100.0, 100.0);
        assert_eq!(surface.opaque_pixels(), after_one);
    }

    #[test]
    fn erase_near_the_edge_stays_in_bounds() {
        let mut surface = ScratchSurface::card_default();
        surface.initialize();
        surface.erase_at(-10.0, -10.0);
        surface.erase_at(349.5, 449.5);
        assert!(surface.opaque_pixels() < 350 * 450);
    }

    #[test]
    fn initialize_resets_prior_erasure() {
        let mut surface = ScratchSurface::card_default();
        surface.initialize();
        surface.erase_at(175.0, 225.0);
        assert!(surface.opaque_pixels() < 350 * 450);

        surface.initialize();
        assert_eq!(surface.opaque_pixels(), 350 * 450);
        assert!(surface.is_opaque_at(175, 225));
    }
}
