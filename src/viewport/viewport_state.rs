use crate::core::data::bounds::{Bounds, BoundsError};
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidZoomFactor { factor: f64 },
    Bounds(BoundsError),
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoomFactor { factor } => {
                write!(f, "zoom factor must be positive and finite, got {}", factor)
            }
            Self::Bounds(err) => write!(f, "viewport bounds error: {}", err),
        }
    }
}

impl Error for ViewportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidZoomFactor { .. } => None,
            Self::Bounds(err) => Some(err),
        }
    }
}

impl From<BoundsError> for ViewportError {
    fn from(err: BoundsError) -> Self {
        Self::Bounds(err)
    }
}

/// Current view over coordinate space: bounds plus canvas resolution, with
/// the interaction-driven transforms that replace the bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    bounds: Bounds,
    default_bounds: Bounds,
    resolution: Resolution,
}

impl ViewportState {
    #[must_use]
    pub fn new(default_bounds: Bounds, resolution: Resolution) -> Self {
        Self {
            bounds: default_bounds,
            default_bounds,
            resolution,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    #[must_use]
    pub fn default_bounds(&self) -> Bounds {
        self.default_bounds
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn pixel_to_coord(&self, px: f64, py: f64) -> (f64, f64) {
        (
            self.bounds.x_min() + px / f64::from(self.resolution.width()) * self.bounds.width(),
            self.bounds.y_min() + py / f64::from(self.resolution.height()) * self.bounds.height(),
        )
    }

    #[must_use]
    pub fn coord_to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.bounds.x_min()) / self.bounds.width() * f64::from(self.resolution.width()),
            (y - self.bounds.y_min()) / self.bounds.height() * f64::from(self.resolution.height()),
        )
    }

    /// Scales the view by 1/factor around the coordinate under the given
    /// pixel, which stays fixed on screen.
    pub fn zoom(
        &mut self,
        center_px: f64,
        center_py: f64,
        factor: f64,
    ) -> Result<(), ViewportError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ViewportError::InvalidZoomFactor { factor });
        }

        let (anchor_x, anchor_y) = self.pixel_to_coord(center_px, center_py);
        let new_width = self.bounds.width() / factor;
        let new_height = self.bounds.height() / factor;

        // relative screen position of the anchor is preserved
        let rel_x = center_px / f64::from(self.resolution.width());
        let rel_y = center_py / f64::from(self.resolution.height());

        let x_min = anchor_x - rel_x * new_width;
        let y_min = anchor_y - rel_y * new_height;

        self.bounds = Bounds::new(x_min, x_min + new_width, y_min, y_min + new_height)?;

        Ok(())
    }

    /// Maps a pixel rectangle, corners in any order, onto the view.
    pub fn zoom_to_rectangle(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    ) -> Result<(), ViewportError> {
        let (left, right) = (x1.min(x2), x1.max(x2));
        let (top, bottom) = (y1.min(y2), y1.max(y2));

        let (x_min, y_min) = self.pixel_to_coord(left, top);
        let (x_max, y_max) = self.pixel_to_coord(right, bottom);

        self.bounds = Bounds::new(x_min, x_max, y_min, y_max)?;

        Ok(())
    }

    /// Translates the view by the coordinate-space equivalent of a pixel
    /// displacement.
    pub fn pan(&mut self, dx_px: f64, dy_px: f64) {
        let dx = dx_px / f64::from(self.resolution.width()) * self.bounds.width();
        let dy = dy_px / f64::from(self.resolution.height()) * self.bounds.height();

        self.bounds = self.bounds.translated(dx, dy);
    }

    pub fn reset(&mut self) {
        self.bounds = self.default_bounds;
    }

    /// Reference width divided by current width; 1.0 at the default view.
    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.default_bounds.width() / self.bounds.width()
    }

    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        self.bounds.center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> ViewportState {
        ViewportState::new(
            Bounds::new(-2.0, 2.0, -1.5, 1.5).unwrap(),
            Resolution::new(800, 600).unwrap(),
        )
    }

    fn assert_bounds_close(actual: Bounds, expected: Bounds) {
        let tolerance = 1e-9 * expected.width().abs().max(1.0);

        assert!((actual.x_min() - expected.x_min()).abs() < tolerance);
        assert!((actual.x_max() - expected.x_max()).abs() < tolerance);
        assert!((actual.y_min() - expected.y_min()).abs() < tolerance);
        assert!((actual.y_max() - expected.y_max()).abs() < tolerance);
    }

    #[test]
    fn test_pixel_coord_round_trip() {
        let viewport = viewport();

        let (x, y) = viewport.pixel_to_coord(123.0, 456.0);
        let (px, py) = viewport.coord_to_pixel(x, y);

        assert!((px - 123.0).abs() < 1e-9);
        assert!((py - 456.0).abs() < 1e-9);
    }

    #[test]
    fn test_pixel_origin_maps_to_bounds_corner() {
        let viewport = viewport();

        assert_eq!(viewport.pixel_to_coord(0.0, 0.0), (-2.0, -1.5));
        assert_eq!(viewport.pixel_to_coord(800.0, 600.0), (2.0, 1.5));
    }

    #[test]
    fn test_zoom_keeps_anchor_coordinate_fixed() {
        let mut viewport = viewport();
        let (anchor_x, anchor_y) = viewport.pixel_to_coord(200.0, 150.0);

        viewport.zoom(200.0, 150.0, 4.0).unwrap();

        let (zoomed_x, zoomed_y) = viewport.pixel_to_coord(200.0, 150.0);

        assert!((zoomed_x - anchor_x).abs() < 1e-12);
        assert!((zoomed_y - anchor_y).abs() < 1e-12);
        assert!((viewport.bounds().width() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_round_trip_restores_bounds() {
        let mut viewport = viewport();
        let original = viewport.bounds();

        viewport.zoom(640.0, 120.0, 2.5).unwrap();
        viewport.zoom(640.0, 120.0, 1.0 / 2.5).unwrap();

        assert_bounds_close(viewport.bounds(), original);
    }

    #[test]
    fn test_zoom_rejects_degenerate_factor() {
        let mut viewport = viewport();

        assert_eq!(
            viewport.zoom(0.0, 0.0, 0.0),
            Err(ViewportError::InvalidZoomFactor { factor: 0.0 })
        );
        assert_eq!(
            viewport.zoom(0.0, 0.0, -2.0),
            Err(ViewportError::InvalidZoomFactor { factor: -2.0 })
        );
        assert!(viewport.zoom(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_zoom_to_rectangle_normalises_corner_order() {
        let mut first = viewport();
        let mut second = viewport();

        first.zoom_to_rectangle(100.0, 100.0, 300.0, 250.0).unwrap();
        second.zoom_to_rectangle(300.0, 250.0, 100.0, 100.0).unwrap();

        assert_eq!(first.bounds(), second.bounds());
        assert!(first.bounds().width() < 4.0);
    }

    #[test]
    fn test_zoom_to_rectangle_rejects_degenerate_selection() {
        let mut viewport = viewport();

        assert!(matches!(
            viewport.zoom_to_rectangle(50.0, 50.0, 50.0, 120.0),
            Err(ViewportError::Bounds(_))
        ));
    }

    #[test]
    fn test_pan_translates_without_resizing() {
        let mut viewport = viewport();
        let before = viewport.bounds();

        // 800 px spans 4.0 coordinate units, so 80 px is 0.4
        viewport.pan(80.0, -60.0);

        let after = viewport.bounds();

        assert!((after.x_min() - (before.x_min() + 0.4)).abs() < 1e-12);
        assert!((after.y_min() - (before.y_min() - 0.3)).abs() < 1e-12);
        assert_eq!(after.width(), before.width());
        assert_eq!(after.height(), before.height());
    }

    #[test]
    fn test_reset_restores_default_bounds() {
        let mut viewport = viewport();

        viewport.zoom(400.0, 300.0, 8.0).unwrap();
        viewport.reset();

        assert_eq!(viewport.bounds(), viewport.default_bounds());
        assert_eq!(viewport.zoom_level(), 1.0);
    }

    #[test]
    fn test_zoom_level_tracks_width_ratio() {
        let mut viewport = viewport();

        viewport.zoom(400.0, 300.0, 4.0).unwrap();

        assert!((viewport.zoom_level() - 4.0).abs() < 1e-9);
    }
}
