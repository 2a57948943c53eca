use viewport::{Annotation, SurfaceSettings};

use crate::types::measure::fit_zoom;

/// What the host asked the map surface to look like.
pub struct SurfaceState {
    pub settings: Option<SurfaceSettings>,
    pub annotations: Vec<Annotation>,
}

impl SurfaceState {
    pub fn new() -> SurfaceState {
        Self {
            settings: None,
            annotations: Vec::new(),
        }
    }

    pub fn minimum_zoom(&self) -> Option<f64> {
        self.settings.as_ref().map(|settings| settings.minimum_zoom)
    }

    pub fn shows_user_location(&self) -> bool {
        self.settings
            .as_ref()
            .map(|settings| settings.shows_user_location)
            .unwrap_or(false)
    }

    pub fn shows_heading(&self) -> bool {
        self.settings
            .as_ref()
            .map(|settings| settings.shows_user_location && settings.shows_heading)
            .unwrap_or(false)
    }

    pub fn shows_scale(&self) -> bool {
        self.settings
            .as_ref()
            .map(|settings| settings.shows_scale)
            .unwrap_or(false)
    }

    /// Zoom that shows the whole bounding box in a `width` x `height` view,
    /// raised to the minimum zoom when the box does not fit at that level.
    pub fn starting_zoom(&self, width: f64, height: f64) -> Option<f64> {
        self.settings.as_ref().map(|settings| {
            fit_zoom(&settings.bounds, width, height).max(settings.minimum_zoom)
        })
    }
}

/// Progress of the location permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    NotRequested,
    Prompting,
    Answered,
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewport::{GeoBoundingBox, GeoCoordinate, CLUJ_BOUNDS};

    fn surface(bounds: GeoBoundingBox, minimum_zoom: f64, shows_heading: bool) -> SurfaceState {
        let mut surface = SurfaceState::new();
        surface.settings = Some(SurfaceSettings {
            bounds,
            minimum_zoom,
            shows_user_location: true,
            shows_heading,
            shows_scale: true,
        });
        surface
    }

    #[test]
    fn test_unconfigured_surface_shows_nothing() {
        let surface = SurfaceState::new();
        assert!(!surface.shows_user_location());
        assert!(!surface.shows_heading());
        assert!(!surface.shows_scale());
        assert_eq!(surface.starting_zoom(800.0, 600.0), None);
    }

    #[test]
    fn test_starting_zoom_never_below_minimum() {
        let surface = surface(CLUJ_BOUNDS, 13.0, true);
        assert_eq!(surface.starting_zoom(1024.0, 768.0), Some(13.0));
    }

    #[test]
    fn test_starting_zoom_fits_box() {
        let band = GeoBoundingBox::new(
            GeoCoordinate::new(-1.0, -180.0),
            GeoCoordinate::new(1.0, 180.0),
        );
        let surface = surface(band, 0.0, false);

        let zoom = surface.starting_zoom(512.0, 10_000.0).unwrap();
        assert!((zoom - 1.0).abs() < 1e-9);
        assert!(!surface.shows_heading());
        assert!(surface.shows_scale());
    }
}
