use std::f64::consts::PI;

use viewport::{GeoBoundingBox, GeoCoordinate};

// Walkers tiles are 256 px wide at every zoom level.
const TILE_SIZE: f64 = 256.0;

pub fn meters_per_degree_lon(lat_deg: f64) -> f64 {
    let lat = lat_deg.to_radians();
    111_412.84 * lat.cos() - 93.5 * (3.0 * lat).cos()
}

/// Compass bearing from `from` to `to` in degrees, 0 is north and 90 is east.
pub fn bearing(from: &GeoCoordinate, to: &GeoCoordinate) -> f64 {
    let (lat1, lat2) = (from.lat.to_radians(), to.lat.to_radians());
    let delta_lon = (to.lon - from.lon).to_radians();

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();
    y.atan2(x).to_degrees().rem_euclid(360.0)
}

fn mercator_y(lat_deg: f64) -> f64 {
    let lat = lat_deg.to_radians();
    (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0
}

/// Highest zoom level at which the whole of `bounds` fits in `width` x `height` pixels.
pub fn fit_zoom(bounds: &GeoBoundingBox, width: f64, height: f64) -> f64 {
    let span_x = (bounds.ne.lon - bounds.sw.lon) / 360.0;
    let span_y = (mercator_y(bounds.sw.lat) - mercator_y(bounds.ne.lat)).abs();

    let zoom_x = (width / (TILE_SIZE * span_x)).log2();
    let zoom_y = (height / (TILE_SIZE * span_y)).log2();
    zoom_x.min(zoom_y)
}

/// Longest round distance (1, 2 or 5 times a power of ten, in meters) that fits
/// in `max_width` pixels, with its width in pixels.
pub fn scale_bar(meters_per_pixel: f64, max_width: f32) -> (f64, f32) {
    let max_meters = meters_per_pixel * max_width as f64;
    if max_meters <= 0.0 || !max_meters.is_finite() {
        return (0.0, 0.0);
    }

    let magnitude = 10f64.powf(max_meters.log10().floor());
    let meters = [5.0, 2.0, 1.0]
        .iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate <= max_meters)
        .unwrap_or(magnitude);

    (meters, (meters / meters_per_pixel) as f32)
}

pub fn distance_label(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{} km", meters / 1000.0)
    } else {
        format!("{} m", meters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewport::CLUJ_BOUNDS;

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = GeoCoordinate::new(46.77, 23.59);
        let north = GeoCoordinate::new(46.78, 23.59);
        let east = GeoCoordinate::new(46.77, 23.60);
        let south = GeoCoordinate::new(46.76, 23.59);

        assert!(bearing(&origin, &north).abs() < 1e-6);
        assert!((bearing(&origin, &east) - 90.0).abs() < 0.1);
        assert!((bearing(&origin, &south) - 180.0).abs() < 1e-6);
    }

    #[test]
    fn test_fit_zoom_whole_width() {
        let band = GeoBoundingBox::new(
            GeoCoordinate::new(-1.0, -180.0),
            GeoCoordinate::new(1.0, 180.0),
        );
        assert!((fit_zoom(&band, 512.0, 10_000.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_zoom_bounding_box_is_below_minimum() {
        let zoom = fit_zoom(&CLUJ_BOUNDS, 1024.0, 768.0);
        assert!(zoom > 11.5 && zoom < 12.5, "got {}", zoom);
    }

    #[test]
    fn test_scale_bar_rounds_down() {
        assert_eq!(scale_bar(1.0, 100.0), (100.0, 100.0));
        assert_eq!(scale_bar(1.0, 150.0), (100.0, 100.0));

        let (meters, width) = scale_bar(3.0, 100.0);
        assert_eq!(meters, 200.0);
        assert!((width - 66.666).abs() < 0.01);

        let (meters, _) = scale_bar(60.0, 100.0);
        assert_eq!(meters, 5000.0);
    }

    #[test]
    fn test_scale_bar_without_extent() {
        assert_eq!(scale_bar(0.0, 100.0), (0.0, 0.0));
        assert_eq!(scale_bar(f64::INFINITY, 100.0), (0.0, 0.0));
    }

    #[test]
    fn test_distance_label_units() {
        assert_eq!(distance_label(200.0), "200 m");
        assert_eq!(distance_label(5000.0), "5 km");
    }
}
