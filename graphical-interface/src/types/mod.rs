pub mod measure;

use viewport::GeoCoordinate;
use walkers::Position;

/// Conversions between the viewer's coordinates and the map widget's.
pub trait IntoPosition {
    fn to_position(&self) -> Position;
}

impl IntoPosition for GeoCoordinate {
    fn to_position(&self) -> Position {
        Position::from_lat_lon(self.lat, self.lon)
    }
}

pub fn from_position(position: Position) -> GeoCoordinate {
    GeoCoordinate::new(position.lat(), position.lon())
}
