/// A point on the map in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lon: f64,
}

impl GeoCoordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Rectangular region given by its south-west and north-east corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBoundingBox {
    pub sw: GeoCoordinate,
    pub ne: GeoCoordinate,
}

impl GeoBoundingBox {
    pub const fn new(sw: GeoCoordinate, ne: GeoCoordinate) -> Self {
        Self { sw, ne }
    }

    /// Inclusive containment on both axes.
    pub fn contains(&self, point: &GeoCoordinate) -> bool {
        point.lat >= self.sw.lat
            && point.lat <= self.ne.lat
            && point.lon >= self.sw.lon
            && point.lon <= self.ne.lon
    }

    pub fn center(&self) -> GeoCoordinate {
        GeoCoordinate::new(
            (self.sw.lat + self.ne.lat) / 2.0,
            (self.sw.lon + self.ne.lon) / 2.0,
        )
    }

    pub fn corners(&self) -> [GeoCoordinate; 4] {
        [
            self.sw,
            GeoCoordinate::new(self.sw.lat, self.ne.lon),
            self.ne,
            GeoCoordinate::new(self.ne.lat, self.sw.lon),
        ]
    }
}

/// A titled marker shown on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterest {
    pub title: &'static str,
    pub position: GeoCoordinate,
}

/// Region the camera is allowed to move in (Cluj-Napoca).
pub const CLUJ_BOUNDS: GeoBoundingBox = GeoBoundingBox::new(
    GeoCoordinate::new(46.71620366032939, 23.39774008738669),
    GeoCoordinate::new(46.83472377112443, 23.74945969396266),
);

pub const POINTS_OF_INTEREST: [PointOfInterest; 2] = [
    PointOfInterest {
        title: "Statue1",
        position: GeoCoordinate::new(46.76952032174447, 23.589856130996207),
    },
    PointOfInterest {
        title: "Statue2",
        position: GeoCoordinate::new(46.751701289159485, 23.5981339859047),
    },
];

/// Simulated walking route drawn as a polyline.
pub const ROUTE: [GeoCoordinate; 5] = [
    GeoCoordinate::new(46.738353192398165, 23.591225526255162),
    GeoCoordinate::new(46.74183919270858, 23.591803144589015),
    GeoCoordinate::new(46.74663240854748, 23.59272754575663),
    GeoCoordinate::new(46.74944497193167, 23.593883518803718),
    GeoCoordinate::new(46.752534829576085, 23.595444307024266),
];
