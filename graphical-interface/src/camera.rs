use viewport::{GeoCoordinate, MapEvent};

// Camera centers closer than this are the same center.
const CAMERA_EPSILON: f64 = 1e-9;

pub fn same_center(a: &GeoCoordinate, b: &GeoCoordinate) -> bool {
    (a.lat - b.lat).abs() < CAMERA_EPSILON && (a.lon - b.lon).abs() < CAMERA_EPSILON
}

/// Turns user camera moves on the map widget into guard requests.
///
/// A drag held outside the bounding box is rejected on every frame; only the
/// first rejection of a gesture is reported.
#[derive(Debug, Default)]
pub struct CameraGate {
    rejected_in_gesture: bool,
}

impl CameraGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// The event to send for the widget's `detached` center, if the user moved
    /// the camera away from `camera`.
    pub fn request(
        &self,
        detached: Option<GeoCoordinate>,
        camera: GeoCoordinate,
    ) -> Option<MapEvent> {
        let target = detached?;
        if same_center(&target, &camera) {
            return None;
        }
        Some(MapEvent::CameraChangeRequested { target })
    }

    /// Records a rejected move. Returns `true` when it should be reported.
    pub fn rejected(&mut self) -> bool {
        let first = !self.rejected_in_gesture;
        self.rejected_in_gesture = true;
        first
    }

    pub fn accepted(&mut self) {
        self.rejected_in_gesture = false;
    }

    /// The pointer was released.
    pub fn gesture_ended(&mut self) {
        self.rejected_in_gesture = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewport::{
        config::MAPTILER_KEY, MapCommand, MapHost, StaticConfig, StyleCatalog, ViewerOptions,
        CLUJ_BOUNDS,
    };

    fn host() -> MapHost {
        let config = StaticConfig::new().with(MAPTILER_KEY, "k3y");
        MapHost::new(StyleCatalog::maptiler(), CLUJ_BOUNDS, ViewerOptions::default(), &config)
            .unwrap()
            .0
    }

    #[test]
    fn test_same_center_tolerates_rounding() {
        let a = GeoCoordinate::new(46.77, 23.59);
        let b = GeoCoordinate::new(46.77 + 1e-12, 23.59);
        let c = GeoCoordinate::new(46.78, 23.59);

        assert!(same_center(&a, &b));
        assert!(!same_center(&a, &c));
    }

    #[test]
    fn test_no_request_without_user_move() {
        let gate = CameraGate::new();
        let camera = GeoCoordinate::new(46.77, 23.59);

        assert_eq!(gate.request(None, camera), None);
        assert_eq!(gate.request(Some(camera), camera), None);
    }

    #[test]
    fn test_moved_center_becomes_change_request() {
        let gate = CameraGate::new();
        let camera = GeoCoordinate::new(46.77, 23.59);
        let target = GeoCoordinate::new(46.78, 23.60);

        assert_eq!(
            gate.request(Some(target), camera),
            Some(MapEvent::CameraChangeRequested { target })
        );
    }

    #[test]
    fn test_rejection_reported_once_per_gesture() {
        let mut gate = CameraGate::new();

        assert!(gate.rejected());
        for _ in 0..60 {
            assert!(!gate.rejected());
        }

        gate.gesture_ended();
        assert!(gate.rejected());

        gate.accepted();
        assert!(gate.rejected());
    }

    #[test]
    fn test_drag_out_of_box_is_restored_by_host() {
        let gate = CameraGate::new();
        let host = host();
        let outside = GeoCoordinate::new(46.900, 23.590);

        let event = gate.request(Some(outside), host.camera()).unwrap();
        let transition = host.update(event).unwrap();

        assert_eq!(
            transition.commands,
            vec![MapCommand::RestoreCamera {
                center: host.camera()
            }]
        );
        assert_eq!(transition.host.camera(), host.camera());

        // The widget is back on the host camera, so the next frame sends nothing.
        let restored = transition.host.camera();
        assert_eq!(gate.request(Some(restored), restored), None);
    }

    #[test]
    fn test_drag_inside_box_moves_host_camera() {
        let gate = CameraGate::new();
        let host = host();
        let inside = GeoCoordinate::new(46.760, 23.600);

        let event = gate.request(Some(inside), host.camera()).unwrap();
        let transition = host.update(event).unwrap();

        assert!(transition.commands.is_empty());
        assert_eq!(transition.host.camera(), inside);
    }
}
