use crate::geo::{GeoBoundingBox, GeoCoordinate};

/// Decides whether the camera may move its center to `target`.
///
/// The policy is binary: the move is accepted when `target` lies inside `bounds`
/// (edges included) and rejected otherwise. There is no per-axis clamping, a
/// rejected move leaves the camera where it was.
pub fn is_camera_move_allowed(target: &GeoCoordinate, bounds: &GeoBoundingBox) -> bool {
    bounds.contains(target)
}
