use crate::errors::LocationError;
use crate::geo::GeoCoordinate;

/// Where the tracker stands in its lifecycle.
///
/// `Unauthorized` → (permission granted) → `NoFix` → (first update) → `HasFix`,
/// after which every update replaces the coordinate. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingState {
    Unauthorized,
    NoFix,
    HasFix,
}

/// Keeps the most recent device location reported by the platform.
///
/// Only the last coordinate is retained; earlier ones are discarded. Failures are
/// recorded but never stop tracking.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationTracker {
    authorized: bool,
    last_known: Option<GeoCoordinate>,
    last_error: Option<LocationError>,
}

impl LocationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TrackingState {
        match (self.authorized, self.last_known) {
            (false, _) => TrackingState::Unauthorized,
            (true, None) => TrackingState::NoFix,
            (true, Some(_)) => TrackingState::HasFix,
        }
    }

    /// Applies a change of location permission.
    ///
    /// A denial is recorded as `LocationError::PermissionDenied` and returned so the
    /// host can report it.
    pub fn set_authorized(&mut self, granted: bool) -> Option<LocationError> {
        self.authorized = granted;
        if granted {
            if self.last_error == Some(LocationError::PermissionDenied) {
                self.last_error = None;
            }
            None
        } else {
            self.last_error = Some(LocationError::PermissionDenied);
            Some(LocationError::PermissionDenied)
        }
    }

    /// Consumes a batch of updates, keeping only its last coordinate.
    ///
    /// Returns the new fix, or `None` if the batch is empty or permission has not
    /// been granted.
    pub fn record(&mut self, updates: &[GeoCoordinate]) -> Option<GeoCoordinate> {
        if !self.authorized {
            return None;
        }
        let latest = *updates.last()?;
        self.last_known = Some(latest);
        self.last_error = None;
        Some(latest)
    }

    /// Records a failure reported by the platform. The last fix is kept.
    pub fn fail(&mut self, error: LocationError) {
        self.last_error = Some(error);
    }

    pub fn last_known_location(&self) -> Option<GeoCoordinate> {
        self.last_known
    }

    pub fn last_error(&self) -> Option<&LocationError> {
        self.last_error.as_ref()
    }

    /// `true` while the most recent event from the platform was a failure.
    pub fn is_degraded(&self) -> bool {
        self.last_error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut tracker = LocationTracker::new();
        assert_eq!(tracker.state(), TrackingState::Unauthorized);

        tracker.set_authorized(true);
        assert_eq!(tracker.state(), TrackingState::NoFix);

        tracker.record(&[GeoCoordinate::new(46.75, 23.59)]);
        assert_eq!(tracker.state(), TrackingState::HasFix);

        tracker.record(&[GeoCoordinate::new(46.76, 23.60)]);
        assert_eq!(tracker.state(), TrackingState::HasFix);
    }

    #[test]
    fn test_keeps_only_latest_coordinate() {
        let mut tracker = LocationTracker::new();
        tracker.set_authorized(true);

        let first = GeoCoordinate::new(46.74, 23.59);
        let second = GeoCoordinate::new(46.75, 23.60);
        tracker.record(&[first]);
        tracker.record(&[second]);

        assert_eq!(tracker.last_known_location(), Some(second));
    }

    #[test]
    fn test_batch_keeps_last_element() {
        let mut tracker = LocationTracker::new();
        tracker.set_authorized(true);

        let last = GeoCoordinate::new(46.8, 23.7);
        let fix = tracker.record(&[GeoCoordinate::new(46.7, 23.5), last]);

        assert_eq!(fix, Some(last));
        assert_eq!(tracker.record(&[]), None);
        assert_eq!(tracker.last_known_location(), Some(last));
    }

    #[test]
    fn test_updates_ignored_while_unauthorized() {
        let mut tracker = LocationTracker::new();
        assert_eq!(tracker.record(&[GeoCoordinate::new(46.7, 23.5)]), None);
        assert_eq!(tracker.last_known_location(), None);
    }

    #[test]
    fn test_failure_degrades_without_losing_fix() {
        let mut tracker = LocationTracker::new();
        tracker.set_authorized(true);
        let fix = GeoCoordinate::new(46.75, 23.59);
        tracker.record(&[fix]);

        tracker.fail(LocationError::SignalLost);

        assert!(tracker.is_degraded());
        assert_eq!(tracker.state(), TrackingState::HasFix);
        assert_eq!(tracker.last_known_location(), Some(fix));

        tracker.record(&[GeoCoordinate::new(46.76, 23.6)]);
        assert!(!tracker.is_degraded());
    }

    #[test]
    fn test_denial_is_reported() {
        let mut tracker = LocationTracker::new();
        assert_eq!(
            tracker.set_authorized(false),
            Some(LocationError::PermissionDenied)
        );
        assert_eq!(tracker.state(), TrackingState::Unauthorized);

        assert_eq!(tracker.set_authorized(true), None);
        assert!(!tracker.is_degraded());
    }
}
