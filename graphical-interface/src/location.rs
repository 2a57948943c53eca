use std::time::{Duration, Instant};

use viewport::{GeoCoordinate, MapEvent};

const UPDATE_TICK_MS: u64 = 1000;
const STEPS_PER_SEGMENT: usize = 8;

/// Stand-in for the platform location service on desktop: walks along a route,
/// one interpolated fix per tick, and starts over at the end.
pub struct SimulatedLocation {
    path: Vec<GeoCoordinate>,
    next: usize,
    running: bool,
    last_tick: Instant,
    interval: Duration,
}

impl SimulatedLocation {
    pub fn new(route: &[GeoCoordinate]) -> Self {
        Self::with_interval(route, Duration::from_millis(UPDATE_TICK_MS))
    }

    pub fn with_interval(route: &[GeoCoordinate], interval: Duration) -> Self {
        Self {
            path: interpolate(route, STEPS_PER_SEGMENT),
            next: 0,
            running: false,
            last_tick: Instant::now(),
            interval,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the next update once the tick interval has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<MapEvent> {
        if !self.running || self.path.is_empty() {
            return None;
        }
        if now.duration_since(self.last_tick) < self.interval {
            return None;
        }
        self.last_tick = now;

        let fix = self.path[self.next];
        self.next = (self.next + 1) % self.path.len();
        Some(MapEvent::LocationsUpdated(vec![fix]))
    }
}

fn interpolate(route: &[GeoCoordinate], steps: usize) -> Vec<GeoCoordinate> {
    let mut path = Vec::new();
    for pair in route.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        for step in 0..steps {
            let t = step as f64 / steps as f64;
            path.push(GeoCoordinate::new(
                from.lat + (to.lat - from.lat) * t,
                from.lon + (to.lon - from.lon) * t,
            ));
        }
    }
    if let Some(last) = route.last() {
        path.push(*last);
    }
    path
}
