use egui::{Color32, Response, Stroke, Vec2};
use viewport::GeoCoordinate;
use walkers::{Plugin, Projector};

use crate::types::IntoPosition;

const HEADING_LENGTH: f32 = 22.0;

/// Blue dot on the last known device location, with an optional heading line.
pub struct UserLocation {
    location: Option<GeoCoordinate>,
    heading: Option<f64>,
    degraded: bool,
}

impl UserLocation {
    pub fn new(location: Option<GeoCoordinate>, degraded: bool) -> Self {
        Self {
            location,
            heading: None,
            degraded,
        }
    }

    /// `heading` is a compass bearing in degrees.
    pub fn with_heading(mut self, heading: Option<f64>) -> Self {
        self.heading = heading;
        self
    }
}

impl Plugin for UserLocation {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        let Some(location) = self.location else {
            return;
        };

        let center = projector.project(location.to_position()).to_pos2();
        // A stale fix is drawn grey.
        let fill = if self.degraded {
            Color32::GRAY
        } else {
            Color32::from_rgb(0, 122, 255)
        };

        let painter = ui.painter();
        painter.circle_filled(center, 14.0, fill.gamma_multiply(0.25));
        if let Some(heading) = self.heading {
            let angle = heading.to_radians() as f32;
            // Screen y grows downwards.
            let direction = Vec2::new(angle.sin(), -angle.cos());
            painter.line_segment(
                [center, center + direction * HEADING_LENGTH],
                Stroke::new(3.0, fill),
            );
        }
        painter.circle_filled(center, 7.0, fill);
        painter.circle_stroke(center, 7.0, Stroke::new(2.0, Color32::WHITE));
    }
}
