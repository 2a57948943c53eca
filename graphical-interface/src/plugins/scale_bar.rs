use egui::{Align2, Color32, FontId, Response, Stroke, Vec2};
use viewport::GeoCoordinate;
use walkers::{Plugin, Projector};

use crate::types::{
    measure::{distance_label, meters_per_degree_lon, scale_bar},
    IntoPosition,
};

const MAX_WIDTH: f32 = 120.0;
const MARGIN: f32 = 12.0;
// Longitude step projected to measure how many meters a pixel covers.
const SAMPLE_DEGREES: f64 = 0.01;

/// Distance scale in the bottom left corner, measured at `center`.
pub struct ScaleBar {
    center: GeoCoordinate,
}

impl ScaleBar {
    pub fn new(center: GeoCoordinate) -> Self {
        Self { center }
    }
}

impl Plugin for ScaleBar {
    fn run(self: Box<Self>, ui: &mut egui::Ui, response: &Response, projector: &Projector) {
        let east = GeoCoordinate::new(self.center.lat, self.center.lon + SAMPLE_DEGREES);
        let pixels = (projector.project(east.to_position())
            - projector.project(self.center.to_position()))
        .length() as f64;
        if pixels <= 0.0 {
            return;
        }

        let meters_per_pixel = SAMPLE_DEGREES * meters_per_degree_lon(self.center.lat) / pixels;
        let (meters, width) = scale_bar(meters_per_pixel, MAX_WIDTH);
        if width <= 0.0 {
            return;
        }

        let start = response.rect.left_bottom() + Vec2::new(MARGIN, -MARGIN);
        let end = start + Vec2::new(width, 0.0);
        let stroke = Stroke::new(2.0, Color32::BLACK);

        let painter = ui.painter();
        painter.line_segment([start, end], stroke);
        painter.line_segment([start, start - Vec2::new(0.0, 6.0)], stroke);
        painter.line_segment([end, end - Vec2::new(0.0, 6.0)], stroke);
        painter.text(
            start - Vec2::new(0.0, 8.0),
            Align2::LEFT_BOTTOM,
            distance_label(meters),
            FontId::proportional(12.0),
            Color32::BLACK,
        );
    }
}
