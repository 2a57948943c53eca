use egui::{Align2, Color32, FontId, Rect, Response, Shape, Stroke, Vec2};
use viewport::{Annotation, GeoCoordinate};
use walkers::{Plugin, Projector};

use crate::types::IntoPosition;

const MARKER_RADIUS: f32 = 8.0;
const ROUTE_WIDTH: f32 = 4.0;

/// Draws the points of interest and the route polyline.
pub struct Annotations<'a> {
    annotations: &'a [Annotation],
}

impl<'a> Annotations<'a> {
    pub fn new(annotations: &'a [Annotation]) -> Self {
        Self { annotations }
    }
}

impl Plugin for Annotations<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        // Routes first so the markers stay on top.
        for annotation in self.annotations {
            if let Annotation::Polyline(points) = annotation {
                draw_polyline(ui, projector, points);
            }
        }
        for annotation in self.annotations {
            if let Annotation::Point(poi) = annotation {
                draw_marker(ui, projector, &poi.position, poi.title);
            }
        }
    }
}

fn draw_polyline(ui: &mut egui::Ui, projector: &Projector, points: &[GeoCoordinate]) {
    let screen_points = points
        .iter()
        .map(|point| projector.project(point.to_position()).to_pos2())
        .collect();

    ui.painter().add(Shape::line(
        screen_points,
        Stroke::new(ROUTE_WIDTH, Color32::from_rgb(0, 150, 255)),
    ));
}

fn draw_marker(ui: &mut egui::Ui, projector: &Projector, position: &GeoCoordinate, title: &str) {
    let center = projector.project(position.to_position()).to_pos2();

    let clickable_area = Rect::from_center_size(center, Vec2::splat(MARKER_RADIUS * 3.0));
    let response = ui.allocate_rect(clickable_area, egui::Sense::hover());

    let fill = if response.hovered() {
        Color32::from_rgb(255, 120, 0)
    } else {
        Color32::from_rgb(220, 40, 40)
    };

    let painter = ui.painter();
    painter.circle_filled(center, MARKER_RADIUS, fill);
    painter.circle_stroke(center, MARKER_RADIUS, Stroke::new(2.0, Color32::WHITE));

    if response.hovered() {
        painter.text(
            center - Vec2::new(0.0, MARKER_RADIUS + 4.0),
            Align2::CENTER_BOTTOM,
            title,
            FontId::proportional(16.0),
            Color32::BLACK,
        );
    }
}
