/// Label naming the current style. Tapping it asks for the next one.
pub struct WidgetStyleLabel;

impl WidgetStyleLabel {
    /// Shows the label at the top of the screen and returns `true` when it was tapped.
    pub fn show(ctx: &egui::Context, style_name: &str) -> bool {
        let mut tapped = false;

        egui::Area::new("style_label".into())
            .anchor(egui::Align2::CENTER_TOP, [0.0, 16.0])
            .show(ctx, |ui| {
                let button = egui::Button::new(
                    egui::RichText::new(style_name).size(20.0).strong(),
                )
                .rounding(10.0)
                .min_size([160.0, 40.0].into());

                tapped = ui.add(button).on_hover_text("Tap to change the style").clicked();
            });

        tapped
    }
}
