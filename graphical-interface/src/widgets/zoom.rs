use walkers::MapMemory;

/// Zoom buttons in the bottom right corner. Never zooms out past `minimum_zoom`.
pub fn zoom(ui: &egui::Ui, map_memory: &mut MapMemory, minimum_zoom: f64) {
    egui::Window::new("Zoom")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                if ui.button(egui::RichText::new("➕").heading()).clicked() {
                    let _ = map_memory.zoom_in();
                }

                let can_zoom_out = map_memory.zoom() - 1.0 >= minimum_zoom;
                if ui
                    .add_enabled(can_zoom_out, egui::Button::new(egui::RichText::new("➖").heading()))
                    .clicked()
                {
                    let _ = map_memory.zoom_out();
                }
            });
        });
}

/// Pulls the zoom back up when scrolling went below `minimum_zoom`.
pub fn enforce_minimum_zoom(map_memory: &mut MapMemory, minimum_zoom: f64) {
    if map_memory.zoom() < minimum_zoom {
        let _ = map_memory.set_zoom(minimum_zoom);
    }
}
