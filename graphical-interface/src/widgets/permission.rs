/// Answer given in the location permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionAnswer {
    Allow,
    Deny,
}

/// Desktop version of the "allow location while using the app" dialog.
pub struct WidgetPermission;

impl WidgetPermission {
    pub fn show(ctx: &egui::Context) -> Option<PermissionAnswer> {
        let mut answer = None;

        egui::Window::new("Location")
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Allow the map to use your location while it is open?");
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Allow").clicked() {
                        answer = Some(PermissionAnswer::Allow);
                    }
                    if ui.button("Don't allow").clicked() {
                        answer = Some(PermissionAnswer::Deny);
                    }
                });
            });

        answer
    }
}
