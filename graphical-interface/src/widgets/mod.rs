mod permission;
mod style_label;
mod zoom;

pub use permission::{PermissionAnswer, WidgetPermission};
pub use style_label::WidgetStyleLabel;
pub use zoom::{enforce_minimum_zoom, zoom};
