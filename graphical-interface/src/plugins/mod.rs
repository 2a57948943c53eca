mod annotations;
mod scale_bar;
mod user_location;

pub use annotations::Annotations;
pub use scale_bar::ScaleBar;
pub use user_location::UserLocation;
