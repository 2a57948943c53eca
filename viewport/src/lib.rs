//! Coordination layer of the bounded map viewer: style cycling, key
//! validation, style URL composition, location tracking and the camera guard,
//! tied together by the [`host::MapHost`] state machine.

pub mod config;
pub mod cycler;
pub mod errors;
pub mod geo;
pub mod guard;
pub mod host;
pub mod key;
pub mod location;
pub mod style;
pub mod style_url;

pub use config::{ConfigSource, EnvOverride, FileConfig, StaticConfig, ViewerOptions};
pub use cycler::StyleCycler;
pub use errors::{ConfigurationError, LocationError, UrlParseError, ViewportError};
pub use geo::{GeoBoundingBox, GeoCoordinate, PointOfInterest, CLUJ_BOUNDS};
pub use guard::is_camera_move_allowed;
pub use host::{Annotation, MapCommand, MapEvent, MapHost, Severity, SurfaceSettings, Transition};
pub use key::{resolve_key, ResolvedKey};
pub use location::{LocationTracker, TrackingState};
pub use style::{StyleCatalog, StyleEntry};
pub use style_url::{build_style_url, DEFAULT_STYLE_TEMPLATE};
