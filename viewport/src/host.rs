use url::Url;

use crate::config::{ConfigSource, ViewerOptions};
use crate::cycler::StyleCycler;
use crate::errors::{LocationError, ViewportError};
use crate::geo::{GeoBoundingBox, GeoCoordinate, PointOfInterest, POINTS_OF_INTEREST, ROUTE};
use crate::guard::is_camera_move_allowed;
use crate::key::{resolve_key, validate_key, ResolvedKey};
use crate::location::LocationTracker;
use crate::style::StyleCatalog;
use crate::style_url::build_style_url;

/// How the map surface must be set up before anything is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSettings {
    pub bounds: GeoBoundingBox,
    pub minimum_zoom: f64,
    pub shows_user_location: bool,
    pub shows_heading: bool,
    pub shows_scale: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    Point(PointOfInterest),
    Polyline(Vec<GeoCoordinate>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

/// Work the widget layer has to carry out after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    ConfigureSurface(SurfaceSettings),
    ApplyStyle { name: String, url: Url },
    AddAnnotation(Annotation),
    RequestLocationAuthorization,
    StartLocationUpdates,
    /// Move the camera to follow the device.
    Recenter { target: GeoCoordinate, animated: bool },
    /// A camera move was rejected; put the camera back on `center`.
    RestoreCamera { center: GeoCoordinate },
    Log { severity: Severity, message: String },
}

/// Everything the platform and the user can tell the map host.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// The map is displayed for the first time.
    Appeared,
    /// The user tapped the style label.
    StyleLabelTapped,
    /// The configuration was reloaded; carries the new raw key value.
    ConfigurationChanged { key: Option<String> },
    AuthorizationChanged { granted: bool },
    LocationsUpdated(Vec<GeoCoordinate>),
    LocationFailed(LocationError),
    /// The user is trying to move the camera center to `target`.
    CameraChangeRequested { target: GeoCoordinate },
}

/// Result of [`MapHost::update`]: the next state plus the commands to run.
#[derive(Debug, Clone)]
pub struct Transition {
    pub host: MapHost,
    pub commands: Vec<MapCommand>,
}

/// State of the map host view.
///
/// The host never mutates itself from callbacks. Every platform or user event
/// goes through [`MapHost::update`], which returns a new host and the commands
/// the widget layer must execute, so all of the behavior can be exercised
/// without a UI.
#[derive(Debug, Clone)]
pub struct MapHost {
    cycler: StyleCycler,
    key: ResolvedKey,
    style_url: Url,
    tracker: LocationTracker,
    camera: GeoCoordinate,
    bounds: GeoBoundingBox,
    options: ViewerOptions,
    appeared: bool,
}

impl MapHost {
    /// Builds the host and the commands that set up the map.
    ///
    /// Resolves the key from `config`, builds the initial style URL (the default
    /// template, since nothing is selected yet), and asks for the surface to be
    /// configured, the annotations to be added and location tracking to start.
    ///
    /// # Errors
    /// - `ViewportError::Configuration` if the key is missing or a placeholder.
    /// - `ViewportError::UrlParse` if the initial style URL cannot be parsed.
    pub fn new<S: ConfigSource + ?Sized>(
        catalog: StyleCatalog,
        bounds: GeoBoundingBox,
        options: ViewerOptions,
        config: &S,
    ) -> Result<(Self, Vec<MapCommand>), ViewportError> {
        let key = resolve_key(config)?;
        let style_url = build_style_url("", &key)?;

        let host = Self {
            cycler: StyleCycler::new(catalog),
            key,
            style_url,
            tracker: LocationTracker::new(),
            camera: bounds.center(),
            bounds,
            options,
            appeared: false,
        };

        let mut commands = vec![MapCommand::ConfigureSurface(SurfaceSettings {
            bounds,
            minimum_zoom: host.options.minimum_zoom,
            shows_user_location: true,
            shows_heading: true,
            shows_scale: true,
        })];
        commands.extend(host.style_commands("Default"));
        for poi in POINTS_OF_INTEREST.iter() {
            commands.push(MapCommand::AddAnnotation(Annotation::Point(poi.clone())));
        }
        commands.push(MapCommand::AddAnnotation(Annotation::Polyline(ROUTE.to_vec())));
        commands.push(MapCommand::RequestLocationAuthorization);
        commands.push(MapCommand::StartLocationUpdates);

        Ok((host, commands))
    }

    /// Handles one event and returns the resulting state and commands.
    ///
    /// # Errors
    /// - `ViewportError::Configuration` if a configuration change carries an
    ///   invalid key. The current host is left untouched.
    /// - `ViewportError::UrlParse` if a rebuilt style URL cannot be parsed.
    pub fn update(&self, event: MapEvent) -> Result<Transition, ViewportError> {
        let mut next = self.clone();
        let mut commands = Vec::new();

        match event {
            MapEvent::Appeared => {
                if !next.appeared {
                    next.appeared = true;
                    commands.extend(next.advance_style()?);
                }
            }
            MapEvent::StyleLabelTapped => {
                commands.extend(next.advance_style()?);
            }
            MapEvent::ConfigurationChanged { key } => {
                let key = validate_key(key)?;
                if key != next.key {
                    next.key = key;
                    let template = next
                        .cycler
                        .current()
                        .map(|entry| entry.url_template.clone())
                        .unwrap_or_default();
                    next.style_url = build_style_url(&template, &next.key)?;
                    commands.extend(next.style_commands(&next.style_name()));
                }
            }
            MapEvent::AuthorizationChanged { granted } => {
                if let Some(error) = next.tracker.set_authorized(granted) {
                    commands.push(log(Severity::Warn, location_failure(&error)));
                }
            }
            MapEvent::LocationsUpdated(updates) => {
                if let Some(fix) = next.tracker.record(&updates) {
                    commands.extend(next.follow(fix));
                }
            }
            MapEvent::LocationFailed(error) => {
                commands.push(log(Severity::Warn, location_failure(&error)));
                next.tracker.fail(error);
            }
            MapEvent::CameraChangeRequested { target } => {
                if is_camera_move_allowed(&target, &next.bounds) {
                    next.camera = target;
                } else {
                    commands.push(MapCommand::RestoreCamera { center: next.camera });
                }
            }
        }

        Ok(Transition {
            host: next,
            commands,
        })
    }

    /// Whether a camera move to `target` would be accepted right now.
    pub fn allows_camera_move(&self, target: &GeoCoordinate) -> bool {
        is_camera_move_allowed(target, &self.bounds)
    }

    pub fn style_url(&self) -> &Url {
        &self.style_url
    }

    /// Name of the selected style, or `Default` before the first selection.
    pub fn style_name(&self) -> String {
        self.cycler
            .current()
            .map(|entry| entry.name.clone())
            .unwrap_or_else(|| "Default".to_string())
    }

    pub fn style_index(&self) -> i64 {
        self.cycler.current_index()
    }

    pub fn camera(&self) -> GeoCoordinate {
        self.camera
    }

    pub fn bounds(&self) -> GeoBoundingBox {
        self.bounds
    }

    pub fn tracker(&self) -> &LocationTracker {
        &self.tracker
    }

    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    fn advance_style(&mut self) -> Result<Vec<MapCommand>, ViewportError> {
        let entry = self.cycler.advance().clone();
        self.style_url = build_style_url(&entry.url_template, &self.key)?;
        Ok(self.style_commands(&entry.name))
    }

    fn style_commands(&self, name: &str) -> Vec<MapCommand> {
        vec![
            MapCommand::ApplyStyle {
                name: name.to_string(),
                url: self.style_url.clone(),
            },
            log(
                Severity::Info,
                format!("Style URL: {}", redacted(&self.style_url)),
            ),
        ]
    }

    fn follow(&mut self, fix: GeoCoordinate) -> Vec<MapCommand> {
        if self.options.clamp_follow_to_box && !self.bounds.contains(&fix) {
            return vec![log(
                Severity::Info,
                format!(
                    "Not following location ({}, {}): outside the allowed region",
                    fix.lat, fix.lon
                ),
            )];
        }
        self.camera = fix;
        vec![MapCommand::Recenter {
            target: fix,
            animated: true,
        }]
    }
}

fn log(severity: Severity, message: String) -> MapCommand {
    MapCommand::Log { severity, message }
}

fn location_failure(error: &LocationError) -> String {
    format!("Location update failed with error: {}", error)
}

/// The URL with its `key` query value masked, for logging.
fn redacted(url: &Url) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            if name == "key" {
                (name.into_owned(), "***".to_string())
            } else {
                (name.into_owned(), value.into_owned())
            }
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
