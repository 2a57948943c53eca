use std::{cell::RefCell, path::PathBuf, rc::Rc, time::Instant};

use egui::Context;
use logger::{Color, Logger};
use url::Url;
use viewport::{
    config::MAPTILER_KEY, geo::ROUTE, ConfigSource, MapCommand, MapEvent, MapHost,
    Severity, ViewportError,
};
use walkers::{sources::OpenStreetMap, HttpOptions, HttpTiles, Map, MapMemory, Tiles};

use crate::{
    camera::CameraGate,
    load_config,
    location::SimulatedLocation,
    plugins,
    sources::MapTilerRaster,
    state::{PermissionState, SurfaceState},
    types::{from_position, measure::bearing, IntoPosition},
    widgets::{self, PermissionAnswer, WidgetPermission, WidgetStyleLabel},
};

/// The map host view: owns the map widget and feeds every user and location
/// event through the [`MapHost`] state machine, then carries out the commands
/// it returns.
pub struct MapApp {
    egui_ctx: Context,
    tiles: Box<dyn Tiles>,
    map_memory: MapMemory,
    host: MapHost,
    surface: SurfaceState,
    permission: PermissionState,
    location_feed: SimulatedLocation,
    camera_gate: CameraGate,
    heading: Option<f64>,
    fit_pending: bool,
    logger: Logger,
    config_path: PathBuf,
    appeared: bool,
    fatal: Rc<RefCell<Option<ViewportError>>>,
}

impl MapApp {
    /// Creates the view and runs the host's startup commands.
    pub fn new(
        egui_ctx: Context,
        host: MapHost,
        startup: Vec<MapCommand>,
        logger: Logger,
        config_path: PathBuf,
        fatal: Rc<RefCell<Option<ViewportError>>>,
    ) -> Self {
        let tiles: Box<dyn Tiles> = Box::new(HttpTiles::with_options(
            OpenStreetMap,
            HttpOptions::default(),
            egui_ctx.to_owned(),
        ));

        let mut app = Self {
            egui_ctx,
            tiles,
            map_memory: MapMemory::default(),
            host,
            surface: SurfaceState::new(),
            permission: PermissionState::NotRequested,
            location_feed: SimulatedLocation::new(&ROUTE),
            camera_gate: CameraGate::new(),
            heading: None,
            fit_pending: false,
            logger,
            config_path,
            appeared: false,
            fatal,
        };
        app.execute(startup);
        app
    }

    fn dispatch(&mut self, event: MapEvent) {
        match self.host.update(event) {
            Ok(transition) => {
                self.host = transition.host;
                self.execute(transition.commands);
            }
            Err(error) => self.stop(error),
        }
    }

    fn execute(&mut self, commands: Vec<MapCommand>) {
        for command in commands {
            match command {
                MapCommand::ConfigureSurface(settings) => {
                    self.map_memory
                        .center_at(settings.bounds.center().to_position());
                    let _ = self.map_memory.set_zoom(settings.minimum_zoom);
                    self.surface.settings = Some(settings);
                    // The zoom is fitted to the box once the view size is known.
                    self.fit_pending = true;
                }
                MapCommand::ApplyStyle { name, url } => {
                    self.tiles = self.tiles_for(&name, &url);
                }
                MapCommand::AddAnnotation(annotation) => {
                    self.surface.annotations.push(annotation);
                }
                MapCommand::RequestLocationAuthorization => {
                    if self.permission == PermissionState::NotRequested {
                        self.permission = PermissionState::Prompting;
                    }
                }
                MapCommand::StartLocationUpdates => self.location_feed.start(),
                MapCommand::Recenter { target, .. } => {
                    self.map_memory.center_at(target.to_position());
                }
                MapCommand::RestoreCamera { center } => {
                    if self.camera_gate.rejected() {
                        self.log(Severity::Info, "Camera move outside the allowed region rejected");
                    }
                    self.map_memory.center_at(center.to_position());
                    self.egui_ctx.request_repaint();
                }
                MapCommand::Log { severity, message } => self.log(severity, &message),
            }
        }
    }

    fn tiles_for(&self, name: &str, url: &Url) -> Box<dyn Tiles> {
        match MapTilerRaster::from_style_url(url) {
            Some(source) => Box::new(HttpTiles::with_options(
                source,
                HttpOptions::default(),
                self.egui_ctx.to_owned(),
            )),
            None => {
                self.log(
                    Severity::Warn,
                    &format!("Style {} has no raster tiles, showing OpenStreetMap", name),
                );
                Box::new(HttpTiles::with_options(
                    OpenStreetMap,
                    HttpOptions::default(),
                    self.egui_ctx.to_owned(),
                ))
            }
        }
    }

    /// Sends a camera change to the guard when the user moved the map.
    fn check_camera(&mut self) {
        let detached = self.map_memory.detached().map(from_position);
        if let Some(event) = self.camera_gate.request(detached, self.host.camera()) {
            self.dispatch(event);
            if self.map_memory.detached().map(from_position) == detached {
                self.camera_gate.accepted();
            }
        }
    }

    /// Feeds the next simulated fix to the host and points the heading along the move.
    fn poll_location(&mut self) {
        let Some(event) = self.location_feed.poll(Instant::now()) else {
            return;
        };
        let previous = self.host.tracker().last_known_location();
        self.dispatch(event);

        let current = self.host.tracker().last_known_location();
        if let (Some(from), Some(to)) = (previous, current) {
            if from != to {
                self.heading = Some(bearing(&from, &to));
            }
        }
    }

    fn fit_to_bounds(&mut self, size: egui::Vec2) {
        if let Some(zoom) = self.surface.starting_zoom(size.x as f64, size.y as f64) {
            let _ = self.map_memory.set_zoom(zoom);
            self.fit_pending = false;
        }
    }

    fn reload_configuration(&mut self) {
        match load_config(&self.config_path) {
            Ok(source) => {
                self.log(Severity::Info, "Configuration reloaded");
                self.dispatch(MapEvent::ConfigurationChanged {
                    key: source.value(MAPTILER_KEY),
                });
            }
            Err(error) => self.stop(error.into()),
        }
    }

    fn stop(&mut self, error: ViewportError) {
        self.log(Severity::Error, &error.to_string());
        *self.fatal.borrow_mut() = Some(error);
        self.egui_ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    fn log(&self, severity: Severity, message: &str) {
        let result = match severity {
            Severity::Info => self.logger.info(message, Color::Cyan),
            Severity::Warn => self.logger.warn(message),
            Severity::Error => self.logger.error(message),
        };
        if let Err(e) = result {
            eprintln!("Failed to write log: {}", e);
        }
    }
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.appeared {
            self.appeared = true;
            self.dispatch(MapEvent::Appeared);
        }

        if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            self.reload_configuration();
        }

        self.poll_location();
        ctx.request_repaint_after(self.location_feed.interval());

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                if self.fit_pending {
                    self.fit_to_bounds(ui.available_size());
                }

                let camera = self.host.camera();
                let tracker = self.host.tracker();
                let my_position = tracker
                    .last_known_location()
                    .unwrap_or(camera)
                    .to_position();

                let user_location = if self.surface.shows_user_location() {
                    tracker.last_known_location()
                } else {
                    None
                };

                let annotations_plugin = plugins::Annotations::new(&self.surface.annotations);
                let heading = if self.surface.shows_heading() {
                    self.heading
                } else {
                    None
                };
                let user_location_plugin =
                    plugins::UserLocation::new(user_location, tracker.is_degraded())
                        .with_heading(heading);
                let shows_scale = self.surface.shows_scale();

                let mut map =
                    Map::new(Some(self.tiles.as_mut()), &mut self.map_memory, my_position)
                        .with_plugin(annotations_plugin)
                        .with_plugin(user_location_plugin);
                if shows_scale {
                    map = map.with_plugin(plugins::ScaleBar::new(camera));
                }

                ui.add(map);

                let minimum_zoom = self.surface.minimum_zoom().unwrap_or(0.0);
                widgets::enforce_minimum_zoom(&mut self.map_memory, minimum_zoom);
                widgets::zoom(ui, &mut self.map_memory, minimum_zoom);
            });

        self.check_camera();
        if !ctx.input(|i| i.pointer.any_down()) {
            self.camera_gate.gesture_ended();
        }

        if WidgetStyleLabel::show(ctx, &self.host.style_name()) {
            self.dispatch(MapEvent::StyleLabelTapped);
        }

        if self.permission == PermissionState::Prompting {
            if let Some(answer) = WidgetPermission::show(ctx) {
                self.permission = PermissionState::Answered;
                self.dispatch(MapEvent::AuthorizationChanged {
                    granted: answer == PermissionAnswer::Allow,
                });
            }
        }
    }
}
