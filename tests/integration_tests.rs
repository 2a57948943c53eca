use std::fs;

use viewport::config::{DEFAULT_CONFIG_FILE, MAPTILER_KEY};
use viewport::{
    build_style_url, is_camera_move_allowed, resolve_key, ConfigurationError, FileConfig,
    GeoBoundingBox, GeoCoordinate, MapCommand, MapEvent, MapHost, StaticConfig, StyleCatalog,
    StyleCycler, StyleEntry, TrackingState, ViewerOptions, ViewportError, CLUJ_BOUNDS,
    DEFAULT_STYLE_TEMPLATE,
};

fn start_host(options: ViewerOptions) -> MapHost {
    let config = StaticConfig::new().with(MAPTILER_KEY, "integration-key");
    let (host, _) = MapHost::new(StyleCatalog::maptiler(), CLUJ_BOUNDS, options, &config)
        .expect("Failed to start map host");
    host
}

// Applies a sequence of events, returning the final host and every command emitted.
fn run_events(host: MapHost, events: Vec<MapEvent>) -> (MapHost, Vec<MapCommand>) {
    let mut host = host;
    let mut commands = Vec::new();
    for event in events {
        let transition = host.update(event).expect("Event failed");
        host = transition.host;
        commands.extend(transition.commands);
    }
    (host, commands)
}

#[test]
fn test_cycling_seven_styles_wraps_to_first() {
    let mut cycler = StyleCycler::new(StyleCatalog::maptiler());
    assert_eq!(cycler.current_index(), -1);

    let names: Vec<String> = (0..8).map(|_| cycler.advance().name.clone()).collect();

    assert_eq!(names[0], "Streets");
    assert_eq!(names[6], "Winter");
    assert_eq!(names[7], "Streets");
}

#[test]
fn test_guard_scenario() {
    let bounds = GeoBoundingBox::new(
        GeoCoordinate::new(46.716, 23.398),
        GeoCoordinate::new(46.835, 23.749),
    );

    assert!(is_camera_move_allowed(&GeoCoordinate::new(46.770, 23.590), &bounds));
    assert!(!is_camera_move_allowed(&GeoCoordinate::new(46.900, 23.590), &bounds));
    assert!(is_camera_move_allowed(&bounds.ne, &bounds));
    assert!(is_camera_move_allowed(&bounds.sw, &bounds));
}

#[test]
fn test_key_from_csv_file_builds_style_url() {
    let dir = std::env::temp_dir().join(format!("bounded_map_it_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(DEFAULT_CONFIG_FILE);
    fs::write(&path, "key,value\nMapTilerKey,abc123\n").unwrap();

    let config = FileConfig::from_path(&path).unwrap();
    let key = resolve_key(&config).unwrap();
    let url = build_style_url("", &key).unwrap();

    assert_eq!(url.as_str(), format!("{}abc123", DEFAULT_STYLE_TEMPLATE));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_placeholder_key_stops_startup() {
    for raw in ["PLACEHOLDER", "Placeholder", "placeholder"] {
        let config = StaticConfig::new().with(MAPTILER_KEY, raw);
        let result = MapHost::new(
            StyleCatalog::maptiler(),
            CLUJ_BOUNDS,
            ViewerOptions::default(),
            &config,
        );
        assert!(matches!(
            result,
            Err(ViewportError::Configuration(ConfigurationError::PlaceholderKey))
        ));
    }
}

#[test]
fn test_custom_template_is_used_verbatim() {
    let catalog = StyleCatalog::new(vec![StyleEntry::new(
        "Custom",
        "https://tiles.example.com/styles/custom.json?token=",
    )])
    .unwrap();
    let config = StaticConfig::new().with(MAPTILER_KEY, "t0k");
    let (host, _) =
        MapHost::new(catalog, CLUJ_BOUNDS, ViewerOptions::default(), &config).unwrap();

    let shown = host.update(MapEvent::Appeared).unwrap().host;
    assert_eq!(
        shown.style_url().as_str(),
        "https://tiles.example.com/styles/custom.json?token=t0k"
    );
}

#[test]
fn test_session_follows_location_and_guards_pans() {
    let first = GeoCoordinate::new(46.74183919270858, 23.591803144589015);
    let second = GeoCoordinate::new(46.74663240854748, 23.59272754575663);
    let outside = GeoCoordinate::new(46.900, 23.590);

    let (host, commands) = run_events(
        start_host(ViewerOptions::default()),
        vec![
            MapEvent::Appeared,
            MapEvent::AuthorizationChanged { granted: true },
            MapEvent::LocationsUpdated(vec![first]),
            MapEvent::LocationsUpdated(vec![second]),
            MapEvent::CameraChangeRequested { target: outside },
            MapEvent::StyleLabelTapped,
        ],
    );

    assert_eq!(host.tracker().state(), TrackingState::HasFix);
    assert_eq!(host.tracker().last_known_location(), Some(second));
    assert_eq!(host.camera(), second);
    assert_eq!(host.style_name(), "Basic");
    assert!(commands.contains(&MapCommand::RestoreCamera { center: second }));
}

#[test]
fn test_clamped_follow_keeps_camera_inside() {
    let options = ViewerOptions {
        clamp_follow_to_box: true,
        ..ViewerOptions::default()
    };
    let far = GeoCoordinate::new(45.0, 23.6);

    let (host, commands) = run_events(
        start_host(options),
        vec![
            MapEvent::AuthorizationChanged { granted: true },
            MapEvent::LocationsUpdated(vec![far]),
        ],
    );

    assert!(CLUJ_BOUNDS.contains(&host.camera()));
    assert!(!commands
        .iter()
        .any(|command| matches!(command, MapCommand::Recenter { .. })));
}
