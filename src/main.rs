//! Curve Editor X.
//!
//! Headless-Host für den Kurven-Editor: lädt `.cvx`-Dateien über den
//! App-Controller und gibt eine Zusammenfassung oder die abgetastete Szene
//! als JSON aus.

use clap::{App, Arg};
use curve_editor_x::{
    AppController, AppIntent, AppState, CurveInterpolateMode, CurveScene, EditorOptions,
};
use curve_x::CurveExtrems;
use std::path::PathBuf;

fn main() {
    if let Err(e) = AppRunner::run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Curve Editor X v{} startet...", env!("CARGO_PKG_VERSION"));

        let params = App::new(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .about(env!("CARGO_PKG_DESCRIPTION"))
            .arg(
                Arg::with_name("mode")
                    .long("mode")
                    .short("m")
                    .takes_value(true)
                    .possible_values(&["bezier", "time", "distance"])
                    .help("Abtastmodus der Polylinien"),
            )
            .arg(
                Arg::with_name("json")
                    .long("json")
                    .help("Szene als JSON ausgeben statt Zusammenfassung"),
            )
            .arg(
                Arg::with_name("FILES")
                    .multiple(true)
                    .help(".cvx-Dateien, die als Layer geladen werden"),
            )
            .get_matches();

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let options = EditorOptions::load_from_file(&config_path);
        let mut state = AppState::with_options(options, Some(config_path));
        let mut controller = AppController::new();

        let files: Vec<PathBuf> = params
            .values_of("FILES")
            .map(|values| values.map(PathBuf::from).collect())
            .unwrap_or_default();
        open_startup_files(&mut controller, &mut state, files)?;

        if let Some(mode) = params.value_of("mode") {
            let mode: CurveInterpolateMode = mode.parse()?;
            controller.handle_intent(&mut state, AppIntent::InterpolateModeSelected { mode })?;
        }

        let scene = controller.build_curve_scene(&state);
        if params.is_present("json") {
            println!("{}", serde_json::to_string_pretty(&scene)?);
        } else {
            print_summary(&state, &scene);
        }
        Ok(())
    }
}

/// Lädt die übergebenen Dateien, sonst die Standardkurve aus den Optionen.
///
/// Bleibt das Dokument leer, wird ein Layer mit der Standardkurve angelegt.
fn open_startup_files(
    controller: &mut AppController,
    state: &mut AppState,
    mut files: Vec<PathBuf>,
) -> anyhow::Result<()> {
    if files.is_empty() && state.options.default_curve_path.is_file() {
        files.push(state.options.default_curve_path.clone());
    }

    for path in files {
        if let Err(e) = controller.handle_intent(state, AppIntent::FileSelected { path }) {
            log::error!("{:#}", e);
        }
    }

    if state.document.is_empty() {
        controller.handle_intent(state, AppIntent::NewLayerRequested)?;
    }
    controller.handle_intent(state, AppIntent::FitViewportRequested)
}

fn print_summary(state: &AppState, scene: &CurveScene) {
    println!("{}", state.title());
    println!("Modus: {}", scene.interpolate_mode);

    for layer_scene in &scene.layers {
        let keys_count = state
            .document
            .layer(layer_scene.id)
            .map_or(0, |layer| layer.curve.keys_count());
        let marker = if layer_scene.is_selected { '>' } else { ' ' };
        let unsaved = if layer_scene.has_unsaved_changes { "*" } else { "" };

        if !layer_scene.is_valid {
            println!(
                "{} {}{}: {} Keys (ungültig)",
                marker, layer_scene.name, unsaved, keys_count
            );
            continue;
        }

        let mut bounds = CurveExtrems::empty();
        for point in &layer_scene.polyline {
            bounds.include(scene.to_screen(*point));
        }
        println!(
            "{} {}{}: {} Keys, Länge {:.4}, Bildschirm x {:.1}..{:.1}, y {:.1}..{:.1}",
            marker,
            layer_scene.name,
            unsaved,
            keys_count,
            layer_scene.length.unwrap_or_default(),
            bounds.min_x,
            bounds.max_x,
            bounds.min_y,
            bounds.max_y
        );
    }

    if scene.layers.is_empty() {
        println!("Keine Layer geladen");
    }
}
