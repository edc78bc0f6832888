//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use super::viewport;
use crate::app::AppState;
use crate::core::{CurveLayer, LayerId};
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_open_file_dialog = true;
}

/// Öffnet den Save-Datei-Dialog über UI-State.
pub fn request_save_file(state: &mut AppState) {
    state.ui.show_save_file_dialog = true;
}

/// Lädt eine `.cvx`-Datei als neuen, selektierten Layer und passt den Viewport an.
///
/// Ist die Datei bereits geöffnet, wird nur deren Layer selektiert.
pub fn import_file(state: &mut AppState, path: &Path) -> anyhow::Result<LayerId> {
    state.ui.show_open_file_dialog = false;

    if let Some(layer_id) = state.document.find_by_path(path) {
        log::info!("Datei bereits geöffnet: {}", path.display());
        super::layers::select_layer(state, layer_id);
        return Ok(layer_id);
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Kurvendatei nicht lesbar: {}", path.display()))?;
    let curve = curve_x::unserialize(&text)
        .with_context(|| format!("Kurvendatei fehlerhaft: {}", path.display()))?;

    if !curve.is_valid() {
        log::warn!(
            "Kurve in {} hat nur {} Keys und wird nicht gezeichnet",
            path.display(),
            curve.keys_count()
        );
    }
    log::info!(
        "Kurve geladen: {} ({} Keys)",
        path.display(),
        curve.keys_count()
    );

    state.record_undo_snapshot();
    let layer_id = Arc::make_mut(&mut state.document).add_layer(CurveLayer::from_file(path, curve));
    state.selection.clear();
    viewport::fit_to_layers(state);
    Ok(layer_id)
}

/// Speichert den selektierten Layer.
///
/// Ohne expliziten Pfad wird unter dem bekannten Pfad gespeichert; existiert
/// die Datei noch nicht, öffnet sich stattdessen der Speichern-Dialog.
pub fn save_selected_layer(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    let layer_id = state
        .document
        .selected_layer_id()
        .ok_or_else(|| anyhow::anyhow!("Kein Layer selektiert"))?;

    let needs_dialog = path.is_none()
        && state
            .document
            .layer(layer_id)
            .is_some_and(|layer| !layer.is_file_exists);
    if needs_dialog {
        request_save_file(state);
        return Ok(());
    }

    save_layer(state, layer_id, path)?;
    state.ui.show_save_file_dialog = false;
    Ok(())
}

/// Schreibt einen Layer als `.cvx` und gibt den tatsächlichen Pfad zurück.
///
/// Die Endung wird immer auf `.cvx` gesetzt.
pub fn save_layer(
    state: &mut AppState,
    layer_id: LayerId,
    path: Option<PathBuf>,
) -> anyhow::Result<PathBuf> {
    let layer = state
        .document
        .layer(layer_id)
        .ok_or_else(|| anyhow::anyhow!("Layer {} existiert nicht", layer_id))?;

    let target = curve_x::with_format_extension(path.as_deref().unwrap_or(&layer.path));
    let text = curve_x::serialize(&layer.curve);
    std::fs::write(&target, text)
        .with_context(|| format!("Kurvendatei nicht schreibbar: {}", target.display()))?;

    if let Some(layer) = Arc::make_mut(&mut state.document).layer_mut(layer_id) {
        layer.mark_saved(&target);
    }
    log::info!("Kurve gespeichert: {}", target.display());
    Ok(target)
}

/// Speichert alle geänderten Layer, deren Datei bereits existiert.
///
/// Gibt die Anzahl übersprungener Layer ohne Dateipfad zurück.
pub fn save_all(state: &mut AppState) -> anyhow::Result<usize> {
    let pending: Vec<(LayerId, bool)> = state
        .document
        .layers_iter()
        .filter(|(_, layer)| layer.has_unsaved_changes)
        .map(|(id, layer)| (id, layer.is_file_exists))
        .collect();

    let mut skipped = 0;
    for (layer_id, is_file_exists) in pending {
        if is_file_exists {
            save_layer(state, layer_id, None)?;
        } else {
            skipped += 1;
        }
    }

    if skipped > 0 {
        let msg = format!("{} Layer ohne Dateipfad nicht gespeichert", skipped);
        log::warn!("{}", msg);
        state.ui.status_message = Some(msg);
    }
    Ok(skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn import_missing_file_reports_path() {
        let mut state = AppState::new();
        let path = temp_path("curve_editor_x_gibt_es_nicht.cvx");

        let err = import_file(&mut state, &path).expect_err("Fehler erwartet");

        assert!(format!("{:#}", err).contains("nicht lesbar"));
        assert!(state.document.is_empty());
        assert!(!state.can_undo());
    }

    #[test]
    fn import_malformed_file_keeps_document_untouched() {
        let path = temp_path("curve_editor_x_kaputt.cvx");
        std::fs::write(&path, "version:1\n0:0,1\n").expect("Schreiben erwartet");
        let mut state = AppState::new();

        let err = import_file(&mut state, &path).expect_err("Fehler erwartet");
        let _ = std::fs::remove_file(&path);

        assert!(format!("{:#}", err).contains("fehlerhaft"));
        assert!(state.document.is_empty());
    }

    #[test]
    fn save_new_layer_without_path_opens_dialog() {
        let mut state = AppState::new();
        super::super::layers::new_layer(&mut state);

        save_selected_layer(&mut state, None).expect("Dialog statt Fehler");

        assert!(state.ui.show_save_file_dialog);
        assert!(state.selected_layer().is_some_and(|l| l.has_unsaved_changes));
    }

    #[test]
    fn save_forces_extension_and_reimport_reuses_layer() {
        let mut state = AppState::new();
        super::super::layers::new_layer(&mut state);
        let requested = temp_path("curve_editor_x_save_test.txt");
        let expected = temp_path("curve_editor_x_save_test.cvx");

        save_selected_layer(&mut state, Some(requested)).expect("Speichern erwartet");

        let layer = state.selected_layer().expect("Layer vorhanden");
        assert_eq!(layer.path, expected);
        assert_eq!(layer.name, "curve_editor_x_save_test");
        assert!(!layer.has_unsaved_changes);
        assert!(layer.is_file_exists);

        let id = import_file(&mut state, &expected).expect("Import erwartet");
        let _ = std::fs::remove_file(&expected);

        assert_eq!(state.layer_count(), 1, "Bereits geöffnete Datei wird wiederverwendet");
        assert_eq!(state.document.selected_layer_id(), Some(id));
    }

    #[test]
    fn save_without_selection_fails() {
        let mut state = AppState::new();
        assert!(save_selected_layer(&mut state, None).is_err());
    }
}
