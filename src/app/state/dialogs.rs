/// Dialog- und Statuszustand, den der Host anzeigt.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Datei-Öffnen-Dialog anzeigen
    pub show_open_file_dialog: bool,
    /// Datei-Speichern-Dialog anzeigen
    pub show_save_file_dialog: bool,
    /// Letzte Statusmeldung für die Statusleiste
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt einen Zustand ohne offene Dialoge.
    pub fn new() -> Self {
        Self::default()
    }
}
