//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Aktuelle Slider-Werte, einmal pro Frame (Segmentlängen + Gelenkwinkel in Grad)
    ArmInputChanged {
        segments: Vec<f64>,
        angles: Vec<f64>,
    },
    /// Spur leeren (Taste C oder Button)
    ClearTraceRequested,
    /// Spur ein-/ausblenden (Taste T)
    ToggleTraceRequested,
    /// Arbeitsraum-Kreise ein-/ausblenden (Taste W)
    ToggleWorkspaceRequested,
    /// Arm auf die Preset-Startwerte zurücksetzen (Taste R oder Button)
    ResetArmRequested,
    /// Anwendung beenden
    ExitRequested,
}

/// Mutierende Commands, die der Controller auf den AppState anwendet.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Neue Konfiguration übernehmen (bei Fehler bleibt die letzte gültige)
    ApplyArmConfiguration {
        segments: Vec<f64>,
        angles: Vec<f64>,
    },
    /// Frame ohne Winkeländerung: Gelenk-Deltas auf 0 setzen
    SettleArm,
    /// Spur leeren
    ClearTrace,
    /// Sichtbarkeit der Spur umschalten
    ToggleTraceVisibility,
    /// Sichtbarkeit der Arbeitsraum-Kreise umschalten
    ToggleWorkspaceVisibility,
    /// Arm und Slider auf Preset-Startwerte setzen
    ResetArm,
    /// Anwendung kontrolliert beenden
    RequestExit,
}
