//! Application state and logic.

use std::path::{Path, PathBuf};

use crate::editor::{EditorState, Field};
use crate::error::{QuiverError, Result};
use crate::export;
use crate::scene::{PlotMode, Scene};
use crate::util;
use crate::view::{ViewState, ROTATE_STEP};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Color palette for surface rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPalette {
    /// Viridis colormap (perceptually uniform, colorblind-friendly).
    #[default]
    Viridis,
    /// Plasma colormap (perceptually uniform).
    Plasma,
    /// Rainbow/Spectral colormap (traditional, high contrast).
    Rainbow,
    /// Blue-White-Red diverging colormap.
    BlueRed,
}

impl ColorPalette {
    /// Get the next palette in cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Viridis => Self::Plasma,
            Self::Plasma => Self::Rainbow,
            Self::Rainbow => Self::BlueRed,
            Self::BlueRed => Self::Viridis,
        }
    }

    /// Get palette name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Viridis => "Viridis",
            Self::Plasma => "Plasma",
            Self::Rainbow => "Rainbow",
            Self::BlueRed => "Blue-Red",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Input field editing state.
    pub editor: EditorState,
    /// Active plot mode.
    pub mode: PlotMode,
    /// Last successfully rendered scene.
    pub scene: Option<Scene>,
    /// Pan/zoom/camera state.
    pub view: ViewState,
    /// Surface color palette.
    pub palette: ColorPalette,
    /// Current theme.
    pub theme: Theme,
    /// Status message.
    pub status: String,
    /// Error message from the last failed parse.
    pub error_message: Option<String>,
    /// Help overlay visibility.
    pub show_help: bool,
    /// Grid line visibility (2D).
    pub show_grid: bool,
    /// Point/vector label visibility.
    pub show_labels: bool,
    /// PNG snapshot output path.
    pub output_path: PathBuf,
}

impl App {
    /// Create a new application instance, optionally loading a scene file.
    pub fn new(scene_path: Option<PathBuf>, output_path: PathBuf) -> Self {
        let mut app = Self {
            editor: EditorState::new(),
            mode: PlotMode::TwoD,
            scene: None,
            view: ViewState::default(),
            palette: ColorPalette::default(),
            theme: Theme::GruvboxDark,
            status: "Ready".to_string(),
            error_message: None,
            show_help: false,
            show_grid: true,
            show_labels: true,
            output_path,
        };

        if let Some(path) = scene_path {
            match app.load_scene_file(&path) {
                Ok(()) => {
                    app.status = format!("Loaded {}", path.display());
                    tracing::info!("Scene file loaded: {}", path.display());
                },
                Err(e) => {
                    app.error_message = Some(format!("Error loading scene: {}", e));
                    app.status = "Error loading scene file".to_string();
                    tracing::error!("Error loading scene file: {}", e);
                },
            }
        }

        // Keep a load error visible instead of letting the initial render
        // replace it.
        if app.error_message.is_none() {
            app.render();
        }
        app
    }

    /// Load a scene file into the input fields.
    pub fn load_scene_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| QuiverError::file_open(path.to_path_buf(), e))?;
        self.apply_scene_text(&content)
    }

    /// Apply `key = value` scene lines to the input fields.
    ///
    /// Recognized keys: `mode`, `range`, `points`, `vectors`, `equation`.
    /// Blank lines and `#` comments are ignored.
    pub fn apply_scene_text(&mut self, content: &str) -> Result<()> {
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line.split_once('=').ok_or_else(|| {
                QuiverError::parse(format!("Scene line must be key = value. Got: {line}"))
            })?;
            let value = value.trim();
            match key.trim().to_ascii_lowercase().as_str() {
                "mode" => {
                    self.mode = match value.to_ascii_lowercase().as_str() {
                        "2d" => PlotMode::TwoD,
                        "3d" => PlotMode::ThreeD,
                        other => {
                            return Err(QuiverError::parse(format!(
                                "Mode must be 2d or 3d. Got: {other}"
                            )))
                        },
                    };
                },
                "range" => {
                    let mut parts = value.split_whitespace();
                    let (min, max) = match (parts.next(), parts.next(), parts.next()) {
                        (Some(min), Some(max), None) => (min, max),
                        _ => {
                            return Err(QuiverError::parse(format!(
                                "Range must be two numbers. Got: {value}"
                            )))
                        },
                    };
                    self.editor.set_text(Field::RangeMin, min);
                    self.editor.set_text(Field::RangeMax, max);
                },
                "points" => self.editor.set_text(Field::Points, value),
                "vectors" => self.editor.set_text(Field::Vectors, value),
                "equation" => self.editor.set_text(Field::Equation, value),
                other => {
                    return Err(QuiverError::parse(format!("Unknown scene key: {other}")));
                },
            }
        }
        Ok(())
    }

    /// Parse the input fields and replace the rendered scene.
    pub fn render(&mut self) {
        match Scene::from_inputs(
            self.mode,
            self.editor.text(Field::Points),
            self.editor.text(Field::Vectors),
            self.editor.text(Field::Equation),
            self.editor.text(Field::RangeMin),
            self.editor.text(Field::RangeMax),
        ) {
            Ok(scene) => {
                let refit = self
                    .scene
                    .as_ref()
                    .map(|old| old.range != scene.range || old.mode != scene.mode)
                    .unwrap_or(true);
                if refit {
                    self.view.fit(scene.mode, scene.range);
                }
                self.scene = Some(scene);
                self.error_message = None;
                self.status = "Rendered.".to_string();
                tracing::info!("Scene rendered");
            },
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.status = "Error.".to_string();
                tracing::info!("Render rejected: {}", e);
            },
        }
    }

    /// Clear the plot, keeping the input fields.
    pub fn clear_plot(&mut self) {
        self.scene = None;
        self.error_message = None;
        self.status = "Cleared.".to_string();
    }

    /// Toggle 2D/3D mode. The plot resets; the next render re-parses the
    /// fields against the new dimensionality.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
        self.scene = None;
        self.error_message = None;
        self.view.reset(self.mode, self.plot_range());
        self.status = format!("Mode: {}", self.mode.name());
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Cycle to next color palette.
    pub fn cycle_palette(&mut self) {
        self.palette = self.palette.next();
        self.status = format!("Palette: {}", self.palette.name());
    }

    /// Toggle grid lines.
    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
        self.status = if self.show_grid {
            "Grid: ON".to_string()
        } else {
            "Grid: OFF".to_string()
        };
    }

    /// Toggle point/vector labels.
    pub fn toggle_labels(&mut self) {
        self.show_labels = !self.show_labels;
        self.status = if self.show_labels {
            "Labels: ON".to_string()
        } else {
            "Labels: OFF".to_string()
        };
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Reset pan, zoom and camera.
    pub fn reset_view(&mut self) {
        self.view.reset(self.mode, self.plot_range());
        self.status = "View reset".to_string();
    }

    /// Rotate the 3D camera; no-op in 2D mode.
    pub fn rotate(&mut self, d_azimuth: f64, d_elevation: f64) {
        if self.mode != PlotMode::ThreeD {
            return;
        }
        self.view
            .rotate(d_azimuth * ROTATE_STEP, d_elevation * ROTATE_STEP);
        self.status = format!(
            "Camera: az {:.0}°, el {:.0}°",
            self.view.azimuth, self.view.elevation
        );
    }

    /// Copy a plain-text summary of the rendered scene to the clipboard.
    pub fn copy_scene(&mut self) {
        let Some(ref scene) = self.scene else {
            self.status = "Nothing to copy (render first)".to_string();
            return;
        };
        match util::copy_to_clipboard(&scene.summary()) {
            Ok(()) => self.status = "Scene copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Write the rendered scene to the PNG output path.
    pub fn save_snapshot(&mut self) {
        let Some(ref scene) = self.scene else {
            self.status = "Nothing to save (render first)".to_string();
            return;
        };
        match export::save_png(scene, &self.view, self.palette, &self.output_path) {
            Ok(()) => {
                self.status = format!("Saved {}", self.output_path.display());
                tracing::info!("Snapshot written to {}", self.output_path.display());
            },
            Err(e) => {
                self.status = format!("Save failed: {}", e);
                tracing::error!("Snapshot failed: {}", e);
            },
        }
    }

    /// Range of the rendered scene, or the range fields, or the default.
    /// Used for axis extents while no scene is rendered.
    pub fn plot_range(&self) -> (f64, f64) {
        if let Some(ref scene) = self.scene {
            return scene.range;
        }
        let min = self.editor.text(Field::RangeMin).trim().parse::<f64>();
        let max = self.editor.text(Field::RangeMax).trim().parse::<f64>();
        match (min, max) {
            (Ok(min), Ok(max)) if min < max => (min, max),
            _ => (-5.0, 5.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new(None, PathBuf::from("quiver.png"))
    }

    #[test]
    fn startup_renders_the_default_scene() {
        let app = test_app();
        let scene = app.scene.as_ref().unwrap();
        assert_eq!(scene.points.len(), 3);
        assert_eq!(scene.vectors.len(), 2);
        assert!(scene.equation.is_some());
        assert_eq!(app.status, "Rendered.");
        assert!(app.error_message.is_none());
    }

    #[test]
    fn render_error_keeps_previous_scene() {
        let mut app = test_app();
        app.editor.set_text(Field::Points, "(1,2,3)");
        app.render();
        assert!(app.error_message.as_ref().unwrap().contains("must have 2 numbers"));
        assert_eq!(app.status, "Error.");
        // The old scene stays on screen.
        assert!(app.scene.is_some());
    }

    #[test]
    fn toggle_mode_clears_the_plot() {
        let mut app = test_app();
        app.toggle_mode();
        assert_eq!(app.mode, PlotMode::ThreeD);
        assert!(app.scene.is_none());
        assert_eq!(app.status, "Mode: 3D");
        // Re-rendering the 2D defaults in 3D mode now reports a mismatch.
        app.render();
        assert!(app.error_message.is_some());
    }

    #[test]
    fn scene_text_populates_fields() {
        let mut app = test_app();
        app.apply_scene_text(
            "# demo scene\nmode = 3d\nrange = -2 2\npoints = (1,1,1)\nvectors = <1,0,0>\nequation = x*y\n",
        )
        .unwrap();
        assert_eq!(app.mode, PlotMode::ThreeD);
        assert_eq!(app.editor.text(Field::RangeMin), "-2");
        assert_eq!(app.editor.text(Field::Points), "(1,1,1)");
        app.render();
        assert!(app.error_message.is_none());
        assert_eq!(app.scene.as_ref().unwrap().mode, PlotMode::ThreeD);
    }

    #[test]
    fn scene_text_rejects_unknown_keys() {
        let mut app = test_app();
        let err = app.apply_scene_text("color = red\n").unwrap_err();
        assert!(err.to_string().contains("Unknown scene key: color"));
        let err = app.apply_scene_text("just some text\n").unwrap_err();
        assert!(err.to_string().contains("key = value"));
    }

    #[test]
    fn pan_survives_re_render_with_same_range() {
        let mut app = test_app();
        app.view.pan(3.0, 0.0);
        let panned = app.view.center;
        app.render();
        assert_eq!(app.view.center, panned);
        // Changing the range refits the view.
        app.editor.set_text(Field::RangeMax, "10");
        app.render();
        assert_ne!(app.view.center, panned);
    }

    #[test]
    fn clear_keeps_inputs() {
        let mut app = test_app();
        app.clear_plot();
        assert!(app.scene.is_none());
        assert_eq!(app.status, "Cleared.");
        assert_eq!(app.editor.text(Field::Points), "(1,2); (0,0); (-3,4)");
    }

    #[test]
    fn rotate_is_a_noop_in_2d() {
        let mut app = test_app();
        let az = app.view.azimuth;
        app.rotate(1.0, 0.0);
        assert_eq!(app.view.azimuth, az);
        app.toggle_mode();
        app.rotate(1.0, 0.0);
        assert_ne!(app.view.azimuth, az);
    }
}
