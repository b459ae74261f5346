//! Configuration for a render data session

use serde::{Deserialize, Serialize};

use crate::core::{
    CodePage, ColorTable, CursorColor, CursorShape, FontInfo, OutputBuffer, OutputMode, Rgb,
    Session, TextAttribute, DEFAULT_CURSOR_SIZE,
};

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Buffer and viewport width in columns
    pub columns: u16,
    /// Viewport height in rows
    pub rows: u16,
    /// Total buffer height in rows (viewport plus scrollback)
    pub buffer_rows: u16,
    /// Window title
    pub title: String,
    /// Output code page
    pub code_page: u32,
    /// Enable virtual terminal output processing
    pub virtual_terminal: bool,
    /// Allow grid lines outside DBCS code pages
    pub grid_worldwide: bool,
    pub font: FontConfig,
    pub colors: ColorConfig,
    pub cursor: CursorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: 80,
            rows: 24,
            buffer_rows: 300,
            title: "Mochi Terminal".to_string(),
            code_page: CodePage::default().0,
            virtual_terminal: false,
            grid_worldwide: false,
            font: FontConfig::default(),
            colors: ColorConfig::default(),
            cursor: CursorConfig::default(),
        }
    }
}

/// Font configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub face_name: String,
    pub cell_width: u16,
    pub cell_height: u16,
    pub weight: u16,
}

impl Default for FontConfig {
    fn default() -> Self {
        let font = FontInfo::default();
        Self {
            face_name: font.face_name,
            cell_width: font.cell_width,
            cell_height: font.cell_height,
            weight: font.weight,
        }
    }
}

/// Color configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Default foreground color (palette entry 7 if unset)
    pub foreground: Option<(u8, u8, u8)>,
    /// Default background color (palette entry 0 if unset)
    pub background: Option<(u8, u8, u8)>,
    /// Color table entries, in console order
    pub table: Vec<(u8, u8, u8)>,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            foreground: None,
            background: None,
            table: ColorTable::default()
                .as_slice()
                .iter()
                .map(|c| (c.r, c.g, c.b))
                .collect(),
        }
    }
}

/// Cursor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Size in percent of the cell height
    pub size: u32,
    pub shape: CursorShape,
    /// Fixed cursor color; unset draws by inverting the cell
    pub color: Option<(u8, u8, u8)>,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_CURSOR_SIZE,
            shape: CursorShape::default(),
            color: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from default location or return default config
    pub fn load_or_default() -> Self {
        // Try to load from ~/.config/mochi/render.json
        if let Some(config_dir) = dirs_config_path() {
            let config_path = config_dir.join("render.json");
            if config_path.exists() {
                match Self::load(&config_path) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("Ignoring {}: {}", config_path.display(), e),
                }
            }
        }
        Self::default()
    }

    /// Build a fresh session from this configuration
    pub fn build_session(&self) -> Session {
        let attributes = TextAttribute::default();
        let mut buffer = OutputBuffer::new(
            self.columns as usize,
            self.buffer_rows.max(self.rows) as usize,
            self.rows as usize,
            attributes,
        );
        buffer.set_font(FontInfo {
            face_name: self.font.face_name.clone(),
            cell_width: self.font.cell_width,
            cell_height: self.font.cell_height,
            weight: self.font.weight,
            ..FontInfo::default()
        });
        if self.virtual_terminal {
            buffer.output_mode |= OutputMode::VIRTUAL_TERMINAL_PROCESSING;
        }

        let cursor = buffer.text_buffer_mut().cursor_mut();
        cursor.set_size(self.cursor.size);
        cursor.shape = self.cursor.shape;
        cursor.color = match self.cursor.color {
            Some(rgb) => CursorColor::Rgb(rgb.into()),
            None => CursorColor::Invert,
        };

        let mut session = Session::new(buffer);
        session.set_title(self.title.clone());
        session.output_cp = CodePage(self.code_page);
        session.set_grid_rendering_allowed_worldwide(self.grid_worldwide);
        session.set_color_table(ColorTable::new(
            self.colors.table.iter().copied().map(Rgb::from).collect(),
        ));
        session.set_default_foreground(self.colors.foreground.map(Rgb::from));
        session.set_default_background(self.colors.background.map(Rgb::from));
        session
    }
}

/// Get the configuration directory path
fn dirs_config_path() -> Option<std::path::PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| std::path::PathBuf::from(home).join(".config").join("mochi"))
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.columns, 80);
        assert_eq!(config.rows, 24);
        assert_eq!(config.colors.table.len(), 16);
        assert!(!config.virtual_terminal);
        assert!(config.cursor.color.is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"code_page": 932, "cursor": {"size": 100}}"#).unwrap();
        assert_eq!(config.code_page, 932);
        assert_eq!(config.cursor.size, 100);
        assert_eq!(config.cursor.shape, CursorShape::Legacy);
        assert_eq!(config.columns, 80);
    }

    #[test]
    fn test_build_session() {
        let mut config = Config::default();
        config.columns = 40;
        config.rows = 10;
        config.buffer_rows = 5;
        config.virtual_terminal = true;
        config.cursor.color = Some((255, 0, 0));
        config.colors.foreground = Some((1, 2, 3));

        let session = config.build_session();
        let buffer = session.active_output_buffer();
        assert_eq!(buffer.text_buffer().cols(), 40);
        // Buffer is never shorter than the viewport
        assert_eq!(buffer.text_buffer().rows(), 10);
        assert_eq!(buffer.viewport().height(), 10);
        assert!(buffer.is_virtual_terminal());
        assert_eq!(
            buffer.text_buffer().cursor().color,
            CursorColor::Rgb(Rgb::new(255, 0, 0))
        );
        assert_eq!(session.default_foreground(), Rgb::new(1, 2, 3));
        assert_eq!(session.title(), "Mochi Terminal");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("render.json");

        let mut config = Config::default();
        config.title = "saved".to_string();
        config.grid_worldwide = true;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.title, "saved");
        assert!(loaded.grid_worldwide);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Json(_))));
        assert!(matches!(
            Config::load(&dir.path().join("missing.json")),
            Err(ConfigError::Io(_))
        ));
    }
}
