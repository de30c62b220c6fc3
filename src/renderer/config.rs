//! Configuration for document output

/// Stylesheet import for the monospace font the document text uses
pub const DEFAULT_FONT_IMPORT_URL: &str =
    "https://fonts.googleapis.com/css?family=Source+Code+Pro";

/// Scripting library referenced from the document head. Cosmetic: nothing in
/// the rendered output requires it at render time.
pub const DEFAULT_SCRIPT_URL: &str =
    "https://ajax.googleapis.com/ajax/libs/jquery/1.12.2/jquery.min.js";

/// Configuration options for the rendered document
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// URL imported by the embedded style sheet for the text font
    pub font_import_url: String,

    /// External script reference in the document head; `None` omits the tag
    pub script_url: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            font_import_url: DEFAULT_FONT_IMPORT_URL.to_string(),
            script_url: Some(DEFAULT_SCRIPT_URL.to_string()),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font import URL
    pub fn with_font_import_url(mut self, url: impl Into<String>) -> Self {
        self.font_import_url = url.into();
        self
    }

    /// Set the external script reference
    pub fn with_script_url(mut self, url: impl Into<String>) -> Self {
        self.script_url = Some(url.into());
        self
    }

    /// Omit the external script reference
    pub fn without_script(mut self) -> Self {
        self.script_url = None;
        self
    }
}
