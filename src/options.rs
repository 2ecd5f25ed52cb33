//! Extraction options and layout mode selection.

use log::warn;

/// Strategy for reconstructing text flow from a page's positioned runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Natural left-to-right, top-to-bottom reading order.
    #[default]
    ReadingOrder,
    /// Keep the physical layout of the page.
    Physical,
    /// Simple one-column layout.
    Simple,
    /// Table-optimized layout.
    Table,
    /// Fixed-pitch, fixed-line-spacing line printer layout.
    LinePrinter,
    /// Content stream order, no layout reconstruction.
    Raw,
}

/// Layout flags as given on the command line, before precedence
/// resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutFlags {
    pub table: bool,
    pub physical: bool,
    pub simple: bool,
    pub line_printer: bool,
    pub raw: bool,
}

impl LayoutMode {
    /// Resolve mutually exclusive layout flags into a single mode.
    ///
    /// When several flags are set, the first match wins: table,
    /// physical, simple, line printer, raw, reading order. The order is
    /// fixed for compatibility with existing scripts.
    pub fn from_flags(flags: LayoutFlags) -> Self {
        match flags {
            LayoutFlags { table: true, .. } => LayoutMode::Table,
            LayoutFlags { physical: true, .. } => LayoutMode::Physical,
            LayoutFlags { simple: true, .. } => LayoutMode::Simple,
            LayoutFlags {
                line_printer: true, ..
            } => LayoutMode::LinePrinter,
            LayoutFlags { raw: true, .. } => LayoutMode::Raw,
            _ => LayoutMode::ReadingOrder,
        }
    }

    /// Whether this mode honors a fixed character pitch.
    pub fn uses_fixed_pitch(self) -> bool {
        matches!(
            self,
            LayoutMode::Table | LayoutMode::Physical | LayoutMode::LinePrinter
        )
    }
}

/// Output line-ending convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Eol {
    #[default]
    Unix,
    Dos,
    Mac,
}

impl Eol {
    /// Parse an end-of-line flag value.
    ///
    /// An unknown value is a warning, not an error; the caller falls
    /// back to its default and extraction proceeds.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        match value {
            "unix" => Some(Eol::Unix),
            "dos" => Some(Eol::Dos),
            "mac" => Some(Eol::Mac),
            other => {
                warn!("bad '-eol' value: '{}'", other);
                None
            }
        }
    }

    /// The character sequence this convention ends lines with.
    pub fn as_str(self) -> &'static str {
        match self {
            Eol::Unix => "\n",
            Eol::Dos => "\r\n",
            Eol::Mac => "\r",
        }
    }
}

/// Immutable extraction configuration, built once from the parsed
/// command line and consumed by the extraction driver.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Layout reconstruction mode.
    pub layout: LayoutMode,

    /// Character pitch for physical, table, and line printer layout
    /// (0 means automatic).
    pub fixed_pitch: f64,

    /// Line spacing for line printer layout (0 means automatic).
    pub line_spacing: f64,

    /// Emit clipped text as separate runs.
    pub clip_text: bool,

    /// Discard diagonally-oriented text.
    pub discard_diagonal: bool,

    /// Prepend a byte order mark to the output.
    pub insert_bom: bool,

    /// Output text encoding name.
    pub encoding_name: String,

    /// Output line-ending convention.
    pub eol: Eol,

    /// Write a page break marker after each page.
    pub page_breaks: bool,

    /// Suppress diagnostic messages.
    pub quiet: bool,
}

impl ExtractOptions {
    /// Create extraction options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout mode.
    pub fn with_layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    /// Set the fixed character pitch.
    pub fn with_fixed_pitch(mut self, pitch: f64) -> Self {
        self.fixed_pitch = pitch;
        self
    }

    /// Set the fixed line spacing.
    pub fn with_line_spacing(mut self, spacing: f64) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Enable or disable separate clipped text runs.
    pub fn with_clip(mut self, clip: bool) -> Self {
        self.clip_text = clip;
        self
    }

    /// Enable or disable discarding of diagonal text.
    pub fn with_discard_diagonal(mut self, discard: bool) -> Self {
        self.discard_diagonal = discard;
        self
    }

    /// Enable or disable the leading byte order mark.
    pub fn with_bom(mut self, bom: bool) -> Self {
        self.insert_bom = bom;
        self
    }

    /// Set the output text encoding name.
    pub fn with_encoding(mut self, name: impl Into<String>) -> Self {
        self.encoding_name = name.into();
        self
    }

    /// Set the line-ending convention.
    pub fn with_eol(mut self, eol: Eol) -> Self {
        self.eol = eol;
        self
    }

    /// Enable or disable page break markers.
    pub fn with_page_breaks(mut self, breaks: bool) -> Self {
        self.page_breaks = breaks;
        self
    }

    /// Enable or disable quiet mode.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            layout: LayoutMode::ReadingOrder,
            fixed_pitch: 0.0,
            line_spacing: 0.0,
            clip_text: false,
            discard_diagonal: false,
            insert_bom: false,
            encoding_name: "UTF-8".to_string(),
            eol: Eol::Unix,
            page_breaks: true,
            quiet: false,
        }
    }
}
