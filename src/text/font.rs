//! Font resolution.
//!
//! Resolution walks a fixed chain and never fails: an explicitly configured file, then well-known
//! platform font files, then a sans-serif face from the OS font database, and finally the built-in
//! bitmap font.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use usvg::fontdb;

use crate::foundation::error::{StoreartError, StoreartResult};

/// Font files probed when no explicit font is configured, in order.
pub const PLATFORM_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/Library/Fonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Which font the labels should use.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontPreference {
    /// Platform files, then the system font database, then the built-in font.
    #[default]
    Auto,
    /// Always use the built-in bitmap font.
    Builtin,
    /// Try this file first, then continue as [`FontPreference::Auto`].
    File(PathBuf),
}

/// A parsed outline font held in memory.
#[derive(Clone)]
pub struct OutlineFont {
    data: Arc<Vec<u8>>,
    family: String,
    origin: String,
}

impl std::fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineFont")
            .field("family", &self.family)
            .field("origin", &self.origin)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl OutlineFont {
    /// Parse font bytes; `origin` is a human-readable description of where they came from.
    pub fn from_bytes(data: Vec<u8>, origin: impl Into<String>) -> StoreartResult<Self> {
        let origin = origin.into();
        let data = Arc::new(data);
        let mut db = fontdb::Database::new();
        db.load_font_source(fontdb::Source::Binary(data.clone()));
        let family = db
            .faces()
            .next()
            .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
            .ok_or_else(|| StoreartError::font(format!("'{origin}' holds no usable font face")))?;
        Ok(Self {
            data,
            family,
            origin,
        })
    }

    /// Read and parse a font file.
    pub fn from_file(path: impl AsRef<Path>) -> StoreartResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            StoreartError::font(format!("failed to read font '{}': {e}", path.display()))
        })?;
        Self::from_bytes(bytes, path.display().to_string())
    }

    /// Raw font file bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Family name of the first face.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Where the font was loaded from.
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

/// Outcome of font resolution.
#[derive(Clone, Debug)]
pub enum ResolvedFont {
    /// A loaded outline font, shaped with Parley.
    Outline(OutlineFont),
    /// The built-in bitmap font.
    Builtin,
}

impl ResolvedFont {
    /// Short description for logs and console output.
    pub fn describe(&self) -> String {
        match self {
            Self::Outline(f) => format!("{} ({})", f.family(), f.origin()),
            Self::Builtin => "built-in bitmap font".to_string(),
        }
    }
}

/// Walk the resolution chain for `pref`.
pub fn resolve_font(pref: &FontPreference) -> ResolvedFont {
    let explicit = match pref {
        FontPreference::Builtin => return ResolvedFont::Builtin,
        FontPreference::File(p) => Some(p.as_path()),
        FontPreference::Auto => None,
    };

    let candidates = explicit
        .into_iter()
        .chain(PLATFORM_FONT_PATHS.iter().map(Path::new));
    for path in candidates {
        match OutlineFont::from_file(path) {
            Ok(font) => {
                tracing::debug!(font = %font.family(), path = %path.display(), "loaded font file");
                return ResolvedFont::Outline(font);
            }
            Err(e) if explicit == Some(path) => {
                tracing::warn!(error = %e, "configured font unavailable, falling back");
            }
            Err(e) => tracing::debug!(error = %e, "font candidate skipped"),
        }
    }

    match system_sans_serif() {
        Ok(font) => {
            tracing::debug!(font = %font.family(), "using system sans-serif font");
            ResolvedFont::Outline(font)
        }
        Err(e) => {
            tracing::warn!(error = %e, "no outline font available, using built-in bitmap font");
            ResolvedFont::Builtin
        }
    }
}

/// Query the OS font database for a sans-serif face.
pub fn system_sans_serif() -> StoreartResult<OutlineFont> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    let query = fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        ..fontdb::Query::default()
    };
    let id = db
        .query(&query)
        .ok_or_else(|| StoreartError::font("system font database has no sans-serif face"))?;
    let bytes = db
        .with_face_data(id, |data, _index| data.to_vec())
        .ok_or_else(|| StoreartError::font("sans-serif face data is unavailable"))?;
    OutlineFont::from_bytes(bytes, "system font database")
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
