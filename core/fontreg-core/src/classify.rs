//! Reading a font's personality from its filename
//!
//! Nobody opens the font files here. Weight and style are guessed from the
//! words people tend to put in font filenames, and the filename itself is
//! squeezed into something Android accepts as a resource name.

/// Weight keywords in the order they are tried. `extralight` precedes `light`,
/// and `semibold`/`extrabold` precede `bold`, because the longer words contain
/// the shorter ones.
pub const WEIGHT_KEYWORDS: [(&str, &str); 9] = [
    ("thin", "100"),
    ("extralight", "200"),
    ("light", "300"),
    ("regular", "400"),
    ("medium", "500"),
    ("semibold", "600"),
    ("extrabold", "800"),
    ("bold", "700"),
    ("black", "900"),
];

pub const DEFAULT_WEIGHT: &str = "400";

/// Weight for a lowercased resource identifier; first keyword hit wins.
pub fn font_weight(ident: &str) -> &'static str {
    WEIGHT_KEYWORDS
        .iter()
        .find(|(keyword, _)| ident.contains(keyword))
        .map(|(_, weight)| *weight)
        .unwrap_or(DEFAULT_WEIGHT)
}

/// `italic` when the identifier says so, `normal` otherwise.
pub fn font_style(ident: &str) -> &'static str {
    if ident.contains("italic") {
        "italic"
    } else {
        "normal"
    }
}

/// Destination filename inside `res/font`: lowercase, hyphens become underscores.
pub fn resource_name(file_name: &str) -> String {
    file_name.to_lowercase().replace('-', "_")
}

/// Resource identifier as referenced from XML (`@font/<ident>`) and Java
/// (`R.font.<ident>`): the resource name cut at its first dot.
pub fn resource_ident(file_name: &str) -> String {
    let name = resource_name(file_name);
    match name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => name,
    }
}

/// Whether an asset filename belongs to a family. Case-sensitive substring match.
pub fn belongs_to_family(file_name: &str, family: &str) -> bool {
    file_name.contains(family)
}
