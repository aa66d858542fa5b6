//! Recognized option keys.

use std::fmt;

/// Every single-character key the tool understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKey {
    /// Input image path
    Input,
    /// Output file path
    Output,
    /// Source pixel order
    PixelOrder,
    /// Target texture format
    TextureFormat,
    /// Generate mipmaps (`true`/`false`)
    Mipmaps,
    /// Maximum mipmap levels
    MipmapLevels,
    /// Tile grid `<columns>-<rows>`
    Split,
    /// Tile layout `exact`/`shared`
    TileLayout,
}

/// Key character of every [`ParamKey`].
const KEY_CHARS: [(char, ParamKey); 8] = [
    ('i', ParamKey::Input),
    ('o', ParamKey::Output),
    ('p', ParamKey::PixelOrder),
    ('f', ParamKey::TextureFormat),
    ('m', ParamKey::Mipmaps),
    ('n', ParamKey::MipmapLevels),
    ('s', ParamKey::Split),
    ('t', ParamKey::TileLayout),
];

impl ParamKey {
    pub fn from_char(key: char) -> Option<Self> {
        KEY_CHARS
            .iter()
            .find(|(c, _)| *c == key)
            .map(|(_, param)| *param)
    }

    pub fn as_char(self) -> char {
        KEY_CHARS
            .iter()
            .find(|(_, param)| *param == self)
            .map(|(c, _)| *c)
            .unwrap_or('?')
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}", self.as_char())
    }
}
