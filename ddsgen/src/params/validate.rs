//! Key and value validation, producing the typed [`Parameters`] record.

use std::path::{Path, PathBuf};

use super::{ParamError, ParamKey, ParameterMap};
use crate::config::defaults::OUTPUT_EXTENSION;
use crate::dds::TextureFormat;
use crate::pixel::PixelOrder;
use crate::tile::TileLayout;

/// Validated command-line parameters.
///
/// Optional fields are `None` when the option was not given; the
/// resolver decides what that means once the image is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    pub input: PathBuf,
    /// Given with `-o`/second positional, or derived from `input`.
    pub output: PathBuf,
    pub pixel_order: Option<PixelOrder>,
    pub texture_format: Option<TextureFormat>,
    pub generate_mipmaps: Option<bool>,
    pub mipmap_levels: Option<u32>,
    /// Raw `-s` value, parsed by [`TileGrid::parse`](crate::tile::TileGrid::parse).
    pub split: Option<String>,
    pub layout: TileLayout,
}

/// Check every entry of `map` and build [`Parameters`].
///
/// Entries are checked in key order and the first failure is returned.
pub fn validate(map: &ParameterMap) -> Result<Parameters, ParamError> {
    let mut pixel_order = None;
    let mut texture_format = None;
    let mut generate_mipmaps = None;
    let mut mipmap_levels = None;
    let mut split = None;
    let mut layout = TileLayout::default();

    for (key, value) in map.iter() {
        let param = ParamKey::from_char(key).ok_or(ParamError::UnknownParameter(key))?;
        let invalid = || ParamError::InvalidParameter(key);

        match param {
            ParamKey::Input | ParamKey::Output => {}
            ParamKey::PixelOrder => {
                pixel_order = Some(value.parse::<PixelOrder>().map_err(|_| invalid())?)
            }
            ParamKey::TextureFormat => {
                texture_format = Some(value.parse::<TextureFormat>().map_err(|_| invalid())?)
            }
            ParamKey::Mipmaps => {
                generate_mipmaps = Some(match value {
                    "true" => true,
                    "false" => false,
                    _ => return Err(invalid()),
                })
            }
            ParamKey::MipmapLevels => {
                mipmap_levels = Some(value.parse::<u32>().map_err(|_| invalid())?)
            }
            ParamKey::Split => split = Some(value.to_string()),
            ParamKey::TileLayout => {
                layout = value.parse::<TileLayout>().map_err(|_| invalid())?
            }
        }
    }

    let input = map.get('i').ok_or(ParamError::InputFileUndefined)?;
    let output = match map.get('o') {
        Some(output) => PathBuf::from(output),
        None => default_output(input),
    };

    Ok(Parameters {
        input: PathBuf::from(input),
        output,
        pixel_order,
        texture_format,
        generate_mipmaps,
        mipmap_levels,
        split,
        layout,
    })
}

/// Output path for `input`: its final extension replaced by `.dds`.
///
/// Only the last path component is considered, so a dot in a directory
/// name is never mistaken for an extension.
pub fn default_output(input: &str) -> PathBuf {
    let name_start = input
        .rfind(std::path::is_separator)
        .map(|i| i + 1)
        .unwrap_or(0);

    let stem_end = match input[name_start..].rfind('.') {
        Some(dot) => name_start + dot,
        None => input.len(),
    };

    PathBuf::from(format!("{}.{}", &input[..stem_end], OUTPUT_EXTENSION))
}

/// File name of `output` without its final extension.
pub fn output_stem(output: &Path) -> String {
    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.rfind('.') {
        Some(dot) => name[..dot].to_string(),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::parse_args;
    use crate::params::Invocation;

    #[test]
    fn test_texture_format_names_are_case_sensitive() {
        assert_eq!(
            params(&["map.png", "-f", "dxt1"]).unwrap_err(),
            ParamError::InvalidParameter('f')
        );
        assert!(params(&["map.png", "-f", "DXT1"]).is_ok());
    }

    fn params(args: &[&str]) -> Result<Parameters, ParamError> {
        match parse_args(args.iter().copied()) {
            Ok(Invocation::Convert(map)) => validate(&map),
            other => panic!("expected Convert, got {other:?}"),
        }
    }

    #[test]
    fn test_minimal() {
        let p = params(&["-f", "DXT1", "photo.jpg"]).unwrap();
        assert_eq!(p.input, PathBuf::from("photo.jpg"));
        assert_eq!(p.output, PathBuf::from("photo.dds"));
        assert_eq!(p.texture_format, Some(TextureFormat::Dxt1));
        assert_eq!(p.pixel_order, None);
        assert_eq!(p.generate_mipmaps, None);
        assert_eq!(p.mipmap_levels, None);
        assert_eq!(p.split, None);
        assert_eq!(p.layout, TileLayout::Exact);
    }

    #[test]
    fn test_all_options() {
        let p = params(&[
            "-i", "in.tga", "-o", "out.dds", "-p", "BGRA", "-f", "8888", "-m", "true", "-n",
            "4", "-s", "2-2", "-t", "shared",
        ])
        .unwrap();

        assert_eq!(p.output, PathBuf::from("out.dds"));
        assert_eq!(p.pixel_order, Some(PixelOrder::Bgra));
        assert_eq!(p.texture_format, Some(TextureFormat::Argb8888));
        assert_eq!(p.generate_mipmaps, Some(true));
        assert_eq!(p.mipmap_levels, Some(4));
        assert_eq!(p.split.as_deref(), Some("2-2"));
        assert_eq!(p.layout, TileLayout::SharedEdge);
    }

    #[test]
    fn test_missing_input() {
        assert_eq!(
            params(&["-f", "DXT1"]).unwrap_err(),
            ParamError::InputFileUndefined
        );
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            params(&["-x", "1", "a.png"]).unwrap_err(),
            ParamError::UnknownParameter('x')
        );
        assert_eq!(
            params(&["-h", "1", "a.png"]).unwrap_err(),
            ParamError::UnknownParameter('h')
        );
    }

    #[test]
    fn test_invalid_values() {
        let cases: [(&[&str], char); 7] = [
            (&["-p", "rgb", "a"], 'p'),
            (&["-f", "DXT2", "a"], 'f'),
            (&["-m", "yes", "a"], 'm'),
            (&["-n", "-1", "a"], 'n'),
            (&["-n", "3x", "a"], 'n'),
            (&["-t", "overlap", "a"], 't'),
            (&["-fDXT1", "-mtrue", "a"], 'f'),
        ];
        for (args, key) in cases {
            assert_eq!(
                params(args).unwrap_err(),
                ParamError::InvalidParameter(key),
                "{args:?}"
            );
        }
    }

    #[test]
    fn test_first_error_in_key_order_wins() {
        // 'f' sorts before 'm' and both are bad
        assert_eq!(
            params(&["-m", "maybe", "-f", "BC7", "a"]).unwrap_err(),
            ParamError::InvalidParameter('f')
        );
        // Key errors still come before a missing input
        assert_eq!(
            params(&["-z", "1"]).unwrap_err(),
            ParamError::UnknownParameter('z')
        );
    }

    #[test]
    fn test_split_is_not_checked_here() {
        let p = params(&["-s", "banana", "a.png"]).unwrap();
        assert_eq!(p.split.as_deref(), Some("banana"));
    }

    #[test]
    fn test_default_output() {
        assert_eq!(default_output("photo.jpg"), PathBuf::from("photo.dds"));
        assert_eq!(
            default_output("archive.tar.jpg"),
            PathBuf::from("archive.tar.dds")
        );
        assert_eq!(default_output("scan"), PathBuf::from("scan.dds"));
        assert_eq!(
            default_output("maps.v2/scan"),
            PathBuf::from("maps.v2/scan.dds")
        );
        assert_eq!(
            default_output("maps/ground.png"),
            PathBuf::from("maps/ground.dds")
        );
    }

    #[test]
    fn test_output_stem() {
        assert_eq!(output_stem(Path::new("out/terrain.dds")), "terrain");
        assert_eq!(output_stem(Path::new("a.b.dds")), "a.b");
        assert_eq!(output_stem(Path::new("plain")), "plain");
    }
}
