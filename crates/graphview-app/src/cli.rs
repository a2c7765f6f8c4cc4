//! Command-line arguments.

use graphview_core::config::parse_size;
use graphview_core::ViewerConfig;
use kurbo::Size;
use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "Usage: graphview [FILE] [--size WxH] [--reference WxH] [--svg OUT]";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Invalid size {0:?}, expected WIDTHxHEIGHT")]
    InvalidSize(String),
    #[error("Unexpected argument {0:?}")]
    Unexpected(String),
}

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
pub struct CliArgs {
    /// Shape file to open. When absent, a file dialog is shown.
    pub file: Option<PathBuf>,
    /// Canvas size.
    pub size: Option<Size>,
    /// Reference viewport size.
    pub reference: Option<Size>,
    /// SVG output path. When absent, the SVG goes to stdout.
    pub svg: Option<PathBuf>,
    pub help: bool,
}

impl CliArgs {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, CliError> {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "--size" => parsed.size = Some(size_value(&arg, args.next())?),
                "--reference" => parsed.reference = Some(size_value(&arg, args.next())?),
                "--svg" => {
                    let value = args.next().ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                    parsed.svg = Some(PathBuf::from(value));
                }
                _ if arg.starts_with('-') || parsed.file.is_some() => {
                    return Err(CliError::Unexpected(arg));
                }
                _ => parsed.file = Some(PathBuf::from(arg)),
            }
        }
        Ok(parsed)
    }

    /// Overlay command-line sizes on a base configuration.
    pub fn apply(&self, mut config: ViewerConfig) -> ViewerConfig {
        if let Some(size) = self.size {
            config.canvas_size = size;
        }
        if let Some(size) = self.reference {
            config.reference_size = size;
        }
        config
    }
}

fn size_value(flag: &str, value: Option<String>) -> Result<Size, CliError> {
    let value = value.ok_or_else(|| CliError::MissingValue(flag.to_string()))?;
    parse_size(&value).ok_or(CliError::InvalidSize(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, CliError> {
        CliArgs::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_full() {
        let args = parse(&["shapes.xml", "--size", "800x600", "--reference", "1600x1200", "--svg", "out.svg"]).unwrap();
        assert_eq!(args.file, Some(PathBuf::from("shapes.xml")));
        assert_eq!(args.size, Some(Size::new(800.0, 600.0)));
        assert_eq!(args.reference, Some(Size::new(1600.0, 1200.0)));
        assert_eq!(args.svg, Some(PathBuf::from("out.svg")));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(parse(&["--size"]), Err(CliError::MissingValue("--size".into())));
    }

    #[test]
    fn test_invalid_size() {
        assert_eq!(parse(&["--size", "big"]), Err(CliError::InvalidSize("big".into())));
    }

    #[test]
    fn test_second_file_rejected() {
        assert_eq!(parse(&["a.json", "b.json"]), Err(CliError::Unexpected("b.json".into())));
    }

    #[test]
    fn test_apply_overrides() {
        let args = parse(&["--size", "640x480"]).unwrap();
        let config = args.apply(ViewerConfig::new());
        assert_eq!(config.canvas_size, Size::new(640.0, 480.0));
        assert_eq!(config.reference_size, ViewerConfig::new().reference_size);
    }
}
