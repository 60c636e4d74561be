//! Command-line flags.
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use circle_scene::field::NoiseSettings;
use circle_scene::packing::SceneConfig;

pub const USAGE: &str = "\
Generate a scene of non-overlapping circles for a Dirichlet walk-on-spheres solver.

Usage: circle-scene [OPTIONS]

Options:
  --i, --image <PATH>        Image to take boundary values from (Perlin noise otherwise)
  --w, --width <F>           Scene width
  --h, --height <F>          Scene height
  --ncircs <N>               Number of circles to place [default: 20]
  --minr <F>                 Min radius relative to min scene dimension [default: 0.01]
  --maxr <F>                 Max radius relative to min scene dimension [default: 0.1]
  --xs <F>                   Extra spacing relative to min scene dimension [default: 0.01]
  --attempts <N>             Placement attempts per circle [default: 25]
  --octaves <N>              Noise octaves when no image is given [default: 10]
  --seed <N>                 Random seed (clock based when omitted)
  --o <NAME>                 Output base name
  --odir <DIR>               Output directory
  --help                     Print this help

Without an image both --w and --h are required. With an image, a missing
dimension keeps the image aspect ratio and both missing use its pixel size.";

/// Parsed command-line flags. Unset values fall back to library defaults.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CliArgs {
    pub image: Option<PathBuf>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub num_circles: Option<usize>,
    pub min_radius: Option<f64>,
    pub max_radius: Option<f64>,
    pub extra_spacing: Option<f64>,
    pub max_attempts: Option<usize>,
    pub octaves: Option<u32>,
    pub seed: Option<u64>,
    pub output: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub help: bool,
}

impl CliArgs {
    /// Parses flags, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut out = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            if flag == "--help" {
                out.help = true;
                continue;
            }
            let mut value = || {
                args.next()
                    .ok_or_else(|| anyhow!("missing value for '{flag}'"))
            };
            match flag.as_str() {
                "--i" | "--image" => out.image = Some(PathBuf::from(value()?)),
                "--w" | "--width" => out.width = Some(number(&flag, value()?)?),
                "--h" | "--height" => out.height = Some(number(&flag, value()?)?),
                "--ncircs" => out.num_circles = Some(number(&flag, value()?)?),
                "--minr" => out.min_radius = Some(number(&flag, value()?)?),
                "--maxr" => out.max_radius = Some(number(&flag, value()?)?),
                "--xs" => out.extra_spacing = Some(number(&flag, value()?)?),
                "--attempts" => out.max_attempts = Some(number(&flag, value()?)?),
                "--octaves" => out.octaves = Some(number(&flag, value()?)?),
                "--seed" => out.seed = Some(number(&flag, value()?)?),
                "--o" | "--output" => out.output = Some(value()?),
                "--odir" => out.output_dir = Some(PathBuf::from(value()?)),
                other => bail!("unknown option '{other}'\n\n{USAGE}"),
            }
        }

        Ok(out)
    }

    /// Builds the scene configuration described by these flags.
    pub fn scene_config(&self) -> SceneConfig {
        let mut config = SceneConfig::default();
        if let Some(path) = &self.image {
            config = config.with_image_path(path.clone());
        }
        if let Some(w) = self.width {
            config = config.with_width(w);
        }
        if let Some(h) = self.height {
            config = config.with_height(h);
        }
        if let Some(n) = self.num_circles {
            config = config.with_num_circles(n);
        }
        if let Some(min) = self.min_radius {
            config = config.with_min_radius_fraction(min);
        }
        if let Some(max) = self.max_radius {
            config = config.with_max_radius_fraction(max);
        }
        if let Some(xs) = self.extra_spacing {
            config = config.with_extra_spacing_fraction(xs);
        }
        if let Some(attempts) = self.max_attempts {
            config = config.with_max_attempts(attempts);
        }
        if let Some(octaves) = self.octaves {
            config = config.with_noise(NoiseSettings::default().with_octaves(octaves));
        }
        config
    }
}

fn number<T>(flag: &str, raw: String) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse::<T>()
        .with_context(|| format!("invalid value '{raw}' for '{flag}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs> {
        CliArgs::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_short_and_long_flags() {
        let args = parse(&[
            "--i", "cat.png", "--width", "50", "--ncircs", "100", "--minr", "0.02", "--maxr",
            "0.2", "--xs", "0", "--seed", "7", "--o", "cats", "--odir", "out",
        ])
        .unwrap();
        assert_eq!(args.image, Some(PathBuf::from("cat.png")));
        assert_eq!(args.width, Some(50.0));
        assert_eq!(args.height, None);
        assert_eq!(args.num_circles, Some(100));
        assert_eq!(args.min_radius, Some(0.02));
        assert_eq!(args.max_radius, Some(0.2));
        assert_eq!(args.extra_spacing, Some(0.0));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.output.as_deref(), Some("cats"));
        assert_eq!(args.output_dir, Some(PathBuf::from("out")));
        assert!(!args.help);
    }

    #[test]
    fn empty_arguments_use_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args, CliArgs::default());
        assert_eq!(args.scene_config(), SceneConfig::default());
    }

    #[test]
    fn rejects_unknown_flags_and_bad_values() {
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["--w", "wide"]).is_err());
        assert!(parse(&["--ncircs", "-3"]).is_err());
        assert!(parse(&["--h"]).is_err());
    }

    #[test]
    fn help_flag_is_recognised() {
        assert!(parse(&["--help"]).unwrap().help);
    }

    #[test]
    fn radius_flags_reach_the_config() {
        let config = parse(&[
            "--w", "10", "--h", "20", "--minr", "0.05", "--maxr", "0.2", "--octaves", "4",
        ])
        .unwrap()
        .scene_config();
        assert_eq!(config.width, Some(10.0));
        assert_eq!(config.height, Some(20.0));
        assert_eq!(config.min_radius_fraction, 0.05);
        assert_eq!(config.max_radius_fraction, 0.2);
        assert_eq!(config.noise.octaves, 4);
        assert!(config.image_path().is_none());
    }

    #[test]
    fn zero_octaves_fail_validation() {
        let config = parse(&["--w", "10", "--h", "10", "--octaves", "0"])
            .unwrap()
            .scene_config();
        assert!(config.validate().is_err());
    }
}
