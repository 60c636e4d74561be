//! Reading and writing the comma-separated scene file.
//!
//! The first line is the bounding window `0,0,<width>,<height>`; every following line is one
//! circle `<cx>,<cy>,<r>,<br>,<bg>,<bb>` in acceptance order. Each line ends with `\n`, and
//! numbers use Rust's shortest round-tripping float formatting.
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::{DVec2, DVec3};
use tracing::debug;

use crate::error::{Error, Result};
use crate::geometry::Circle;
use crate::scene::Scene;

const WINDOW_FIELDS: usize = 4;
const CIRCLE_FIELDS: usize = 6;

/// Axis-aligned window written on the first line of a scene file.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneWindow {
    pub x0: f64,
    pub y0: f64,
    pub width: f64,
    pub height: f64,
}

impl SceneWindow {
    pub fn new(x0: f64, y0: f64, width: f64, height: f64) -> Self {
        Self {
            x0,
            y0,
            width,
            height,
        }
    }
}

impl fmt::Display for SceneWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x0, self.y0, self.width, self.height)
    }
}

impl Scene {
    /// Writes the scene file to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.window())?;
        for circle in &self.circles {
            writeln!(out, "{circle}")?;
        }
        Ok(())
    }

    /// Writes the scene file to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(&mut out)?;
        out.flush()?;
        debug!(
            "Wrote {} circles to '{}'.",
            self.circles.len(),
            path.display()
        );
        Ok(())
    }

    /// Renders the scene file into a string.
    pub fn to_file_string(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec<u8> cannot fail.
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Contents of a parsed scene file.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneFile {
    pub window: SceneWindow,
    pub circles: Vec<Circle>,
}

impl SceneFile {
    /// Parses scene file text. Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut records = text
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let Some((line, header)) = records.next() else {
            return Err(Error::Parse {
                line: 1,
                message: "missing window line".into(),
            });
        };
        let w = parse_fields::<WINDOW_FIELDS>(line, header)?;
        let window = SceneWindow::new(w[0], w[1], w[2], w[3]);

        let circles = records
            .map(|(line, record)| {
                let v = parse_fields::<CIRCLE_FIELDS>(line, record)?;
                Ok(Circle::new(
                    DVec2::new(v[0], v[1]),
                    v[2],
                    DVec3::new(v[3], v[4], v[5]),
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { window, circles })
    }

    /// Reads and parses the scene file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }
}

impl From<&Scene> for SceneFile {
    fn from(scene: &Scene) -> Self {
        Self {
            window: scene.window(),
            circles: scene.circles.clone(),
        }
    }
}

fn parse_fields<const N: usize>(line: usize, record: &str) -> Result<[f64; N]> {
    let parts: Vec<&str> = record.split(',').collect();
    if parts.len() != N {
        return Err(Error::Parse {
            line,
            message: format!("expected {N} fields, found {}", parts.len()),
        });
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        let part = part.trim();
        *slot = part.parse::<f64>().map_err(|_| Error::Parse {
            line,
            message: format!("invalid number '{part}'"),
        })?;
    }
    Ok(out)
}
