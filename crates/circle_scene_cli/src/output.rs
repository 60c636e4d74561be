//! Output file naming.
use std::path::{Path, PathBuf};

/// Base name used when neither an output name nor an image is given.
pub const DEFAULT_BASE_NAME: &str = "scenes/out";

/// Builds `<base>_ncircs=<placed>.csv`, optionally inside `output_dir`.
///
/// The base is `output` when given, otherwise the image file stem, otherwise
/// [`DEFAULT_BASE_NAME`].
pub fn output_path(
    image: Option<&Path>,
    output: Option<&str>,
    output_dir: Option<&Path>,
    placed: usize,
) -> PathBuf {
    let base = match (output, image) {
        (Some(name), _) => name.to_owned(),
        (None, Some(image)) => image
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_BASE_NAME.to_owned()),
        (None, None) => DEFAULT_BASE_NAME.to_owned(),
    };
    let file_name = format!("{base}_ncircs={placed}.csv");
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}
