use crate::error::Result;
use crate::extract::extract;
use crate::io::{read_image, write_text};
use crate::strategy::Perturbation;
use std::path::{Path, PathBuf};

/// Where `--save` puts the recovered secret
pub const DEFAULT_SECRET_FILE: &str = "output-secret.txt";

/// Options for the decode command
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    pub perturbation: Perturbation,
    /// Also write the recovered secret to this file
    pub save: Option<PathBuf>,
}

/// Recover the secret hidden in `altered_path` by diffing it against `original_path`
pub fn decode_files(
    original_path: &Path,
    altered_path: &Path,
    options: &DecodeOptions,
) -> Result<String> {
    let original = read_image(original_path)?;
    let altered = read_image(altered_path)?;

    let secret = extract(&original, &altered, options.perturbation)?;

    if let Some(path) = &options.save {
        write_text(path, &secret)?;
    }

    Ok(secret)
}
