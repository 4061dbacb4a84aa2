use crate::embed::embed;
use crate::error::Result;
use crate::io::{output_image_path, read_image, read_text, write_image};
use crate::strategy::{Perturbation, Placement};
use rand::Rng;
use std::path::{Path, PathBuf};

/// Options for the encode command
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    pub placement: Placement,
    pub perturbation: Perturbation,
    pub output_dir: PathBuf,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            perturbation: Perturbation::default(),
            output_dir: PathBuf::from("./outputs"),
        }
    }
}

/// What an encode run produced
#[derive(Debug, Clone)]
pub struct EncodeOutcome {
    pub output_path: PathBuf,
    pub chars: usize,
}

/// Hide the text of `secret_path` in `image_path`.
/// Writes `<output_dir>/output-<stem>.png` and returns its path.
pub fn encode_file(
    image_path: &Path,
    secret_path: &Path,
    options: &EncodeOptions,
) -> Result<EncodeOutcome> {
    encode_file_with_rng(image_path, secret_path, options, &mut rand::thread_rng())
}

/// [`encode_file`] with a caller-supplied random source
pub fn encode_file_with_rng<R: Rng + ?Sized>(
    image_path: &Path,
    secret_path: &Path,
    options: &EncodeOptions,
    rng: &mut R,
) -> Result<EncodeOutcome> {
    let secret = read_text(secret_path)?;
    let source = read_image(image_path)?;

    let output = embed(
        &secret,
        &source,
        options.perturbation,
        options.placement,
        rng,
    )?;

    // Only written once the whole grid has been built
    let output_path = output_image_path(&options.output_dir, image_path);
    write_image(&output_path, &output)?;

    Ok(EncodeOutcome {
        output_path,
        chars: secret.chars().count(),
    })
}
