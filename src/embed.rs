use crate::error::{Result, StegoError};
use crate::pipeline::{encode_pixel, plan_placement};
use crate::pixel::PixelGrid;
use crate::strategy::{Perturbation, Placement};
use log::{debug, info, warn};
use rand::Rng;

/// Hide `secret` inside a copy of `source`.
///
/// Characters are consumed from the end of the secret: the first pixel of the
/// placement plan carries the last character. Every pixel outside the plan is
/// left byte-identical to the source. The source grid is never modified.
pub fn embed<R: Rng + ?Sized>(
    secret: &str,
    source: &PixelGrid,
    perturbation: Perturbation,
    placement: Placement,
    rng: &mut R,
) -> Result<PixelGrid> {
    let chars: Vec<char> = secret.chars().collect();
    if chars.is_empty() {
        return Err(StegoError::EmptySecret);
    }
    if source.is_empty() {
        return Err(StegoError::EmptyImage);
    }

    info!(
        "{} - storing {} characters into {}x{} image ({})",
        placement,
        chars.len(),
        source.rows(),
        source.cols(),
        perturbation
    );

    let plan = plan_placement(source.len(), chars.len(), placement, rng)?;

    let mut output = source.clone();
    for (&index, &ch) in plan.indices().iter().zip(chars.iter().rev()) {
        let value = u32::from(ch);
        if value == 0 {
            warn!(
                "NUL character at pixel {:?} leaves no trace and will not be recovered",
                output.coordinate(index)
            );
        }
        let altered = encode_pixel(value, output.pixel(index), perturbation, rng)?;
        debug!(
            "pixel {:?}: {:?} -> {:?} ({:?})",
            output.coordinate(index),
            output.pixel(index),
            altered,
            ch
        );
        *output.pixel_mut(index) = altered;
    }

    info!("Done!");
    Ok(output)
}
