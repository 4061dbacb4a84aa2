use crate::error::Result;
use crate::pipeline::decode_pixel;
use crate::pixel::{diff_indices, PixelGrid};
use crate::strategy::Perturbation;
use log::{debug, info};

/// Recover a secret by comparing the original image with the altered one.
///
/// Every pixel that differs is treated as a carrier, whatever placement was
/// used to embed. Characters are read in row-major order and reversed at the
/// end to undo the last-character-first consumption of `embed`.
pub fn extract(
    original: &PixelGrid,
    altered: &PixelGrid,
    perturbation: Perturbation,
) -> Result<String> {
    info!("Decoding image ({})", perturbation);

    let carriers = diff_indices(original, altered)?;
    let mut recovered = Vec::with_capacity(carriers.len());
    for index in carriers {
        let ch = decode_pixel(original.pixel(index), altered.pixel(index), perturbation)?;
        debug!("pixel {:?}: {:?}", original.coordinate(index), ch);
        recovered.push(ch);
    }

    info!("Recovered {} characters", recovered.len());
    Ok(recovered.into_iter().rev().collect())
}
