use crate::error::{Result, StegoError};
use crate::pixel::{Pixel, CHANNELS};
use crate::strategy::Perturbation;
use rand::Rng;

/// Encode one code point into a pixel with the given perturbation.
/// Returns the new pixel; the input is left untouched.
pub fn encode_pixel<R: Rng + ?Sized>(
    value: u32,
    pixel: Pixel,
    perturbation: Perturbation,
    rng: &mut R,
) -> Result<Pixel> {
    if char::from_u32(value).is_none() {
        return Err(StegoError::InvalidCodePoint(value));
    }
    match perturbation {
        Perturbation::Simple => encode_simple(value, pixel, rng),
        Perturbation::Split => encode_split(value, pixel),
    }
}

/// Recover the code point carried by an altered pixel
pub fn decode_pixel(original: Pixel, altered: Pixel, perturbation: Perturbation) -> Result<char> {
    match perturbation {
        Perturbation::Simple => decode_simple(original, altered),
        Perturbation::Split => decode_split(original, altered),
    }
}

/// Move a channel by `delta`: up when the sum stays below 255, otherwise down.
/// Fails when moving down would go below zero.
pub fn carry(channel: u8, delta: u32) -> Result<u8> {
    let widened = u32::from(channel);
    if widened + delta < 255 {
        Ok((widened + delta) as u8)
    } else if delta <= widened {
        Ok((widened - delta) as u8)
    } else {
        Err(StegoError::ChannelOverflow {
            value: delta,
            channel,
        })
    }
}

/// Put the whole value on one random channel able to carry it
pub fn encode_simple<R: Rng + ?Sized>(value: u32, pixel: Pixel, rng: &mut R) -> Result<Pixel> {
    let candidates: Vec<usize> = (0..CHANNELS)
        .filter(|&c| carry(pixel[c], value).is_ok())
        .collect();

    if candidates.is_empty() {
        let widest = pixel.iter().copied().max().unwrap_or(0);
        return Err(StegoError::ChannelOverflow {
            value,
            channel: widest,
        });
    }

    let channel = candidates[rng.gen_range(0..candidates.len())];
    let mut out = pixel;
    out[channel] = carry(pixel[channel], value)?;
    Ok(out)
}

/// Per-channel deltas for the split perturbation.
///
/// value / 3 is rounded to the nearest integer `r`; when rounding went up the
/// last channel gets `r - 1`, when it went down it gets `r + 1`:
/// 10 -> [3, 3, 4], 8 -> [3, 3, 2], 9 -> [3, 3, 3].
pub fn split_value(value: u32) -> [u32; CHANNELS] {
    let base = value / 3;
    match value % 3 {
        0 => [base, base, base],
        1 => [base, base, base + 1],
        _ => [base + 1, base + 1, base],
    }
}

/// Spread the value over all three channels
pub fn encode_split(value: u32, pixel: Pixel) -> Result<Pixel> {
    let deltas = split_value(value);
    let mut out = pixel;
    for (channel, delta) in deltas.iter().enumerate() {
        out[channel] = carry(pixel[channel], *delta)?;
    }
    Ok(out)
}

fn channel_deltas(original: Pixel, altered: Pixel) -> [i32; CHANNELS] {
    std::array::from_fn(|c| i32::from(altered[c]) - i32::from(original[c]))
}

/// First channel that moved, in channel order, carries the value
pub fn decode_simple(original: Pixel, altered: Pixel) -> Result<char> {
    let value = channel_deltas(original, altered)
        .into_iter()
        .find(|d| *d != 0)
        .ok_or(StegoError::UnchangedPixel)?
        .unsigned_abs();
    to_char(value)
}

/// Sum of absolute channel changes. Also reads pixels written by `encode_simple`.
pub fn decode_split(original: Pixel, altered: Pixel) -> Result<char> {
    let value: u32 = channel_deltas(original, altered)
        .into_iter()
        .map(i32::unsigned_abs)
        .sum();
    if value == 0 {
        return Err(StegoError::UnchangedPixel);
    }
    to_char(value)
}

fn to_char(value: u32) -> Result<char> {
    char::from_u32(value).ok_or(StegoError::InvalidCodePoint(value))
}
