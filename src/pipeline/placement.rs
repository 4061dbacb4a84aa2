use crate::error::{Result, StegoError};
use crate::strategy::Placement;
use rand::Rng;

/// Row-major pixel indices that receive characters, in consumption order.
/// The first index takes the secret's last character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementPlan {
    indices: Vec<usize>,
}

impl PlacementPlan {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Build a plan for `chars` characters over `pixel_count` pixels
pub fn plan_placement<R: Rng + ?Sized>(
    pixel_count: usize,
    chars: usize,
    placement: Placement,
    rng: &mut R,
) -> Result<PlacementPlan> {
    match placement {
        Placement::Sequential => plan_sequential(pixel_count, chars),
        Placement::Spread => plan_spread(pixel_count, chars, rng),
    }
}

/// Most characters a grid of `pixel_count` pixels can hold with the given placement
pub fn capacity(pixel_count: usize, placement: Placement) -> usize {
    match placement {
        // one carrier per pixel
        Placement::Sequential => pixel_count,
        // interval = pixel_count / chars must stay >= 1
        Placement::Spread => pixel_count,
    }
}

/// The first `chars` pixels in row-major order
pub fn plan_sequential(pixel_count: usize, chars: usize) -> Result<PlacementPlan> {
    if chars > pixel_count {
        return Err(StegoError::CapacityExceeded {
            chars,
            capacity: pixel_count,
        });
    }
    Ok(PlacementPlan {
        indices: (0..chars).collect(),
    })
}

/// One uniformly random pixel inside each of `chars` equal intervals.
///
/// The interval is `pixel_count / chars`; the pixels past the last whole
/// interval are never used. Indices come out strictly increasing.
pub fn plan_spread<R: Rng + ?Sized>(
    pixel_count: usize,
    chars: usize,
    rng: &mut R,
) -> Result<PlacementPlan> {
    if chars == 0 {
        return Err(StegoError::EmptySecret);
    }

    let interval = pixel_count / chars;
    if interval == 0 {
        return Err(StegoError::CapacityExceeded {
            chars,
            capacity: pixel_count,
        });
    }

    let indices = (0..chars)
        .map(|i| i * interval + rng.gen_range(0..interval))
        .collect();

    Ok(PlacementPlan { indices })
}
