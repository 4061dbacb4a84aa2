//! Pixelstash - text steganography by pixel perturbation
//!
//! A message is hidden by nudging the colour channels of selected pixels by
//! each character's code point, and recovered by diffing the altered image
//! against the original. There is no header, key or checksum: the original
//! image is the key, and the altered image must be stored losslessly.
//!
//! ## Codec
//!
//! ```text
//! embed:   secret → Placement plan → Perturbation encode per carrier → altered grid
//! extract: (original, altered) → diff → Perturbation decode per changed pixel → reverse
//! ```
//!
//! - **Placement**: `seq` (first N pixels) or `spread` (one random pixel per interval)
//! - **Perturbation**: `simple` (one random channel) or `split` (all three channels)
//!
//! Characters are consumed from the end of the secret, so extraction reverses
//! what it reads in row-major order. The `split` decoder also reads `simple`
//! output.
//!
//! ## Example
//!
//! ```no_run
//! use pixelstash::cli::{decode_files, encode_file, DecodeOptions, EncodeOptions};
//! use pixelstash::{Perturbation, Placement};
//! use std::path::Path;
//!
//! let options = EncodeOptions {
//!     placement: Placement::Spread,
//!     perturbation: Perturbation::Split,
//!     ..Default::default()
//! };
//! let outcome = encode_file(
//!     Path::new("house.png"),
//!     Path::new("secret.txt"),
//!     &options,
//! ).unwrap();
//!
//! let decode_options = DecodeOptions {
//!     perturbation: Perturbation::Split,
//!     save: None,
//! };
//! let secret = decode_files(
//!     Path::new("house.png"),
//!     &outcome.output_path,
//!     &decode_options,
//! ).unwrap();
//! println!("{}", secret);
//! ```

pub mod cli;
pub mod embed;
pub mod error;
pub mod extract;
pub mod io;
pub mod pipeline;
pub mod pixel;
pub mod strategy;

pub use embed::embed;
pub use error::{Result, StegoError};
pub use extract::extract;
pub use pixel::{Pixel, PixelGrid};
pub use strategy::{Perturbation, Placement};
