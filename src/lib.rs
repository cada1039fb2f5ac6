//! Bit-packed 32-bit pixel format and colorspace codes, ABI-compatible with SDL3.
//!
//! This crate defines the two value types that describe how pixels are laid
//! out and how their values should be interpreted:
//!
//! - [`PixelFormat`]: structured codes (type, order, layout, bits, bytes) and FourCC tags
//! - [`Colorspace`]: color type, range, chroma siting and CICP code points
//! - [`Masks`] / [`MaskLookup`]: conversion between formats and RGBA bit masks
//! - [`Cicp`]: ITU-T H.273 code points, convertible to and from [`Colorspace`]
//!
//! Both codes are `#[repr(transparent)]` over `u32` and can cross an FFI
//! boundary or be cast from raw slices without copying. Every named format
//! and colorspace is an associated constant; `KNOWN` tables list them in
//! native enumeration order.
//!
//! ```
//! use pixcode::{Colorspace, PixelFormat};
//!
//! let fmt = PixelFormat::ARGB8888;
//! assert!(fmt.has_alpha());
//! assert_eq!(fmt.bytes_per_pixel(), 4);
//! assert_eq!("argb8888".parse(), Ok(fmt));
//!
//! let cs = Colorspace::BT709_LIMITED;
//! assert!(cs.is_matrix_bt709() && cs.is_limited_range());
//! ```

#![no_std]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate alloc;

mod catalog;
mod cicp;
mod colorspace;
mod format;
mod layout;
mod masks;
mod name;

pub use cicp::Cicp;
pub use colorspace::{
    ChromaLocation, ColorPrimaries, ColorRange, ColorType, Colorspace, ColorspaceFields,
    MatrixCoefficients, TransferCharacteristics,
};
pub use format::{FormatFields, PixelFormat};
pub use layout::{ArrayOrder, BitmapOrder, PackedLayout, PackedOrder, PixelType};
pub use masks::{BuiltinMasks, MaskError, MaskLookup, Masks, format_for_masks, masks_for_format};
pub use name::ParseNameError;

// Re-exported so callers can build mask sets without naming the dependency.
pub use rgb;
pub use rgb::Rgba;
