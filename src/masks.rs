//! Pixel format ↔ RGBA bit mask conversion.
//!
//! [`MaskLookup`] is the seam to whatever answers the question (normally
//! the native library). [`BuiltinMasks`] answers from the catalog, so the
//! crate is usable and testable without linking anything.

use core::fmt;

use rgb::Rgba;

use crate::PixelFormat;
use crate::layout::{ArrayOrder, PackedOrder, PixelType};

/// Channel masks of a format whose pixels fit in one 32-bit word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Masks {
    /// Significant bits per pixel. For formats wider than two bytes this is
    /// the storage width (`XRGB8888` reports 32, not 24).
    pub bits_per_pixel: u8,
    /// One mask per channel. Absent channels are 0.
    pub rgba: Rgba<u32>,
}

impl Masks {
    pub const fn new(bits_per_pixel: u8, r: u32, g: u32, b: u32, a: u32) -> Self {
        Self {
            bits_per_pixel,
            rgba: Rgba { r, g, b, a },
        }
    }
}

/// Why a format has no RGBA mask representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum MaskError {
    /// Palette-indexed formats store indices, not channels.
    Indexed,
    /// FourCC formats are planar or compressed.
    FourCc,
    /// The pixel does not fit in a 32-bit word.
    TooWide {
        /// Bits per pixel of the rejected format.
        bits_per_pixel: u8,
    },
    /// Structured and narrow enough, but the type, layout or order has no
    /// mask form (e.g. `UNKNOWN`, or an unassigned layout nibble).
    NoMaskLayout,
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indexed => write!(f, "indexed formats have no channel masks"),
            Self::FourCc => write!(f, "FourCC formats have no channel masks"),
            Self::TooWide { bits_per_pixel } => {
                write!(f, "{bits_per_pixel} bpp does not fit a 32-bit mask")
            }
            Self::NoMaskLayout => write!(f, "format has no RGBA mask layout"),
        }
    }
}

impl core::error::Error for MaskError {}

/// Format ↔ mask conversion, one synchronous call per request.
///
/// Implemented by [`BuiltinMasks`]. Bindings that defer to the native
/// library implement it by forwarding to the native lookup functions.
pub trait MaskLookup {
    /// Masks for `format`, or why it has none.
    fn to_masks(&self, format: PixelFormat) -> Result<Masks, MaskError>;

    /// The named format with exactly these masks, or
    /// [`PixelFormat::UNKNOWN`] when none matches.
    #[allow(clippy::wrong_self_convention)]
    fn from_masks(&self, bits_per_pixel: u8, rgba: Rgba<u32>) -> PixelFormat;
}

impl<T: MaskLookup + ?Sized> MaskLookup for &T {
    fn to_masks(&self, format: PixelFormat) -> Result<Masks, MaskError> {
        (**self).to_masks(format)
    }

    fn from_masks(&self, bits_per_pixel: u8, rgba: Rgba<u32>) -> PixelFormat {
        (**self).from_masks(bits_per_pixel, rgba)
    }
}

/// Mask lookup over [`PixelFormat::KNOWN`].
///
/// Stateless; `from_masks` scans the catalog in native enumeration order
/// and returns the first exact match.
///
/// The native lookup is looser. It also maps 30 bpp with 2:10:10:10 masks
/// to `XRGB2101010`, and an all-zero red mask at 12, 15, 16, 24 or 32 bpp
/// to that depth's default format. Here both cases return
/// [`PixelFormat::UNKNOWN`], so a binding that forwards to native code can
/// answer differently for those requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinMasks;

const RGB24_MASKS: [u32; 3] = if cfg!(target_endian = "little") {
    [0x0000_00FF, 0x0000_FF00, 0x00FF_0000]
} else {
    [0x00FF_0000, 0x0000_FF00, 0x0000_00FF]
};

impl BuiltinMasks {
    /// `RGB24` and `BGR24`: three 8-bit channels addressed by byte.
    fn byte_masks(format: PixelFormat) -> Option<Masks> {
        if format.pixel_type() != Some(PixelType::ArrayU8) {
            return None;
        }
        let order = format.array_order()?;
        if order.channels() != 3 {
            return None;
        }
        let [lo, mid, hi] = RGB24_MASKS;
        Some(match order {
            ArrayOrder::Rgb => Masks::new(24, lo, mid, hi, 0),
            _ => Masks::new(24, hi, mid, lo, 0),
        })
    }

    fn derive(format: PixelFormat) -> Result<Masks, MaskError> {
        if format.is_fourcc() {
            return Err(MaskError::FourCc);
        }
        if format.is_indexed() {
            return Err(MaskError::Indexed);
        }

        if let Some(masks) = Self::byte_masks(format) {
            return Ok(masks);
        }

        let bytes = format.bytes_per_pixel();
        if bytes > 4 {
            return Err(MaskError::TooWide {
                bits_per_pixel: format.bits_per_pixel(),
            });
        }
        if !format.is_packed() {
            return Err(MaskError::NoMaskLayout);
        }

        let bits_per_pixel = if bytes <= 2 {
            format.bits_per_pixel()
        } else {
            bytes * 8
        };
        let m = format
            .layout()
            .and_then(|layout| layout.masks())
            .ok_or(MaskError::NoMaskLayout)?;
        let [r, g, b, a] = match format.packed_order() {
            Some(PackedOrder::Xrgb) => [m[1], m[2], m[3], 0],
            Some(PackedOrder::Rgbx) => [m[0], m[1], m[2], 0],
            Some(PackedOrder::Argb) => [m[1], m[2], m[3], m[0]],
            Some(PackedOrder::Rgba) => [m[0], m[1], m[2], m[3]],
            Some(PackedOrder::Xbgr) => [m[3], m[2], m[1], 0],
            Some(PackedOrder::Bgrx) => [m[2], m[1], m[0], 0],
            Some(PackedOrder::Abgr) => [m[3], m[2], m[1], m[0]],
            Some(PackedOrder::Bgra) => [m[2], m[1], m[0], m[3]],
            Some(PackedOrder::None) | None => return Err(MaskError::NoMaskLayout),
        };
        Ok(Masks::new(bits_per_pixel, r, g, b, a))
    }
}

impl MaskLookup for BuiltinMasks {
    fn to_masks(&self, format: PixelFormat) -> Result<Masks, MaskError> {
        let result = Self::derive(format);
        if let Err(err) = &result {
            log::debug!("no masks for {format}: {err}");
        }
        result
    }

    fn from_masks(&self, bits_per_pixel: u8, rgba: Rgba<u32>) -> PixelFormat {
        if rgba == Rgba::new(0, 0, 0, 0) {
            let indexed = match bits_per_pixel {
                1 => Some(PixelFormat::INDEX1MSB),
                2 => Some(PixelFormat::INDEX2MSB),
                4 => Some(PixelFormat::INDEX4MSB),
                8 => Some(PixelFormat::INDEX8),
                _ => None,
            };
            if let Some(format) = indexed {
                log::trace!("{bits_per_pixel} bpp without masks maps to {format}");
                return format;
            }
        }

        for &(_, format) in PixelFormat::KNOWN {
            let Ok(masks) = Self::derive(format) else {
                continue;
            };
            // Accept either the significant depth or the storage width, so
            // 16 finds XRGB1555 as well as 15.
            let storage_bits = format.bytes_per_pixel().saturating_mul(8);
            let depth_matches =
                masks.bits_per_pixel == bits_per_pixel || storage_bits == bits_per_pixel;
            if depth_matches && masks.rgba == rgba {
                log::trace!("{bits_per_pixel} bpp {rgba:?} maps to {format}");
                return format;
            }
        }

        log::debug!("no format for {bits_per_pixel} bpp with masks {rgba:?}");
        PixelFormat::UNKNOWN
    }
}

/// [`MaskLookup::to_masks`] through [`BuiltinMasks`].
pub fn masks_for_format(format: PixelFormat) -> Result<Masks, MaskError> {
    BuiltinMasks.to_masks(format)
}

/// [`MaskLookup::from_masks`] through [`BuiltinMasks`].
pub fn format_for_masks(bits_per_pixel: u8, rgba: Rgba<u32>) -> PixelFormat {
    BuiltinMasks.from_masks(bits_per_pixel, rgba)
}

impl PixelFormat {
    /// Shorthand for [`masks_for_format`].
    pub fn masks(self) -> Result<Masks, MaskError> {
        masks_for_format(self)
    }

    /// Shorthand for [`format_for_masks`].
    pub fn from_masks(bits_per_pixel: u8, rgba: Rgba<u32>) -> Self {
        format_for_masks(bits_per_pixel, rgba)
    }
}
