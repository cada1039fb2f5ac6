//! Bit-packed 32-bit pixel format codes.
//!
//! A [`PixelFormat`] is either *structured* (six bit fields, flag nibble
//! set to 1) or a *FourCC* tag (four ASCII bytes, little-endian). Both
//! forms share the same `u32` space:
//!
//! ```text
//! structured   31..28 flag (1)   27..24 type   23..20 order   19..16 layout
//!              15..8  bits/pixel  7..0  bytes/pixel
//! fourcc       a | b << 8 | c << 16 | d << 24
//! ```
//!
//! Encoders never fail. Decoders are total over every `u32`.

use core::fmt;
use core::str::FromStr;

use bytemuck::{Pod, Zeroable};

use crate::layout::{ArrayOrder, BitmapOrder, PackedLayout, PackedOrder, PixelType};
use crate::name::{self, ParseNameError};

/// A pixel format code, bit-compatible with the native `SDL_PixelFormat`.
///
/// Equality, ordering and hashing are those of the raw integer. Two codes
/// describing the same physical layout through different fields are not
/// equal unless they are bit-identical.
///
/// Named formats live as associated constants, e.g. [`PixelFormat::ARGB8888`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct PixelFormat(u32);

/// The six raw fields of a pixel format code.
///
/// Produced by [`PixelFormat::fields()`]. For FourCC codes the fields are
/// whatever the tag bytes happen to decode to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormatFields {
    pub flag: u8,
    pub pixel_type: u8,
    pub order: u8,
    pub layout: u8,
    pub bits_per_pixel: u8,
    pub bytes_per_pixel: u8,
}

impl PixelFormat {
    // Encoders ----------------------------------------------------------------

    /// Wrap a raw code received from the native side.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw 32-bit code.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Pack a structured code from raw field values.
    ///
    /// `pixel_type`, `order` and `layout` are 4-bit fields: callers must pass
    /// 0-15. Larger values are truncated to their low nibble, so `16` packs
    /// as `0`. The order is not checked against the pixel type family.
    pub const fn define(pixel_type: u8, order: u8, layout: u8, bits: u8, bytes: u8) -> Self {
        Self(
            (1 << 28)
                | (((pixel_type & 0x0F) as u32) << 24)
                | (((order & 0x0F) as u32) << 20)
                | (((layout & 0x0F) as u32) << 16)
                | ((bits as u32) << 8)
                | (bytes as u32),
        )
    }

    /// Structured code for an indexed (bitmap) format.
    pub const fn bitmap(pixel_type: PixelType, order: BitmapOrder, bits: u8, bytes: u8) -> Self {
        Self::define(pixel_type.raw(), order.raw(), 0, bits, bytes)
    }

    /// Structured code for a packed format.
    pub const fn packed(
        pixel_type: PixelType,
        order: PackedOrder,
        layout: PackedLayout,
        bits: u8,
        bytes: u8,
    ) -> Self {
        Self::define(pixel_type.raw(), order.raw(), layout.raw(), bits, bytes)
    }

    /// Structured code for an array format.
    pub const fn array(pixel_type: PixelType, order: ArrayOrder, bits: u8, bytes: u8) -> Self {
        Self::define(pixel_type.raw(), order.raw(), 0, bits, bytes)
    }

    /// FourCC code from four tag bytes, `a` in the low byte.
    ///
    /// No validation: a tag whose last byte is 0x10-0x1F lands in the
    /// structured range and [`is_fourcc()`](Self::is_fourcc) reports `false`.
    pub const fn fourcc(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self(u32::from_le_bytes([a, b, c, d]))
    }

    /// FourCC code from a tag such as `b"NV12"`.
    pub const fn from_fourcc(tag: &[u8; 4]) -> Self {
        Self::fourcc(tag[0], tag[1], tag[2], tag[3])
    }

    /// Reinterpret a native array of raw codes without copying.
    pub fn cast_slice(raw: &[u32]) -> &[PixelFormat] {
        bytemuck::cast_slice(raw)
    }

    /// View a slice of codes as raw integers, e.g. to hand to the native side.
    pub fn as_raw_slice(formats: &[PixelFormat]) -> &[u32] {
        bytemuck::cast_slice(formats)
    }

    // Field decoders ----------------------------------------------------------

    /// Bits 31..28. Always 1 for structured codes.
    #[inline]
    pub const fn flag(self) -> u8 {
        ((self.0 >> 28) & 0x0F) as u8
    }

    /// Bits 27..24, raw.
    #[inline]
    pub const fn type_bits(self) -> u8 {
        ((self.0 >> 24) & 0x0F) as u8
    }

    /// Bits 23..20, raw. Meaning depends on the pixel type family.
    #[inline]
    pub const fn order_bits(self) -> u8 {
        ((self.0 >> 20) & 0x0F) as u8
    }

    /// Bits 19..16, raw.
    #[inline]
    pub const fn layout_bits(self) -> u8 {
        ((self.0 >> 16) & 0x0F) as u8
    }

    /// Bits 15..8.
    #[inline]
    pub const fn bits_per_pixel(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Bytes per pixel.
    ///
    /// Structured codes report bits 7..0. FourCC codes ignore that byte:
    /// `YUY2`, `UYVY`, `YVYU` and `P010` report 2, every other tag 1.
    pub const fn bytes_per_pixel(self) -> u8 {
        if self.is_fourcc() {
            let raw = self.0;
            if raw == Self::YUY2.0
                || raw == Self::UYVY.0
                || raw == Self::YVYU.0
                || raw == Self::P010.0
            {
                2
            } else {
                1
            }
        } else {
            (self.0 & 0xFF) as u8
        }
    }

    /// All six raw fields. `bytes_per_pixel` here is the raw byte, without
    /// the FourCC override.
    pub const fn fields(self) -> FormatFields {
        FormatFields {
            flag: self.flag(),
            pixel_type: self.type_bits(),
            order: self.order_bits(),
            layout: self.layout_bits(),
            bits_per_pixel: self.bits_per_pixel(),
            bytes_per_pixel: (self.0 & 0xFF) as u8,
        }
    }

    /// Pixel type, if the type nibble names one.
    #[inline]
    pub const fn pixel_type(self) -> Option<PixelType> {
        PixelType::from_raw(self.type_bits())
    }

    /// Component order for indexed formats.
    pub const fn bitmap_order(self) -> Option<BitmapOrder> {
        if self.is_indexed() {
            BitmapOrder::from_raw(self.order_bits())
        } else {
            None
        }
    }

    /// Component order for packed formats.
    pub const fn packed_order(self) -> Option<PackedOrder> {
        if self.is_packed() {
            PackedOrder::from_raw(self.order_bits())
        } else {
            None
        }
    }

    /// Component order for array formats.
    pub const fn array_order(self) -> Option<ArrayOrder> {
        if self.is_array() {
            ArrayOrder::from_raw(self.order_bits())
        } else {
            None
        }
    }

    /// Packed layout, if the layout nibble names one.
    #[inline]
    pub const fn layout(self) -> Option<PackedLayout> {
        PackedLayout::from_raw(self.layout_bits())
    }

    /// The four tag bytes of a FourCC code.
    pub const fn fourcc_bytes(self) -> Option<[u8; 4]> {
        if self.is_fourcc() {
            Some(self.0.to_le_bytes())
        } else {
            None
        }
    }

    // Predicates --------------------------------------------------------------

    /// The canonical "unknown" code, 0.
    #[inline]
    pub const fn is_unknown(self) -> bool {
        self.0 == 0
    }

    /// Non-zero and the flag nibble is anything but 1.
    #[inline]
    pub const fn is_fourcc(self) -> bool {
        self.0 != 0 && self.flag() != 1
    }

    pub const fn is_indexed(self) -> bool {
        !self.is_fourcc()
            && match self.pixel_type() {
                Some(ty) => ty.is_indexed(),
                None => false,
            }
    }

    pub const fn is_packed(self) -> bool {
        !self.is_fourcc()
            && match self.pixel_type() {
                Some(ty) => ty.is_packed(),
                None => false,
            }
    }

    pub const fn is_array(self) -> bool {
        !self.is_fourcc()
            && match self.pixel_type() {
                Some(ty) => ty.is_array(),
                None => false,
            }
    }

    /// Packed with an ARGB, RGBA, ABGR or BGRA order.
    ///
    /// Array formats with alpha (e.g. `RGBA64`) report `false`.
    pub const fn has_alpha(self) -> bool {
        match self.packed_order() {
            Some(order) => order.has_alpha(),
            None => false,
        }
    }

    /// Not FourCC, and either a 32-bit packed type or the 2:10:10:10 layout.
    ///
    /// Every `Packed32` code counts, `ARGB8888` included.
    pub const fn is_10bit(self) -> bool {
        !self.is_fourcc()
            && (self.type_bits() == PixelType::Packed32.raw()
                || self.layout_bits() == PackedLayout::Layout2101010.raw())
    }

    /// Not FourCC, and a half or single precision float array type.
    pub const fn is_float(self) -> bool {
        !self.is_fourcc()
            && match self.pixel_type() {
                Some(ty) => ty.is_float(),
                None => false,
            }
    }

    // Names -------------------------------------------------------------------

    /// Catalog name of a concrete format, e.g. `"ARGB8888"`.
    ///
    /// Endianness aliases resolve to the concrete name: on little-endian
    /// hosts `PixelFormat::RGBA32.name()` is `"ABGR8888"`.
    pub fn name(self) -> Option<&'static str> {
        name::name_of(Self::KNOWN, self)
    }
}

impl From<u32> for PixelFormat {
    #[inline]
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<PixelFormat> for u32 {
    #[inline]
    fn from(format: PixelFormat) -> Self {
        format.0
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            return f.write_str(name);
        }
        match self.fourcc_bytes() {
            Some(tag) if tag.iter().all(|b| b.is_ascii_graphic() || *b == b' ') => {
                f.write_str("FOURCC('")?;
                for b in tag {
                    write!(f, "{}", b as char)?;
                }
                f.write_str("')")
            }
            _ => write!(f, "UNKNOWN(0x{:08X})", self.0),
        }
    }
}

impl fmt::Debug for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "PixelFormat({name})"),
            None => write!(f, "PixelFormat(0x{:08X})", self.0),
        }
    }
}

impl FromStr for PixelFormat {
    type Err = ParseNameError;

    /// Parse a catalog name such as `"argb8888"` or `"SDL_PIXELFORMAT_NV12"`.
    ///
    /// Endianness alias names (`"RGBA32"`, ...) are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = name::strip_prefix_ignore_case(s.trim(), "SDL_PIXELFORMAT_");
        if s.is_empty() {
            return Err(ParseNameError::Empty);
        }
        name::lookup(Self::KNOWN, s)
            .or_else(|| name::lookup(Self::ALIASES, s))
            .ok_or(ParseNameError::Unrecognized)
    }
}
