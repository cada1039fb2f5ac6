//! Well-known pixel formats.
//!
//! Every constant is built from the encoders with the same component values
//! the native library uses, so each one is bit-identical to its native
//! counterpart.

use crate::PixelFormat;
use crate::layout::{
    ArrayOrder as A, BitmapOrder as B, PackedLayout as L, PackedOrder as P, PixelType as T,
};

const LITTLE_ENDIAN: bool = cfg!(target_endian = "little");

impl PixelFormat {
    pub const UNKNOWN: Self = Self::from_raw(0);

    // Indexed -----------------------------------------------------------------

    pub const INDEX1LSB: Self = Self::bitmap(T::Index1, B::Order4321, 1, 0);
    pub const INDEX1MSB: Self = Self::bitmap(T::Index1, B::Order1234, 1, 0);
    pub const INDEX2LSB: Self = Self::bitmap(T::Index2, B::Order4321, 2, 0);
    pub const INDEX2MSB: Self = Self::bitmap(T::Index2, B::Order1234, 2, 0);
    pub const INDEX4LSB: Self = Self::bitmap(T::Index4, B::Order4321, 4, 0);
    pub const INDEX4MSB: Self = Self::bitmap(T::Index4, B::Order1234, 4, 0);
    pub const INDEX8: Self = Self::bitmap(T::Index8, B::None, 8, 1);

    // Packed 8 and 16 bit -----------------------------------------------------

    pub const RGB332: Self = Self::packed(T::Packed8, P::Xrgb, L::Layout332, 8, 1);
    pub const XRGB4444: Self = Self::packed(T::Packed16, P::Xrgb, L::Layout4444, 12, 2);
    pub const XBGR4444: Self = Self::packed(T::Packed16, P::Xbgr, L::Layout4444, 12, 2);
    pub const XRGB1555: Self = Self::packed(T::Packed16, P::Xrgb, L::Layout1555, 15, 2);
    pub const XBGR1555: Self = Self::packed(T::Packed16, P::Xbgr, L::Layout1555, 15, 2);
    pub const ARGB4444: Self = Self::packed(T::Packed16, P::Argb, L::Layout4444, 16, 2);
    pub const RGBA4444: Self = Self::packed(T::Packed16, P::Rgba, L::Layout4444, 16, 2);
    pub const ABGR4444: Self = Self::packed(T::Packed16, P::Abgr, L::Layout4444, 16, 2);
    pub const BGRA4444: Self = Self::packed(T::Packed16, P::Bgra, L::Layout4444, 16, 2);
    pub const ARGB1555: Self = Self::packed(T::Packed16, P::Argb, L::Layout1555, 16, 2);
    pub const RGBA5551: Self = Self::packed(T::Packed16, P::Rgba, L::Layout5551, 16, 2);
    pub const ABGR1555: Self = Self::packed(T::Packed16, P::Abgr, L::Layout1555, 16, 2);
    pub const BGRA5551: Self = Self::packed(T::Packed16, P::Bgra, L::Layout5551, 16, 2);
    pub const RGB565: Self = Self::packed(T::Packed16, P::Xrgb, L::Layout565, 16, 2);
    pub const BGR565: Self = Self::packed(T::Packed16, P::Xbgr, L::Layout565, 16, 2);

    // 24-bit arrays -----------------------------------------------------------

    pub const RGB24: Self = Self::array(T::ArrayU8, A::Rgb, 24, 3);
    pub const BGR24: Self = Self::array(T::ArrayU8, A::Bgr, 24, 3);

    // Packed 32 bit -----------------------------------------------------------

    pub const XRGB8888: Self = Self::packed(T::Packed32, P::Xrgb, L::Layout8888, 24, 4);
    pub const RGBX8888: Self = Self::packed(T::Packed32, P::Rgbx, L::Layout8888, 24, 4);
    pub const XBGR8888: Self = Self::packed(T::Packed32, P::Xbgr, L::Layout8888, 24, 4);
    pub const BGRX8888: Self = Self::packed(T::Packed32, P::Bgrx, L::Layout8888, 24, 4);
    pub const ARGB8888: Self = Self::packed(T::Packed32, P::Argb, L::Layout8888, 32, 4);
    pub const RGBA8888: Self = Self::packed(T::Packed32, P::Rgba, L::Layout8888, 32, 4);
    pub const ABGR8888: Self = Self::packed(T::Packed32, P::Abgr, L::Layout8888, 32, 4);
    pub const BGRA8888: Self = Self::packed(T::Packed32, P::Bgra, L::Layout8888, 32, 4);
    pub const XRGB2101010: Self = Self::packed(T::Packed32, P::Xrgb, L::Layout2101010, 32, 4);
    pub const XBGR2101010: Self = Self::packed(T::Packed32, P::Xbgr, L::Layout2101010, 32, 4);
    pub const ARGB2101010: Self = Self::packed(T::Packed32, P::Argb, L::Layout2101010, 32, 4);
    pub const ABGR2101010: Self = Self::packed(T::Packed32, P::Abgr, L::Layout2101010, 32, 4);

    // 16 bit per channel ------------------------------------------------------

    pub const RGB48: Self = Self::array(T::ArrayU16, A::Rgb, 48, 6);
    pub const BGR48: Self = Self::array(T::ArrayU16, A::Bgr, 48, 6);
    pub const RGBA64: Self = Self::array(T::ArrayU16, A::Rgba, 64, 8);
    pub const ARGB64: Self = Self::array(T::ArrayU16, A::Argb, 64, 8);
    pub const BGRA64: Self = Self::array(T::ArrayU16, A::Bgra, 64, 8);
    pub const ABGR64: Self = Self::array(T::ArrayU16, A::Abgr, 64, 8);

    // Half float --------------------------------------------------------------

    pub const RGB48_FLOAT: Self = Self::array(T::ArrayF16, A::Rgb, 48, 6);
    pub const BGR48_FLOAT: Self = Self::array(T::ArrayF16, A::Bgr, 48, 6);
    pub const RGBA64_FLOAT: Self = Self::array(T::ArrayF16, A::Rgba, 64, 8);
    pub const ARGB64_FLOAT: Self = Self::array(T::ArrayF16, A::Argb, 64, 8);
    pub const BGRA64_FLOAT: Self = Self::array(T::ArrayF16, A::Bgra, 64, 8);
    pub const ABGR64_FLOAT: Self = Self::array(T::ArrayF16, A::Abgr, 64, 8);

    // Single float ------------------------------------------------------------

    pub const RGB96_FLOAT: Self = Self::array(T::ArrayF32, A::Rgb, 96, 12);
    pub const BGR96_FLOAT: Self = Self::array(T::ArrayF32, A::Bgr, 96, 12);
    pub const RGBA128_FLOAT: Self = Self::array(T::ArrayF32, A::Rgba, 128, 16);
    pub const ARGB128_FLOAT: Self = Self::array(T::ArrayF32, A::Argb, 128, 16);
    pub const BGRA128_FLOAT: Self = Self::array(T::ArrayF32, A::Bgra, 128, 16);
    pub const ABGR128_FLOAT: Self = Self::array(T::ArrayF32, A::Abgr, 128, 16);

    // FourCC ------------------------------------------------------------------

    /// Planar Y + V + U (3 planes).
    pub const YV12: Self = Self::from_fourcc(b"YV12");
    /// Planar Y + U + V (3 planes).
    pub const IYUV: Self = Self::from_fourcc(b"IYUV");
    /// Packed Y0+U0+Y1+V0 (1 plane).
    pub const YUY2: Self = Self::from_fourcc(b"YUY2");
    /// Packed U0+Y0+V0+Y1 (1 plane).
    pub const UYVY: Self = Self::from_fourcc(b"UYVY");
    /// Packed Y0+V0+Y1+U0 (1 plane).
    pub const YVYU: Self = Self::from_fourcc(b"YVYU");
    /// Planar Y + interleaved U/V (2 planes).
    pub const NV12: Self = Self::from_fourcc(b"NV12");
    /// Planar Y + interleaved V/U (2 planes).
    pub const NV21: Self = Self::from_fourcc(b"NV21");
    /// Planar Y + interleaved U/V, 10 bits in 16-bit words (2 planes).
    pub const P010: Self = Self::from_fourcc(b"P010");
    /// Android video texture format.
    pub const EXTERNAL_OES: Self = Self::from_fourcc(b"OES ");
    /// Motion JPEG.
    pub const MJPG: Self = Self::from_fourcc(b"MJPG");

    // Byte-order aliases ------------------------------------------------------
    //
    // Channel letters name bytes in memory order, so the packed word they map
    // to flips with host endianness.

    pub const RGBA32: Self = if LITTLE_ENDIAN {
        Self::ABGR8888
    } else {
        Self::RGBA8888
    };
    pub const ARGB32: Self = if LITTLE_ENDIAN {
        Self::BGRA8888
    } else {
        Self::ARGB8888
    };
    pub const BGRA32: Self = if LITTLE_ENDIAN {
        Self::ARGB8888
    } else {
        Self::BGRA8888
    };
    pub const ABGR32: Self = if LITTLE_ENDIAN {
        Self::RGBA8888
    } else {
        Self::ABGR8888
    };
    pub const RGBX32: Self = if LITTLE_ENDIAN {
        Self::XBGR8888
    } else {
        Self::RGBX8888
    };
    pub const XRGB32: Self = if LITTLE_ENDIAN {
        Self::BGRX8888
    } else {
        Self::XRGB8888
    };
    pub const BGRX32: Self = if LITTLE_ENDIAN {
        Self::XRGB8888
    } else {
        Self::BGRX8888
    };
    pub const XBGR32: Self = if LITTLE_ENDIAN {
        Self::RGBX8888
    } else {
        Self::XBGR8888
    };

    /// Every concrete catalog entry in native enumeration order.
    ///
    /// Aliases are excluded so each value appears exactly once.
    pub const KNOWN: &'static [(&'static str, PixelFormat)] = &[
        ("UNKNOWN", Self::UNKNOWN),
        ("INDEX1LSB", Self::INDEX1LSB),
        ("INDEX1MSB", Self::INDEX1MSB),
        ("INDEX2LSB", Self::INDEX2LSB),
        ("INDEX2MSB", Self::INDEX2MSB),
        ("INDEX4LSB", Self::INDEX4LSB),
        ("INDEX4MSB", Self::INDEX4MSB),
        ("INDEX8", Self::INDEX8),
        ("RGB332", Self::RGB332),
        ("XRGB4444", Self::XRGB4444),
        ("XBGR4444", Self::XBGR4444),
        ("XRGB1555", Self::XRGB1555),
        ("XBGR1555", Self::XBGR1555),
        ("ARGB4444", Self::ARGB4444),
        ("RGBA4444", Self::RGBA4444),
        ("ABGR4444", Self::ABGR4444),
        ("BGRA4444", Self::BGRA4444),
        ("ARGB1555", Self::ARGB1555),
        ("RGBA5551", Self::RGBA5551),
        ("ABGR1555", Self::ABGR1555),
        ("BGRA5551", Self::BGRA5551),
        ("RGB565", Self::RGB565),
        ("BGR565", Self::BGR565),
        ("RGB24", Self::RGB24),
        ("BGR24", Self::BGR24),
        ("XRGB8888", Self::XRGB8888),
        ("RGBX8888", Self::RGBX8888),
        ("XBGR8888", Self::XBGR8888),
        ("BGRX8888", Self::BGRX8888),
        ("ARGB8888", Self::ARGB8888),
        ("RGBA8888", Self::RGBA8888),
        ("ABGR8888", Self::ABGR8888),
        ("BGRA8888", Self::BGRA8888),
        ("XRGB2101010", Self::XRGB2101010),
        ("XBGR2101010", Self::XBGR2101010),
        ("ARGB2101010", Self::ARGB2101010),
        ("ABGR2101010", Self::ABGR2101010),
        ("RGB48", Self::RGB48),
        ("BGR48", Self::BGR48),
        ("RGBA64", Self::RGBA64),
        ("ARGB64", Self::ARGB64),
        ("BGRA64", Self::BGRA64),
        ("ABGR64", Self::ABGR64),
        ("RGB48_FLOAT", Self::RGB48_FLOAT),
        ("BGR48_FLOAT", Self::BGR48_FLOAT),
        ("RGBA64_FLOAT", Self::RGBA64_FLOAT),
        ("ARGB64_FLOAT", Self::ARGB64_FLOAT),
        ("BGRA64_FLOAT", Self::BGRA64_FLOAT),
        ("ABGR64_FLOAT", Self::ABGR64_FLOAT),
        ("RGB96_FLOAT", Self::RGB96_FLOAT),
        ("BGR96_FLOAT", Self::BGR96_FLOAT),
        ("RGBA128_FLOAT", Self::RGBA128_FLOAT),
        ("ARGB128_FLOAT", Self::ARGB128_FLOAT),
        ("BGRA128_FLOAT", Self::BGRA128_FLOAT),
        ("ABGR128_FLOAT", Self::ABGR128_FLOAT),
        ("YV12", Self::YV12),
        ("IYUV", Self::IYUV),
        ("YUY2", Self::YUY2),
        ("UYVY", Self::UYVY),
        ("YVYU", Self::YVYU),
        ("NV12", Self::NV12),
        ("NV21", Self::NV21),
        ("P010", Self::P010),
        ("EXTERNAL_OES", Self::EXTERNAL_OES),
        ("MJPG", Self::MJPG),
    ];

    /// Byte-order alias names, resolved for this target.
    pub const ALIASES: &'static [(&'static str, PixelFormat)] = &[
        ("RGBA32", Self::RGBA32),
        ("ARGB32", Self::ARGB32),
        ("BGRA32", Self::BGRA32),
        ("ABGR32", Self::ABGR32),
        ("RGBX32", Self::RGBX32),
        ("XRGB32", Self::XRGB32),
        ("BGRX32", Self::BGRX32),
        ("XBGR32", Self::XBGR32),
    ];
}
