//! Component enums for the structured pixel format encoding.
//!
//! Each enum names the values one 4-bit field of a [`PixelFormat`](crate::PixelFormat)
//! can hold. Discriminants are the native library's numeric values and must
//! not change.
//!
//! The component order nibble has three meanings depending on the pixel
//! type family: [`BitmapOrder`] for indexed types, [`PackedOrder`] for
//! packed types, [`ArrayOrder`] for array types.

/// Storage family of a pixel format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PixelType {
    Unknown = 0,
    Index1 = 1,
    Index4 = 2,
    Index8 = 3,
    Packed8 = 4,
    Packed16 = 5,
    Packed32 = 6,
    ArrayU8 = 7,
    ArrayU16 = 8,
    ArrayU32 = 9,
    ArrayF16 = 10,
    ArrayF32 = 11,
    /// Added after the other index types, hence out of sequence.
    Index2 = 12,
}

impl PixelType {
    /// Map a raw 4-bit field value to a variant.
    ///
    /// Returns `None` for 13-15 and anything wider than a nibble.
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Unknown,
            1 => Self::Index1,
            2 => Self::Index4,
            3 => Self::Index8,
            4 => Self::Packed8,
            5 => Self::Packed16,
            6 => Self::Packed32,
            7 => Self::ArrayU8,
            8 => Self::ArrayU16,
            9 => Self::ArrayU32,
            10 => Self::ArrayF16,
            11 => Self::ArrayF32,
            12 => Self::Index2,
            _ => return None,
        })
    }

    /// Raw field value.
    #[inline]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Palette-indexed storage (1, 2, 4 or 8 bits per index).
    pub const fn is_indexed(self) -> bool {
        matches!(
            self,
            Self::Index1 | Self::Index2 | Self::Index4 | Self::Index8
        )
    }

    /// All channels interleaved in one 8, 16 or 32-bit word.
    pub const fn is_packed(self) -> bool {
        matches!(self, Self::Packed8 | Self::Packed16 | Self::Packed32)
    }

    /// One array element per channel.
    pub const fn is_array(self) -> bool {
        matches!(
            self,
            Self::ArrayU8 | Self::ArrayU16 | Self::ArrayU32 | Self::ArrayF16 | Self::ArrayF32
        )
    }

    /// Half or single precision float channels.
    pub const fn is_float(self) -> bool {
        matches!(self, Self::ArrayF16 | Self::ArrayF32)
    }
}

/// Bit order within a byte for indexed formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BitmapOrder {
    None = 0,
    /// Least significant bit first.
    Order4321 = 1,
    /// Most significant bit first.
    Order1234 = 2,
}

impl BitmapOrder {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::None,
            1 => Self::Order4321,
            2 => Self::Order1234,
            _ => return None,
        })
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

/// Channel order within a packed word, most significant channel first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PackedOrder {
    None = 0,
    Xrgb = 1,
    Rgbx = 2,
    Argb = 3,
    Rgba = 4,
    Xbgr = 5,
    Bgrx = 6,
    Abgr = 7,
    Bgra = 8,
}

impl PackedOrder {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::None,
            1 => Self::Xrgb,
            2 => Self::Rgbx,
            3 => Self::Argb,
            4 => Self::Rgba,
            5 => Self::Xbgr,
            6 => Self::Bgrx,
            7 => Self::Abgr,
            8 => Self::Bgra,
            _ => return None,
        })
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Whether the order carries a real alpha channel (not padding).
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Argb | Self::Rgba | Self::Abgr | Self::Bgra)
    }
}

/// Channel order in memory for array formats, lowest address first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ArrayOrder {
    None = 0,
    Rgb = 1,
    Rgba = 2,
    Argb = 3,
    Bgr = 4,
    Bgra = 5,
    Abgr = 6,
}

impl ArrayOrder {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::None,
            1 => Self::Rgb,
            2 => Self::Rgba,
            3 => Self::Argb,
            4 => Self::Bgr,
            5 => Self::Bgra,
            6 => Self::Abgr,
            _ => return None,
        })
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Number of channels in this order (0 for `None`).
    pub const fn channels(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Rgb | Self::Bgr => 3,
            Self::Rgba | Self::Argb | Self::Bgra | Self::Abgr => 4,
        }
    }
}

/// Bit widths of the channels in a packed word, most significant first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PackedLayout {
    None = 0,
    Layout332 = 1,
    Layout4444 = 2,
    Layout1555 = 3,
    Layout5551 = 4,
    Layout565 = 5,
    Layout8888 = 6,
    Layout2101010 = 7,
    Layout1010102 = 8,
}

impl PackedLayout {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::None,
            1 => Self::Layout332,
            2 => Self::Layout4444,
            3 => Self::Layout1555,
            4 => Self::Layout5551,
            5 => Self::Layout565,
            6 => Self::Layout8888,
            7 => Self::Layout2101010,
            8 => Self::Layout1010102,
            _ => return None,
        })
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// The four channel masks of this layout, most significant channel
    /// first. Three-channel layouts report `0` for the leading slot.
    ///
    /// `None` for [`PackedLayout::None`].
    pub const fn masks(self) -> Option<[u32; 4]> {
        Some(match self {
            Self::None => return None,
            Self::Layout332 => [0x0000_0000, 0x0000_00E0, 0x0000_001C, 0x0000_0003],
            Self::Layout4444 => [0x0000_F000, 0x0000_0F00, 0x0000_00F0, 0x0000_000F],
            Self::Layout1555 => [0x0000_8000, 0x0000_7C00, 0x0000_03E0, 0x0000_001F],
            Self::Layout5551 => [0x0000_F800, 0x0000_07C0, 0x0000_003E, 0x0000_0001],
            Self::Layout565 => [0x0000_0000, 0x0000_F800, 0x0000_07E0, 0x0000_001F],
            Self::Layout8888 => [0xFF00_0000, 0x00FF_0000, 0x0000_FF00, 0x0000_00FF],
            Self::Layout2101010 => [0xC000_0000, 0x3FF0_0000, 0x000F_FC00, 0x0000_03FF],
            Self::Layout1010102 => [0xFFC0_0000, 0x003F_F000, 0x0000_0FFC, 0x0000_0003],
        })
    }
}
