//! Bit-packed 32-bit colorspace codes.
//!
//! ```text
//! 31..28 color type   27..24 range   23..20 chroma location   19..15 zero
//! 14..10 primaries     9..5  transfer  4..0  matrix
//! ```
//!
//! The primaries, transfer and matrix fields carry ITU-T H.273 (CICP)
//! code points; see [`Cicp`].

use core::fmt;
use core::str::FromStr;

use bytemuck::{Pod, Zeroable};

use crate::cicp::Cicp;
use crate::name::{self, ParseNameError};

// ---------------------------------------------------------------------------
// Component enums
// ---------------------------------------------------------------------------

/// Sample model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorType {
    Unknown = 0,
    Rgb = 1,
    Ycbcr = 2,
}

impl ColorType {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Unknown,
            1 => Self::Rgb,
            2 => Self::Ycbcr,
            _ => return None,
        })
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

/// Sample value range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorRange {
    Unknown = 0,
    /// Narrow range, e.g. 16-235 for 8-bit luma.
    Limited = 1,
    /// Full range, e.g. 0-255 for 8-bit.
    Full = 2,
}

impl ColorRange {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Unknown,
            1 => Self::Limited,
            2 => Self::Full,
            _ => return None,
        })
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

/// Siting of subsampled chroma relative to luma.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChromaLocation {
    /// RGB, no chroma sampling.
    None = 0,
    /// Chroma co-sited with the left luma sample (MPEG-2, H.264 default).
    Left = 1,
    /// Chroma centered between luma samples (JPEG).
    Center = 2,
    /// Chroma co-sited with the top-left luma sample (BT.2020 4:2:0).
    TopLeft = 3,
}

impl ChromaLocation {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::None,
            1 => Self::Left,
            2 => Self::Center,
            3 => Self::TopLeft,
            _ => return None,
        })
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

/// Color primaries, H.273 table 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorPrimaries {
    Unknown = 0,
    Bt709 = 1,
    Unspecified = 2,
    Bt470M = 4,
    Bt470Bg = 5,
    Bt601 = 6,
    Smpte240 = 7,
    GenericFilm = 8,
    Bt2020 = 9,
    Xyz = 10,
    Smpte431 = 11,
    Smpte432 = 12,
    Ebu3213 = 22,
    Custom = 31,
}

impl ColorPrimaries {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Unknown,
            1 => Self::Bt709,
            2 => Self::Unspecified,
            4 => Self::Bt470M,
            5 => Self::Bt470Bg,
            6 => Self::Bt601,
            7 => Self::Smpte240,
            8 => Self::GenericFilm,
            9 => Self::Bt2020,
            10 => Self::Xyz,
            11 => Self::Smpte431,
            12 => Self::Smpte432,
            22 => Self::Ebu3213,
            31 => Self::Custom,
            _ => return None,
        })
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

/// Transfer characteristics, H.273 table 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TransferCharacteristics {
    Unknown = 0,
    /// Rec. ITU-R BT.709-6 / BT.1361.
    Bt709 = 1,
    Unspecified = 2,
    /// ITU-R BT.470-6 System M / FCC, assumed display gamma 2.2.
    Gamma22 = 4,
    /// ITU-R BT.470-6 System B, G, assumed display gamma 2.8.
    Gamma28 = 5,
    /// SMPTE ST 170M / BT.601.
    Bt601 = 6,
    Smpte240 = 7,
    Linear = 8,
    Log100 = 9,
    Log100Sqrt10 = 10,
    /// IEC 61966-2-4.
    Iec61966 = 11,
    /// ITU-R BT.1361 extended colour gamut.
    Bt1361 = 12,
    /// IEC 61966-2-1 (sRGB).
    Srgb = 13,
    Bt2020Bits10 = 14,
    Bt2020Bits12 = 15,
    /// SMPTE ST 2084 for 10, 12, 14 and 16-bit systems.
    Pq = 16,
    /// SMPTE ST 428-1.
    Smpte428 = 17,
    /// ARIB STD-B67, known as hybrid log-gamma.
    Hlg = 18,
    Custom = 31,
}

impl TransferCharacteristics {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Unknown,
            1 => Self::Bt709,
            2 => Self::Unspecified,
            4 => Self::Gamma22,
            5 => Self::Gamma28,
            6 => Self::Bt601,
            7 => Self::Smpte240,
            8 => Self::Linear,
            9 => Self::Log100,
            10 => Self::Log100Sqrt10,
            11 => Self::Iec61966,
            12 => Self::Bt1361,
            13 => Self::Srgb,
            14 => Self::Bt2020Bits10,
            15 => Self::Bt2020Bits12,
            16 => Self::Pq,
            17 => Self::Smpte428,
            18 => Self::Hlg,
            31 => Self::Custom,
            _ => return None,
        })
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

/// Matrix coefficients, H.273 table 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MatrixCoefficients {
    Identity = 0,
    Bt709 = 1,
    Unspecified = 2,
    Fcc = 4,
    /// ITU-R BT.470-6 System B, G. Same coefficients as BT.601.
    Bt470Bg = 5,
    Bt601 = 6,
    Smpte240 = 7,
    Ycgco = 8,
    Bt2020Ncl = 9,
    Bt2020Cl = 10,
    Smpte2085 = 11,
    ChromaDerivedNcl = 12,
    ChromaDerivedCl = 13,
    Ictcp = 14,
    Custom = 31,
}

impl MatrixCoefficients {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Identity,
            1 => Self::Bt709,
            2 => Self::Unspecified,
            4 => Self::Fcc,
            5 => Self::Bt470Bg,
            6 => Self::Bt601,
            7 => Self::Smpte240,
            8 => Self::Ycgco,
            9 => Self::Bt2020Ncl,
            10 => Self::Bt2020Cl,
            11 => Self::Smpte2085,
            12 => Self::ChromaDerivedNcl,
            13 => Self::ChromaDerivedCl,
            14 => Self::Ictcp,
            31 => Self::Custom,
            _ => return None,
        })
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

// ---------------------------------------------------------------------------
// Colorspace
// ---------------------------------------------------------------------------

/// A colorspace code, bit-compatible with the native `SDL_Colorspace`.
///
/// Like [`PixelFormat`](crate::PixelFormat), equality is raw-integer equality.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Colorspace(u32);

/// The six raw fields of a colorspace code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorspaceFields {
    pub color_type: u8,
    pub range: u8,
    pub chroma: u8,
    pub primaries: u8,
    pub transfer: u8,
    pub matrix: u8,
}

impl Colorspace {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Pack a code from raw field values.
    ///
    /// `color_type`, `range` and `chroma` are truncated to 4 bits; the three
    /// CICP fields to 5 bits. Bits 19..15 are always zero.
    pub const fn define(
        color_type: u8,
        range: u8,
        chroma: u8,
        primaries: u8,
        transfer: u8,
        matrix: u8,
    ) -> Self {
        Self(
            (((color_type & 0x0F) as u32) << 28)
                | (((range & 0x0F) as u32) << 24)
                | (((chroma & 0x0F) as u32) << 20)
                | (((primaries & 0x1F) as u32) << 10)
                | (((transfer & 0x1F) as u32) << 5)
                | ((matrix & 0x1F) as u32),
        )
    }

    pub const fn new(
        color_type: ColorType,
        range: ColorRange,
        chroma: ChromaLocation,
        primaries: ColorPrimaries,
        transfer: TransferCharacteristics,
        matrix: MatrixCoefficients,
    ) -> Self {
        Self::define(
            color_type.raw(),
            range.raw(),
            chroma.raw(),
            primaries.raw(),
            transfer.raw(),
            matrix.raw(),
        )
    }

    /// Reinterpret a native array of raw codes without copying.
    pub fn cast_slice(raw: &[u32]) -> &[Colorspace] {
        bytemuck::cast_slice(raw)
    }

    // Field decoders ----------------------------------------------------------

    #[inline]
    pub const fn type_bits(self) -> u8 {
        ((self.0 >> 28) & 0x0F) as u8
    }

    #[inline]
    pub const fn range_bits(self) -> u8 {
        ((self.0 >> 24) & 0x0F) as u8
    }

    #[inline]
    pub const fn chroma_bits(self) -> u8 {
        ((self.0 >> 20) & 0x0F) as u8
    }

    #[inline]
    pub const fn primaries_bits(self) -> u8 {
        ((self.0 >> 10) & 0x1F) as u8
    }

    #[inline]
    pub const fn transfer_bits(self) -> u8 {
        ((self.0 >> 5) & 0x1F) as u8
    }

    #[inline]
    pub const fn matrix_bits(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    pub const fn fields(self) -> ColorspaceFields {
        ColorspaceFields {
            color_type: self.type_bits(),
            range: self.range_bits(),
            chroma: self.chroma_bits(),
            primaries: self.primaries_bits(),
            transfer: self.transfer_bits(),
            matrix: self.matrix_bits(),
        }
    }

    pub const fn color_type(self) -> Option<ColorType> {
        ColorType::from_raw(self.type_bits())
    }

    pub const fn range(self) -> Option<ColorRange> {
        ColorRange::from_raw(self.range_bits())
    }

    pub const fn chroma_location(self) -> Option<ChromaLocation> {
        ChromaLocation::from_raw(self.chroma_bits())
    }

    pub const fn primaries(self) -> Option<ColorPrimaries> {
        ColorPrimaries::from_raw(self.primaries_bits())
    }

    pub const fn transfer(self) -> Option<TransferCharacteristics> {
        TransferCharacteristics::from_raw(self.transfer_bits())
    }

    pub const fn matrix(self) -> Option<MatrixCoefficients> {
        MatrixCoefficients::from_raw(self.matrix_bits())
    }

    // Predicates --------------------------------------------------------------

    /// BT.601 matrix. BT.470BG uses the same coefficients and counts too.
    pub const fn is_matrix_bt601(self) -> bool {
        let m = self.matrix_bits();
        m == MatrixCoefficients::Bt601.raw() || m == MatrixCoefficients::Bt470Bg.raw()
    }

    pub const fn is_matrix_bt709(self) -> bool {
        self.matrix_bits() == MatrixCoefficients::Bt709.raw()
    }

    pub const fn is_matrix_bt2020_ncl(self) -> bool {
        self.matrix_bits() == MatrixCoefficients::Bt2020Ncl.raw()
    }

    /// Anything but full range, `Unknown` included.
    pub const fn is_limited_range(self) -> bool {
        self.range_bits() != ColorRange::Full.raw()
    }

    pub const fn is_full_range(self) -> bool {
        self.range_bits() == ColorRange::Full.raw()
    }

    pub const fn is_rgb(self) -> bool {
        self.type_bits() == ColorType::Rgb.raw()
    }

    pub const fn is_ycbcr(self) -> bool {
        self.type_bits() == ColorType::Ycbcr.raw()
    }

    // CICP --------------------------------------------------------------------

    /// The CICP code points of this colorspace.
    ///
    /// Color type and chroma siting have no CICP equivalent and are dropped.
    pub const fn to_cicp(self) -> Cicp {
        Cicp {
            color_primaries: self.primaries_bits(),
            transfer_characteristics: self.transfer_bits(),
            matrix_coefficients: self.matrix_bits(),
            full_range: self.is_full_range(),
        }
    }

    /// Build a colorspace from CICP code points.
    ///
    /// `full_range == false` maps to [`ColorRange::Limited`]. Code points
    /// above 31 are truncated to the 5-bit fields.
    pub const fn from_cicp(cicp: Cicp, color_type: ColorType, chroma: ChromaLocation) -> Self {
        let range = if cicp.full_range {
            ColorRange::Full
        } else {
            ColorRange::Limited
        };
        Self::define(
            color_type.raw(),
            range.raw(),
            chroma.raw(),
            cicp.color_primaries,
            cicp.transfer_characteristics,
            cicp.matrix_coefficients,
        )
    }

    pub fn name(self) -> Option<&'static str> {
        name::name_of(Self::KNOWN, self)
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

use ChromaLocation as C;
use ColorPrimaries as Pr;
use ColorRange as R;
use ColorType as Ty;
use MatrixCoefficients as M;
use TransferCharacteristics as Tf;

impl Colorspace {
    pub const UNKNOWN: Self = Self::from_raw(0);

    /// sRGB, the default for RGB formats.
    pub const SRGB: Self = Self::new(Ty::Rgb, R::Full, C::None, Pr::Bt709, Tf::Srgb, M::Identity);

    /// sRGB primaries with linear transfer. Usual for floating point content.
    pub const SRGB_LINEAR: Self = Self::new(
        Ty::Rgb,
        R::Full,
        C::None,
        Pr::Bt709,
        Tf::Linear,
        M::Identity,
    );

    /// BT.2020 primaries with PQ transfer, RGB.
    pub const HDR10: Self = Self::new(Ty::Rgb, R::Full, C::None, Pr::Bt2020, Tf::Pq, M::Identity);

    /// Full range BT.601 YCbCr with BT.709 primaries, as used by JPEG.
    pub const JPEG: Self = Self::new(Ty::Ycbcr, R::Full, C::None, Pr::Bt709, Tf::Bt601, M::Bt601);

    pub const BT601_LIMITED: Self = Self::new(
        Ty::Ycbcr,
        R::Limited,
        C::Left,
        Pr::Bt601,
        Tf::Bt601,
        M::Bt601,
    );
    pub const BT601_FULL: Self =
        Self::new(Ty::Ycbcr, R::Full, C::Left, Pr::Bt601, Tf::Bt601, M::Bt601);
    pub const BT709_LIMITED: Self = Self::new(
        Ty::Ycbcr,
        R::Limited,
        C::Left,
        Pr::Bt709,
        Tf::Bt709,
        M::Bt709,
    );
    pub const BT709_FULL: Self =
        Self::new(Ty::Ycbcr, R::Full, C::Left, Pr::Bt709, Tf::Bt709, M::Bt709);
    pub const BT2020_LIMITED: Self = Self::new(
        Ty::Ycbcr,
        R::Limited,
        C::Left,
        Pr::Bt2020,
        Tf::Pq,
        M::Bt2020Ncl,
    );
    pub const BT2020_FULL: Self = Self::new(
        Ty::Ycbcr,
        R::Full,
        C::Left,
        Pr::Bt2020,
        Tf::Pq,
        M::Bt2020Ncl,
    );

    /// Default for RGB pixel formats.
    pub const RGB_DEFAULT: Self = Self::SRGB;
    /// Default for YUV pixel formats.
    pub const YUV_DEFAULT: Self = Self::BT601_LIMITED;

    /// Every concrete catalog entry. The two defaults are aliases and omitted.
    pub const KNOWN: &'static [(&'static str, Colorspace)] = &[
        ("UNKNOWN", Self::UNKNOWN),
        ("SRGB", Self::SRGB),
        ("SRGB_LINEAR", Self::SRGB_LINEAR),
        ("HDR10", Self::HDR10),
        ("JPEG", Self::JPEG),
        ("BT601_LIMITED", Self::BT601_LIMITED),
        ("BT601_FULL", Self::BT601_FULL),
        ("BT709_LIMITED", Self::BT709_LIMITED),
        ("BT709_FULL", Self::BT709_FULL),
        ("BT2020_LIMITED", Self::BT2020_LIMITED),
        ("BT2020_FULL", Self::BT2020_FULL),
    ];

    const ALIASES: &'static [(&'static str, Colorspace)] = &[
        ("RGB_DEFAULT", Self::RGB_DEFAULT),
        ("YUV_DEFAULT", Self::YUV_DEFAULT),
    ];
}

impl From<u32> for Colorspace {
    #[inline]
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<Colorspace> for u32 {
    #[inline]
    fn from(colorspace: Colorspace) -> Self {
        colorspace.0
    }
}

impl fmt::Display for Colorspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "UNKNOWN(0x{:08X})", self.0),
        }
    }
}

impl fmt::Debug for Colorspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Colorspace({name})"),
            None => f
                .debug_struct("Colorspace")
                .field("type", &self.type_bits())
                .field("range", &self.range_bits())
                .field("chroma", &self.chroma_bits())
                .field("primaries", &self.primaries_bits())
                .field("transfer", &self.transfer_bits())
                .field("matrix", &self.matrix_bits())
                .finish(),
        }
    }
}

impl FromStr for Colorspace {
    type Err = ParseNameError;

    /// Parse a catalog name such as `"bt709_full"` or `"SDL_COLORSPACE_SRGB"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = name::strip_prefix_ignore_case(s.trim(), "SDL_COLORSPACE_");
        if s.is_empty() {
            return Err(ParseNameError::Empty);
        }
        name::lookup(Self::KNOWN, s)
            .or_else(|| name::lookup(Self::ALIASES, s))
            .ok_or(ParseNameError::Unrecognized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    const NATIVE: &[(Colorspace, u32)] = &[
        (Colorspace::UNKNOWN, 0),
        (Colorspace::SRGB, 0x1200_05a0),
        (Colorspace::SRGB_LINEAR, 0x1200_0500),
        (Colorspace::HDR10, 0x1200_2600),
        (Colorspace::JPEG, 0x2200_04c6),
        (Colorspace::BT601_LIMITED, 0x2110_18c6),
        (Colorspace::BT601_FULL, 0x2210_18c6),
        (Colorspace::BT709_LIMITED, 0x2110_0421),
        (Colorspace::BT709_FULL, 0x2210_0421),
        (Colorspace::BT2020_LIMITED, 0x2110_2609),
        (Colorspace::BT2020_FULL, 0x2210_2609),
    ];

    #[test]
    fn catalog_matches_native_values() {
        for &(cs, raw) in NATIVE {
            assert_eq!(cs.raw(), raw, "{cs}");
        }
        assert_eq!(Colorspace::KNOWN.len(), NATIVE.len());
        assert_eq!(Colorspace::RGB_DEFAULT, Colorspace::SRGB);
        assert_eq!(Colorspace::YUV_DEFAULT, Colorspace::BT601_LIMITED);
    }

    #[test]
    fn catalog_roundtrips_through_fields() {
        for &(name, cs) in Colorspace::KNOWN {
            let rebuilt = Colorspace::new(
                cs.color_type().unwrap(),
                cs.range().unwrap(),
                cs.chroma_location().unwrap(),
                cs.primaries().unwrap(),
                cs.transfer().unwrap(),
                cs.matrix().unwrap(),
            );
            assert_eq!(rebuilt.raw(), cs.raw(), "{name}");

            let f = cs.fields();
            let raw = Colorspace::define(
                f.color_type,
                f.range,
                f.chroma,
                f.primaries,
                f.transfer,
                f.matrix,
            );
            assert_eq!(raw, cs, "{name}");
        }
    }

    #[test]
    fn define_truncates_and_keeps_padding_zero() {
        let cs = Colorspace::define(0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF);
        assert_eq!(cs.raw() & 0x000F_8000, 0);
        assert_eq!(cs.raw(), 0xFFF0_7FFF);
        assert_eq!(cs.primaries_bits(), 31);
        assert_eq!(cs.type_bits(), 15);
    }

    #[test]
    fn fields_roundtrip() {
        for ty in 0..16u8 {
            for cicp in [0u8, 1, 6, 9, 16, 31] {
                let cs = Colorspace::define(ty, 15 - ty, ty / 2, cicp, 31 - cicp, cicp);
                assert_eq!(
                    cs.fields(),
                    ColorspaceFields {
                        color_type: ty,
                        range: 15 - ty,
                        chroma: ty / 2,
                        primaries: cicp,
                        transfer: 31 - cicp,
                        matrix: cicp,
                    }
                );
            }
        }
    }

    #[test]
    fn bt601_matrix_includes_bt470bg() {
        let bg = Colorspace::new(
            ColorType::Ycbcr,
            ColorRange::Limited,
            ChromaLocation::Left,
            ColorPrimaries::Bt470Bg,
            TransferCharacteristics::Bt601,
            MatrixCoefficients::Bt470Bg,
        );
        assert!(bg.is_matrix_bt601());
        assert!(Colorspace::BT601_LIMITED.is_matrix_bt601());
        assert!(Colorspace::JPEG.is_matrix_bt601());
        assert!(!Colorspace::BT709_FULL.is_matrix_bt601());
        assert!(!Colorspace::SRGB.is_matrix_bt601());
    }

    #[test]
    fn matrix_predicates() {
        assert!(Colorspace::BT709_LIMITED.is_matrix_bt709());
        assert!(!Colorspace::BT601_FULL.is_matrix_bt709());
        assert!(Colorspace::BT2020_FULL.is_matrix_bt2020_ncl());
        assert!(!Colorspace::HDR10.is_matrix_bt2020_ncl());
    }

    #[test]
    fn range_predicates() {
        assert!(Colorspace::BT709_FULL.is_full_range());
        assert!(!Colorspace::BT709_FULL.is_limited_range());
        assert!(Colorspace::BT709_LIMITED.is_limited_range());
        assert!(!Colorspace::BT709_LIMITED.is_full_range());
        // Unknown range is not full.
        assert!(Colorspace::UNKNOWN.is_limited_range());
    }

    #[test]
    fn type_predicates() {
        assert!(Colorspace::SRGB.is_rgb());
        assert!(!Colorspace::SRGB.is_ycbcr());
        assert!(Colorspace::JPEG.is_ycbcr());
        assert!(!Colorspace::UNKNOWN.is_rgb());
    }

    #[test]
    fn cicp_conversion() {
        assert_eq!(Colorspace::SRGB.to_cicp(), Cicp::SRGB);
        assert_eq!(Colorspace::SRGB_LINEAR.to_cicp(), Cicp::SRGB_LINEAR);
        assert_eq!(Colorspace::HDR10.to_cicp(), Cicp::HDR10);
        assert_eq!(Colorspace::BT2020_FULL.to_cicp(), Cicp::BT2100_PQ);

        assert_eq!(
            Colorspace::from_cicp(Cicp::SRGB, ColorType::Rgb, ChromaLocation::None),
            Colorspace::SRGB
        );
        for &(name, cs) in Colorspace::KNOWN {
            if cs == Colorspace::UNKNOWN {
                continue;
            }
            let back = Colorspace::from_cicp(
                cs.to_cicp(),
                cs.color_type().unwrap(),
                cs.chroma_location().unwrap(),
            );
            assert_eq!(back, cs, "{name}");
        }
    }

    #[test]
    fn from_cicp_limited_range() {
        let cicp = Cicp {
            full_range: false,
            ..Cicp::BT2100_HLG
        };
        let cs = Colorspace::from_cicp(cicp, ColorType::Ycbcr, ChromaLocation::TopLeft);
        assert!(cs.is_limited_range());
        assert_eq!(cs.range(), Some(ColorRange::Limited));
        assert_eq!(cs.transfer(), Some(TransferCharacteristics::Hlg));
        assert_eq!(cs.chroma_location(), Some(ChromaLocation::TopLeft));
    }

    #[test]
    fn unassigned_code_points_decode_to_none() {
        let cs = Colorspace::define(3, 3, 4, 3, 3, 3);
        assert_eq!(cs.color_type(), None);
        assert_eq!(cs.range(), None);
        assert_eq!(cs.chroma_location(), None);
        assert_eq!(cs.primaries(), None);
        assert_eq!(cs.transfer(), None);
        assert_eq!(cs.matrix(), None);
    }

    #[test]
    fn equality_is_raw_equality() {
        let a = Colorspace::from_raw(0x1200_05a0);
        let b: Colorspace = 0x1200_05a0u32.into();
        assert_eq!(a, Colorspace::SRGB);
        assert_eq!(a, b);
        assert_eq!(u32::from(b), 0x1200_05a0);
        assert_ne!(Colorspace::BT709_FULL, Colorspace::BT709_LIMITED);
    }

    #[test]
    fn cast_slice_reinterprets() {
        let raw = [0x1200_05a0u32, 0x2210_0421];
        assert_eq!(
            Colorspace::cast_slice(&raw),
            &[Colorspace::SRGB, Colorspace::BT709_FULL]
        );
    }

    #[test]
    fn display_debug_and_parse() {
        assert_eq!(Colorspace::HDR10.to_string(), "HDR10");
        assert_eq!(
            Colorspace::from_raw(0x1100_0000).to_string(),
            "UNKNOWN(0x11000000)"
        );
        assert_eq!(format!("{:?}", Colorspace::JPEG), "Colorspace(JPEG)");
        assert_eq!(
            format!("{:?}", Colorspace::define(1, 1, 0, 1, 8, 0)),
            "Colorspace { type: 1, range: 1, chroma: 0, primaries: 1, transfer: 8, matrix: 0 }"
        );
        assert_eq!("srgb".parse(), Ok(Colorspace::SRGB));
        assert_eq!(
            "SDL_COLORSPACE_BT2020_FULL".parse(),
            Ok(Colorspace::BT2020_FULL)
        );
        assert_eq!("yuv_default".parse(), Ok(Colorspace::BT601_LIMITED));
        assert_eq!("".parse::<Colorspace>(), Err(ParseNameError::Empty));
        assert_eq!(
            "ACES".parse::<Colorspace>(),
            Err(ParseNameError::Unrecognized)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_is_transparent_u32() {
        let json = serde_json::to_string(&Colorspace::SRGB).unwrap();
        assert_eq!(json, "301991328");
        let back: Colorspace = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Colorspace::SRGB);
    }
}
