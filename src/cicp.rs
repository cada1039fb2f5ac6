//! CICP code points (ITU-T H.273).

/// CICP color description.
///
/// The primaries, transfer and matrix fields of a
/// [`Colorspace`](crate::Colorspace) hold exactly these code points, so the
/// two convert without loss apart from color type and chroma siting.
///
/// | preset       | primaries | transfer | matrix |
/// |--------------|-----------|----------|--------|
/// | `SRGB`       | 1         | 13       | 0      |
/// | `HDR10`      | 9         | 16       | 0      |
/// | `BT2100_PQ`  | 9         | 16       | 9      |
/// | `BT2100_HLG` | 9         | 18       | 9      |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cicp {
    /// Color primaries (ColourPrimaries). Common values:
    /// 1 = BT.709/sRGB, 9 = BT.2020, 12 = Display P3.
    pub color_primaries: u8,
    /// Transfer characteristics (TransferCharacteristics). Common values:
    /// 1 = BT.709, 8 = linear, 13 = sRGB, 16 = PQ (HDR), 18 = HLG (HDR).
    pub transfer_characteristics: u8,
    /// Matrix coefficients (MatrixCoefficients). Common values:
    /// 0 = Identity/RGB, 1 = BT.709, 6 = BT.601, 9 = BT.2020.
    pub matrix_coefficients: u8,
    /// Full (0-255 at 8 bits) or limited (16-235 luma) range.
    pub full_range: bool,
}

impl Cicp {
    /// sRGB: BT.709 primaries, sRGB transfer, identity matrix, full range.
    pub const SRGB: Self = Self::new(1, 13, 0, true);

    /// Linear sRGB: BT.709 primaries, linear transfer, identity matrix.
    pub const SRGB_LINEAR: Self = Self::new(1, 8, 0, true);

    /// HDR10 RGB: BT.2020 primaries, PQ transfer, identity matrix.
    pub const HDR10: Self = Self::new(9, 16, 0, true);

    /// BT.2100 PQ: BT.2020 primaries, PQ transfer, BT.2020 matrix, full range.
    pub const BT2100_PQ: Self = Self::new(9, 16, 9, true);

    /// BT.2100 HLG: BT.2020 primaries, HLG transfer, BT.2020 matrix, full range.
    pub const BT2100_HLG: Self = Self::new(9, 18, 9, true);

    pub const fn new(
        color_primaries: u8,
        transfer_characteristics: u8,
        matrix_coefficients: u8,
        full_range: bool,
    ) -> Self {
        Self {
            color_primaries,
            transfer_characteristics,
            matrix_coefficients,
            full_range,
        }
    }

    /// Identity matrix, i.e. the samples are RGB.
    pub const fn is_rgb(self) -> bool {
        self.matrix_coefficients == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_detection() {
        assert!(Cicp::SRGB.is_rgb());
        assert!(Cicp::HDR10.is_rgb());
        assert!(!Cicp::BT2100_PQ.is_rgb());
    }

    #[test]
    fn presets_match_h273() {
        assert_eq!(Cicp::SRGB, Cicp::new(1, 13, 0, true));
        assert_eq!(Cicp::SRGB_LINEAR.transfer_characteristics, 8);
        assert_eq!(Cicp::HDR10, Cicp::new(9, 16, 0, true));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&Cicp::HDR10).unwrap();
        assert!(json.contains("\"transfer_characteristics\":16"));
        assert!(json.contains("\"full_range\":true"));
        let back: Cicp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Cicp::HDR10);
    }

    #[test]
    fn hdr_variants_differ_only_in_transfer() {
        let pq = Cicp::BT2100_PQ;
        let hlg = Cicp::BT2100_HLG;
        assert_eq!(pq.color_primaries, hlg.color_primaries);
        assert_eq!(pq.matrix_coefficients, hlg.matrix_coefficients);
        assert_ne!(pq.transfer_characteristics, hlg.transfer_characteristics);
    }
}
