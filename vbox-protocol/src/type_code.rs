//! Box type codes carried in the three type bits.

/// 3-bit box type code, `(type2 << 2) | (type1 << 1) | type0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TypeCode(u8);

impl TypeCode {
    /// Highest representable code
    pub const MAX: u8 = 0b111;

    /// Create a code from its numeric value (0-7)
    pub const fn new(code: u8) -> Option<Self> {
        if code > Self::MAX {
            None
        } else {
            Some(Self(code))
        }
    }

    /// Compose a code from individual bits, LSB first
    pub const fn from_bits(bit0: bool, bit1: bool, bit2: bool) -> Self {
        Self(((bit2 as u8) << 2) | ((bit1 as u8) << 1) | bit0 as u8)
    }

    /// Numeric value (0-7)
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Individual bits, LSB first
    pub const fn bits(self) -> (bool, bool, bool) {
        (self.0 & 0b001 != 0, self.0 & 0b010 != 0, self.0 & 0b100 != 0)
    }

    /// Box type this code stands for
    pub const fn box_type(self) -> BoxType {
        match self.0 {
            0b000 => BoxType::None,
            0b001 => BoxType::Box10x20,
            0b010 => BoxType::Box20x20,
            0b100 => BoxType::Box30x50,
            0b111 => BoxType::Unknown,
            _ => BoxType::Invalid,
        }
    }

    /// Human-readable label
    pub const fn label(self) -> &'static str {
        self.box_type().label()
    }
}

/// Box size category resolved from a [`TypeCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoxType {
    /// No box present (000)
    None,
    /// 10x20 box (001)
    Box10x20,
    /// 20x20 box (010)
    Box20x20,
    /// 30x50 box (100)
    Box30x50,
    /// Box seen but not classified (111)
    Unknown,
    /// Any bit pattern without a meaning (011, 101, 110)
    Invalid,
}

impl BoxType {
    /// Label printed in status reports
    pub const fn label(self) -> &'static str {
        match self {
            BoxType::None => "none",
            BoxType::Box10x20 => "10x20",
            BoxType::Box20x20 => "20x20",
            BoxType::Box30x50 => "30x50",
            BoxType::Unknown => "unknown",
            BoxType::Invalid => "invalid code",
        }
    }

    /// Canonical code for this box type
    ///
    /// `Invalid` covers several codes and has no canonical one.
    pub const fn code(self) -> Option<TypeCode> {
        match self {
            BoxType::None => Some(TypeCode(0b000)),
            BoxType::Box10x20 => Some(TypeCode(0b001)),
            BoxType::Box20x20 => Some(TypeCode(0b010)),
            BoxType::Box30x50 => Some(TypeCode(0b100)),
            BoxType::Unknown => Some(TypeCode(0b111)),
            BoxType::Invalid => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_table() {
        let expected = [
            "none",
            "10x20",
            "20x20",
            "invalid code",
            "30x50",
            "invalid code",
            "invalid code",
            "unknown",
        ];
        for (code, label) in expected.iter().enumerate() {
            assert_eq!(TypeCode::new(code as u8).unwrap().label(), *label);
        }
    }

    #[test]
    fn test_from_bits_order() {
        assert_eq!(TypeCode::from_bits(false, false, true).value(), 4);
        assert_eq!(TypeCode::from_bits(true, false, false).value(), 1);
        assert_eq!(TypeCode::from_bits(true, true, true).value(), 7);
        assert_eq!(TypeCode::from_bits(false, true, false).bits(), (false, true, false));
    }

    #[test]
    fn test_out_of_range_code() {
        assert_eq!(TypeCode::new(8), None);
    }

    #[test]
    fn test_canonical_codes_resolve_back() {
        for box_type in [
            BoxType::None,
            BoxType::Box10x20,
            BoxType::Box20x20,
            BoxType::Box30x50,
            BoxType::Unknown,
        ] {
            assert_eq!(box_type.code().unwrap().box_type(), box_type);
        }
        assert_eq!(BoxType::Invalid.code(), None);
    }
}
