use serde::{Deserialize, Serialize};
use std::fmt;

/// 2-bit word, most significant bit first: `Word2(bit1, bit0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Word2(pub bool, pub bool);

impl Word2 {
    pub fn val(self) -> u8 {
        self.into()
    }
}

impl From<u8> for Word2 {
    fn from(v: u8) -> Self {
        Word2(v & 0b10 != 0, v & 0b01 != 0)
    }
}

impl From<Word2> for u8 {
    fn from(w: Word2) -> u8 {
        (w.0 as u8) << 1 | w.1 as u8
    }
}

impl fmt::Display for Word2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.0 as u8, self.1 as u8)
    }
}

/// 3-bit operation selector: `Sel3(s2, s1, s0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Sel3(pub bool, pub bool, pub bool);

impl Sel3 {
    pub fn code(self) -> u8 {
        (self.0 as u8) << 2 | (self.1 as u8) << 1 | self.2 as u8
    }
}

impl From<u8> for Sel3 {
    fn from(v: u8) -> Self {
        Sel3(v & 0b100 != 0, v & 0b010 != 0, v & 0b001 != 0)
    }
}

impl fmt::Display for Sel3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.0 as u8, self.1 as u8, self.2 as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word2_roundtrip() {
        for v in 0u8..4 {
            assert_eq!(Word2::from(v).val(), v);
        }
        assert_eq!(Word2::from(0b110), Word2(true, false));
    }

    #[test]
    fn word2_display() {
        assert_eq!(Word2(true, false).to_string(), "10");
        assert_eq!(Word2::default().to_string(), "00");
    }

    #[test]
    fn sel3_code() {
        for v in 0u8..8 {
            assert_eq!(Sel3::from(v).code(), v);
        }
        assert_eq!(Sel3(true, false, true).to_string(), "101");
    }
}
