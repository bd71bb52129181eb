use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::bits::Sel3;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
)]
#[repr(u8)]
pub enum Op {
    AND,
    OR,
    XOR,
    NOT,
    ADD,
    SUB,
    #[default]
    UNKNOWN,
}

impl Op {
    /// Operations with a defined selector code, in code order.
    pub const DEFINED: [Op; 6] = [Op::AND, Op::OR, Op::XOR, Op::NOT, Op::ADD, Op::SUB];

    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_uppercase().parse::<Self>() {
            Ok(a) => Ok(a),
            Err(_) => Err(format!("Undefined Op: {s}")),
        }
    }
}

impl From<Sel3> for Op {
    fn from(sel: Sel3) -> Self {
        Op::from(sel.code())
    }
}

#[test]
fn test() {
    assert_eq!(Op::from(0b000u8), Op::AND);
    assert_eq!(Op::from(0b100u8), Op::ADD);
    assert_eq!(Op::from(0b101u8), Op::SUB);
    assert_eq!(Op::from(0b110u8), Op::UNKNOWN);
    assert_eq!(Op::from(0b111u8), Op::UNKNOWN);
    assert_eq!(Op::from(Sel3(false, true, true)), Op::NOT);
    assert_eq!(Op::parse("add"), Ok(Op::ADD));
    assert_eq!(Op::parse("Xor"), Ok(Op::XOR));
    assert!(Op::parse("hoge").is_err());
    assert_eq!(Op::SUB.to_string(), "SUB");
    assert_eq!(u8::from(Op::UNKNOWN), 6);
}
