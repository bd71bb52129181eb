use bimap::BiMap;
use once_cell::sync::Lazy;

use crate::op::Op;

pub static GUIDE: Lazy<BiMap<Op, &'static str>> = Lazy::new(|| {
    let mut map: BiMap<Op, &'static str> = BiMap::new();
    map.insert(Op::AND, "A AND B - Bitwise AND operation");
    map.insert(Op::OR, "A OR B - Bitwise OR operation");
    map.insert(Op::XOR, "A XOR B - Bitwise XOR operation");
    map.insert(Op::NOT, "NOT A - Bitwise NOT of input A");
    map.insert(Op::ADD, "A + B - Addition with carry");
    map.insert(Op::SUB, "A - B - Subtraction using 2's complement");
    map
});

pub fn lines() -> Vec<String> {
    Op::DEFINED
        .iter()
        .map(|op| format!("{:03b}: {}", u8::from(*op), GUIDE.get_by_left(op).unwrap()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_defined_ops() {
        assert_eq!(GUIDE.len(), Op::DEFINED.len());
        assert_eq!(
            GUIDE.get_by_right("A - B - Subtraction using 2's complement"),
            Some(&Op::SUB)
        );
    }

    #[test]
    fn line_format() {
        let lines = lines();
        assert_eq!(lines[0], "000: A AND B - Bitwise AND operation");
        assert_eq!(lines[5], "101: A - B - Subtraction using 2's complement");
    }
}
