use color_print::cformat;
use serde::{Deserialize, Serialize};

use crate::bits::Word2;
use crate::op::Op;

/// One combinational evaluation: operation, 2-bit result, carry/borrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eval {
    pub op: Op,
    pub out: Word2,
    pub flag: bool,
}

impl Eval {
    pub fn cformat(&self) -> String {
        cformat!(
            "<r>{:<8}</>-> <r>{}</> (<y>{}</>)  c/b <m>{}</>",
            self.op,
            self.out,
            self.out.val(),
            self.flag as u8
        )
    }
}

// Gate-level full adder: sum is the left-to-right XOR chain,
// carry the majority form over (a, b, cin).
fn full_add(a: bool, b: bool, cin: bool) -> (bool, bool) {
    let sum = (a ^ b) ^ cin;
    let carry = (a & b) | ((a | b) & cin);
    (sum, carry)
}

/// Evaluate one operation over two 2-bit words. Total: every selector
/// code maps to an operation (6 and 7 fall through to UNKNOWN).
pub fn alu<T: Into<Op>>(op: T, a: Word2, b: Word2) -> Eval {
    use Op::*;
    let op = op.into();
    let Word2(a1, a0) = a;
    let Word2(b1, b0) = b;
    let (out, flag) = match op {
        AND => (Word2(a1 & b1, a0 & b0), false),
        OR => (Word2(a1 | b1, a0 | b0), false),
        XOR => (Word2(a1 ^ b1, a0 ^ b0), false),
        NOT => (Word2(!a1, !a0), false),
        ADD => {
            let (s0, c0) = full_add(a0, b0, false);
            let (s1, cout) = full_add(a1, b1, c0);
            (Word2(s1, s0), cout)
        }
        SUB => {
            // A + !B + 1, borrow is the inverted carry-out
            let (s0, c0) = full_add(a0, !b0, true);
            let (s1, cout) = full_add(a1, !b1, c0);
            (Word2(s1, s0), !cout)
        }
        UNKNOWN => (Word2(false, false), false),
    };
    Eval { op, out, flag }
}
