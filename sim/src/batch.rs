use std::fs::File;
use std::io::BufReader;

use color_print::{cformat, cprintln};
use serde::{Deserialize, Serialize};

use alu2::alu::alu;
use alu2::bits::Word2;
use alu2::op::Op;

#[derive(Debug, Serialize, Deserialize)]
pub struct Vector {
    pub op: Op,
    pub a: u8,
    pub b: u8,
}

pub fn run_file(fname: &str) {
    let file = File::open(fname).expect(&cformat!("<r,s>Failed to open File</>: {}", fname));
    let vectors: Vec<Vector> = serde_yaml::from_reader(BufReader::new(file))
        .expect(&cformat!("<r,s>Failed to parse File</>: {}", fname));
    println!(" * Vectors[{}] {:?}", vectors.len(), fname);
    for v in &vectors {
        let a = Word2::from(v.a);
        let b = Word2::from(v.b);
        let eval = alu(v.op, a, b);
        cprintln!("  <g>{}</> <g>{}</> {}", a, b, eval.cformat());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_vectors() {
        let yaml = "\
- { op: ADD, a: 3, b: 3 }
- { op: SUB, a: 1, b: 2 }
";
        let vectors: Vec<Vector> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0].op, Op::ADD);
        let eval = alu(vectors[1].op, Word2::from(vectors[1].a), Word2::from(vectors[1].b));
        assert_eq!(eval.out.val(), 3);
        assert!(eval.flag);
    }
}
