use color_print::cprintln;

use alu2::alu::alu;
use alu2::bits::Word2;
use alu2::op::Op;

pub fn print_all() {
    for op in Op::DEFINED {
        print(op);
        println!();
    }
}

pub fn print(op: Op) {
    cprintln!("<s>{}</> ({:03b})", op, u8::from(op));
    println!("+----+----+-----+-----+");
    println!("|  A |  B | Out | C/B |");
    println!("+----+----+-----+-----+");
    for a in 0u8..4 {
        for b in 0u8..4 {
            let a = Word2::from(a);
            let b = Word2::from(b);
            let eval = alu(op, a, b);
            cprintln!(
                "| <g>{}</> | <g>{}</> |  <r>{}</> |   <m>{}</> |",
                a,
                b,
                eval.out,
                eval.flag as u8
            );
        }
    }
    println!("+----+----+-----+-----+");
}
