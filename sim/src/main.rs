mod batch;
mod repl;
mod table;

use clap::Parser;
use color_print::{cformat, cprintln};

use alu2::alu::alu;
use alu2::bits::{Sel3, Word2};
use alu2::guide;
use alu2::op::Op;

#[derive(Parser, Debug)]
#[clap(
    name = "2-Bit ALU Simulator",
    version = "v1.0.0",
    about = "Simulator for a 2-bit ALU"
)]
struct Args {
    /// Input A (0-3)
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
    a: u8,

    /// Input B (0-3)
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
    b: u8,

    /// Operation select: 3 bits ("101") or name ("sub")
    #[arg(short, long, default_value = "000")]
    sel: String,

    /// Print truth tables for every operation
    #[arg(short, long)]
    table: bool,

    /// Evaluate a YAML file of test vectors
    #[arg(short, long)]
    file: Option<String>,

    /// Interactive mode
    #[arg(short, long)]
    interactive: bool,

    /// Print the operation guide
    #[arg(short, long)]
    guide: bool,
}

fn main() {
    let args = Args::parse();
    println!("+-----------------------------------------------+");
    println!("| 2-Bit ALU Simulator                           |");
    println!("+-----------------------------------------------+");

    if args.guide {
        print_guide();
        return;
    }

    if args.table {
        table::print_all();
        return;
    }

    if let Some(fname) = &args.file {
        batch::run_file(fname);
        return;
    }

    if args.interactive {
        repl::run();
        return;
    }

    let sel = parse_sel(&args.sel);
    let a = Word2::from(args.a);
    let b = Word2::from(args.b);
    let eval = alu(sel, a, b);
    cprintln!("A   <g>{}</> ({})", a, a.val());
    cprintln!("B   <g>{}</> ({})", b, b.val());
    cprintln!("Sel <b>{}</>", sel);
    println!("{}", eval.cformat());
}

fn parse_sel(s: &str) -> Sel3 {
    match u8::from_str_radix(s, 2) {
        Ok(v) => Sel3::from(v),
        Err(_) => {
            let op = Op::parse(s).expect(&cformat!("<r,s>Unknown operation</>: {}", s));
            Sel3::from(u8::from(op))
        }
    }
}

fn print_guide() {
    println!("Operation Guide");
    for line in guide::lines() {
        println!("  {}", line);
    }
}
