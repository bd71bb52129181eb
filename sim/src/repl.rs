use std::io::{self, BufRead, Write};

use color_print::cprintln;

use alu2::alu::alu;
use alu2::bits::Word2;
use alu2::guide;
use alu2::op::Op;

pub fn run() {
    println!("Interactive mode: <op> <a> <b> / guide / q");
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().unwrap();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "q" || line == "quit" {
            break;
        }
        if line == "guide" || line == "help" {
            for l in guide::lines() {
                println!("  {}", l);
            }
            continue;
        }
        match parse(line) {
            Ok((op, a, b)) => println!("{}", alu(op, a, b).cformat()),
            Err(e) => cprintln!("<r,s>Error</>: {}", e),
        }
    }
}

fn parse(line: &str) -> Result<(Op, Word2, Word2), String> {
    let mut it = line.split_whitespace();
    let op = Op::parse(it.next().ok_or_else(|| "Empty line".to_string())?)?;
    let a = operand(it.next().ok_or_else(|| "Missing operand A".to_string())?)?;
    // NOT only reads A, so B may be left out
    let b = match (op, it.next()) {
        (Op::NOT, None) => Word2::default(),
        (_, Some(s)) => operand(s)?,
        (_, None) => return Err("Missing operand B".to_string()),
    };
    Ok((op, a, b))
}

fn operand(s: &str) -> Result<Word2, String> {
    match s.parse::<u8>() {
        Ok(v) if v <= 3 => Ok(Word2::from(v)),
        _ => Err(format!("Operand out of range (0-3): {s}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line() {
        assert_eq!(
            parse("add 2 1"),
            Ok((Op::ADD, Word2(true, false), Word2(false, true)))
        );
        assert_eq!(
            parse("not 3"),
            Ok((Op::NOT, Word2(true, true), Word2(false, false)))
        );
        assert!(parse("add 2").is_err());
        assert!(parse("add 4 1").is_err());
        assert!(parse("hoge 1 1").is_err());
    }
}
