use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use bit_num::BitUint;
use log::info;

/// One run of the calculator: read `a` and `b`, print their binary forms,
/// their sum and product, then every comparison that holds.
pub struct Session<R, W> {
    input: R,
    output: W,
    // tokens read from the current input line but not used yet
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session { input, output, pending: VecDeque::new() }
    }

    /// Operands already given are used as is; missing ones are prompted for.
    pub fn run(mut self, a: Option<BitUint>, b: Option<BitUint>) -> Result<()> {
        let a = self.read_operand("a", a)?;
        let b = self.read_operand("b", b)?;
        info!("a has {} binary digits, b has {}", a.digit_len(), b.digit_len());

        let sum = &a + &b;
        let product = &a * &b;
        writeln!(self.output, "a + b = {} = {}", sum, sum.to_binary_string())?;
        writeln!(self.output, "a * b = {} = {}", product, product.to_binary_string())?;

        let comparisons = [
            ("a < b", a < b),
            ("a <= b", a <= b),
            ("a == b", a == b),
            ("a != b", a != b),
            ("a >= b", a >= b),
            ("a > b", a > b),
        ];
        for (label, holds) in comparisons {
            if holds {
                writeln!(self.output, "{}", label)?;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn read_operand(&mut self, name: &str, given: Option<BitUint>) -> Result<BitUint> {
        let value = match given {
            Some(value) => value,
            None => {
                write!(self.output, "Please input an integer {}: ", name)?;
                self.output.flush()?;
                let token = match self.next_token()? {
                    Some(token) => token,
                    None => bail!("input ended before a value for {} was given", name),
                };
                token.parse::<BitUint>()
                    .with_context(|| format!("cannot read {} from {:?}", name, token))?
            }
        };
        writeln!(self.output, "The base-2 representation of {} is: {}", name, value.to_binary_string())?;
        Ok(value)
    }

    /// Next whitespace-separated token, reading more lines as needed. Blank lines are skipped.
    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(String::from));
        }
        Ok(self.pending.pop_front())
    }
}
