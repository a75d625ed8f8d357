use std::io;

use anyhow::Result;
use bit_num::BitUint;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use crate::Session;

#[derive(Debug, Parser)]
#[command(name = "bit_calc", version, about = "Add, multiply and compare two unsigned integers of any size")]
pub struct BitCalcCommand {
    /// First operand, prompted for when left out
    #[arg()]
    a: Option<BitUint>,
    /// Second operand, prompted for when left out
    #[arg()]
    b: Option<BitUint>,
    #[arg(long, env = "BIT_CALC_LOG", default_value = "warn")]
    log_level: LevelFilter,
}

impl BitCalcCommand {
    pub fn execute() -> Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<()> {
        init_logger(self.log_level);
        let stdin = io::stdin();
        let stdout = io::stdout();
        Session::new(stdin.lock(), stdout.lock()).run(self.a, self.b)
    }
}

/// Logs go to stderr so stdout only carries the report.
pub fn init_logger(level: LevelFilter) {
    let _ = Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .try_init();
}

#[test]
fn test_parse_args() {
    let command = BitCalcCommand::try_parse_from(["bit_calc", "5", "340282366920938463463374607431768211456"]).unwrap();
    assert_eq!(command.a, Some(BitUint::from(5u8)));
    assert_eq!(command.b, Some(BitUint::one() << 128));
    assert_eq!(command.log_level, LevelFilter::Warn);

    let command = BitCalcCommand::try_parse_from(["bit_calc", "--log-level", "trace"]).unwrap();
    assert_eq!(command.a, None);
    assert_eq!(command.log_level, LevelFilter::Trace);

    assert!(BitCalcCommand::try_parse_from(["bit_calc", "-3"]).is_err());
    assert!(BitCalcCommand::try_parse_from(["bit_calc", "12x"]).is_err());
}
