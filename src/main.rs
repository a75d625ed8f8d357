use anyhow::Result;
use bit_calc::BitCalcCommand;

fn main() -> Result<()> {
    BitCalcCommand::execute()
}
