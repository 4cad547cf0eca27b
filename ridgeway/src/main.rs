use std::io::{self, IsTerminal};

use ridgeway_lib::{RunConfig, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RunConfig {
        color: io::stdout().is_terminal(),
        ..RunConfig::default()
    };
    let mut stdout = io::stdout().lock();
    run(&config, &mut stdout)?;
    Ok(())
}
