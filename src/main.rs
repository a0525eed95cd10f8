use std::io;
use std::process::ExitCode;

use anyhow::Context;
use schedgrid::app::{self, OutputWidth};
use schedgrid::core::cli::{CliArgs, USAGE};

fn try_main() -> anyhow::Result<()> {
    let args = CliArgs::from_env().map_err(|err| anyhow::anyhow!("{err}\n\n{USAGE}"))?;
    let mut stdout = io::stdout().lock();
    app::run(&args, OutputWidth::Terminal, &mut stdout).with_context(|| {
        format!(
            "could not render schedule '{}'",
            args.schedule_path.display()
        )
    })
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
