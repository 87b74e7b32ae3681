use std::{
    fs,
    io::{self, IsTerminal, Read, Write},
    path::{Path, PathBuf},
    process,
};

use clap::{Args, CommandFactory};

use super::{Cli, HYPHEN};

/// Command options for reading one input and producing one output.
#[derive(Debug, Args)]
pub struct InputOutput {
    /// The input file to process.
    ///
    /// When the value is "-", then input will be read from stdin.
    pub input: String,

    /// An optional output file for the processed result.
    ///
    /// Defaults to "-" for printing output to stdout.
    #[clap(short, default_value = HYPHEN)]
    pub output: PathBuf,
}

impl InputOutput {
    /// Reads the whole input into memory.
    pub fn read_input(&self) -> eyre::Result<Vec<u8>> {
        if self.input == HYPHEN {
            let mut buf = Vec::new();
            stdin_reader().read_to_end(&mut buf)?;
            return Ok(buf);
        }

        let path = Path::new(&self.input);
        log::debug!("Reading input from '{}'", path.display());

        fs::read(path).map_err(|e| eyre::eyre!("failed to read '{}': {e}", path.display()))
    }

    /// Writes `data` to the configured output.
    pub fn write_output(&self, data: &[u8]) -> eyre::Result<()> {
        if self.output.as_os_str() == HYPHEN {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        } else {
            log::debug!("Writing output to '{}'", self.output.display());
            fs::write(&self.output, data)?;
        }

        Ok(())
    }
}

/// Obtains a buffered reader over the contents of stdin.
///
/// This function will terminate the process and print the running
/// command's help if stdin is connected to a terminal.
pub fn stdin_reader() -> io::BufReader<io::StdinLock<'static>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let _ = Cli::command().print_help();
        process::exit(2);
    }

    io::BufReader::new(stdin.lock())
}
