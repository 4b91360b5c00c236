//! Command implementations

use super::Args;
use crate::core::GraphDriver;
use crate::error::{DependorError, ErrorSeverity, Result};
use crate::models::config::Settings;
use crate::models::graph::{DependencyGraph, DEFAULT_OUTPUT_FILE};
use crate::output::{create_writer, Formatter, JsonFormatter, TextFormatter};
use std::path::PathBuf;

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Parse the source tree and emit the dependency graph
    Parse(Args),
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        Command::Parse(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Parse(args) => {
                let settings = Self::settings_from_args(args);
                self.validate(&settings)?;

                if !settings.quiet && settings.verbose {
                    eprintln!(
                        "dependor v{} parsing {}",
                        env!("CARGO_PKG_VERSION"),
                        settings.root_path.display()
                    );
                }

                let driver = GraphDriver::new(settings.clone())?;
                let graph = driver.parse()?;

                if !settings.quiet {
                    let dropped = driver.errors().len();
                    if dropped > 0 {
                        eprintln!("{} file(s) dropped from the graph, see warnings above", dropped);
                    }
                }

                self.emit(&settings, &graph)
            }
        }
    }

    /// Render the graph to the destination the settings ask for
    fn emit(&self, settings: &Settings, graph: &DependencyGraph) -> Result<()> {
        if settings.write_output || settings.output_file.is_some() {
            let path = settings
                .output_file
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));
            let content = JsonFormatter::new(false).format(graph)?;
            let writer = create_writer(Some(&path));
            writer.write(&content)?;
            if !settings.quiet {
                eprintln!("Wrote dependency graph to {}", path.display());
            }
            return Ok(());
        }

        let content = if settings.pretty {
            TextFormatter::new(settings.use_colors).format(graph)?
        } else {
            let mut json = JsonFormatter::new(false).format(graph)?;
            json.push('\n');
            json
        };
        create_writer(None::<PathBuf>).write(&content)
    }

    fn settings_from_args(args: &Args) -> Settings {
        Settings {
            root_path: args.root.clone().unwrap_or_else(|| PathBuf::from(".")),
            write_output: args.write,
            output_file: args.output_file.clone(),
            pretty: args.pretty,
            parallel: !args.no_parallel,
            quiet: args.quiet,
            verbose: args.verbose,
            use_colors: !args.no_colors,
        }
    }

    /// Validate the command arguments
    pub fn validate(&self, settings: &Settings) -> Result<()> {
        if !settings.root_path.exists() {
            return Err(DependorError::InvalidPath {
                path: settings.root_path.clone(),
            });
        }
        Ok(())
    }

    /// Run the command and map the outcome to an exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(_) => 0,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());
                match err.severity() {
                    ErrorSeverity::Warning => 0,
                    ErrorSeverity::Error => 1,
                    ErrorSeverity::Critical => 2,
                }
            }
        }
    }
}
