//! Command-line dispatcher
//!
//! `list`, `run <name>`, bare `<name>` and `help` over the component registry.

use crate::application::{ApplicationError, ComponentRegistry, ComponentRunner};
use crate::infrastructure::VulnCheckApi;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::ffi::OsString;
use std::io::Write;
use std::sync::Arc;

pub const BIN_NAME: &str = "vulncheck-harness";

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("VERGEN_BUILD_DATE"),
    ")"
);

const EXAMPLES: &str = "\
Examples:
  vulncheck-harness list
  vulncheck-harness run index-vulnrichment
  vulncheck-harness index-vulnrichment
  vulncheck-harness \"Index Vulnrichment\"";

#[derive(Parser, Debug)]
#[command(
    name = BIN_NAME,
    version,
    long_version = LONG_VERSION,
    about = "VulnCheck API Exercise CLI",
    long_about = "VulnCheck API Exercise CLI\n\nRuns one fixed request per component against the VulnCheck API and prints the result. The bearer token is read from VULNCHECK_API_TOKEN.",
    after_help = EXAMPLES
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List all available components
    #[command(visible_aliases = ["ls", "ll"])]
    List,

    /// Run a component by name
    Run {
        /// Component name; several words are joined with spaces
        name: Vec<String>,
    },

    // Any other first argument is treated as a component name
    #[command(external_subcommand)]
    External(Vec<String>),
}

/// How a dispatch ended when no component failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The arguments could not be parsed
    UsageError,
}

/// Routes parsed arguments to listing, usage or component execution
pub struct Dispatcher {
    registry: ComponentRegistry,
    runner: ComponentRunner,
}

impl Dispatcher {
    pub fn new(registry: ComponentRegistry, api: Arc<dyn VulnCheckApi>) -> Self {
        Self {
            registry,
            runner: ComponentRunner::new(api),
        }
    }

    /// Parse `args` (program name first) and act on them, writing to `out`
    pub async fn dispatch<I, T, W>(&self, args: I, out: &mut W) -> Result<Outcome, ApplicationError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        W: Write + Send,
    {
        let cli = match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(err) => {
                write!(out, "{}", err.render())?;
                return Ok(match err.kind() {
                    ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => Outcome::Success,
                    _ => Outcome::UsageError,
                });
            }
        };

        match cli.command {
            None => self.show_usage(out)?,
            Some(Command::List) => self.list_components(out)?,
            Some(Command::Run { name }) if name.is_empty() => {
                writeln!(out, "Error: Please specify a component name to run")?;
                writeln!(out, "Usage: {} run <component-name>", BIN_NAME)?;
                writeln!(out, "Use '{} list' to see available components", BIN_NAME)?;
            }
            Some(Command::Run { name }) => self.run_component(&name.join(" "), out).await?,
            Some(Command::External(words)) => {
                let name = words.first().map(String::as_str).unwrap_or_default();
                self.run_component(name, out).await?
            }
        }

        Ok(Outcome::Success)
    }

    pub fn show_usage<W: Write>(&self, out: &mut W) -> Result<(), ApplicationError> {
        writeln!(out, "{}", Cli::command().render_long_help())?;
        Ok(())
    }

    /// Print every component sorted by name
    pub fn list_components<W: Write>(&self, out: &mut W) -> Result<(), ApplicationError> {
        writeln!(out, "Available components:")?;
        writeln!(out)?;

        for component in self.registry.iter() {
            writeln!(
                out,
                "  {:<25} - {}",
                component.name(),
                component.description()
            )?;
        }

        writeln!(out)?;
        writeln!(out, "Usage: {} run <component-name>", BIN_NAME)?;
        writeln!(out, "   Or: {} <component-name>", BIN_NAME)?;
        Ok(())
    }

    /// Resolve `raw` and run it. An unknown name is reported, not an error.
    pub async fn run_component<W: Write + Send>(
        &self,
        raw: &str,
        out: &mut W,
    ) -> Result<(), ApplicationError> {
        let Some(component) = self.registry.resolve(raw) else {
            tracing::debug!(name = raw, "Unknown component");
            writeln!(out, "Error: Component '{}' not found", raw)?;
            writeln!(out, "Use '{} list' to see available components", BIN_NAME)?;
            return Ok(());
        };

        writeln!(out, "Running: {}", component.description())?;
        writeln!(out, "{}", "-".repeat(50))?;
        self.runner.run(component.as_ref(), out).await
    }
}
