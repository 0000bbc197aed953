//! The CLI can do a few things. This provides a central point where those things are routed and
//! then done, making it easier to test this crate deterministically.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Subcommand;

use ndc_drill::connector::DrillSetup;
use ndc_drill::dialect;
use ndc_drill_configuration::environment::Environment;
use ndc_drill_configuration::fields::FIELDS;
use ndc_drill_configuration::version1::{self, ParsedConfiguration, CONFIGURATION_FILENAME};

/// The various contextual bits and bobs we need to run.
pub struct Context<Env: Environment, Out: Write> {
    pub context_path: PathBuf,
    pub environment: Env,
    pub output: Out,
}

/// The command invoked by the user.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Write an initial configuration into the context directory.
    Initialize {
        /// Overwrite an existing configuration.
        #[arg(long)]
        force: bool,
    },
    /// Check the configuration, resolving any environment variables it refers to.
    Validate,
    /// Print the JDBC connection string the configuration resolves to.
    ConnectionString,
    /// List the fields a configuration accepts.
    Fields,
}

/// Run a command in a given directory.
pub async fn run(
    command: Command,
    context: Context<impl Environment, impl Write>,
) -> anyhow::Result<()> {
    match command {
        Command::Initialize { force } => initialize(force, context).await,
        Command::Validate => validate(context).await,
        Command::ConnectionString => connection_string(context).await,
        Command::Fields => fields(context),
    }
}

/// Initialize an empty directory with an initial configuration.
///
/// Host and port are read from `DRILL_HOST` and `DRILL_PORT` until the user
/// changes them.
async fn initialize(
    force: bool,
    context: Context<impl Environment, impl Write>,
) -> anyhow::Result<()> {
    let Context {
        context_path,
        mut output,
        ..
    } = context;

    let configuration_file = context_path.join(CONFIGURATION_FILENAME);
    if configuration_file.exists() && !force {
        anyhow::bail!(
            "{} already exists; pass --force to overwrite it",
            configuration_file.display()
        );
    }

    version1::write_parsed_configuration(ParsedConfiguration::initial(), &context_path)
        .await
        .with_context(|| format!("unable to write to {}", context_path.display()))?;

    tracing::info!(path = %context_path.display(), "initialized configuration");
    writeln!(output, "Wrote {}", configuration_file.display())?;
    Ok(())
}

async fn validate(context: Context<impl Environment, impl Write>) -> anyhow::Result<()> {
    let Context {
        context_path,
        environment,
        mut output,
    } = context;

    let configuration = DrillSetup::new(environment)
        .parse_configuration(&context_path)
        .await?;
    configuration.connection.connection_string()?;
    let dialect = dialect::drill_dialect()?;

    writeln!(
        output,
        "Configuration is valid ({} dialect, fetch size {}).",
        dialect.metadata.name,
        configuration.fetch_size()
    )?;
    Ok(())
}

async fn connection_string(context: Context<impl Environment, impl Write>) -> anyhow::Result<()> {
    let Context {
        context_path,
        environment,
        mut output,
    } = context;

    let configuration = DrillSetup::new(environment)
        .parse_configuration(&context_path)
        .await?;
    let url = configuration.connection.connection_string()?;

    writeln!(output, "{url}")?;
    Ok(())
}

fn fields(context: Context<impl Environment, impl Write>) -> anyhow::Result<()> {
    let Context { mut output, .. } = context;

    writeln!(
        output,
        "{:<10} {:<18} {:<9} {:<11} metadata",
        "field", "label", "required", "default"
    )?;
    for descriptor in &FIELDS {
        writeln!(
            output,
            "{:<10} {:<18} {:<9} {:<11} {}",
            descriptor.name,
            descriptor.label,
            if descriptor.required { "yes" } else { "no" },
            descriptor.default.unwrap_or("-"),
            if descriptor.metadata_impacting {
                "yes"
            } else {
                "no"
            },
        )?;
    }
    Ok(())
}
