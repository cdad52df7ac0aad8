pub mod cli;
pub mod config;
pub mod display;
pub mod filter;
pub mod logging;
pub mod policy;

use anyhow::Context;
use tracing::{debug, info};

pub use cli::{ColorMode, Commands, OutputFormat, cli_parse};
pub use config::{FlagsConfig, load_config};
pub use display::{display_policy_map, format_policy_map_json, format_policy_map_text};
pub use filter::{
    FilterDescriptor, FlagParseError, Operator, OptionCategory, events_help, parse_event_flag,
};
pub use policy::{PolicyFilterMap, PolicyFilterSet, prepare_event_map_from_flags};

fn apply_color_mode(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {}
    }
}

fn build_policy_map(config: &FlagsConfig, cli_flags: &[String]) -> anyhow::Result<PolicyFilterMap> {
    let flags = config.merged_flags(cli_flags);
    debug!(
        config_flags = config.events.flags.len(),
        cli_flags = cli_flags.len(),
        "parsing event flags"
    );
    prepare_event_map_from_flags(&flags).context("Invalid --events flag")
}

pub fn run() -> anyhow::Result<()> {
    let cli = cli_parse();
    logging::init(cli.verbose, cli.quiet);

    let config = load_config(cli.config.as_deref())?;
    if let Some(path) = &cli.config {
        info!(path = %path.display(), "loaded config");
    }

    let format = cli.effective_format(config.output.format);
    apply_color_mode(cli.effective_color(config.output.color));

    match &cli.command {
        Commands::Parse { events } => {
            let map = build_policy_map(&config, events)?;
            match format {
                OutputFormat::Text => display_policy_map(&map),
                OutputFormat::Json => {
                    let json = format_policy_map_json(&map)
                        .context("Failed to serialize policy map")?;
                    println!("{json}");
                }
            }
        }
        Commands::Check { events } => {
            let map = build_policy_map(&config, events)?;
            if !cli.quiet {
                println!("ok: {} descriptor(s)", map.descriptor_count());
            }
        }
        Commands::HelpEvents => print!("{}", events_help()),
    }

    Ok(())
}
