use clap::{Subcommand, ValueEnum};
use deadliner_core::Config;

#[derive(Clone, Copy, ValueEnum)]
pub enum TierArg {
    Default,
    Urgent,
    Imminent,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current config as JSON
    Show,
    /// Set the refresh cadence for one tier
    SetCadence {
        /// Which tier to adjust
        #[arg(long, value_enum)]
        tier: TierArg,
        /// Refresh interval in seconds (at least 1)
        #[arg(long)]
        secs: u64,
    },
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::SetCadence { tier, secs } => {
            let mut config = Config::load_or_default();
            match tier {
                TierArg::Default => config.cadence.default_secs = secs,
                TierArg::Urgent => config.cadence.urgent_secs = secs,
                TierArg::Imminent => config.cadence.imminent_secs = secs,
            }
            config.save()?;
            println!("ok");
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
