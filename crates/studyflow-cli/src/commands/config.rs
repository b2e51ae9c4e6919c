use clap::Subcommand;

use studyflow_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Read a value by dotted path, e.g. planner.start_hour
    Get { key: String },
    /// Set a value by dotted path
    Set { key: String, value: String },
    /// Show the full configuration
    List,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load_or_default();
            println!("{}", serde_json::to_string_pretty(&config.get(&key)?)?);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            config.save()?;
            println!("config updated");
        }
        ConfigAction::List => {
            let config = Config::load_or_default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
