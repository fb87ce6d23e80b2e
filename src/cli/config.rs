//! `config` command: shows where things live and the active settings

use crate::config::{FinancePaths, Settings};
use crate::error::FinanceResult;

/// Print paths and settings
pub fn handle_config_command(paths: &FinancePaths, settings: &Settings) -> FinanceResult<()> {
    println!("gofinances configuration");
    println!("========================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Storage file:   {}", paths.storage_file().display());
    println!("Log file:       {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  Locale:            {}", settings.locale.locale);
    println!("  Currency:          {}", settings.locale.currency);
    println!("  Storage namespace: {}", settings.storage_namespace);
    println!("  Malformed records: {:?}", settings.malformed_records);
    println!("  Tick rate:         {} ms", settings.tick_rate_ms);
    Ok(())
}
