//! Configuration display command

use crate::config::paths::NixciPaths;
use crate::config::settings::Settings;
use crate::error::NixciResult;
use crate::submission::SubmissionLog;

/// Print paths and settings
pub fn handle_config_command(paths: &NixciPaths, settings: &Settings) -> NixciResult<()> {
    let log = SubmissionLog::new(paths.submission_log());
    let submissions = if log.exists() { log.entry_count()? } else { 0 };

    println!("NixCI Configuration");
    println!("===================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Submission log:   {}", paths.submission_log().display());
    println!("Submissions:      {}", submissions);
    println!();
    println!("Settings:");
    println!("  API base URL:     {}", settings.api_base_url);
    println!("  API timeout:      {} ms", settings.api_timeout_ms);
    println!("  Default language: {}", settings.default_language);
    println!("  Tick rate:        {} ms", settings.tick_rate_ms);
    println!("  Storage keys:");
    println!("    auth token: {}", settings.storage_keys.auth_token);
    println!("    user data:  {}", settings.storage_keys.user_data);
    println!("    language:   {}", settings.storage_keys.language);
    println!("    theme:      {}", settings.storage_keys.theme);

    Ok(())
}
