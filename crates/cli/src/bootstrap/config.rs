use masq_dns_domain::{CliOverrides, Config};

/// Loads and validates the configuration. Logging is not up yet, so the
/// summary is emitted later by the logging bootstrap.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
