use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct LintConfig {
    pub output: OutputSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputSettings {
    /// Print the palette preview before checking
    pub print_palette: bool,
    /// Render color swatches next to palette entries and color violations
    pub swatches: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    /// Default filter when RUST_LOG is unset
    pub level: String,
}

pub fn load_lint_config() -> anyhow::Result<LintConfig> {
    let settings = config::Config::builder()
        .set_default("output.print_palette", true)?
        .set_default("output.swatches", true)?
        .set_default("log.level", "info")?
        .add_source(config::File::with_name("config/dashboard-lint").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD_LINT").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let config = load_lint_config().unwrap();
        assert!(config.output.print_palette);
        assert!(config.output.swatches);
        assert_eq!(config.log.level, "info");
    }
}
