use clap::ValueEnum;

/// Serialization format for the resolved configuration
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    #[value(name = "json")]
    Json,

    /// TOML document
    #[value(name = "toml")]
    Toml,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Toml => "toml",
        }
    }
}
