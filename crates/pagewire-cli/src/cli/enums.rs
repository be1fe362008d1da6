use clap::ValueEnum;
use pagewire_config::NamingScheme;

/// Entry naming scheme
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Naming {
    /// Path below the pattern's literal base, without extension (home/index)
    #[value(name = "relative")]
    Relative,

    /// File stem only (index)
    #[value(name = "basename")]
    Basename,

    /// Directory holding the file (home)
    #[value(name = "directory")]
    Directory,
}

impl From<Naming> for NamingScheme {
    fn from(naming: Naming) -> Self {
        match naming {
            Naming::Relative => NamingScheme::Relative,
            Naming::Basename => NamingScheme::Basename,
            Naming::Directory => NamingScheme::Directory,
        }
    }
}

/// Format of the file written by `init`
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum ConfigFormat {
    #[default]
    #[value(name = "toml")]
    Toml,

    #[value(name = "json")]
    Json,
}

impl ConfigFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "pagewire.toml",
            ConfigFormat::Json => "pagewire.json",
        }
    }
}
