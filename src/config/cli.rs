use crate::config::toml_config::{ConvertSection, TomlConfig};
use crate::utils::error::{GeoError, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "csv2geo")]
#[command(about = "Convert an electrode coordinate CSV (id,x,y,z,name) into a Gmsh view script")]
pub struct CliConfig {
    /// Electrode CSV file, UTF-8 encoded
    #[arg(required_unless_present = "config")]
    pub input: Option<PathBuf>,

    /// Destination .geo/.pos file (overwritten)
    #[arg(required_unless_present = "config")]
    pub output: Option<PathBuf>,

    /// Treat the first row as a header and skip it
    #[arg(long)]
    pub skip_header: bool,

    /// TOML configuration file; positional paths and flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Builds the effective configuration from the optional TOML file and the command line.
    pub fn load(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig {
                convert: ConvertSection {
                    input: require("input", &self.input)?,
                    output: require("output", &self.output)?,
                    skip_header: None,
                },
                style: None,
            },
        };

        // 命令列參數優先於設定檔
        if let Some(input) = &self.input {
            config.convert.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.convert.output = output.clone();
        }
        if self.skip_header {
            config.convert.skip_header = Some(true);
        }

        Ok(config)
    }
}

fn require(field: &str, value: &Option<PathBuf>) -> Result<PathBuf> {
    value.clone().ok_or_else(|| GeoError::MissingConfigError {
        field: field.to_string(),
    })
}
