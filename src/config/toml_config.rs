use crate::core::{ConfigProvider, ViewStyle};
use crate::utils::error::{GeoError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub convert: ConvertSection,
    pub style: Option<StyleSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertSection {
    pub input: PathBuf,
    pub output: PathBuf,
    pub skip_header: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleSection {
    pub view_name: Option<String>,
    pub point_type: Option<u32>,
    pub point_size: Option<u32>,
    pub line_type: Option<u32>,
    pub line_width: Option<u32>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| GeoError::from_io(e, path))?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GeoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EEG_DATA_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GeoError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 合併預設樣式與設定檔中的覆寫值
    pub fn resolved_style(&self) -> ViewStyle {
        let defaults = ViewStyle::default();
        let Some(style) = &self.style else {
            return defaults;
        };

        ViewStyle {
            view_name: style.view_name.clone().unwrap_or(defaults.view_name),
            point_type: style.point_type.unwrap_or(defaults.point_type),
            point_size: style.point_size.unwrap_or(defaults.point_size),
            line_type: style.line_type.unwrap_or(defaults.line_type),
            line_width: style.line_width.unwrap_or(defaults.line_width),
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("convert.input", &self.convert.input)?;
        validation::validate_path("convert.output", &self.convert.output)?;
        validation::validate_distinct_paths(&self.convert.input, &self.convert.output)?;

        let style = self.resolved_style();
        validation::validate_view_name("style.view_name", &style.view_name)?;
        validation::validate_positive_number("style.point_size", style.point_size, 1)?;
        validation::validate_positive_number("style.line_width", style.line_width, 1)?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &Path {
        &self.convert.input
    }

    fn output_path(&self) -> &Path {
        &self.convert.output
    }

    fn skip_header(&self) -> bool {
        self.convert.skip_header.unwrap_or(false)
    }

    fn style(&self) -> ViewStyle {
        self.resolved_style()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
