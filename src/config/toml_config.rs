use crate::core::{DuckKind, Scenario, Step};
use crate::utils::error::{DuckError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 單一情境最多允許的步驟數
pub const MAX_STEPS: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub duck: DuckConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuckConfig {
    pub kind: DuckKind,
    pub name: Option<String>,
    pub steps: Vec<Step>,
}

impl ScenarioConfig {
    /// 從 TOML 檔案載入情境
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DuckError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析情境
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DuckError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DUCK_KIND})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DuckError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn display_name(&self) -> &str {
        self.duck.name.as_deref().unwrap_or(self.duck.kind.as_str())
    }

    /// `--dry-run` 用的步驟清單，第一行是鴨子，其後每個步驟一行
    pub fn plan_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Duck: {} ({})", self.display_name(), self.duck.kind)];
        for (index, step) in self.duck.steps.iter().enumerate() {
            let line = match step {
                Step::Fly => "fly".to_string(),
                Step::Quack => "quack".to_string(),
                Step::Swim => "swim".to_string(),
                Step::Display => "display".to_string(),
                Step::SetFly(kind) => format!("set fly behavior -> {}", kind),
                Step::SetQuack(kind) => format!("set quack behavior -> {}", kind),
            };
            lines.push(format!("  {:>3}. {}", index + 1, line));
        }
        lines
    }

    pub fn to_scenario(&self) -> Scenario {
        Scenario::new(self.duck.kind, self.duck.steps.clone())
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty("duck.steps", &self.duck.steps)?;
        validation::validate_max_len("duck.steps", &self.duck.steps, MAX_STEPS)?;
        Ok(())
    }
}
