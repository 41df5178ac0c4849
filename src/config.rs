use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// 默认配置文件名
const CONFIG_FILE: &str = "quiz_generator.toml";

/// 程序配置文件
///
/// 只包含外围批处理相关的配置。提取启发式的常量（相似度阈值 0.8、
/// 选项窗口 500 字符、恰好 4 个选项等）是按实测行为固定下来的，
/// 不对外开放配置。
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 提取文本文件存放目录
    pub text_folder: String,
    /// 生成题目 JSON 的输出目录
    pub output_folder: String,
    /// 每份文档请求的题目数量
    pub question_count: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text_folder: "extracted_text".to_string(),
            output_folder: "generated_quizzes".to_string(),
            question_count: 3,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    /// 加载配置：默认值 → 可选的 TOML 配置文件 → 环境变量覆盖
    pub fn load() -> Self {
        let base = match Self::from_file(Path::new(CONFIG_FILE)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("配置文件加载失败，使用默认配置: {}", e);
                Self::default()
            }
        };
        base.with_env_overrides()
    }

    /// 从 TOML 文件加载配置；文件不存在时返回默认配置
    pub fn from_file(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| AppError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// 应用环境变量覆盖
    fn with_env_overrides(self) -> Self {
        Self {
            text_folder: std::env::var("TEXT_FOLDER").unwrap_or(self.text_folder),
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(self.output_folder),
            question_count: std::env::var("QUESTION_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.question_count),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(self.output_log_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_question_count_is_three() {
        assert_eq!(Config::default().question_count, 3);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config = Config::from_file(Path::new("不存在的配置.toml")).unwrap();
        assert_eq!(config.question_count, Config::default().question_count);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("question_count = 5").unwrap();
        assert_eq!(config.question_count, 5);
        assert_eq!(config.text_folder, "extracted_text");
    }
}
