use crate::services::boilerplate_filter::DEFAULT_FILTER_RULES;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 待处理 PDF 存放目录
    pub pdf_folder: String,
    /// 解析报告输出目录
    pub report_folder: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 版式噪声过滤规则（按顺序应用，忽略大小写）
    pub filter_rules: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pdf_folder: "input_pdf".to_string(),
            report_folder: "output_reports".to_string(),
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            filter_rules: DEFAULT_FILTER_RULES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            pdf_folder: std::env::var("PDF_FOLDER").unwrap_or(default.pdf_folder),
            report_folder: std::env::var("REPORT_FOLDER").unwrap_or(default.report_folder),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            filter_rules: default.filter_rules,
        }
    }

    /// 从 TOML 文件加载配置
    ///
    /// 文件不存在时退回环境变量配置，存在但解析失败时报错
    pub async fn load_or_default(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::from_env());
        }

        let content = fs::read_to_string(config_path)
            .await
            .with_context(|| format!("无法读取配置文件: {}", config_path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", config_path.display()))?;

        Ok(config)
    }
}
