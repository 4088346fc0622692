use crate::error::{AppError, AppResult, ConfigError, FileError};
use serde::Deserialize;
use std::path::Path;

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 学生接口地址（/users、/register 所在路径）
    pub api_url: String,
    /// 后端根地址（/health 所在路径）
    pub api_base_url: String,
    /// 应用标题
    pub app_title: String,
    /// 列表每页条数
    pub page_size: usize,
    /// 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 通知自动消失时间（秒）
    pub notification_ttl_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080/api".to_string(),
            api_base_url: "http://localhost:8080".to_string(),
            app_title: "EasyCRUD Student Registration".to_string(),
            page_size: 10,
            request_timeout_secs: 10,
            notification_ttl_secs: 5,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_url: std::env::var("API_URL").unwrap_or(default.api_url),
            api_base_url: std::env::var("API_BASE_URL").unwrap_or(default.api_base_url),
            app_title: std::env::var("APP_TITLE").unwrap_or(default.app_title),
            page_size: std::env::var("PAGE_SIZE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.page_size),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            notification_ttl_secs: std::env::var("NOTIFICATION_TTL_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.notification_ttl_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 从 TOML 文件加载配置，缺失的键使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(FileError::NotFound { path: display }.into());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(display.clone(), e))?;

        Self::from_toml_str(&content).map_err(|e| match e {
            AppError::File(FileError::TomlParseFailed { source, .. }) => {
                AppError::File(FileError::TomlParseFailed {
                    path: display,
                    source,
                })
            }
            other => other,
        })
    }

    /// 从 TOML 文本解析配置
    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        let config: Config = toml::from_str(content).map_err(|source| FileError::TomlParseFailed {
            path: String::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// 检查配置值是否合法
    pub fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "page_size".to_string(),
                reason: "必须大于 0".to_string(),
            }
            .into());
        }
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "api_url".to_string(),
                reason: "不能为空".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
