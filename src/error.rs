use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// 应用程序错误类型
///
/// 所有错误都可以在界面边界恢复：显示提示信息并保留之前的有效状态。
#[derive(Debug, Error)]
pub enum AppError {
    /// 表单校验错误（提交前发现，不会发起网络请求）
    #[error("表单校验失败: {0}")]
    Validation(#[from] ValidationErrors),
    /// 网络或后端错误
    #[error("网络错误: {0}")]
    Transport(#[from] TransportError),
    /// 目标记录不存在
    #[error("{resource} 不存在 (id: {id})")]
    NotFound { resource: String, id: String },
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
}

/// 错误分类，用于决定提示方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    NotFound,
    Config,
    File,
}

/// 字段级校验错误
///
/// 以字段名为键，保存该字段的第一条错误信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录字段错误，同一字段只保留第一条
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// 获取指定字段的错误信息
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .fields
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

impl std::error::Error for ValidationErrors {}

/// 网络 / 后端错误
#[derive(Debug, Error)]
pub enum TransportError {
    /// 网络请求失败
    #[error("请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 后端返回错误状态码
    #[error("后端返回错误响应 ({endpoint}): status={status}, body={body:?}")]
    BadStatus {
        endpoint: String,
        status: u16,
        body: Option<String>,
    },
    /// 响应解析失败
    #[error("响应解析失败 ({endpoint}): {source}")]
    DecodeFailed {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置值不合法
    #[error("配置项 {key} 不合法: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建请求失败错误
    pub fn request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Transport(TransportError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 创建错误状态码错误
    pub fn bad_status(endpoint: impl Into<String>, status: u16, body: Option<String>) -> Self {
        AppError::Transport(TransportError::BadStatus {
            endpoint: endpoint.into(),
            status,
            body,
        })
    }

    /// 创建响应解析错误
    pub fn decode_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Transport(TransportError::DecodeFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建记录不存在错误
    pub fn not_found(resource: impl Into<String>, id: impl fmt::Display) -> Self {
        AppError::NotFound {
            resource: resource.into(),
            id: id.to_string(),
        }
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::Transport(_) => ErrorKind::Transport,
            AppError::NotFound { .. } => ErrorKind::NotFound,
            AppError::Config(_) => ErrorKind::Config,
            AppError::File(_) => ErrorKind::File,
        }
    }

    /// 校验错误的字段详情（其他错误返回 None）
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// 面向用户的提示文本
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(errors) => format!("请修正以下字段后重新提交: {}", errors),
            AppError::Transport(_) => "网络异常，请稍后重试".to_string(),
            AppError::NotFound { resource, .. } => format!("{} 不存在或已被删除", resource),
            AppError::Config(e) => format!("配置有误: {}", e),
            AppError::File(e) => format!("文件处理失败: {}", e),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
