use std::fmt;

/// Diagnostic error for everything below the flow boundary.
///
/// These carry the full cause (status code, transport message, parse error)
/// and are meant for logs. What the user sees is a [`crate::flow::FlowError`].
#[derive(Debug, Clone)]
pub enum ShortlinkError {
    Network(String),
    HttpStatus { status: u16, body: String },
    InvalidFormat(String),
    Serialization(String),
    Clipboard(String),
    Config(String),
    FileOperation(String),
    TaskJoin(String),
}

impl ShortlinkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortlinkError::Network(_) => "E001",
            ShortlinkError::HttpStatus { .. } => "E002",
            ShortlinkError::InvalidFormat(_) => "E003",
            ShortlinkError::Serialization(_) => "E004",
            ShortlinkError::Clipboard(_) => "E005",
            ShortlinkError::Config(_) => "E006",
            ShortlinkError::FileOperation(_) => "E007",
            ShortlinkError::TaskJoin(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortlinkError::Network(_) => "Network Error",
            ShortlinkError::HttpStatus { .. } => "HTTP Error",
            ShortlinkError::InvalidFormat(_) => "Invalid Response Format",
            ShortlinkError::Serialization(_) => "Serialization Error",
            ShortlinkError::Clipboard(_) => "Clipboard Error",
            ShortlinkError::Config(_) => "Configuration Error",
            ShortlinkError::FileOperation(_) => "File Operation Error",
            ShortlinkError::TaskJoin(_) => "Background Task Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> String {
        match self {
            ShortlinkError::HttpStatus { status, body } if body.is_empty() => {
                format!("server responded with status {}", status)
            }
            ShortlinkError::HttpStatus { status, body } => {
                format!("server responded with status {}: {}", status, body)
            }
            ShortlinkError::Network(msg)
            | ShortlinkError::InvalidFormat(msg)
            | ShortlinkError::Serialization(msg)
            | ShortlinkError::Clipboard(msg)
            | ShortlinkError::Config(msg)
            | ShortlinkError::FileOperation(msg)
            | ShortlinkError::TaskJoin(msg) => msg.clone(),
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于日志与 TUI）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortlinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortlinkError {}

// 便捷的构造函数
impl ShortlinkError {
    pub fn network<T: Into<String>>(msg: T) -> Self {
        ShortlinkError::Network(msg.into())
    }

    pub fn http_status<T: Into<String>>(status: u16, body: T) -> Self {
        ShortlinkError::HttpStatus {
            status,
            body: body.into(),
        }
    }

    pub fn invalid_format<T: Into<String>>(msg: T) -> Self {
        ShortlinkError::InvalidFormat(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ShortlinkError::Serialization(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        ShortlinkError::Clipboard(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ShortlinkError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ShortlinkError::FileOperation(msg.into())
    }

    pub fn task_join<T: Into<String>>(msg: T) -> Self {
        ShortlinkError::TaskJoin(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<ureq::Error> for ShortlinkError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(status) => ShortlinkError::http_status(status, ""),
            other => ShortlinkError::Network(other.to_string()),
        }
    }
}

impl From<std::io::Error> for ShortlinkError {
    fn from(err: std::io::Error) -> Self {
        ShortlinkError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ShortlinkError {
    fn from(err: serde_json::Error) -> Self {
        ShortlinkError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for ShortlinkError {
    fn from(err: config::ConfigError) -> Self {
        ShortlinkError::Config(err.to_string())
    }
}

impl From<url::ParseError> for ShortlinkError {
    fn from(err: url::ParseError) -> Self {
        ShortlinkError::Config(format!("invalid URL: {}", err))
    }
}

impl From<tokio::task::JoinError> for ShortlinkError {
    fn from(err: tokio::task::JoinError) -> Self {
        ShortlinkError::TaskJoin(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortlinkError>;
