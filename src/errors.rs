use std::fmt;

#[derive(Debug, Clone)]
pub enum SidebarError {
    Config(String),
    FileOperation(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
    Transport(String),
}

impl SidebarError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            SidebarError::Config(_) => "E001",
            SidebarError::FileOperation(_) => "E002",
            SidebarError::Validation(_) => "E003",
            SidebarError::NotFound(_) => "E004",
            SidebarError::Serialization(_) => "E005",
            SidebarError::Transport(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            SidebarError::Config(_) => "Configuration Error",
            SidebarError::FileOperation(_) => "File Operation Error",
            SidebarError::Validation(_) => "Validation Error",
            SidebarError::NotFound(_) => "Resource Not Found",
            SidebarError::Serialization(_) => "Serialization Error",
            SidebarError::Transport(_) => "Transport Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            SidebarError::Config(msg)
            | SidebarError::FileOperation(msg)
            | SidebarError::Validation(msg)
            | SidebarError::NotFound(msg)
            | SidebarError::Serialization(msg)
            | SidebarError::Transport(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 终端）
    #[cfg(feature = "cli")]
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

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SidebarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SidebarError {}

// 便捷的构造函数
impl SidebarError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        SidebarError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        SidebarError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        SidebarError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        SidebarError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        SidebarError::Serialization(msg.into())
    }

    pub fn transport<T: Into<String>>(msg: T) -> Self {
        SidebarError::Transport(msg.into())
    }
}

impl From<std::io::Error> for SidebarError {
    fn from(err: std::io::Error) -> Self {
        SidebarError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SidebarError {
    fn from(err: serde_json::Error) -> Self {
        SidebarError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for SidebarError {
    fn from(err: config::ConfigError) -> Self {
        SidebarError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SidebarError>;
