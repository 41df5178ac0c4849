use thiserror::Error;

/// 应用程序错误类型
///
/// 只覆盖外围的 I/O 与配置问题。提取引擎本身没有错误状态：
/// 任何匹配失败都只是"没出到题"，对应空结果而非错误。
#[derive(Debug, Error)]
pub enum AppError {
    /// 读取配置文件失败
    #[error("无法读取配置文件 {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件解析失败
    #[error("配置文件解析失败 {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// 写入输出文件失败
    #[error("无法写入输出文件 {path}: {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 题目序列化失败
    #[error("题目序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
