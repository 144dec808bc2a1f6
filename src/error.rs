//! # 统一错误处理模块
//!
//! 定义 murange 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// murange 统一错误类型
#[derive(Error, Debug)]
pub enum MuRangeError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 模型错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed stopping-power table: {0}")]
    MalformedTable(String),

    #[error("Invalid zenith angle: cos(zenith) = {cos_zenith} is outside (0, 1]")]
    InvalidAngle { cos_zenith: f64 },

    #[error("{quantity} = {value} is outside the tabulated domain [{min}, {max}]")]
    OutOfDomain {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid kinetic energy: {0} GeV (must be > 0)")]
    InvalidEnergy(f64),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },

    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MuRangeError>;
