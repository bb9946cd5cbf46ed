//! 错误类型模块
//!
//! 该模块定义了程序三个阶段（配置、文件系统、上传）的错误类型。
//! 所有错误都是致命的，向上传播到 main 后终止进程。

use std::path::PathBuf;

/// 程序运行过程中可能出现的错误。
///
/// 每个变体对应一个失败阶段，错误信息中会标明是哪个阶段出错。
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 必需的环境变量缺失或为空。
    #[error("configuration error: missing required environment variable {name}")]
    Configuration {
        /// 缺失的环境变量名称。
        name: String,
    },

    /// 目录创建或文件写入失败。
    #[error("filesystem error: {}: {source}", .path.display())]
    Filesystem {
        /// 出错的本地路径。
        path: PathBuf,
        /// 底层 I/O 错误。
        source: std::io::Error,
    },

    /// 上传到对象存储失败。
    #[error("upload error: s3://{bucket}/{key}: {source}")]
    Upload {
        /// 目标存储桶名称。
        bucket: String,
        /// 目标对象键。
        key: String,
        /// 底层 SDK 错误。
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
