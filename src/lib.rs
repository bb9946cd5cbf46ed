//! 随机数上传工具库
//!
//! 这是一个基于 AWS SDK 的随机数生成与上传工具，主要功能包括：
//! - 从环境变量读取配置
//! - 生成带时间戳的随机数产物文件
//! - 将文件上传到 S3 存储桶并打印确认信息

pub mod artifact;
pub mod config;
pub mod error;
pub mod s3;
pub mod utils;

use config::Config;
use error::Error;
use s3::ObjectStore;
use std::fmt;

/// 一次成功运行的上传结果。
#[derive(Debug, Clone)]
pub struct Report {
    /// 目标存储桶名称。
    pub bucket: String,
    /// 上传使用的对象键。
    pub key: String,
    /// 生成的随机值。
    pub value: u64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Uploaded s3://{}/{} value={}",
            self.bucket, self.key, self.value
        )
    }
}

/// 执行一次完整的生成和上传流程
///
/// 流程是严格的线性顺序：写产物文件、计算对象键、上传、生成结果。
/// 任何一步失败都直接向上返回，不重试；上传失败时本地文件保留在
/// 磁盘上以便排查。
///
/// # 参数
///
/// * `config` - 本次运行的配置
/// * `store` - 提供上传能力的对象存储实现
///
/// # 返回值
///
/// 成功时返回上传结果 `Report`。
pub async fn run(config: &Config, store: &dyn ObjectStore) -> Result<Report, Error> {
    let artifact = artifact::write(&config.out_dir).await?;

    let key = utils::key::object_key(&config.prefix, &artifact.filename);

    store
        .put_file(&config.bucket, &key, &artifact.path)
        .await?;

    tracing::info!("已上传 s3://{}/{}", config.bucket, key);

    Ok(Report {
        bucket: config.bucket.clone(),
        key,
        value: artifact.value,
    })
}
