//! S3 上传模块
//!
//! 该模块处理与 AWS S3 的交互：构建客户端并把本地文件上传到存储桶。
//! 认证和区域解析完全交给 SDK 的默认解析链处理。

use crate::error::Error;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use mockall::automock;
use std::path::Path;

/// 对象存储的上传能力。
///
/// 真实实现由 [`S3Store`] 提供，测试中使用生成的 `MockObjectStore`。
#[automock]
#[async_trait]
pub trait ObjectStore {
    /// 把本地文件的完整内容上传到指定存储桶的指定键下。
    ///
    /// 同键已有对象会被直接覆盖，不做存在性检查，也不重试。
    ///
    /// # 参数
    ///
    /// * `bucket` - 目标存储桶名称
    /// * `key` - 目标对象键
    /// * `path` - 要上传的本地文件路径
    ///
    /// # 返回值
    ///
    /// 上传成功返回 `Ok(())`，任何传输、认证或权限失败返回上传错误。
    async fn put_file(&self, bucket: &str, key: &str, path: &Path) -> Result<(), Error>;
}

/// 基于 AWS SDK 的对象存储实现。
pub struct S3Store {
    client: Client,
}

impl S3Store {
    /// 用外部构建好的客户端创建实例。
    ///
    /// # 参数
    ///
    /// * `client` - 已配置好的 S3 客户端
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// 使用环境配置创建 S3 客户端。
    ///
    /// 给了区域提示时优先使用，否则走 SDK 的默认区域解析链；
    /// 凭证始终由默认凭证链解析。
    ///
    /// # 参数
    ///
    /// * `region` - 可选的区域提示
    ///
    /// # 返回值
    ///
    /// 配置好的 `S3Store`。
    pub async fn from_env(region: Option<String>) -> Self {
        let region_provider =
            RegionProviderChain::first_try(region.map(Region::new)).or_default_provider();

        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .load()
            .await;

        Self {
            client: Client::new(&aws_config),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_file(&self, bucket: &str, key: &str, path: &Path) -> Result<(), Error> {
        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| Error::Upload {
                bucket: bucket.to_string(),
                key: key.to_string(),
                source: Box::new(e),
            })?;

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|e| Error::Upload {
                bucket: bucket.to_string(),
                key: key.to_string(),
                source: Box::new(e),
            })?;

        Ok(())
    }
}
