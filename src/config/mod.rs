//! 配置模块
//!
//! 该模块负责从环境变量加载配置。所有配置在启动时一次性解析，
//! 必需项缺失会立即报错，不会执行任何后续步骤。

use crate::error::Error;
use crate::utils::key::trim_prefix;
use std::env;
use std::path::PathBuf;

/// 程序的完整配置。
///
/// # 环境变量
///
/// * `S3_BUCKET` - 目标存储桶名称（必需，不能为空）
/// * `S3_PREFIX` - 对象键前缀（可选，两端斜杠会被去掉，默认为空）
/// * `AWS_REGION` - 区域提示（可选，未设置时走 SDK 默认解析链）
/// * `OUT_DIR` - 本地输出目录（可选，默认为系统临时目录）
#[derive(Debug, Clone)]
pub struct Config {
    pub bucket: String,
    pub prefix: String,
    pub region: Option<String>,
    pub out_dir: PathBuf,
}

impl Config {
    /// 从进程环境变量解析配置。
    ///
    /// # 返回值
    ///
    /// 解析好的 `Config`，必需项缺失时返回配置错误。
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 从任意查找函数解析配置。
    ///
    /// 测试中用它代替真实环境变量，避免修改进程环境。
    ///
    /// # 参数
    ///
    /// * `lookup` - 按名称返回变量值的查找函数
    ///
    /// # 返回值
    ///
    /// 解析好的 `Config`，必需项缺失时返回配置错误。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bucket = required(&lookup, "S3_BUCKET")?;

        // 前缀两端的斜杠在加载时统一去掉，空值表示没有前缀
        let prefix = lookup("S3_PREFIX")
            .map(|value| trim_prefix(&value).to_string())
            .unwrap_or_default();

        // 空字符串视为未设置，交给 SDK 的默认区域解析链
        let region = lookup("AWS_REGION").filter(|value| !value.is_empty());

        let out_dir = lookup("OUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(env::temp_dir);

        Ok(Self {
            bucket,
            prefix,
            region,
            out_dir,
        })
    }
}

/// 读取一个必需的变量，缺失或为空时返回配置错误。
fn required<F>(lookup: &F, name: &str) -> Result<String, Error>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::Configuration {
            name: name.to_string(),
        }),
    }
}
