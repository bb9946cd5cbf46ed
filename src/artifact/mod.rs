//! 产物生成模块
//!
//! 该模块负责生成本次运行的产物文件：取 UTC 时间戳，抽取一个随机整数，
//! 把整数写入输出目录下以时间戳命名的文本文件。

use crate::error::Error;
use chrono::Utc;
use rand::Rng;
use std::path::{Path, PathBuf};

/// 随机值的上限（包含）。
const MAX_VALUE: u64 = 1_000_000_000;

/// 一次运行生成的产物。
#[derive(Debug, Clone)]
pub struct Artifact {
    /// 产物文件的本地路径。
    pub path: PathBuf,
    /// 产物文件名。
    pub filename: String,
    /// 生成的随机值。
    pub value: u64,
}

/// 取当前 UTC 时间，格式化为秒级精度的紧凑时间戳。
///
/// # 返回值
///
/// `YYYYMMDDTHHMMSSZ` 格式的时间戳字符串。
pub fn timestamp() -> String {
    Utc::now().format("%Y%m%dT%H%M%SZ").to_string()
}

/// 在 `[0, 1_000_000_000]` 范围内均匀抽取一个随机整数。
///
/// 使用线程本地的非加密随机源。
///
/// # 返回值
///
/// 抽取到的随机值。
pub fn draw_value() -> u64 {
    rand::rng().random_range(0..=MAX_VALUE)
}

/// 根据时间戳推导产物文件名。
///
/// 文件名对同一个时间戳是确定的，同一秒内的两次运行会得到相同的
/// 文件名并互相覆盖，这是已接受的行为。
///
/// # 参数
///
/// * `ts` - 时间戳字符串
///
/// # 返回值
///
/// `random-<ts>.txt` 形式的文件名。
///
/// # 示例
///
/// ```
/// use random_uploader::artifact::filename_for;
///
/// assert_eq!(filename_for("20260805T120000Z"), "random-20260805T120000Z.txt");
/// ```
pub fn filename_for(ts: &str) -> String {
    format!("random-{}.txt", ts)
}

/// 生成产物并写入输出目录。
///
/// 先确保输出目录存在（已存在时静默成功），再把随机值的十进制文本
/// 加换行写入文件。写入采用覆盖模式，返回前文件已经完整落盘关闭。
///
/// # 参数
///
/// * `out_dir` - 输出目录路径
///
/// # 返回值
///
/// 写好的 `Artifact`，目录创建或写入失败时返回文件系统错误。
pub async fn write(out_dir: &Path) -> Result<Artifact, Error> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .map_err(|source| Error::Filesystem {
            path: out_dir.to_path_buf(),
            source,
        })?;

    let ts = timestamp();
    let value = draw_value();
    let filename = filename_for(&ts);
    let path = out_dir.join(&filename);

    tokio::fs::write(&path, format!("{}\n", value))
        .await
        .map_err(|source| Error::Filesystem {
            path: path.clone(),
            source,
        })?;

    tracing::info!("已写入产物文件 {}", path.display());

    Ok(Artifact {
        path,
        filename,
        value,
    })
}
