/// 去掉前缀两端的所有 `/` 字符
///
/// # 参数
///
/// * `prefix` - 原始前缀字符串
///
/// # 返回值
///
/// 返回去掉两端斜杠后的前缀，可能为空字符串
///
/// # 示例
///
/// ```
/// use random_uploader::utils::key::trim_prefix;
///
/// assert_eq!(trim_prefix("/data/drops/"), "data/drops");
/// assert_eq!(trim_prefix("data"), "data");
/// assert_eq!(trim_prefix("//a//"), "a");
/// assert_eq!(trim_prefix("/"), "");
/// ```
pub fn trim_prefix(prefix: &str) -> &str {
    prefix.trim_matches('/')
}

/// 根据前缀和文件名构建对象键
///
/// 前缀先去掉两端斜杠；若结果为空则对象键就是文件名本身，
/// 否则用单个 `/` 连接前缀和文件名。
///
/// # 参数
///
/// * `prefix` - 键前缀（允许带多余斜杠或为空）
/// * `filename` - 文件名
///
/// # 返回值
///
/// 返回完整的对象键
///
/// # 示例
///
/// ```
/// use random_uploader::utils::key::object_key;
///
/// assert_eq!(object_key("data/drops", "a.txt"), "data/drops/a.txt");
/// assert_eq!(object_key("/data/drops/", "a.txt"), "data/drops/a.txt");
/// assert_eq!(object_key("", "a.txt"), "a.txt");
/// assert_eq!(object_key("/", "a.txt"), "a.txt");
/// ```
pub fn object_key(prefix: &str, filename: &str) -> String {
    let prefix = trim_prefix(prefix);
    if prefix.is_empty() {
        filename.to_string()
    } else {
        format!("{}/{}", prefix, filename)
    }
}
