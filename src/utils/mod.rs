//! 工具函数模块
//!
//! 该模块包含与对象键处理相关的纯函数工具。

pub mod key;
