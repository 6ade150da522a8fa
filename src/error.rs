//! # 错误类型模块
//!
//! 定义隐写核心流程中可能出现的所有错误。命令行层使用 `anyhow` 包装这些错误，
//! 核心模块只返回 [`StegoError`]。

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 隐写核心的统一错误类型。
#[derive(Error, Debug)]
pub enum StegoError {
    /// 无法读取源文件或写入目标文件。
    #[error("I/O error on '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 图像编解码器拒绝了输入数据 (例如不是有效的 PNG)。
    #[error("Image codec error")]
    Image(#[from] image::ImageError),

    /// 提取到的位数不足以还原长度前缀或声明长度的消息。
    #[error("Insufficient data: need {needed} bits but only {available} are available")]
    InsufficientData { needed: usize, available: usize },

    /// 消息加上长度前缀超出了图像的可用容量。
    #[error("Capacity exceeded: {required} bits required but the image only holds {capacity}")]
    CapacityExceeded { required: usize, capacity: usize },

    /// 消息长度无法用 32 位长度前缀表示。
    #[error("Message of {0} bytes does not fit the 32-bit length prefix")]
    MessageTooLong(usize),
}

impl StegoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StegoError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StegoError>;
