//! # png_lsb 库
//!
//! 本库包含 PNG LSB 隐写工具的核心逻辑：位转换、异或掩码、像素通道规范化、
//! 按行优先顺序的嵌入与提取，以及 32 位长度前缀。

// 声明库包含的所有模块。

pub mod bits;
pub mod cli;
pub mod constants;
pub mod error;
pub mod framing;
pub mod handler;
pub mod mask;
pub mod pipeline;
pub mod pixels;
pub mod steganography;

pub use error::StegoError;
