//! # 像素通道适配模块
//!
//! 将任意颜色类型与位深的 PNG (调色板、灰度、16 位、带或不带 Alpha)
//! 统一转换为每通道 8 位的 RGBA 缓冲区，并在隐写完成后重新编码为 PNG。
//! LSB 操作只在这种完全展开的表示上进行。

use crate::constants::CARRIER_CHANNELS_PER_PIXEL;
use crate::error::{Result, StegoError};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat, RgbaImage};
use std::fs;
use std::path::Path;

/// 将内存中的 PNG 数据解码并规范化为 8 位 RGBA。
pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage> {
    let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)?;
    log::debug!(
        "Decoded PNG: {}x{}, color type {:?}",
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image.into_rgba8())
}

/// 读取 PNG 文件并规范化为 8 位 RGBA。
///
/// 文件内容一次性读入内存，文件句柄在返回前即被释放。
///
/// # Errors
///
/// * 文件无法读取时返回 [`StegoError::Io`]。
/// * 内容不是有效的 PNG 时返回 [`StegoError::Image`]。
pub fn load_png(path: &Path) -> Result<RgbaImage> {
    let bytes = fs::read(path).map_err(|e| StegoError::io(path, e))?;
    decode_png(&bytes)
}

/// 将 RGBA 缓冲区编码为 8 位 RGBA 的 PNG 数据。
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(buffer)
}

/// 图像可承载的位数：每个像素的 R、G、B 各一位。
pub fn capacity(image: &RgbaImage) -> usize {
    image.width() as usize * image.height() as usize * CARRIER_CHANNELS_PER_PIXEL
}
