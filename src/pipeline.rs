//! # 隐写流程模块
//!
//! 对外提供编码、解码与容量查询三个入口。所有参数由调用方以不可变配置值传入，
//! 本模块不读取任何全局状态，也不会终止进程。

use crate::bits::{bits_to_bytes, bytes_to_bits, hex_dump};
use crate::constants::{BITS_PER_BYTE, LENGTH_PREFIX_BITS};
use crate::error::{Result, StegoError};
use crate::framing::{deframe, frame, read_length};
use crate::mask::xor_mask;
use crate::pixels::{capacity, encode_png, load_png};
use crate::steganography::{embed, extract};
use std::fs;
use std::path::{Path, PathBuf};

/// 编码所需的全部参数。
#[derive(Debug, Clone)]
pub struct EncodeConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub message: Vec<u8>,
    pub password: Vec<u8>,
    /// 为 `true` 时用 `password` 对消息做异或掩码。
    pub encrypt: bool,
}

/// 解码所需的全部参数。
#[derive(Debug, Clone)]
pub struct DecodeConfig {
    pub input: PathBuf,
    pub password: Vec<u8>,
    /// 为 `true` 时用 `password` 对还原的消息做异或掩码。
    pub decrypt: bool,
}

/// 一次成功编码的统计信息。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    pub message_bytes: usize,
    pub embedded_bits: usize,
    pub capacity_bits: usize,
}

/// 载体图像的容量信息。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReport {
    pub width: u32,
    pub height: u32,
    pub capacity_bits: usize,
    /// 扣除长度前缀后最多可隐藏的消息字节数。
    pub max_message_bytes: usize,
}

/// 将消息隐藏到输入图像中，并把结果写入 `output`。
///
/// 输出文件只在图像完整编码到内存之后才会创建，输入文件不会被修改。
///
/// # Errors
///
/// * 输入无法读取或输出无法写入时返回 [`StegoError::Io`]。
/// * 输入不是有效的 PNG 时返回 [`StegoError::Image`]。
/// * 消息与长度前缀超出图像容量时返回 [`StegoError::CapacityExceeded`]。
pub fn encode(config: &EncodeConfig) -> Result<EncodeSummary> {
    let mut carrier = load_png(&config.input)?;
    let capacity_bits = capacity(&carrier);
    log::debug!(
        "Carrier {}: {}x{}, {} bits available",
        config.input.display(),
        carrier.width(),
        carrier.height(),
        capacity_bits
    );

    let message = if config.encrypt {
        log::debug!("Original: {}", hex_dump(&config.message));
        let masked = xor_mask(&config.message, &config.password);
        log::debug!("Encrypted: {}", hex_dump(&masked));
        masked
    } else {
        config.message.clone()
    };

    let bits = frame(&bytes_to_bits(&message))?;
    log::debug!("Framed payload: {} bits", bits.len());
    embed(&mut carrier, &bits)?;

    let png = encode_png(&carrier)?;
    write_atomically(&config.output, &png)?;
    log::info!(
        "Embedded {} bytes into {}",
        message.len(),
        config.output.display()
    );

    Ok(EncodeSummary {
        message_bytes: message.len(),
        embedded_bits: bits.len(),
        capacity_bits,
    })
}

/// 先写入同目录下的 `.partial` 文件再重命名，失败时删除该临时文件，
/// 目标路径上不会留下截断的图像。
fn write_atomically(output: &Path, contents: &[u8]) -> Result<()> {
    let mut partial = output.as_os_str().to_owned();
    partial.push(".partial");
    let partial = PathBuf::from(partial);

    let written = fs::write(&partial, contents)
        .map_err(|e| StegoError::io(&partial, e))
        .and_then(|()| fs::rename(&partial, output).map_err(|e| StegoError::io(output, e)));

    if written.is_err() && partial.exists() {
        if let Err(e) = fs::remove_file(&partial) {
            log::warn!("Unable to remove {}: {}", partial.display(), e);
        }
    }
    written
}

/// 从图像中还原隐藏的消息。
///
/// 密码错误不会报错，只会得到无意义的字节。
///
/// # Errors
///
/// * 输入无法读取时返回 [`StegoError::Io`]。
/// * 输入不是有效的 PNG 时返回 [`StegoError::Image`]。
/// * 图像不足以容纳长度前缀或声明的消息长度时返回 [`StegoError::InsufficientData`]。
pub fn decode(config: &DecodeConfig) -> Result<Vec<u8>> {
    let carrier = load_png(&config.input)?;
    let capacity_bits = capacity(&carrier);
    log::debug!(
        "Carrier {}: {}x{}, {} bits available",
        config.input.display(),
        carrier.width(),
        carrier.height(),
        capacity_bits
    );

    let length = read_length(&extract(&carrier, LENGTH_PREFIX_BITS))?;
    log::debug!("Length prefix declares {} bytes", length);

    let wanted = (length as usize)
        .saturating_mul(BITS_PER_BYTE)
        .saturating_add(LENGTH_PREFIX_BITS);
    let bits = extract(&carrier, wanted);
    let message = bits_to_bytes(deframe(&bits)?.payload);

    if config.decrypt {
        log::debug!("Before decryption: {}", hex_dump(&message));
        let unmasked = xor_mask(&message, &config.password);
        log::debug!("After decryption: {}", hex_dump(&unmasked));
        return Ok(unmasked);
    }

    Ok(message)
}

/// 查询载体图像的尺寸与容量。
pub fn inspect(path: &Path) -> Result<CapacityReport> {
    let carrier = load_png(path)?;
    let capacity_bits = capacity(&carrier);

    Ok(CapacityReport {
        width: carrier.width(),
        height: carrier.height(),
        capacity_bits,
        max_message_bytes: capacity_bits.saturating_sub(LENGTH_PREFIX_BITS) / BITS_PER_BYTE,
    })
}
