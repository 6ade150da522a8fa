//! # 长度前缀模块
//!
//! 在消息位序列前附加 32 位大端序的字节长度，并在读取时据此截取消息。

use crate::bits::{bits_to_bytes, bytes_to_bits};
use crate::constants::{BITS_PER_BYTE, LENGTH_PREFIX_BITS};
use crate::error::{Result, StegoError};

/// 去除长度前缀后的消息。
#[derive(Debug, PartialEq, Eq)]
pub struct Deframed<'a> {
    /// 头部声明的消息字节数。
    pub length: u32,
    /// 恰好 `length * 8` 个消息位。
    pub payload: &'a [u8],
}

/// 在消息位序列前加上其字节长度。
///
/// # Errors
///
/// 字节长度超过 `u32::MAX` 时返回 [`StegoError::MessageTooLong`]。
pub fn frame(message_bits: &[u8]) -> Result<Vec<u8>> {
    let byte_len = message_bits.len() / BITS_PER_BYTE;
    let length = u32::try_from(byte_len).map_err(|_| StegoError::MessageTooLong(byte_len))?;

    let mut framed = Vec::with_capacity(LENGTH_PREFIX_BITS + message_bits.len());
    framed.extend(bytes_to_bits(&length.to_be_bytes()));
    framed.extend_from_slice(message_bits);
    Ok(framed)
}

/// 读取长度前缀，仅解析头部。
///
/// # Errors
///
/// 位数不足 32 时返回 [`StegoError::InsufficientData`]。
pub fn read_length(bits: &[u8]) -> Result<u32> {
    let header = bits
        .get(..LENGTH_PREFIX_BITS)
        .ok_or(StegoError::InsufficientData {
            needed: LENGTH_PREFIX_BITS,
            available: bits.len(),
        })?;

    let length = bits_to_bytes(header)
        .into_iter()
        .fold(0u32, |length, byte| (length << 8) | u32::from(byte));
    Ok(length)
}

/// 解析长度前缀并截取紧随其后的消息位。
///
/// # Errors
///
/// * 位数不足 32 时返回 [`StegoError::InsufficientData`]。
/// * 头部之后的位数少于 `length * 8` 时返回 [`StegoError::InsufficientData`]，
///   其中 `needed` 与 `available` 均不含头部。
pub fn deframe(bits: &[u8]) -> Result<Deframed<'_>> {
    let length = read_length(bits)?;
    let remaining = &bits[LENGTH_PREFIX_BITS..];

    let needed = (length as usize).saturating_mul(BITS_PER_BYTE);
    let payload = remaining
        .get(..needed)
        .ok_or(StegoError::InsufficientData {
            needed,
            available: remaining.len(),
        })?;

    Ok(Deframed { length, payload })
}
