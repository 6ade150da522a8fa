use crate::constants::CARRIER_CHANNELS_PER_PIXEL;
use crate::error::{Result, StegoError};
use crate::pixels::capacity;
use image::RgbaImage;

/// RGBA 像素中的颜色通道。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// 每个像素内承载数据的通道及其顺序，写入和读取共用。Alpha 不在其中。
pub const CARRIER_CHANNELS: [Channel; CARRIER_CHANNELS_PER_PIXEL] =
    [Channel::Red, Channel::Green, Channel::Blue];

/// RGBA 像素在原始缓冲区中占用的字节数。
const RGBA_CHANNELS: usize = 4;

/// 第 `slot` 个承载位在 RGBA 原始字节中的下标。
///
/// 槽位按行优先 (从上到下、从左到右) 排列，每个像素内按 [`CARRIER_CHANNELS`] 的顺序。
fn slot_offset(slot: usize) -> usize {
    let pixel = slot / CARRIER_CHANNELS_PER_PIXEL;
    let channel = CARRIER_CHANNELS[slot % CARRIER_CHANNELS_PER_PIXEL];
    pixel * RGBA_CHANNELS + channel.index()
}

/// 将位序列写入图像各承载通道的最低有效位。
///
/// 位序列用尽后，剩余的像素和通道保持原值不变。
///
/// # Errors
///
/// 位序列长度超过图像容量时返回 [`StegoError::CapacityExceeded`]，此时图像不会被修改。
pub fn embed(image: &mut RgbaImage, bits: &[u8]) -> Result<()> {
    let capacity = capacity(image);
    if bits.len() > capacity {
        return Err(StegoError::CapacityExceeded {
            required: bits.len(),
            capacity,
        });
    }

    let raw: &mut [u8] = &mut **image;
    for (slot, &bit) in bits.iter().enumerate() {
        let value = &mut raw[slot_offset(slot)];
        *value = (*value & 0xFE) | (bit & 1);
    }

    Ok(())
}

/// 按与 [`embed`] 相同的顺序读取最多 `count` 个最低有效位。
///
/// 图像容量不足 `count` 时返回全部可读取的位。
pub fn extract(image: &RgbaImage, count: usize) -> Vec<u8> {
    let raw = image.as_raw();
    (0..count.min(capacity(image)))
        .map(|slot| raw[slot_offset(slot)] & 1)
        .collect()
}
