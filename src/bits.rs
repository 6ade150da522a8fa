//! # 位转换模块
//!
//! 字节序列与位序列 (每个元素为 0 或 1，高位在前) 之间的相互转换。

use crate::constants::BITS_PER_BYTE;

/// 将字节序列展开为位序列，每个字节按最高有效位优先输出 8 个位。
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .flat_map(|&byte| (0..BITS_PER_BYTE).rev().map(move |i| (byte >> i) & 1))
        .collect()
}

/// 将恰好 8 个位 (高位在前) 合并为一个字节。
pub fn bits_to_byte(bits: &[u8; BITS_PER_BYTE]) -> u8 {
    bits.iter().fold(0, |byte, &bit| (byte << 1) | (bit & 1))
}

/// 将位序列按 8 位一组还原为字节序列，不足 8 位的尾部被忽略。
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    bits.chunks_exact(BITS_PER_BYTE)
        .map(|chunk| {
            let mut window = [0u8; BITS_PER_BYTE];
            window.copy_from_slice(chunk);
            bits_to_byte(&window)
        })
        .collect()
}

/// 以空格分隔的十六进制形式输出字节，用于调试日志。
pub fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
