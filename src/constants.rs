/// 长度前缀占用的位数。
/// 消息长度以 `u32` 大端序 (4 字节) 存储，共 32 bits。
pub const LENGTH_PREFIX_BITS: usize = 32;

/// 每个字节展开后的位数。
pub const BITS_PER_BYTE: usize = 8;

/// 每个像素可用于隐写的通道数 (R, G, B)，Alpha 通道保持不变。
pub const CARRIER_CHANNELS_PER_PIXEL: usize = 3;

/// 未指定输出路径时使用的默认文件名。
pub const DEFAULT_OUTPUT: &str = "output.png";
