//! # XOR 掩码模块
//!
//! 以密码为重复密钥的逐字节异或变换。加密与解密使用同一个函数。
//! 该变换不提供任何认证或完整性保护，错误的密码只会得到乱码。

/// 使用 `password` 对 `data` 进行循环异或。
///
/// 密码为空时原样返回数据，即“不加密”模式。
/// 对同一密码连续调用两次会得到原始数据。
pub fn xor_mask(data: &[u8], password: &[u8]) -> Vec<u8> {
    if password.is_empty() {
        return data.to_vec();
    }

    data.iter()
        .zip(password.iter().cycle())
        .map(|(&byte, &key)| byte ^ key)
        .collect()
}
