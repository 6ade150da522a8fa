//! # 命令行接口模块
//!
//! 使用 `clap` 派生定义 `encode`、`decode` 和 `capacity` 三个子命令及其参数。
//! `-e` 必须与 `-p` 同时使用；参数在 `handler` 中被转换为隐写流程的配置值。

use crate::constants::DEFAULT_OUTPUT;
use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在 PNG 图像的 RGB 通道中隐藏或恢复消息，
/// 并可选用密码进行异或加密。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在 PNG 图像的 RGB 通道中隐藏或恢复消息。\n可选的 XOR 加密仅用于混淆，不提供真正的安全性。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：encode (隐藏)、decode (恢复) 和 capacity (容量查询)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将消息隐藏到 PNG 图像中。
    Encode(EncodeArgs),

    /// 从经过隐写的 PNG 图像中恢复消息。
    Decode(DecodeArgs),

    /// 显示 PNG 图像最多能隐藏多少字节。
    Capacity(CapacityArgs),
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 作为载体的输入 PNG 图像路径。
    #[arg(short, long)]
    pub input: PathBuf,

    /// 隐写完成后，保存结果图像的输出路径。
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// 要隐藏的消息文本。
    #[arg(short, long, required_unless_present = "text", conflicts_with = "text")]
    pub message: Option<String>,

    /// 从文件读取要隐藏的消息 (按原始字节处理)。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 异或加密使用的密码。
    #[arg(short, long)]
    pub password: Option<String>,

    /// 使用密码对消息进行异或加密。
    #[arg(short, long, requires = "password")]
    pub encrypt: bool,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// 已隐藏消息的 PNG 图像路径。
    #[arg(short, long)]
    pub input: PathBuf,

    /// 异或解密使用的密码。
    #[arg(short, long)]
    pub password: Option<String>,

    /// 使用密码对还原的消息进行异或解密。
    #[arg(short, long, requires = "password")]
    pub encrypt: bool,

    /// 将恢复的消息保存到该文件，而不是打印到终端。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 文本文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// 要查询的 PNG 图像路径。
    #[arg(short, long)]
    pub input: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_defaults_output_path() {
        let cli = Cli::try_parse_from(["png_lsb", "encode", "-i", "in.png", "-m", "hello"]).unwrap();
        match cli.command {
            Commands::Encode(args) => {
                assert_eq!(args.output, PathBuf::from("output.png"));
                assert_eq!(args.message.as_deref(), Some("hello"));
                assert!(!args.encrypt);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn encrypt_requires_password() {
        let result =
            Cli::try_parse_from(["png_lsb", "encode", "-i", "in.png", "-m", "hello", "-e"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from(["png_lsb", "decode", "-i", "in.png", "-e"]);
        assert!(result.is_err());
    }

    #[test]
    fn message_and_text_are_exclusive_and_one_is_required() {
        assert!(Cli::try_parse_from(["png_lsb", "encode", "-i", "in.png"]).is_err());
        assert!(
            Cli::try_parse_from([
                "png_lsb", "encode", "-i", "in.png", "-m", "hi", "-t", "msg.txt"
            ])
            .is_err()
        );
    }
}
