//! # 命令处理逻辑模块
//!
//! 包含处理 `encode`、`decode` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责把命令行参数转换为配置值、调用隐写流程以及向用户报告结果。

use crate::cli::{CapacityArgs, DecodeArgs, EncodeArgs};
use crate::pipeline::{self, DecodeConfig, EncodeConfig};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

/// 目标文件已存在且未指定 `--force` 时返回错误。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}\nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 启用加密时密码不能为空白。
fn ensure_password(encrypt: bool, password: Option<&str>) -> Result<()> {
    anyhow::ensure!(
        !encrypt || password.is_some_and(|p| !p.trim().is_empty()),
        "A non-empty password is required when {} is set.",
        "--encrypt".yellow().bold()
    );
    Ok(())
}

/// 处理 'Encode' 命令的执行逻辑。
///
/// 负责读取消息 (命令行文本或文件)、构建编码配置、调用隐写流程，
/// 最后报告已使用的容量。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径、消息和密码的 `EncodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `--force`。
/// * 启用了加密但密码为空。
/// * 无法读取消息文件或输入图像。
/// * 图像没有足够的空间来隐藏消息。
/// * 无法写入到目标图像文件。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    ensure_writable(&args.output, args.force)?;
    ensure_password(args.encrypt, args.password.as_deref())?;

    let message = match (&args.message, &args.text) {
        (Some(message), _) => message.as_bytes().to_vec(),
        (None, Some(text)) => fs::read(text).with_context(|| {
            format!(
                "Unable to read text file: {}",
                text.to_string_lossy().red().bold()
            )
        })?,
        (None, None) => anyhow::bail!("Either --message or --text must be provided."),
    };

    let config = EncodeConfig {
        input: args.input,
        output: args.output,
        message,
        password: args.password.unwrap_or_default().into_bytes(),
        encrypt: args.encrypt,
    };

    let summary = pipeline::encode(&config).with_context(|| {
        format!(
            "Failed to hide the message in: {}",
            config.input.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully hidden and saved: {}",
        config.output.to_string_lossy().green().bold()
    );
    println!(
        "Used {} of {} available bits ({} message bytes).",
        summary.embedded_bits.to_string().green().bold(),
        summary.capacity_bits.to_string().green(),
        summary.message_bytes
    );

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 恢复的消息会写入 `--text` 指定的文件；未指定时以 UTF-8 (有损) 形式打印到终端。
///
/// # Arguments
///
/// * `args` - 包含输入路径、密码以及可选输出文件的 `DecodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 启用了解密但密码为空。
/// * 无法读取输入图像，或图像中没有完整的隐藏数据。
/// * 无法写入到目标文本文件。
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    ensure_password(args.encrypt, args.password.as_deref())?;
    if let Some(text) = &args.text {
        ensure_writable(text, args.force)?;
    }

    let config = DecodeConfig {
        input: args.input,
        password: args.password.unwrap_or_default().into_bytes(),
        decrypt: args.encrypt,
    };

    let message = pipeline::decode(&config).with_context(|| {
        format!(
            "Failed to recover a message from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            config.input.to_string_lossy().red().bold()
        )
    })?;

    match &args.text {
        Some(text) => {
            fs::write(text, &message).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    text.to_string_lossy().red().bold()
                )
            })?;
            println!(
                "The message has been successfully recovered and saved: {}",
                text.to_string_lossy().green().bold()
            );
        }
        None => println!("Hidden message: {}", String::from_utf8_lossy(&message)),
    }

    Ok(())
}

/// 处理 'Capacity' 命令：打印图像尺寸及可隐藏的最大字节数。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let report = pipeline::inspect(&args.input).with_context(|| {
        format!(
            "Unable to inspect image file: {}",
            args.input.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "{}: {}x{} pixels, {} bits, up to {} message bytes.",
        args.input.to_string_lossy().bold(),
        report.width,
        report.height,
        report.capacity_bits,
        report.max_message_bytes.to_string().green().bold()
    );

    Ok(())
}
