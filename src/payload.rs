//! # 载荷适配模块
//!
//! 把用户可见的文本消息或任意文件转换为编解码器使用的原始字节，反之亦然。
//! 编解码器对字节是二进制安全的，文件字节按原样传递，不做任何文本编码。

use crate::error::{Result, StegoError};
use crate::raster::Image;
use crate::steganography::{embed, extract};
use std::fs;
use std::path::Path;

/// 文本按 UTF-8 字节直接作为载荷，没有额外帧。
pub fn text_payload(message: &str) -> Result<Vec<u8>> {
    if message.is_empty() {
        return Err(StegoError::EmptyPayload);
    }
    Ok(message.as_bytes().to_vec())
}

/// 读取待隐藏文件的全部字节。
///
/// # Errors
///
/// * 文件不存在：`FileNotFound`。
/// * 文件为空：`EmptyPayload`。
/// * 读取失败：`Io`。
pub fn read_file_payload(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(StegoError::FileNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    if bytes.is_empty() {
        return Err(StegoError::EmptyPayload);
    }

    Ok(bytes)
}

pub fn embed_text(image: &Image, message: &str) -> Result<Image> {
    embed(image, &text_payload(message)?)
}

/// # Errors
///
/// 除 [`extract`] 的错误外，恢复的字节不是 UTF-8 时返回 `InvalidText`。
pub fn extract_text(image: &Image) -> Result<String> {
    Ok(String::from_utf8(extract(image)?)?)
}

pub fn embed_file(image: &Image, path: &Path) -> Result<Image> {
    embed(image, &read_file_payload(path)?)
}

pub fn extract_file(image: &Image) -> Result<Vec<u8>> {
    extract(image)
}
