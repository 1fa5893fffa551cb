//! # 错误类型模块
//!
//! 库内所有操作都返回 [`Result`]，调用方根据 [`StegoError`] 的变体分支处理，
//! 而不是匹配错误字符串。

use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

pub type Result<T, E = StegoError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum StegoError {
    /// 引用的图像或载荷文件不存在
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// 容器不是受支持的无损光栅格式 (PNG, BMP)
    #[error("Unsupported image format: {0}. Please use PNG or BMP.")]
    UnsupportedFormat(String),

    /// 消息或文件为空
    #[error("Payload cannot be empty")]
    EmptyPayload,

    /// 载荷超出图像容量
    #[error(
        "Not enough space in the image to hide the payload. Required: {required_bits} bits, Available: {available_bits} bits"
    )]
    CapacityExceeded {
        required_bits: u64,
        available_bits: u64,
    },

    /// 长度头部与图像的剩余容量不一致
    #[error(
        "Corrupt length header: declares {declared_bytes} bytes but only {available_bytes} bytes can follow it"
    )]
    CorruptHeader {
        declared_bytes: u64,
        available_bytes: u64,
    },

    /// 图像中没有可识别的隐藏数据
    #[error("No hidden data found in this image")]
    NoHiddenData,

    /// 读写越过了最后一个通道样本。校验正确时不应出现。
    #[error("Channel stream exhausted at sample {position}")]
    StreamExhausted { position: usize },

    /// 像素缓冲区与声明的尺寸不匹配
    #[error("Invalid image buffer: {0}")]
    InvalidImage(String),

    /// 恢复出的文本不是合法的 UTF-8
    #[error("Hidden data is not valid UTF-8 text")]
    InvalidText(#[from] FromUtf8Error),

    /// 图像解码或编码失败
    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
