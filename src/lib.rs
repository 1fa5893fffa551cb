//! # lsb_stego 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：
//! 在 PNG/BMP 图像每个像素的 R, G, B 最低位中隐藏带长度头部的字节载荷。

// 声明库包含的所有模块。

pub mod capacity;
pub mod cli;
pub mod constants;
pub mod error;
pub mod framer;
pub mod handler;
pub mod image_io;
pub mod payload;
pub mod raster;
pub mod steganography;
pub mod stream;

pub use error::{Result, StegoError};
pub use raster::{Image, RasterFormat};
pub use steganography::{embed, extract};
