/// 长度头部占用的位数。
/// 载荷长度以 `u32` 大端序写入，共 32 bits，每个颜色通道样本存储 1 bit，
/// 因此需要扫描顺序上的前 32 个通道样本。
pub const HEADER_BITS: u64 = 32;

/// 每个像素参与隐写的颜色通道数 (R, G, B)。
/// Alpha 通道即使存在也不会被读取或修改。
pub const COLOR_CHANNELS: usize = 3;

/// 每个载荷字节占用的通道样本数。
pub const BITS_PER_BYTE: u64 = 8;

/// 带 Alpha 通道的像素在缓冲区中的样本数。
pub const RGBA_CHANNELS: usize = 4;
