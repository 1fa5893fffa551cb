//! # 容量规划模块
//!
//! 所有容量判断的唯一依据。在修改任何像素之前调用。

use crate::constants::{BITS_PER_BYTE, COLOR_CHANNELS, HEADER_BITS};
use crate::error::{Result, StegoError};
use crate::framer::framed_bits;
use crate::raster::Image;
use log::debug;

/// 图像可用于隐写的总位数：每个像素的 R, G, B 各 1 bit。
pub fn capacity_bits(image: &Image) -> u64 {
    image.pixel_count() * COLOR_CHANNELS as u64
}

/// 图像最多可以容纳的载荷字节数 (扣除 32 位头部后向下取整)。
pub fn max_payload_bytes(image: &Image) -> u64 {
    capacity_bits(image).saturating_sub(HEADER_BITS) / BITS_PER_BYTE
}

pub fn can_embed(image: &Image, payload_len: usize) -> bool {
    framed_bits(payload_len) <= capacity_bits(image)
}

/// 载荷放不下时返回 `CapacityExceeded`。
pub fn ensure_fits(image: &Image, payload_len: usize) -> Result<()> {
    let required_bits = framed_bits(payload_len);
    let available_bits = capacity_bits(image);
    debug!("capacity check: {required_bits} bits required, {available_bits} bits available");

    if required_bits > available_bits {
        return Err(StegoError::CapacityExceeded {
            required_bits,
            available_bits,
        });
    }
    Ok(())
}

/// 供命令行展示的容量摘要。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub width: u32,
    pub height: u32,
    pub capacity_bits: u64,
    pub max_payload_bytes: u64,
}

impl Capacity {
    pub fn of(image: &Image) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            capacity_bits: capacity_bits(image),
            max_payload_bytes: max_payload_bytes(image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::RasterFormat;

    fn rgb(width: u32, height: u32) -> Image {
        let len = (width * height * 3) as usize;
        Image::new(width, height, 3, vec![0; len], RasterFormat::Png).unwrap()
    }

    #[test]
    fn ten_by_ten_holds_thirty_three_bytes() {
        let image = rgb(10, 10);
        assert_eq!(capacity_bits(&image), 300);
        assert_eq!(max_payload_bytes(&image), 33);
        assert!(can_embed(&image, 33));
        assert!(!can_embed(&image, 34));
        assert!(!can_embed(&image, 40));
    }

    #[test]
    fn alpha_does_not_add_capacity() {
        let rgba = Image::new(10, 10, 4, vec![0; 400], RasterFormat::Png).unwrap();
        assert_eq!(capacity_bits(&rgba), capacity_bits(&rgb(10, 10)));
    }

    #[test]
    fn tiny_image_has_no_room_for_a_header() {
        let image = rgb(2, 2);
        assert_eq!(capacity_bits(&image), 12);
        assert_eq!(max_payload_bytes(&image), 0);
        assert!(matches!(
            ensure_fits(&image, 1),
            Err(StegoError::CapacityExceeded {
                required_bits: 40,
                available_bits: 12,
            })
        ));
    }

    #[test]
    fn capacity_summary_matches_planner() {
        let summary = Capacity::of(&rgb(100, 100));
        assert_eq!(summary.capacity_bits, 30_000);
        assert_eq!(summary.max_payload_bytes, (30_000 - 32) / 8);
    }
}
