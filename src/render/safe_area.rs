use resvg::tiny_skia::{Pixmap, PixmapPaint, Transform};

use super::RenderError;

/// 安全区偏移：floor((adjusted - target) / 2)
pub fn safe_area_offset(adjusted_size: u32, target_size: u32) -> u32 {
    adjusted_size.saturating_sub(target_size) / 2
}

/// 为 maskable 图标添加安全区
///
/// 新画布与输入同尺寸（即放大后的尺寸）且全透明，原图按目标尺寸计算的偏移居中，
/// 以 source-over 方式合成，超出右下边缘的部分被裁掉。
/// 画布不会缩回目标尺寸，因此输出边长为 floor(size × 1.2)。
pub fn compose_safe_area(raster: &Pixmap, target_size: u32) -> Result<Pixmap, RenderError> {
    let adjusted = raster.width();
    let mut canvas =
        Pixmap::new(adjusted, raster.height()).ok_or(RenderError::Canvas(adjusted))?;

    let offset = safe_area_offset(adjusted, target_size) as i32;
    canvas.draw_pixmap(
        offset,
        offset,
        raster.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );

    Ok(canvas)
}
