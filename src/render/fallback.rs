use resvg::tiny_skia::{
    Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use super::{new_canvas, IconBackend, RenderError};
use crate::models::IconRequest;

/// 背景色 #f97316
pub const BACKGROUND: [u8; 4] = [249, 115, 22, 255];
/// 盘子 #fde047
pub const PLATE: [u8; 4] = [253, 224, 71, 255];
/// 饼 #fff7ed
pub const ROTI_FILL: [u8; 4] = [255, 247, 237, 255];
pub const ROTI_OUTLINE: [u8; 4] = BACKGROUND;

/// 占位图标的几何布局，完全由 size 决定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderLayout {
    pub size: u32,
    pub plate_diameter: u32,
    pub plate_offset: u32,
    pub roti_diameter: u32,
    /// 上、左下、右下
    pub roti_centers: [(u32, u32); 3],
}

impl PlaceholderLayout {
    pub fn for_size(size: u32) -> Self {
        let plate_diameter = size * 7 / 10;
        Self {
            size,
            plate_diameter,
            plate_offset: (size - plate_diameter) / 2,
            roti_diameter: size / 4,
            roti_centers: [
                (size / 2, size * 3 / 10),
                (size * 3 / 10, size * 6 / 10),
                (size * 7 / 10, size * 6 / 10),
            ],
        }
    }

    /// 饼的包围盒 (x1, y1, x2, y2)，以半径（整除）向四周展开
    pub fn roti_bounds(&self) -> [(u32, u32, u32, u32); 3] {
        let half = self.roti_diameter / 2;
        self.roti_centers
            .map(|(cx, cy)| (cx - half, cy - half, cx + half, cy + half))
    }
}

/// 不依赖矢量源、直接绘制占位图标的兜底后端
///
/// maskable 只影响文件名，绘制时不加安全区。
pub struct PlaceholderDrawer;

impl PlaceholderDrawer {
    pub fn draw(size: u32) -> Result<Pixmap, RenderError> {
        let layout = PlaceholderLayout::for_size(size);
        let mut pixmap = new_canvas(size)?;
        pixmap.fill(color(BACKGROUND));

        let plate = Rect::from_xywh(
            layout.plate_offset as f32,
            layout.plate_offset as f32,
            layout.plate_diameter as f32,
            layout.plate_diameter as f32,
        );
        if let Some(rect) = plate {
            fill_ellipse(&mut pixmap, rect, PLATE);
        }

        for (x1, y1, x2, y2) in layout.roti_bounds() {
            let Some(rect) = Rect::from_ltrb(x1 as f32, y1 as f32, x2 as f32, y2 as f32) else {
                continue;
            };
            fill_ellipse(&mut pixmap, rect, ROTI_FILL);
            // 1px 描边画在包围盒内侧
            if let Some(inner) = Rect::from_ltrb(
                rect.left() + 0.5,
                rect.top() + 0.5,
                rect.right() - 0.5,
                rect.bottom() - 0.5,
            ) {
                stroke_ellipse(&mut pixmap, inner, ROTI_OUTLINE);
            }
        }

        Ok(pixmap)
    }
}

impl IconBackend for PlaceholderDrawer {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    fn render(&self, request: &IconRequest) -> Result<Pixmap, RenderError> {
        Self::draw(request.size)
    }
}

fn color([r, g, b, a]: [u8; 4]) -> Color {
    Color::from_rgba8(r, g, b, a)
}

fn solid_paint(rgba: [u8; 4]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color(rgba));
    // 关闭抗锯齿，保证每个像素都是调色板中的颜色
    paint.anti_alias = false;
    paint
}

fn fill_ellipse(pixmap: &mut Pixmap, rect: Rect, rgba: [u8; 4]) {
    if let Some(path) = PathBuilder::from_oval(rect) {
        pixmap.fill_path(
            &path,
            &solid_paint(rgba),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}

fn stroke_ellipse(pixmap: &mut Pixmap, rect: Rect, rgba: [u8; 4]) {
    if let Some(path) = PathBuilder::from_oval(rect) {
        let stroke = Stroke {
            width: 1.0,
            ..Stroke::default()
        };
        pixmap.stroke_path(
            &path,
            &solid_paint(rgba),
            &stroke,
            Transform::identity(),
            None,
        );
    }
}
