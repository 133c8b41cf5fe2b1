use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;
use std::path::PathBuf;

use super::{compose_safe_area, new_canvas, IconBackend, RenderError};
use crate::models::IconRequest;

/// 基于 resvg 的 SVG 光栅化后端
pub struct SvgRasterizer {
    source: PathBuf,
}

impl SvgRasterizer {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// 读取并解析 SVG，相对资源以 SVG 所在目录为基准
    fn load_tree(&self) -> Result<usvg::Tree, RenderError> {
        let mut opt = usvg::Options::default();
        opt.resources_dir = std::fs::canonicalize(&self.source)
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));

        let svg_data = std::fs::read(&self.source).map_err(|e| RenderError::ReadSource {
            path: self.source.clone(),
            source: e,
        })?;
        Ok(usvg::Tree::from_data(&svg_data, &opt)?)
    }
}

/// 将 SVG 渲染到 `edge × edge` 的透明画布上，宽高分别缩放以铺满整个正方形
pub fn rasterize(tree: &usvg::Tree, edge: u32) -> Result<Pixmap, RenderError> {
    let size = tree.size();
    if size.width() <= 0.0 || size.height() <= 0.0 {
        return Err(RenderError::EmptySource);
    }

    let mut pixmap = new_canvas(edge)?;
    let transform =
        Transform::from_scale(edge as f32 / size.width(), edge as f32 / size.height());
    resvg::render(tree, transform, &mut pixmap.as_mut());
    Ok(pixmap)
}

impl IconBackend for SvgRasterizer {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn is_available(&self) -> bool {
        self.source.is_file()
    }

    fn render(&self, request: &IconRequest) -> Result<Pixmap, RenderError> {
        let tree = self.load_tree()?;
        let raster = rasterize(&tree, request.adjusted_size())?;

        if request.maskable {
            log::debug!("Applying safe area to {}", request);
            compose_safe_area(&raster, request.size)
        } else {
            Ok(raster)
        }
    }
}
