mod fallback;
mod rasterizer;
mod safe_area;

pub use fallback::*;
pub use rasterizer::*;
pub use safe_area::*;

use resvg::tiny_skia::Pixmap;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::IconRequest;

/// 渲染过程中的错误
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to read SVG source '{path}': {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse SVG: {0}")]
    Parse(#[from] resvg::usvg::Error),

    #[error("SVG source has empty dimensions")]
    EmptySource,

    #[error("Failed to allocate {0}x{0} canvas")]
    Canvas(u32),

    #[error("Failed to encode PNG: {0}")]
    Encode(String),

    #[error("Written icon '{path}' is unreadable: {message}")]
    Verify { path: PathBuf, message: String },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 图标渲染后端
///
/// 生成器按顺序尝试各个后端，前一个失败时退回下一个。
pub trait IconBackend {
    /// 后端标识，写入运行汇总
    fn name(&self) -> &'static str;

    /// 运行前探测后端是否可用，不可用的后端在整次运行中被跳过
    fn is_available(&self) -> bool {
        true
    }

    /// 渲染请求对应的最终图片
    fn render(&self, request: &IconRequest) -> Result<Pixmap, RenderError>;
}

/// 分配一块全透明的正方形画布
pub(crate) fn new_canvas(size: u32) -> Result<Pixmap, RenderError> {
    Pixmap::new(size, size).ok_or(RenderError::Canvas(size))
}

/// 与站点 logo 相同构图的测试 SVG
#[cfg(test)]
pub(crate) const TEST_LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 512 512">
  <circle cx="256" cy="256" r="256" fill="#f97316"/>
  <circle cx="256" cy="256" r="200" fill="#fde047"/>
  <circle cx="256" cy="180" r="70" fill="#fff7ed" stroke="#f97316" stroke-width="6"/>
  <circle cx="150" cy="320" r="70" fill="#fff7ed" stroke="#f97316" stroke-width="6"/>
  <circle cx="362" cy="320" r="70" fill="#fff7ed" stroke="#f97316" stroke-width="6"/>
</svg>"##;
