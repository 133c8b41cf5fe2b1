use anyhow::{Context, Result};
use resvg::tiny_skia::Pixmap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::render::RenderError;

/// 将画布编码为 PNG 并写入文件（tiny-skia 负责反预乘 alpha）
pub fn write_png(path: &Path, pixmap: &Pixmap) -> Result<(), RenderError> {
    let bytes = pixmap
        .encode_png()
        .map_err(|e| RenderError::Encode(e.to_string()))?;
    std::fs::write(path, bytes).map_err(|e| RenderError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// 只解析 PNG 头部，返回 (width, height)
pub fn read_dimensions(path: &Path) -> Result<(u32, u32)> {
    let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
    let reader = png::Decoder::new(BufReader::new(file))
        .read_info()
        .with_context(|| format!("Failed to read PNG header of {:?}", path))?;
    let info = reader.info();
    Ok((info.width, info.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_read_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");

        let pixmap = Pixmap::new(230, 230).unwrap();
        write_png(&path, &pixmap).unwrap();

        assert_eq!(read_dimensions(&path).unwrap(), (230, 230));
    }

    #[test]
    fn test_write_into_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("icon.png");

        let err = write_png(&path, &Pixmap::new(8, 8).unwrap()).unwrap_err();
        assert!(matches!(err, RenderError::Write { .. }));
    }

    #[test]
    fn test_read_dimensions_rejects_non_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        std::fs::write(&path, b"not a png").unwrap();

        assert!(read_dimensions(&path).is_err());
        assert!(read_dimensions(&dir.path().join("missing.png")).is_err());
    }
}
