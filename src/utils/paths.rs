use std::path::{Path, PathBuf};

use crate::models::IconRequest;

/// 获取前端静态资源目录（`client/public`）
pub fn public_dir(project_root: &Path) -> PathBuf {
    project_root.join("client").join("public")
}

/// 获取 logo 源文件路径
pub fn favicon_path(project_root: &Path) -> PathBuf {
    public_dir(project_root).join("favicon.svg")
}

/// 获取图标输出路径
pub fn icon_path(output_dir: &Path, request: &IconRequest) -> PathBuf {
    output_dir.join(request.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_layout() {
        let root = Path::new("/srv/app");
        assert_eq!(public_dir(root), PathBuf::from("/srv/app/client/public"));
        assert_eq!(
            favicon_path(root),
            PathBuf::from("/srv/app/client/public/favicon.svg")
        );
        assert_eq!(
            icon_path(&public_dir(root), &IconRequest::maskable(192)),
            PathBuf::from("/srv/app/client/public/icon-192-maskable.png")
        );
    }
}
