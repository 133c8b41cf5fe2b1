use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::models::IconRequest;
use crate::utils::{favicon_path, icon_path, public_dir};

/// 图标生成配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// logo 源文件
    pub source_svg: PathBuf,
    /// 图标输出目录
    pub output_dir: PathBuf,
}

impl GeneratorConfig {
    /// 按项目约定目录结构推导路径：`<root>/client/public`
    pub fn for_project_root(project_root: &Path) -> Self {
        Self {
            source_svg: favicon_path(project_root),
            output_dir: public_dir(project_root),
        }
    }

    /// 以当前工作目录作为项目根目录
    pub fn from_current_dir() -> Result<Self> {
        let root = std::env::current_dir().context("Cannot determine working directory")?;
        Ok(Self::for_project_root(&root))
    }

    pub fn output_path(&self, request: &IconRequest) -> PathBuf {
        icon_path(&self.output_dir, request)
    }
}
