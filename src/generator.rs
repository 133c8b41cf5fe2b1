use anyhow::{Context, Result};
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::models::{IconOutcome, IconReport, IconRequest, RunSummary, ICON_REQUESTS};
use crate::render::{IconBackend, PlaceholderDrawer, RenderError, SvgRasterizer};
use crate::utils::{read_dimensions, write_png};

/// PWA 图标生成器
///
/// 按顺序逐个处理请求；每个请求依次尝试各个后端，直到某个后端成功写出文件。
pub struct IconGenerator {
    config: GeneratorConfig,
    backends: Vec<Box<dyn IconBackend>>,
}

impl IconGenerator {
    /// 默认后端链：SVG 光栅化 -> 占位图标
    pub fn new(config: GeneratorConfig) -> Self {
        let backends: Vec<Box<dyn IconBackend>> = vec![
            Box::new(SvgRasterizer::new(config.source_svg.clone())),
            Box::new(PlaceholderDrawer),
        ];
        Self::with_backends(config, backends)
    }

    pub fn with_backends(config: GeneratorConfig, backends: Vec<Box<dyn IconBackend>>) -> Self {
        Self { config, backends }
    }

    /// 生成全部图标
    ///
    /// 只有输出目录无法创建时返回错误，单个图标失败会记录在汇总里。
    pub fn run(&self) -> Result<RunSummary> {
        log::info!("Generating PWA icons into {:?}", self.config.output_dir);
        self.ensure_output_dir()?;

        let backends = self.available_backends();
        let mut summary = RunSummary::default();
        let mut phase = None;

        for request in &ICON_REQUESTS {
            if phase != Some(request.maskable) {
                phase = Some(request.maskable);
                if request.maskable {
                    log::info!("Creating maskable icons...");
                } else {
                    log::info!("Creating standard icons...");
                }
            }
            summary.push(self.generate_with(&backends, request));
        }

        log::info!(
            "Generated {}/{} icon files",
            summary.generated_count(),
            summary.total()
        );
        Ok(summary)
    }

    /// 生成单个图标，输出目录不存在时先创建
    pub fn generate(&self, request: &IconRequest) -> Result<IconReport> {
        self.ensure_output_dir()?;
        Ok(self.generate_with(&self.available_backends(), request))
    }

    fn ensure_output_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {:?}",
                self.config.output_dir
            )
        })
    }

    fn available_backends(&self) -> Vec<&dyn IconBackend> {
        self.backends
            .iter()
            .map(|b| b.as_ref())
            .filter(|b| {
                let available = b.is_available();
                if !available {
                    log::warn!("Icon backend '{}' is not available, skipping", b.name());
                }
                available
            })
            .collect()
    }

    fn generate_with(&self, backends: &[&dyn IconBackend], request: &IconRequest) -> IconReport {
        let path = self.config.output_path(request);
        let mut last_error: Option<RenderError> = None;

        for backend in backends {
            let result = backend
                .render(request)
                .and_then(|pixmap| write_png(&path, &pixmap))
                .and_then(|()| verify_written(&path));

            match result {
                Ok((width, height)) => {
                    log::info!(
                        "Generated {:?} ({}x{}, {})",
                        path,
                        width,
                        height,
                        backend.name()
                    );
                    return IconReport {
                        request: *request,
                        path,
                        outcome: IconOutcome::Generated {
                            backend: backend.name().to_string(),
                            width,
                            height,
                        },
                    };
                }
                Err(e) => {
                    log::warn!(
                        "Backend '{}' failed for {} icon: {}",
                        backend.name(),
                        request,
                        e
                    );
                    last_error = Some(e);
                }
            }
        }

        let error = last_error.map_or_else(
            || "No icon backend available".to_string(),
            |e| e.to_string(),
        );
        log::error!("Could not generate {} icon: {}", request, error);
        IconReport {
            request: *request,
            path,
            outcome: IconOutcome::Failed { error },
        }
    }
}

/// 读回刚写出的 PNG 头部；无法读取时删除该文件，交给下一个后端
fn verify_written(path: &Path) -> Result<(u32, u32), RenderError> {
    read_dimensions(path).map_err(|e| {
        if let Err(remove_err) = std::fs::remove_file(path) {
            log::warn!("Failed to remove unreadable icon {:?}: {}", path, remove_err);
        }
        RenderError::Verify {
            path: path.to_path_buf(),
            message: format!("{:#}", e),
        }
    })
}
