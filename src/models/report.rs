use serde::Serialize;
use std::path::PathBuf;

use super::IconRequest;

/// 单个图标的生成结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IconOutcome {
    Generated {
        /// 实际产出图片的后端（"svg" / "placeholder"）
        backend: String,
        width: u32,
        height: u32,
    },
    Failed {
        error: String,
    },
}

impl IconOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, IconOutcome::Generated { .. })
    }

    /// 生成成功时返回实际尺寸
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self {
            IconOutcome::Generated { width, height, .. } => Some((*width, *height)),
            IconOutcome::Failed { .. } => None,
        }
    }

    pub fn backend(&self) -> Option<&str> {
        match self {
            IconOutcome::Generated { backend, .. } => Some(backend.as_str()),
            IconOutcome::Failed { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IconReport {
    pub request: IconRequest,
    pub path: PathBuf,
    pub outcome: IconOutcome,
}

/// 一次运行的汇总，按请求顺序排列
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub reports: Vec<IconReport>,
}

impl RunSummary {
    pub fn push(&mut self, report: IconReport) {
        self.reports.push(report);
    }

    pub fn total(&self) -> usize {
        self.reports.len()
    }

    pub fn generated_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.outcome.is_generated())
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.total() - self.generated_count()
    }

    /// 通过首选后端以外的后端生成的数量
    pub fn fallback_count(&self, primary: &str) -> usize {
        self.reports
            .iter()
            .filter_map(|r| r.outcome.backend())
            .filter(|b| *b != primary)
            .count()
    }

    pub fn report_for(&self, request: &IconRequest) -> Option<&IconReport> {
        self.reports.iter().find(|r| &r.request == request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(request: IconRequest, outcome: IconOutcome) -> IconReport {
        IconReport {
            request,
            path: PathBuf::from(request.file_name()),
            outcome,
        }
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = RunSummary::default();
        summary.push(report(
            IconRequest::standard(192),
            IconOutcome::Generated {
                backend: "svg".into(),
                width: 192,
                height: 192,
            },
        ));
        summary.push(report(
            IconRequest::standard(512),
            IconOutcome::Generated {
                backend: "placeholder".into(),
                width: 512,
                height: 512,
            },
        ));
        summary.push(report(
            IconRequest::maskable(192),
            IconOutcome::Failed {
                error: "boom".into(),
            },
        ));

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.generated_count(), 2);
        assert_eq!(summary.failed_count(), 1);
        assert_eq!(summary.fallback_count("svg"), 1);
        assert_eq!(
            summary
                .report_for(&IconRequest::standard(512))
                .and_then(|r| r.outcome.dimensions()),
            Some((512, 512))
        );
        assert!(summary.report_for(&IconRequest::maskable(512)).is_none());
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = IconOutcome::Failed {
            error: "missing".into(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["error"], "missing");

        let outcome = IconOutcome::Generated {
            backend: "svg".into(),
            width: 230,
            height: 230,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "generated");
        assert_eq!(json["width"], 230);
    }
}
