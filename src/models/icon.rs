use serde::Serialize;

/// maskable 图标的安全区放大倍数（光栅化尺寸 = 目标尺寸 × 1.2）
pub const MASKABLE_SCALE: f64 = 1.2;

/// 每次运行都会生成的图标（先标准，后 maskable）
pub const ICON_REQUESTS: [IconRequest; 4] = [
    IconRequest::standard(192),
    IconRequest::standard(512),
    IconRequest::maskable(192),
    IconRequest::maskable(512),
];

/// 单个图标请求
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IconRequest {
    /// 目标边长（像素）
    pub size: u32,
    /// 是否为 maskable 变体
    pub maskable: bool,
}

impl IconRequest {
    pub const fn standard(size: u32) -> Self {
        Self {
            size,
            maskable: false,
        }
    }

    pub const fn maskable(size: u32) -> Self {
        Self {
            size,
            maskable: true,
        }
    }

    /// 光栅化时使用的边长
    /// - 标准图标：与目标尺寸一致
    /// - maskable：floor(size × 1.2)，为安全区预留空间
    pub fn adjusted_size(&self) -> u32 {
        if self.maskable {
            (f64::from(self.size) * MASKABLE_SCALE).floor() as u32
        } else {
            self.size
        }
    }

    /// 输出文件名，例如 `icon-192.png` / `icon-512-maskable.png`
    pub fn file_name(&self) -> String {
        if self.maskable {
            format!("icon-{}-maskable.png", self.size)
        } else {
            format!("icon-{}.png", self.size)
        }
    }
}

impl std::fmt::Display for IconRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.size, self.size)?;
        if self.maskable {
            write!(f, " (maskable)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjusted_size() {
        assert_eq!(IconRequest::standard(192).adjusted_size(), 192);
        assert_eq!(IconRequest::standard(512).adjusted_size(), 512);
        assert_eq!(IconRequest::maskable(192).adjusted_size(), 230);
        assert_eq!(IconRequest::maskable(512).adjusted_size(), 614);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(IconRequest::standard(192).file_name(), "icon-192.png");
        assert_eq!(
            IconRequest::maskable(512).file_name(),
            "icon-512-maskable.png"
        );
    }

    #[test]
    fn test_request_order() {
        assert!(ICON_REQUESTS[..2].iter().all(|r| !r.maskable));
        assert!(ICON_REQUESTS[2..].iter().all(|r| r.maskable));
        assert_eq!(
            ICON_REQUESTS.iter().map(|r| r.size).collect::<Vec<_>>(),
            vec![192, 512, 192, 512]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(IconRequest::standard(192).to_string(), "192x192");
        assert_eq!(
            IconRequest::maskable(512).to_string(),
            "512x512 (maskable)"
        );
    }
}
