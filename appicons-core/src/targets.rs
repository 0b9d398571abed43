use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

const IOS_APPICONSET: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";
const MACOS_APPICONSET: &str = "macos/Runner/Assets.xcassets/AppIcon.appiconset";

const DEFAULT_TARGETS: &[(&str, &str, u32)] = &[
    ("web/icons", "Icon-192.png", 192),
    ("web/icons", "Icon-512.png", 512),
    ("web/icons", "Icon-maskable-192.png", 192),
    ("web/icons", "Icon-maskable-512.png", 512),
    ("web", "favicon.png", 64),
    ("android/app/src/main/res/mipmap-mdpi", "ic_launcher.png", 48),
    ("android/app/src/main/res/mipmap-hdpi", "ic_launcher.png", 72),
    ("android/app/src/main/res/mipmap-xhdpi", "ic_launcher.png", 96),
    ("android/app/src/main/res/mipmap-xxhdpi", "ic_launcher.png", 144),
    ("android/app/src/main/res/mipmap-xxxhdpi", "ic_launcher.png", 192),
    (IOS_APPICONSET, "Icon-App-20x20@1x.png", 20),
    (IOS_APPICONSET, "Icon-App-20x20@2x.png", 40),
    (IOS_APPICONSET, "Icon-App-20x20@3x.png", 60),
    (IOS_APPICONSET, "Icon-App-29x29@1x.png", 29),
    (IOS_APPICONSET, "Icon-App-29x29@2x.png", 58),
    (IOS_APPICONSET, "Icon-App-29x29@3x.png", 87),
    (IOS_APPICONSET, "Icon-App-40x40@1x.png", 40),
    (IOS_APPICONSET, "Icon-App-40x40@2x.png", 80),
    (IOS_APPICONSET, "Icon-App-40x40@3x.png", 120),
    (IOS_APPICONSET, "Icon-App-60x60@2x.png", 120),
    (IOS_APPICONSET, "Icon-App-60x60@3x.png", 180),
    (IOS_APPICONSET, "Icon-App-76x76@1x.png", 76),
    (IOS_APPICONSET, "Icon-App-76x76@2x.png", 152),
    (IOS_APPICONSET, "Icon-App-83.5x83.5@2x.png", 167),
    (IOS_APPICONSET, "Icon-App-1024x1024@1x.png", 1024),
    (MACOS_APPICONSET, "app_icon_16.png", 16),
    (MACOS_APPICONSET, "app_icon_32.png", 32),
    (MACOS_APPICONSET, "app_icon_64.png", 64),
    (MACOS_APPICONSET, "app_icon_128.png", 128),
    (MACOS_APPICONSET, "app_icon_256.png", 256),
    (MACOS_APPICONSET, "app_icon_512.png", 512),
    (MACOS_APPICONSET, "app_icon_1024.png", 1024),
];

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord)]
pub enum Platform {
    Android,
    Ios,
    Macos,
    Web,
    Other,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown platform '{0}', expected one of android, ios, macos, web, other")]
pub struct UnknownPlatform(String);

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Macos => "macos",
            Platform::Web => "web",
            Platform::Other => "other",
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            "macos" => Ok(Platform::Macos),
            "web" => Ok(Platform::Web),
            "other" => Ok(Platform::Other),
            _ => Err(UnknownPlatform(s.to_owned())),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single PNG to render: a project-relative output path and the edge length
/// of the square image in pixels.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
pub struct ExportTarget {
    pub path: PathBuf,
    pub size: u32,
}

impl ExportTarget {
    pub fn new(path: impl Into<PathBuf>, size: u32) -> Self {
        ExportTarget {
            path: path.into(),
            size,
        }
    }

    pub fn platform(&self) -> Platform {
        match self.path.components().next() {
            Some(Component::Normal(first)) => first
                .to_str()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Platform::Other),
            _ => Platform::Other,
        }
    }

    pub fn resolve(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }
}

impl std::fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}x{})",
            self.path.display(),
            self.size,
            self.size
        )
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Targets(Vec<ExportTarget>);

impl Default for Targets {
    fn default() -> Self {
        Targets(
            DEFAULT_TARGETS
                .iter()
                .map(|&(dir, name, size)| ExportTarget::new(Path::new(dir).join(name), size))
                .collect(),
        )
    }
}

impl From<Vec<ExportTarget>> for Targets {
    fn from(targets: Vec<ExportTarget>) -> Self {
        Targets(targets)
    }
}

impl Targets {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExportTarget> {
        self.0.iter()
    }

    /// Keeps only targets of the given platforms, in table order. An empty
    /// filter keeps everything.
    pub fn for_platforms(&self, platforms: &[Platform]) -> Targets {
        if platforms.is_empty() {
            return self.clone();
        }
        Targets(
            self.0
                .iter()
                .filter(|t| platforms.contains(&t.platform()))
                .cloned()
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Targets {
    type Item = &'a ExportTarget;
    type IntoIter = std::slice::Iter<'a, ExportTarget>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
