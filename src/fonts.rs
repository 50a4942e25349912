use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

use anyhow::{Context, anyhow};
use log::{info, warn};
use plotters::style::{FontStyle, register_font};

/// Family name every chart text style asks for.
pub const FAMILY: &str = "sans-serif";

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static REGISTERED: OnceLock<bool> = OnceLock::new();

/// Registers a font for chart text once per process. Returns whether text can
/// be drawn; charts fall back to bars only when it can't.
pub fn ensure_chart_font(preferred: Option<&Path>) -> bool {
    *REGISTERED.get_or_init(|| {
        let Some(path) = locate_font(preferred) else {
            warn!("no usable font found, charts will be drawn without text");
            return false;
        };
        match load_font(&path) {
            Ok(()) => {
                info!("chart font: {}", path.display());
                true
            }
            Err(e) => {
                warn!("{e:#}, charts will be drawn without text");
                false
            }
        }
    })
}

fn locate_font(preferred: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = preferred {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        warn!("configured font {} does not exist", path.display());
    }
    SYSTEM_FONTS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

fn load_font(path: &Path) -> anyhow::Result<()> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read font {}", path.display()))?;
    // plotters keeps registered fonts for the life of the process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font(FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| {
            anyhow!("failed to register font {}: not a valid font file", path.display())
        })
}
