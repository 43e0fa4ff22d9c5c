//! Utility functions

use std::path::PathBuf;

// Double quotation-mark logo, emerald + lime — used for the window icon
// and the header mark.
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><path fill="#34d399" d="M14 46c-4.6 0-8.6-3.9-8.6-9.6 0-9.6 6.4-17.1 16-20.3l2.1 4.3c-6.4 2.6-9.6 6.4-10.2 10.2 1-.4 2.1-.6 3.8-.6 4.7 0 8.6 3.6 8.6 8.3S19.1 46 14 46z"/><path fill="#a3e635" d="M40 46c-4.6 0-8.6-3.9-8.6-9.6 0-9.6 6.4-17.1 16-20.3l2.1 4.3c-6.4 2.6-9.6 6.4-10.2 10.2 1-.4 2.1-.6 3.8-.6 4.7 0 8.6 3.6 8.6 8.3S45.1 46 40 46z"/></svg>"##;

/// Rasterize the logo SVG at the given width, preserving aspect ratio.
pub fn rasterize_logo(width: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).unwrap();
    let svg_size = tree.size();
    let scale = width as f32 / svg_size.width();
    let height = (svg_size.height() * scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), width, height)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// App data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("InspireMe")
}
