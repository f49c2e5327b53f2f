use image::Rgba;
use log::debug;

use crate::surface::Surface;

const CHANNELS: usize = 4;

/// Replace the 4-connected region of pixels exactly matching the color at
/// `(x, y)` with `color`, forced to full opacity.
///
/// Uses an explicit stack so large regions cannot overflow the call stack.
/// The work happens on a copy of the pixel buffer which is written back in a
/// single pass. Returns the number of pixels changed.
pub fn flood_fill(surface: &mut Surface, x: i64, y: i64, color: Rgba<u8>) -> usize {
    if !surface.contains(x, y) {
        return 0;
    }

    let fill = Rgba([color[0], color[1], color[2], 255]);
    let width = i64::from(surface.width());
    let height = i64::from(surface.height());
    let index = |x: i64, y: i64| ((y * width + x) as usize) * CHANNELS;

    let mut pixels = surface.as_raw().to_vec();
    let start = index(x, y);
    let target: [u8; 4] = [
        pixels[start],
        pixels[start + 1],
        pixels[start + 2],
        pixels[start + 3],
    ];
    if target == fill.0 {
        return 0;
    }

    let mut filled = 0;
    let mut stack = vec![(x, y)];
    while let Some((x, y)) = stack.pop() {
        if x < 0 || x >= width || y < 0 || y >= height {
            continue;
        }
        let i = index(x, y);
        if pixels[i..i + CHANNELS] != target {
            continue;
        }

        pixels[i..i + CHANNELS].copy_from_slice(&fill.0);
        filled += 1;

        stack.extend([(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]);
    }

    surface.write_buffer(pixels);
    debug!("Flood filled {filled} pixels from ({x}, {y})");
    filled
}
