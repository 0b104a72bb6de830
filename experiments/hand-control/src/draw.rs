use gesture::{FrameReport, GestureOutcome, PinchReading, brightness_percentage};
use inference::HandObservation;
use inference::hand::HAND_CONNECTIONS;

pub const VOLUME_COLOR: [u8; 3] = [255, 0, 0];
pub const BRIGHTNESS_COLOR: [u8; 3] = [255, 255, 0];
const TIP_COLOR: [u8; 3] = [0, 0, 255];
const PINCH_COLOR: [u8; 3] = [0, 255, 0];
const BONE_COLOR: [u8; 3] = [255, 255, 255];
const JOINT_COLOR: [u8; 3] = [255, 0, 0];

pub const BAR_WIDTH: i32 = 20;
pub const BAR_HEIGHT: i32 = 200;
pub const BAR_TOP: i32 = 150;
pub const VOLUME_BAR_X: i32 = 50;
/// Brightness bar sits this far left of the right edge
pub const BRIGHTNESS_BAR_INSET: i32 = 70;
pub const EXIT_BAND_HALF_HEIGHT: i32 = 20;
const EXIT_COLOR: [u8; 3] = [255, 0, 0];

/// Draw a line using Bresenham's algorithm with clipping
pub fn draw_line(
    buf: &mut [u8],
    width: usize,
    height: usize,
    mut x0: i32,
    mut y0: i32,
    mut x1: i32,
    mut y1: i32,
    color: [u8; 3],
) {
    // Cohen-Sutherland line clipping to bounds
    loop {
        let outcode0 = compute_outcode(x0, y0, width as i32, height as i32);
        let outcode1 = compute_outcode(x1, y1, width as i32, height as i32);

        if (outcode0 | outcode1) == 0 {
            break;
        } else if (outcode0 & outcode1) != 0 {
            return;
        } else {
            let outcode = if outcode0 != 0 { outcode0 } else { outcode1 };
            let (x, y) = clip_point(x0, y0, x1, y1, outcode, width as i32, height as i32);

            if outcode == outcode0 {
                x0 = x;
                y0 = y;
            } else {
                x1 = x;
                y1 = y;
            }
        }
    }

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        set_pixel(buf, width, x0 as usize, y0 as usize, color);

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Line of the given thickness, drawn as parallel one-pixel lines
pub fn draw_thick_line(
    buf: &mut [u8],
    width: usize,
    height: usize,
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
    thickness: i32,
    color: [u8; 3],
) {
    let half = thickness / 2;
    // offset across the dominant direction
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    for offset in -half..=half {
        let (ox, oy) = if steep { (offset, 0) } else { (0, offset) };
        draw_line(buf, width, height, x0 + ox, y0 + oy, x1 + ox, y1 + oy, color);
    }
}

/// Draw a filled circle with clipping
pub fn draw_filled_circle(
    buf: &mut [u8],
    width: usize,
    height: usize,
    cx: i32,
    cy: i32,
    radius: i32,
    color: [u8; 3],
) {
    let r2 = radius * radius;

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                let x = cx + dx;
                let y = cy + dy;

                if x >= 0 && x < width as i32 && y >= 0 && y < height as i32 {
                    set_pixel(buf, width, x as usize, y as usize, color);
                }
            }
        }
    }
}

/// Fill the half-open rectangle [x0, x1) x [y0, y1), clipped
pub fn fill_rect(
    buf: &mut [u8],
    width: usize,
    height: usize,
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
    color: [u8; 3],
) {
    let x0 = x0.clamp(0, width as i32);
    let x1 = x1.clamp(0, width as i32);
    let y0 = y0.clamp(0, height as i32);
    let y1 = y1.clamp(0, height as i32);
    for y in y0..y1 {
        for x in x0..x1 {
            set_pixel(buf, width, x as usize, y as usize, color);
        }
    }
}

/// Vertical bar at (x, BAR_TOP), filled from the bottom in proportion to `level`
pub fn draw_level_bar(
    buf: &mut [u8],
    width: usize,
    height: usize,
    x: i32,
    level: f32,
    color: [u8; 3],
) {
    let level = level.clamp(0.0, 1.0);
    let bottom = BAR_TOP + BAR_HEIGHT;
    let fill_top = BAR_TOP + ((1.0 - level) * BAR_HEIGHT as f32) as i32;
    fill_rect(buf, width, height, (x, fill_top), (x + BAR_WIDTH, bottom), color);

    // 2 px outline
    fill_rect(buf, width, height, (x, BAR_TOP), (x + BAR_WIDTH, BAR_TOP + 2), color);
    fill_rect(buf, width, height, (x, bottom - 2), (x + BAR_WIDTH, bottom), color);
    fill_rect(buf, width, height, (x, BAR_TOP), (x + 2, bottom), color);
    fill_rect(buf, width, height, (x + BAR_WIDTH - 2, BAR_TOP), (x + BAR_WIDTH, bottom), color);
}

/// Draw the 21-landmark hand skeleton
pub fn draw_hand(buf: &mut [u8], width: usize, height: usize, hand: &HandObservation) {
    let to_pixel = |index: usize| {
        let point = hand.landmarks[index];
        (
            (point.x * width as f32) as i32,
            (point.y * height as f32) as i32,
        )
    };

    for (a, b) in &HAND_CONNECTIONS {
        let (x0, y0) = to_pixel(usize::from(*a));
        let (x1, y1) = to_pixel(usize::from(*b));
        draw_thick_line(buf, width, height, (x0, y0), (x1, y1), 2, BONE_COLOR);
    }

    for index in 0..hand.landmarks.len() {
        let (x, y) = to_pixel(index);
        draw_filled_circle(buf, width, height, x, y, 3, JOINT_COLOR);
    }
}

/// Mark thumb and index tips and join them
pub fn draw_pinch(buf: &mut [u8], width: usize, height: usize, reading: &PinchReading) {
    let thumb = (reading.thumb.x as i32, reading.thumb.y as i32);
    let index = (reading.index.x as i32, reading.index.y as i32);
    draw_filled_circle(buf, width, height, thumb.0, thumb.1, 10, TIP_COLOR);
    draw_filled_circle(buf, width, height, index.0, index.1, 10, TIP_COLOR);
    draw_thick_line(buf, width, height, thumb, index, 3, PINCH_COLOR);
}

/// Skeletons, pinches and level bars for one frame
pub fn draw_overlay(buf: &mut [u8], width: usize, height: usize, report: &FrameReport) {
    for hand in &report.hands {
        draw_hand(buf, width, height, hand);
    }
    for reading in &report.outcome.readings {
        draw_pinch(buf, width, height, reading);
    }
    if let Some(level) = report.outcome.volume {
        draw_level_bar(buf, width, height, VOLUME_BAR_X, level, VOLUME_COLOR);
    }
    if let Some(percentage) = report.outcome.brightness {
        let x = width as i32 - BRIGHTNESS_BAR_INSET;
        draw_level_bar(buf, width, height, x, percentage as f32 / 100.0, BRIGHTNESS_COLOR);
    }
}

/// Red band across the middle of the frame, shown while exiting
pub fn draw_exit_band(buf: &mut [u8], width: usize, height: usize) {
    let (w, h) = (width as i32, height as i32);
    fill_rect(buf, width, height, (0, h / 2 - EXIT_BAND_HALF_HEIGHT), (w, h / 2 + EXIT_BAND_HALF_HEIGHT), EXIT_COLOR);
}

/// Window title with the current levels
pub fn status_title(outcome: &GestureOutcome, exiting: bool) -> String {
    let mut title = String::from("Hand Gesture Control");
    if let Some(level) = outcome.volume {
        title.push_str(&format!(" | Volume: {}%", brightness_percentage(level)));
    }
    if let Some(percentage) = outcome.brightness {
        title.push_str(&format!(" | Brightness: {}%", percentage));
    }
    if exiting {
        title.push_str(" | Exiting...");
    }
    title
}

/// Convert HWC RGB buffer to packed ARGB u32 for minifb
pub fn rgb_to_argb(buf: &[u8], width: usize, height: usize) -> Vec<u32> {
    let mut argb = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let idx = (y * width + x) * 3;
            let r = buf[idx] as u32;
            let g = buf[idx + 1] as u32;
            let b = buf[idx + 2] as u32;

            // Pack as 0x00RRGGBB
            argb.push((r << 16) | (g << 8) | b);
        }
    }

    argb
}

// Helper functions

fn set_pixel(buf: &mut [u8], width: usize, x: usize, y: usize, color: [u8; 3]) {
    let idx = (y * width + x) * 3;
    buf[idx] = color[0];
    buf[idx + 1] = color[1];
    buf[idx + 2] = color[2];
}

// Cohen-Sutherland clipping helpers
const INSIDE: u8 = 0; // 0000
const LEFT: u8 = 1; // 0001
const RIGHT: u8 = 2; // 0010
const BOTTOM: u8 = 4; // 0100
const TOP: u8 = 8; // 1000

fn compute_outcode(x: i32, y: i32, width: i32, height: i32) -> u8 {
    let mut code = INSIDE;
    if x < 0 {
        code |= LEFT;
    } else if x >= width {
        code |= RIGHT;
    }
    if y < 0 {
        code |= TOP;
    } else if y >= height {
        code |= BOTTOM;
    }
    code
}

fn clip_point(
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    outcode: u8,
    width: i32,
    height: i32,
) -> (i32, i32) {
    let dx = x1 - x0;
    let dy = y1 - y0;

    if outcode & TOP != 0 {
        let x = x0 + dx * (0 - y0) / dy;
        (x, 0)
    } else if outcode & BOTTOM != 0 {
        let x = x0 + dx * (height - 1 - y0) / dy;
        (x, height - 1)
    } else if outcode & LEFT != 0 {
        let y = y0 + dy * (0 - x0) / dx;
        (0, y)
    } else {
        let y = y0 + dy * (width - 1 - x0) / dx;
        (width - 1, y)
    }
}
