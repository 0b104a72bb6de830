use crate::draw::{draw_exit_band, draw_overlay, rgb_to_argb, status_title};
use base::Tensor;
use gesture::{FrameReport, RenderError, Renderer};
use minifb::{Key, Window, WindowOptions};
use std::time::{Duration, Instant};

const FAREWELL: Duration = Duration::from_secs(1);
// keeps the per-frame key poll at about 1 ms
const TARGET_FPS: usize = 1000;

pub struct MinifbRenderer {
    window: Window,
    width: usize,
    height: usize,
}

impl MinifbRenderer {
    pub fn new(width: usize, height: usize) -> Result<Self, RenderError> {
        let mut window = Window::new(
            "Hand Gesture Control - q to exit",
            width,
            height,
            WindowOptions::default(),
        )
        .map_err(|e| RenderError::Window(e.to_string()))?;
        window.set_target_fps(TARGET_FPS);
        Ok(Self {
            window,
            width,
            height,
        })
    }

    fn annotate(&self, frame: &Tensor<u8>, report: &FrameReport) -> Result<Vec<u8>, RenderError> {
        if frame.shape != [self.height, self.width, 3] {
            return Err(RenderError::Frame(format!(
                "expected [{}, {}, 3] frame, got {:?}",
                self.height, self.width, frame.shape
            )));
        }
        let mut rgb = frame.data.clone();
        draw_overlay(&mut rgb, self.width, self.height, report);
        Ok(rgb)
    }

    fn show(&mut self, argb: &[u32]) -> Result<(), RenderError> {
        self.window
            .update_with_buffer(argb, self.width, self.height)
            .map_err(|e| RenderError::Window(e.to_string()))
    }
}

impl Renderer for MinifbRenderer {
    fn present(&mut self, frame: &Tensor<u8>, report: &FrameReport) -> Result<bool, RenderError> {
        let rgb = self.annotate(frame, report)?;
        self.window.set_title(&status_title(&report.outcome, false));
        self.show(&rgb_to_argb(&rgb, self.width, self.height))?;
        Ok(!self.window.is_open() || self.window.is_key_down(Key::Q))
    }

    fn farewell(&mut self, frame: &Tensor<u8>, report: &FrameReport) -> Result<(), RenderError> {
        let mut rgb = self.annotate(frame, report)?;
        draw_exit_band(&mut rgb, self.width, self.height);
        let argb = rgb_to_argb(&rgb, self.width, self.height);
        self.window.set_title(&status_title(&report.outcome, true));

        // minifb only pumps window events on update
        let until = Instant::now() + FAREWELL;
        while self.window.is_open() && Instant::now() < until {
            self.show(&argb)?;
        }
        Ok(())
    }
}
