use crate::core::data::pixel_buffer::PixelBuffer;
use crate::renderer::ports::window_host::{HostError, HostEvent, WindowHost, WindowSystem};
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

const TARGET_FPS: usize = 60;

/// Opens one minifb window per renderer thread.
///
/// minifb windows are created and polled entirely on the calling thread,
/// which is exactly the ownership the renderer loops need.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinifbWindowSystem;

impl WindowSystem for MinifbWindowSystem {
    type Host = MinifbHost;

    fn open(&self, caption: &str, width: u32, height: u32) -> Result<MinifbHost, HostError> {
        let mut window = Window::new(
            caption,
            width as usize,
            height as usize,
            WindowOptions {
                resize: true,
                ..WindowOptions::default()
            },
        )
        .map_err(|err| HostError::OpenFailed {
            reason: err.to_string(),
        })?;

        window.set_target_fps(TARGET_FPS);

        Ok(MinifbHost {
            size: window.get_size(),
            window,
            close_sent: false,
            mouse_down: false,
        })
    }
}

/// One minifb window, with enough cached state to turn minifb's polled
/// snapshot into edge-triggered events.
pub struct MinifbHost {
    window: Window,
    size: (usize, usize),
    close_sent: bool,
    mouse_down: bool,
}

impl WindowHost for MinifbHost {
    fn drain_events(&mut self) -> Vec<HostEvent> {
        let mut events = Vec::new();

        if !self.close_sent && (!self.window.is_open() || self.window.is_key_down(Key::Escape)) {
            self.close_sent = true;
            events.push(HostEvent::CloseRequested);
        }

        let mouse_down = self.window.get_mouse_down(MouseButton::Left);
        if mouse_down != self.mouse_down {
            self.mouse_down = mouse_down;
            events.push(if mouse_down {
                HostEvent::MouseDown
            } else {
                HostEvent::MouseUp
            });
        }

        let size = self.window.get_size();
        if size != self.size {
            self.size = size;
            events.push(HostEvent::Resized {
                width: size.0 as u32,
                height: size.1 as u32,
            });
        }

        events
    }

    fn mouse_position(&self) -> Option<(f64, f64)> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| (f64::from(x), f64::from(y)))
    }

    fn present(&mut self, frame: &PixelBuffer) -> Result<(), HostError> {
        // update_with_buffer also polls input and enforces the frame-rate cap
        self.window
            .update_with_buffer(
                frame.pixels(),
                frame.width() as usize,
                frame.height() as usize,
            )
            .map_err(|err| HostError::PresentFailed {
                reason: err.to_string(),
            })
    }

    fn set_caption(&mut self, caption: &str) {
        self.window.set_title(caption);
    }
}
