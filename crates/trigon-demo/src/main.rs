//! Windowed triangle demo.
//!
//! Opens one 640x480 window, draws a static colored triangle every frame,
//! logs the frame rate once per second, and reacts to three keys:
//! F toggles fullscreen, C toggles mouse capture, Q quits.

use anyhow::Result;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;

use trigon_engine::core::{App, AppControl, FrameCtx, WindowCtx};
use trigon_engine::device::GpuInit;
use trigon_engine::input::Key;
use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::render::{Color, TriangleRenderer, Vertex, Viewport};
use trigon_engine::time::FpsCounter;
use trigon_engine::window::{Runtime, RuntimeConfig};

/// The one and only primitive: positions in pixels from the viewport center
/// (+Y up), one primary color per corner.
const TRIANGLE: [Vertex; 3] = [
    Vertex {
        position: [250.0, -250.0],
        color: [1.0, 0.0, 0.0, 1.0],
    },
    Vertex {
        position: [-250.0, -250.0],
        color: [0.0, 1.0, 0.0, 1.0],
    },
    Vertex {
        position: [0.0, 250.0],
        color: [0.0, 0.0, 1.0, 1.0],
    },
];

/// Fixed coordinate basis for the draw; also the initial window size.
/// Deliberately not updated on resize.
const VIEWPORT: Viewport = Viewport::new(640.0, 480.0);

const CLEAR: Color = Color::BLACK;

struct DemoApp {
    renderer: TriangleRenderer,
    fps: FpsCounter,
    mouse_captured: bool,
    /// Set when a fullscreen toggle is in flight; cleared on the resulting
    /// resize. Further F presses are ignored meanwhile.
    fullscreen_pending: bool,
}

impl DemoApp {
    fn new() -> Self {
        Self {
            renderer: TriangleRenderer::new(),
            fps: FpsCounter::new(),
            mouse_captured: false,
            fullscreen_pending: false,
        }
    }

    fn toggle_fullscreen(&mut self, window: &WindowCtx<'_>) {
        if self.fullscreen_pending {
            return;
        }

        let fullscreen = !window.is_fullscreen();
        log::info!(
            "switching to {}",
            if fullscreen { "fullscreen" } else { "windowed" }
        );
        window.set_fullscreen(fullscreen);
        self.fullscreen_pending = true;
    }

    fn toggle_mouse_capture(&mut self, window: &WindowCtx<'_>) {
        let capture = !self.mouse_captured;
        match window.set_mouse_capture(capture) {
            Ok(()) => {
                log::info!("{} mouse", if capture { "captured" } else { "released" });
                self.mouse_captured = capture;
            }
            Err(e) => {
                log::error!("mouse capture toggle failed: {e}");
            }
        }
    }
}

impl App for DemoApp {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        if let WindowEvent::Resized(size) = event {
            self.fullscreen_pending = false;
            log::info!("window resized => {}x{}", size.width, size.height);
        }

        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if let Some(fps) = self.fps.tick(ctx.time.now) {
            log::info!("{fps:.1} FPS");
        }

        if ctx.input_frame.keys_pressed.contains(&Key::Q) {
            log::info!("quit requested");
            return AppControl::Exit;
        }
        if ctx.input_frame.keys_pressed.contains(&Key::F) {
            self.toggle_fullscreen(&ctx.window);
        }
        if ctx.input_frame.keys_pressed.contains(&Key::C) {
            self.toggle_mouse_capture(&ctx.window);
        }

        let renderer = &mut self.renderer;
        ctx.render(|rctx, target| {
            renderer.render(rctx, target, &TRIANGLE, VIEWPORT, CLEAR);
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    log::info!(
        "{} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    log::info!("controls: F toggles fullscreen, C toggles mouse capture, Q quits");

    let config = RuntimeConfig {
        title: "trigon".to_string(),
        initial_size: LogicalSize::new(f64::from(VIEWPORT.width), f64::from(VIEWPORT.height)),
    };

    Runtime::run(config, GpuInit::default(), DemoApp::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_vertices_are_exactly_the_hardcoded_ones() {
        assert_eq!(TRIANGLE.len(), 3);

        assert_eq!(TRIANGLE[0].position, [250.0, -250.0]);
        assert_eq!(TRIANGLE[0].color, [1.0, 0.0, 0.0, 1.0]);

        assert_eq!(TRIANGLE[1].position, [-250.0, -250.0]);
        assert_eq!(TRIANGLE[1].color, [0.0, 1.0, 0.0, 1.0]);

        assert_eq!(TRIANGLE[2].position, [0.0, 250.0]);
        assert_eq!(TRIANGLE[2].color, [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn viewport_is_the_fixed_basis() {
        assert_eq!(VIEWPORT, Viewport::new(640.0, 480.0));
        assert!(VIEWPORT.is_valid());
    }
}
