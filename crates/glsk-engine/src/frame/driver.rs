use std::time::Duration;

use crate::context::Surface;
use crate::device::{ClearColor, Device, Viewport};
use crate::platform::Platform;
use crate::time::FrameClock;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    Closed,
}

/// Summary of a finished loop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameStats {
    pub frames: u64,
    pub last_viewport: Option<Viewport>,
    pub elapsed: Duration,
}

pub struct FrameLoop {
    clear_color: ClearColor,
    state: LoopState,
    clock: FrameClock,
    last_viewport: Option<Viewport>,
}

impl FrameLoop {
    pub fn new(clear_color: ClearColor) -> Self {
        Self {
            clear_color,
            state: LoopState::Running,
            clock: FrameClock::new(),
            last_viewport: None,
        }
    }

    /// Runs one iteration. Once closed, further calls do nothing.
    pub fn step<P: Platform>(&mut self, surface: &mut Surface<P>, device: &P::Device) -> LoopState {
        if self.state == LoopState::Closed {
            return LoopState::Closed;
        }

        surface.poll_events();
        if surface.close_requested() {
            log::debug!("close requested after {} frames", self.clock.frames());
            self.state = LoopState::Closed;
            return self.state;
        }

        // Size is re-read every frame so resizes land without a callback.
        let viewport = surface.viewport();
        if self.last_viewport != Some(viewport) {
            log::trace!("viewport {}x{}", viewport.width, viewport.height);
        }
        device.set_viewport(viewport);
        device.clear(self.clear_color);
        self.last_viewport = Some(viewport);

        if let Err(e) = surface.present() {
            log::error!("present failed, closing: {e}");
            self.state = LoopState::Closed;
            return self.state;
        }

        let ft = self.clock.tick();
        log::trace!("frame {} presented in {:.2} ms", ft.frame_index, ft.dt * 1000.0);
        self.state
    }

    /// Steps until closed.
    pub fn run<P: Platform>(&mut self, surface: &mut Surface<P>, device: &P::Device) -> FrameStats {
        while self.step(surface, device) == LoopState::Running {}
        self.stats()
    }

    pub fn stats(&self) -> FrameStats {
        FrameStats {
            frames: self.clock.frames(),
            last_viewport: self.last_viewport,
            elapsed: self.clock.elapsed(),
        }
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(ClearColor::default())
    }
}
