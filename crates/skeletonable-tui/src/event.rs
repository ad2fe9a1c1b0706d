use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    /// Poll interval while something on screen animates
    frame_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self::with_animation_fps(tick_rate_ms, 30)
    }

    pub fn with_animation_fps(tick_rate_ms: u64, animation_fps: u32) -> Self {
        let fps = animation_fps.max(1) as u64;
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            frame_rate: Duration::from_millis(1000 / fps),
        }
    }

    pub fn poll_interval(&self, animating: bool) -> Duration {
        if animating {
            self.frame_rate.min(self.tick_rate)
        } else {
            self.tick_rate
        }
    }

    /// Poll for the next event
    pub fn next(&self, animating: bool) -> Result<Option<AppEvent>> {
        if event::poll(self.poll_interval(animating))? {
            match event::read()? {
                Event::Key(key) => {
                    // Release events arrive on some platforms
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Periodic redraw, also drives skeleton animation
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_interval_speeds_up_while_animating() {
        let handler = EventHandler::with_animation_fps(100, 30);
        assert_eq!(handler.poll_interval(false), Duration::from_millis(100));
        assert_eq!(handler.poll_interval(true), Duration::from_millis(33));
    }

    #[test]
    fn test_zero_fps_does_not_divide_by_zero() {
        let handler = EventHandler::with_animation_fps(100, 0);
        assert_eq!(handler.poll_interval(true), Duration::from_millis(100));
    }
}
