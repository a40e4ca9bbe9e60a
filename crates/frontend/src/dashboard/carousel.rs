//! Idle-triggered auto-scroll for the horizontal recent-uploads scroller.
//!
//! [`AutoScroll`] is the timer state machine; [`AutoScrollDriver`] feeds it
//! frame ticks and interaction events from the DOM.

use crate::config::UiConfig;
use crate::shared::debounce::Debouncer;
use gloo_timers::callback::Interval;
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollPhase {
    /// Waiting for the first idle period after mount or a reset
    IdleWaiting { since: f64 },
    AutoScrolling,
    /// Reached the end, holding before snapping back
    EndPause { since: f64 },
    /// Interaction seen at `since`; resumes after the idle delay
    UserActive { since: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl ScrollMetrics {
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoScroll {
    phase: ScrollPhase,
    idle_delay_ms: f64,
    px_per_frame: f64,
    end_pause_ms: f64,
}

impl AutoScroll {
    pub fn new(config: &UiConfig, now: f64) -> Self {
        Self {
            phase: ScrollPhase::IdleWaiting { since: now },
            idle_delay_ms: config.idle_delay_ms,
            px_per_frame: config.scroll_px_per_frame,
            end_pause_ms: config.end_pause_ms,
        }
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    /// Any pointer, wheel, touch or user scroll event. Halts advancement
    /// immediately and restarts the idle timer.
    pub fn interact(&mut self, now: f64) {
        self.phase = ScrollPhase::UserActive { since: now };
    }

    /// Restart the idle wait without counting as user activity (content changed)
    pub fn reset(&mut self, now: f64) {
        self.phase = ScrollPhase::IdleWaiting { since: now };
    }

    /// One frame. Returns the position to scroll to, if any.
    pub fn tick(&mut self, now: f64, metrics: ScrollMetrics) -> Option<f64> {
        match self.phase {
            ScrollPhase::IdleWaiting { since } | ScrollPhase::UserActive { since } => {
                if now - since < self.idle_delay_ms {
                    return None;
                }
                self.phase = ScrollPhase::AutoScrolling;
                self.advance(now, metrics)
            }
            ScrollPhase::AutoScrolling => self.advance(now, metrics),
            ScrollPhase::EndPause { since } => {
                if now - since < self.end_pause_ms {
                    return None;
                }
                self.phase = ScrollPhase::AutoScrolling;
                Some(0.0)
            }
        }
    }

    fn advance(&mut self, now: f64, metrics: ScrollMetrics) -> Option<f64> {
        let max = metrics.max_scroll();
        if max <= 0.0 {
            return None;
        }
        if metrics.scroll_left >= max {
            self.phase = ScrollPhase::EndPause { since: now };
            return None;
        }
        Some((metrics.scroll_left + self.px_per_frame).min(max))
    }
}

/// Wires an [`AutoScroll`] to a scroller element for the lifetime of the
/// owning component. Frame ticks and the resize listener are torn down on
/// cleanup.
#[derive(Clone, Copy)]
pub struct AutoScrollDriver {
    machine: StoredValue<AutoScroll>,
    /// Last position written by the driver; scroll events at this position are ours
    last_written: StoredValue<Option<f64>>,
}

impl AutoScrollDriver {
    pub fn new(config: UiConfig, scroller: NodeRef<Div>) -> Self {
        let driver = Self {
            machine: StoredValue::new(AutoScroll::new(&config, js_sys::Date::now())),
            last_written: StoredValue::new(None),
        };

        let ticker = Interval::new(config.frame_interval_ms, move || driver.frame(scroller));
        let ticker = StoredValue::new_local(Some(ticker));

        let resize_debounce = Debouncer::new(150);
        let resize = window_event_listener(ev::resize, move |_| {
            resize_debounce.call(move || driver.reset());
        });

        on_cleanup(move || {
            ticker.update_value(|t| {
                t.take();
            });
            resize.remove();
        });

        driver
    }

    fn frame(&self, scroller: NodeRef<Div>) {
        let Some(el) = scroller.get_untracked() else {
            return;
        };
        let metrics = ScrollMetrics {
            scroll_left: el.scroll_left() as f64,
            scroll_width: el.scroll_width() as f64,
            client_width: el.client_width() as f64,
        };
        let now = js_sys::Date::now();
        let mut target = None;
        self.machine.update_value(|m| target = m.tick(now, metrics));
        if let Some(x) = target {
            let x = x.round();
            self.last_written.set_value(Some(x));
            el.set_scroll_left(x as i32);
        }
    }

    pub fn interact(&self) {
        let now = js_sys::Date::now();
        self.machine.update_value(|m| m.interact(now));
    }

    /// Scroll events fire for our own writes too; only foreign positions count.
    pub fn on_scroll(&self, scroll_left: i32) {
        let ours = self
            .last_written
            .get_value()
            .map(|x| (x - scroll_left as f64).abs() < 1.0)
            .unwrap_or(false);
        if !ours {
            self.interact();
        }
    }

    pub fn reset(&self) {
        let now = js_sys::Date::now();
        self.machine.update_value(|m| m.reset(now));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> UiConfig {
        UiConfig {
            idle_delay_ms: 3000.0,
            scroll_px_per_frame: 2.0,
            end_pause_ms: 1500.0,
            ..UiConfig::default()
        }
    }

    fn metrics(scroll_left: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_left,
            scroll_width: 1010.0,
            client_width: 1000.0,
        }
    }

    #[test]
    fn test_waits_for_idle_delay() {
        let mut scroll = AutoScroll::new(&config(), 0.0);
        assert_eq!(scroll.tick(16.0, metrics(0.0)), None);
        assert_eq!(scroll.tick(2999.0, metrics(0.0)), None);
        assert_eq!(scroll.tick(3000.0, metrics(0.0)), Some(2.0));
        assert_eq!(scroll.phase(), ScrollPhase::AutoScrolling);
    }

    #[test]
    fn test_strictly_increases_then_snaps_back() {
        let mut scroll = AutoScroll::new(&config(), 0.0);
        let mut position = 0.0;
        let mut now = 3000.0;
        let max = metrics(0.0).max_scroll();

        while position < max {
            let next = scroll.tick(now, metrics(position)).expect("advancing");
            assert!(next > position);
            position = next;
            now += 16.0;
        }
        assert_eq!(position, max);

        // reaching the end starts the pause
        assert_eq!(scroll.tick(now, metrics(position)), None);
        assert!(matches!(scroll.phase(), ScrollPhase::EndPause { .. }));
        assert_eq!(scroll.tick(now + 1000.0, metrics(position)), None);
        assert_eq!(scroll.tick(now + 1500.0, metrics(position)), Some(0.0));
        assert_eq!(scroll.tick(now + 1516.0, metrics(0.0)), Some(2.0));
    }

    #[test]
    fn test_interaction_halts_and_rearms_idle_timer() {
        let mut scroll = AutoScroll::new(&config(), 0.0);
        assert_eq!(scroll.tick(3000.0, metrics(0.0)), Some(2.0));

        scroll.interact(3010.0);
        assert_eq!(scroll.tick(3016.0, metrics(2.0)), None);
        assert_eq!(scroll.tick(6009.0, metrics(2.0)), None);

        // a second interaction pushes the deadline again
        scroll.interact(5000.0);
        assert_eq!(scroll.tick(7999.0, metrics(2.0)), None);
        assert_eq!(scroll.tick(8000.0, metrics(2.0)), Some(4.0));
    }

    #[test]
    fn test_nothing_to_scroll() {
        let mut scroll = AutoScroll::new(&config(), 0.0);
        let narrow = ScrollMetrics {
            scroll_left: 0.0,
            scroll_width: 800.0,
            client_width: 1000.0,
        };
        assert_eq!(scroll.tick(5000.0, narrow), None);
        assert_eq!(scroll.phase(), ScrollPhase::AutoScrolling);
    }

    #[test]
    fn test_reset_restarts_wait() {
        let mut scroll = AutoScroll::new(&config(), 0.0);
        scroll.tick(3000.0, metrics(0.0));
        scroll.reset(3100.0);
        assert_eq!(scroll.tick(3200.0, metrics(2.0)), None);
        assert_eq!(scroll.phase(), ScrollPhase::IdleWaiting { since: 3100.0 });
    }
}
