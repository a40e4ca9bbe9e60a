//! Time-driven alert queue. Pure: the caller supplies `now` in milliseconds.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn default_duration_ms(&self) -> u32 {
        match self {
            ToastKind::Success => 4000,
            ToastKind::Error => 5000,
            ToastKind::Warning => 4500,
            ToastKind::Info => 4000,
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
            ToastKind::Warning => "toast--warning",
            ToastKind::Info => "toast--info",
        }
    }

    /// Unknown kinds (e.g. server message tags) fall back to info
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "success" => ToastKind::Success,
            "error" | "danger" => ToastKind::Error,
            "warning" => ToastKind::Warning,
            _ => ToastKind::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
    created_at: f64,
    leaving_since: Option<f64>,
}

impl Toast {
    pub fn is_leaving(&self) -> bool {
        self.leaving_since.is_some()
    }

    fn expires_at(&self) -> f64 {
        self.created_at + self.duration_ms as f64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastQueue {
    entries: Vec<Toast>,
    next_id: u64,
    fade_ms: u32,
}

impl ToastQueue {
    pub fn new(fade_ms: u32) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            fade_ms,
        }
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind, duration_ms: u32, now: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            message: message.into(),
            kind,
            duration_ms,
            created_at: now,
            leaving_since: None,
        });
        id
    }

    pub fn is_present(&self, id: u64) -> bool {
        self.entries.iter().any(|t| t.id == id)
    }

    pub fn is_leaving(&self, id: u64) -> bool {
        self.entries.iter().any(|t| t.id == id && t.is_leaving())
    }

    /// Starts the fade-out early. No-op for unknown or already leaving toasts.
    pub fn dismiss(&mut self, id: u64, now: f64) -> bool {
        match self.entries.iter_mut().find(|t| t.id == id) {
            Some(toast) if toast.leaving_since.is_none() => {
                toast.leaving_since = Some(now);
                true
            }
            _ => false,
        }
    }

    /// Whether [`sweep`](ToastQueue::sweep) would change anything at `now`
    pub fn needs_sweep(&self, now: f64) -> bool {
        self.entries.iter().any(|t| match t.leaving_since {
            None => t.expires_at() <= now,
            Some(since) => since + self.fade_ms as f64 <= now,
        })
    }

    /// Expired toasts start leaving (as of their expiry time); toasts whose
    /// fade-out has finished are removed.
    pub fn sweep(&mut self, now: f64) {
        let fade = self.fade_ms as f64;
        for toast in self.entries.iter_mut() {
            if toast.leaving_since.is_none() && toast.expires_at() <= now {
                toast.leaving_since = Some(toast.expires_at());
            }
        }
        self.entries.retain(|t| match t.leaving_since {
            Some(since) => since + fade > now,
            None => true,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FADE: u32 = 400;

    #[test]
    fn test_toast_lifecycle() {
        let mut queue = ToastQueue::new(FADE);
        let d = 4000.0;
        let id = queue.push("Saved", ToastKind::Success, d as u32, 0.0);

        queue.sweep(d / 2.0);
        assert!(queue.is_present(id));
        assert!(!queue.is_leaving(id));

        queue.sweep(d);
        assert!(queue.is_present(id));
        assert!(queue.is_leaving(id));

        queue.sweep(d + FADE as f64 + 1.0);
        assert!(!queue.is_present(id));
    }

    #[test]
    fn test_single_late_sweep_removes_expired_toast() {
        let mut queue = ToastQueue::new(FADE);
        let id = queue.push("Hi", ToastKind::Info, 1000, 0.0);
        queue.sweep(1000.0 + FADE as f64 + 1.0);
        assert!(!queue.is_present(id));
    }

    #[test]
    fn test_manual_dismiss_removes_early() {
        let mut queue = ToastQueue::new(FADE);
        let id = queue.push("Oops", ToastKind::Error, 5000, 0.0);

        assert!(queue.dismiss(id, 100.0));
        assert!(!queue.dismiss(id, 150.0));
        queue.sweep(100.0 + FADE as f64);
        assert!(!queue.is_present(id));

        // the auto-dismiss path finds nothing left to do
        assert!(!queue.dismiss(id, 5000.0));
        assert!(!queue.needs_sweep(6000.0));
    }

    #[test]
    fn test_insertion_order_and_independent_expiry() {
        let mut queue = ToastQueue::new(FADE);
        let first = queue.push("a", ToastKind::Info, 1000, 0.0);
        let second = queue.push("b", ToastKind::Error, 5000, 10.0);
        let ids: Vec<u64> = queue.entries().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![first, second]);

        queue.sweep(2000.0);
        assert!(!queue.is_present(first));
        assert!(queue.is_present(second));
    }

    #[test]
    fn test_needs_sweep() {
        let mut queue = ToastQueue::new(FADE);
        queue.push("a", ToastKind::Warning, 4500, 0.0);
        assert!(!queue.needs_sweep(100.0));
        assert!(queue.needs_sweep(4500.0));
    }

    #[test]
    fn test_kind_from_tag() {
        assert_eq!(ToastKind::from_tag("danger"), ToastKind::Error);
        assert_eq!(ToastKind::from_tag("debug"), ToastKind::Info);
        assert_eq!(ToastKind::Warning.default_duration_ms(), 4500);
    }
}
