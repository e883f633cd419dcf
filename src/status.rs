//! The status channel: one decaying message line.

/// How long a posted message stays up before reverting to the idle text.
const HOLD_SECS: f32 = 2.8;
const IDLE: &str = "Ready";

#[derive(Clone, Debug)]
pub struct StatusLine {
    message: String,
    timer: f32,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: IDLE.to_string(),
            timer: 0.0,
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.timer = HOLD_SECS;
    }

    pub fn tick(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer -= dt;
            if self.timer <= 0.0 {
                self.message = IDLE.to_string();
                self.timer = 0.0;
            }
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_decay_back_to_idle() {
        let mut s = StatusLine::new();
        assert_eq!(s.message(), "Ready");
        s.post("Broke block");
        assert_eq!(s.message(), "Broke block");
        s.tick(1.0);
        assert_eq!(s.message(), "Broke block");
        s.tick(2.0);
        assert_eq!(s.message(), "Ready");
    }

    #[test]
    fn reposting_restarts_the_timer() {
        let mut s = StatusLine::new();
        s.post("first");
        s.tick(2.0);
        s.post("second");
        s.tick(2.0);
        assert_eq!(s.message(), "second");
    }
}
