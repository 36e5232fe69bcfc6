use serde::Serialize;

/// Transport state of the cry audio player.
///
/// Playback happens in the host's native media element; this tracks what the
/// controls show and is kept in sync through [`CryPlayer::sync`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CryPlayer {
    url: String,
    playing: bool,
    position_secs: f64,
    duration_secs: Option<f64>,
}

impl CryPlayer {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            playing: false,
            position_secs: 0.0,
            duration_secs: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    /// Play/pause button. Returns whether the player is now playing.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn seek_to(&mut self, secs: f64) {
        self.position_secs = self.clamp(secs);
    }

    /// Seek bar input from the host, `fraction` in `0.0..=1.0`. Ignored until the
    /// duration is known.
    pub fn seek_fraction(&mut self, fraction: f64) {
        if let Some(duration) = self.duration_secs {
            self.seek_to(fraction.clamp(0.0, 1.0) * duration);
        }
    }

    /// Time update from the host's media element.
    pub fn sync(&mut self, position_secs: f64, duration_secs: Option<f64>) {
        self.duration_secs = duration_secs.filter(|d| d.is_finite() && *d > 0.0);
        self.seek_to(position_secs);
    }

    /// The media element reached the end of the clip.
    pub fn ended(&mut self) {
        self.playing = false;
        self.position_secs = 0.0;
    }

    /// Seek bar position as a fraction of the clip length, for hosts that draw one.
    pub fn progress(&self) -> f64 {
        match self.duration_secs {
            Some(duration) => self.position_secs / duration,
            None => 0.0,
        }
    }

    pub fn time_display(&self) -> String {
        format!(
            "{} / {}",
            format_time(self.position_secs),
            format_time(self.duration_secs.unwrap_or(0.0))
        )
    }

    fn clamp(&self, secs: f64) -> f64 {
        if !secs.is_finite() || secs < 0.0 {
            return 0.0;
        }
        match self.duration_secs {
            Some(duration) => secs.min(duration),
            None => secs,
        }
    }
}

/// `m:ss`, truncating fractional seconds.
pub fn format_time(secs: f64) -> String {
    let total = if secs.is_finite() && secs > 0.0 {
        secs.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}
