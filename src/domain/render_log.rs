use std::fmt;
use strum::{Display as StrumDisplay, EnumIter};

use crate::domain::errors::{AppError, ParseResult};

/// Which dependency policy produced a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter)]
pub enum EffectPolicy {
    #[strum(serialize = "every render")]
    EveryRender,
    #[strum(serialize = "mount only")]
    MountOnly,
    #[strum(serialize = "on change")]
    OnChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    Ran,
    CleanedUp,
}

/// One observation of the counter by an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderEvent {
    pub policy: EffectPolicy,
    pub phase: RenderPhase,
    pub count: i64,
}

impl RenderEvent {
    pub fn ran(policy: EffectPolicy, count: i64) -> Self {
        Self {
            policy,
            phase: RenderPhase::Ran,
            count,
        }
    }

    pub fn cleaned_up(policy: EffectPolicy, count: i64) -> Self {
        Self {
            policy,
            phase: RenderPhase::CleanedUp,
            count,
        }
    }
}

impl fmt::Display for RenderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phase {
            RenderPhase::Ran => write!(f, "[{}] ran with count = {}", self.policy, self.count),
            RenderPhase::CleanedUp => {
                write!(f, "[{}] cleaned up at count = {}", self.policy, self.count)
            }
        }
    }
}

/// Parse the counter input. Empty input reads as zero.
pub fn parse_count(raw: &str) -> ParseResult<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse()
        .map_err(|_| AppError::ValidationError(format!("'{raw}' is not a whole number")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_display() {
        assert_eq!(
            RenderEvent::ran(EffectPolicy::OnChange, 3).to_string(),
            "[on change] ran with count = 3"
        );
        assert_eq!(
            RenderEvent::cleaned_up(EffectPolicy::MountOnly, 5).to_string(),
            "[mount only] cleaned up at count = 5"
        );
    }

    #[test]
    fn count_input() {
        assert_eq!(parse_count("").unwrap(), 0);
        assert_eq!(parse_count(" -4 ").unwrap(), -4);
        assert!(parse_count("4.5").is_err());
    }
}
