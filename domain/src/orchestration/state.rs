//! Run state value object

/// States of a single run, in order.
///
/// ```text
/// Init → ConfigLoaded → ProviderReady → QuoteGenerated → Delivering → Done
///   └──────────┴─────────────┴───────────────┴──────────────┴──→ Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    Init,
    ConfigLoaded,
    ProviderReady,
    QuoteGenerated,
    Delivering,
    Done,
    Failed,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Init => "init",
            RunState::ConfigLoaded => "config_loaded",
            RunState::ProviderReady => "provider_ready",
            RunState::QuoteGenerated => "quote_generated",
            RunState::Delivering => "delivering",
            RunState::Done => "done",
            RunState::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Done | RunState::Failed)
    }

    /// Whether `next` is a legal successor of `self`
    pub fn can_transition_to(&self, next: RunState) -> bool {
        use RunState::*;
        match (self, next) {
            (Done | Failed, _) => false,
            (_, Failed) => true,
            (Init, ConfigLoaded)
            | (ConfigLoaded, ProviderReady)
            | (ProviderReady, QuoteGenerated)
            | (QuoteGenerated, Delivering)
            | (Delivering, Done) => true,
            _ => false,
        }
    }

    /// Process exit status for a terminal state
    pub fn exit_code(&self) -> Option<u8> {
        if !self.is_terminal() {
            return None;
        }
        Some(if *self == RunState::Done { 0 } else { 1 })
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
