use super::error::EngineError;

/// State of an exported engine handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Running { fallback_input: bool },
    TornDown,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Lifecycle::Running {
            fallback_input: false,
        }
    }
}

impl Lifecycle {
    pub fn ensure_running(&self) -> Result<(), EngineError> {
        match self {
            Lifecycle::Running { .. } => Ok(()),
            Lifecycle::TornDown => Err(EngineError::TornDown),
        }
    }

    #[inline]
    pub fn fallback_input(&self) -> bool {
        matches!(self, Lifecycle::Running { fallback_input: true })
    }

    /// Mark pointer/keyboard input as attached. `Ok(false)` when it already
    /// was, so listeners are never registered twice.
    pub fn enable_fallback_input(&mut self) -> Result<bool, EngineError> {
        match self {
            Lifecycle::Running { fallback_input } => Ok(!std::mem::replace(fallback_input, true)),
            Lifecycle::TornDown => Err(EngineError::TornDown),
        }
    }

    /// Move to `TornDown`. A second call fails.
    pub fn tear_down(&mut self) -> Result<(), EngineError> {
        self.ensure_running()?;
        *self = Lifecycle::TornDown;
        Ok(())
    }
}
