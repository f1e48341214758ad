//! Fatal error hand-off through the session.
//!
//! A page that hits an unrecoverable condition records the error in the
//! session; the error page later reads it back and decides where to go.

use crate::{KeyValueStore, Result};
use std::fmt;

pub const ERR_MESSAGE_KEY: &str = "ErrMessage";
pub const ERR_CODE_KEY: &str = "ErrCode";
pub const ERR_ACTION_KEY: &str = "ErrAction";

/// What to do once the user acknowledges a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorAction {
    /// Return to the main menu.
    GotoMain = 1,
    /// Simply return to the caller.
    Return = 2,
}

impl ErrorAction {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::GotoMain),
            2 => Some(Self::Return),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalError {
    pub message: String,
    /// Numeric code shown to the user; zero means "no code".
    pub code: i32,
    pub action: ErrorAction,
}

impl FatalError {
    pub fn new(message: impl Into<String>, code: i32, action: ErrorAction) -> Self {
        Self {
            message: message.into(),
            code,
            action,
        }
    }

    /// Write the error into the session for the error page to pick up.
    pub fn record<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<()> {
        tracing::warn!(code = self.code, action = %self.action, "Recording fatal error: {}", self.message);
        store.set(ERR_MESSAGE_KEY, &self.message)?;
        store.set(ERR_CODE_KEY, &self.code.to_string())?;
        store.set(ERR_ACTION_KEY, &self.action.to_string())?;
        Ok(())
    }

    /// Read a previously recorded error.
    ///
    /// Returns `None` when no message is present. An unparseable code reads
    /// as zero and an unknown action falls back to `GotoMain`.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<Self>> {
        let Some(message) = store.get(ERR_MESSAGE_KEY)? else {
            return Ok(None);
        };
        let code = store
            .get(ERR_CODE_KEY)?
            .and_then(|c| c.trim().parse::<i32>().ok())
            .unwrap_or(0);
        let action = pending_action(store)?.unwrap_or(ErrorAction::GotoMain);
        Ok(Some(Self {
            message,
            code,
            action,
        }))
    }
}

/// The action recorded for the error page, if it is one we recognize.
pub fn pending_action<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<ErrorAction>> {
    let action = store
        .get(ERR_ACTION_KEY)?
        .and_then(|a| a.trim().parse::<i32>().ok())
        .and_then(ErrorAction::from_code);
    Ok(action)
}
