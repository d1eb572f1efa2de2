//! Agent Status Codes
//!
//! Integer result codes reported by the monitoring agents. Raw values match
//! the wire values of the mobile agents so hosts can surface them unchanged
//! in diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result code returned by agent operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCode {
    /// Agent is not enabled or cannot capture data.
    CaptureOff,
    /// Agent is enabled and capturing.
    CaptureOn,
    /// Crash reporting support is unavailable to the agent.
    CrashReportingUnavailable,
    /// Crash reporting support is available to the agent.
    CrashReportingAvailable,
    /// Agent has not been initialized.
    NotInitialized,
    /// A parameter value is outside the permitted range.
    InvalidRange,
    /// The agent hit an internal error.
    InternalError,
    /// No matching open action was found for a leave call.
    ActionNotFound,
    /// A null or empty application id, server URL, or action name was used.
    InvalidParameter,
    /// The action has already been ended.
    ActionEnded,
    /// The monitoring server has turned error reporting off.
    ReportErrorOff,
    /// An action or event name exceeded the maximum length.
    TruncatedEventName,
    /// A crash report was invalid.
    CrashReportInvalid,
    /// A code this crate does not recognize, kept verbatim.
    Unknown(i32),
}

impl StatusCode {
    /// Interpret a raw agent code.
    pub fn from_raw(code: i32) -> Self {
        match code {
            1 => Self::CaptureOff,
            2 => Self::CaptureOn,
            4 => Self::CrashReportingUnavailable,
            5 => Self::CrashReportingAvailable,
            -1 => Self::NotInitialized,
            -2 => Self::InvalidRange,
            -3 => Self::InternalError,
            -4 => Self::ActionNotFound,
            -5 => Self::InvalidParameter,
            -6 => Self::ActionEnded,
            -8 => Self::ReportErrorOff,
            -9 => Self::TruncatedEventName,
            -10 => Self::CrashReportInvalid,
            other => Self::Unknown(other),
        }
    }

    /// The raw agent code this variant stands for.
    pub fn as_raw(self) -> i32 {
        match self {
            Self::CaptureOff => 1,
            Self::CaptureOn => 2,
            Self::CrashReportingUnavailable => 4,
            Self::CrashReportingAvailable => 5,
            Self::NotInitialized => -1,
            Self::InvalidRange => -2,
            Self::InternalError => -3,
            Self::ActionNotFound => -4,
            Self::InvalidParameter => -5,
            Self::ActionEnded => -6,
            Self::ReportErrorOff => -8,
            Self::TruncatedEventName => -9,
            Self::CrashReportInvalid => -10,
            Self::Unknown(code) => code,
        }
    }

    /// True exactly for the code the agents report on success.
    pub fn is_success(self) -> bool {
        matches!(self, Self::CaptureOn)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CaptureOff => "CaptureOff",
            Self::CaptureOn => "CaptureOn",
            Self::CrashReportingUnavailable => "CrashReportingUnavailable",
            Self::CrashReportingAvailable => "CrashReportingAvailable",
            Self::NotInitialized => "NotInitialized",
            Self::InvalidRange => "InvalidRange",
            Self::InternalError => "InternalError",
            Self::ActionNotFound => "ActionNotFound",
            Self::InvalidParameter => "InvalidParameter",
            Self::ActionEnded => "ActionEnded",
            Self::ReportErrorOff => "ReportErrorOff",
            Self::TruncatedEventName => "TruncatedEventName",
            Self::CrashReportInvalid => "CrashReportInvalid",
            Self::Unknown(_) => "Unknown",
        };
        write!(f, "{} ({})", name, self.as_raw())
    }
}
