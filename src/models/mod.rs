//! Domain models

pub mod attempt;
pub mod event;
pub mod format;
pub mod round;

pub use attempt::{AttemptOutcome, PenaltyKind, ResultValue};
pub use event::{EventCode, EventDefinition, ResultFormat};
pub use format::{FormatCode, RoundFormatDefinition, SoftCutoffKind};
pub use round::{RoundKind, RoundKindCode, RoundRecord, RoundStatus, SupportedRound};
