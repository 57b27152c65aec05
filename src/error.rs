// SPDX-License-Identifier: PMPL-1.0-or-later

//! Typed errors raised by the description engine.
//!
//! Storage and CLI code wrap these in `anyhow` with context; the engine
//! itself only ever returns these types.

use crate::locale::Lang;
use thiserror::Error;

/// A record's Japanese text does not have a shape the engine recognizes.
///
/// Generating anyway would publish a blank or nonsensical description, so
/// every variant is fatal for the record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("voice ticket has no ＣＶ credit marker")]
    MissingCredit,

    #[error("sticker ticket does not name its sticker in the explanation text")]
    MissingStickerName,

    #[error("unknown layered wear slot tag \"{0}\"")]
    UnknownSlot(String),

    #[error("layered wear item has no slot tag and its group has no default slot")]
    MissingSlot,

    #[error("body type restriction names a race but no type 1/type 2 qualifier")]
    UnqualifiedBodyType,
}

/// A stored record is missing one of the text fields the engine needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record is missing field \"{0}\"")]
    MissingField(&'static str),

    #[error("record field \"{0}\" is not a string")]
    NotAString(&'static str),
}

/// The configured name fallback chain cannot be walked to the source locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("no fallback locale configured for {0}")]
    MissingLink(Lang),

    #[error("fallback chain starting at {0} never reaches JP")]
    Cycle(Lang),
}
