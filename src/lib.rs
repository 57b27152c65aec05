// SPDX-License-Identifier: PMPL-1.0-or-later

//! ticket-desc: localized descriptions for unlock tickets.
//!
//! Ticket files carry a Japanese explanation text and a translated item
//! name. This crate reads the Japanese text only to recognize what kind of
//! ticket it is, then writes a description in the target language from
//! fixed templates.
//!
//! ENGINE PILLARS:
//! 1. **Classify**: literal-marker matching on the Japanese text derives
//!    the ticket family, style and restriction flags.
//! 2. **Names**: voice performer credits are looked up in a name directory
//!    with a per-language fallback chain ending at Japanese.
//! 3. **Render**: templates and optional fragments are assembled in a
//!    fixed order per family.

pub mod classify;
pub mod error;
pub mod groups;
pub mod locale;
pub mod names;
pub mod process;
pub mod render;
pub mod report;
pub mod run;
pub mod storage;
pub mod types;
