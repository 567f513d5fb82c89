//! Token stream classification.
//!
//! Turns the raw tokens of a declaration into a [`Descriptor`]. The scan is a
//! two-state machine:
//!
//! ```text
//!            keyword that applies now
//!           ┌──────────────┐
//!           ▼              │
//!   ┌────────────────┐     │         ┌─────────────┐
//!   │   MODIFIERS    │─────┘  other  │  REMAINDER  │◄─┐ any token
//!   │                │──────────────►│             │──┘
//!   └────────────────┘               └─────────────┘
//! ```
//!
//! Once in `Remainder`, every token is kept verbatim, keyword-looking or not.
//! Conflicts between modifiers are reported on the token that causes them.

use libdecl_foundation::{Error, ErrorKind, Result};
use tracing::trace;

use crate::descriptor::{Descriptor, Keyword};

/// State of the modifier scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    /// Still consuming modifier keywords.
    Modifiers,
    /// Scanning stopped; tokens are collected as-is.
    Remainder,
}

/// Feeds one token to the scan and returns the next state.
///
/// # Errors
///
/// Returns an error if the token is a keyword that conflicts with the
/// descriptor built so far.
pub fn step(state: ScanState, descriptor: &mut Descriptor, token: &str) -> Result<ScanState> {
    descriptor.token_count += 1;
    if state == ScanState::Modifiers {
        if let Some(keyword) = Keyword::parse(token).filter(|k| descriptor.applies(*k)) {
            descriptor.accept(keyword)?;
            trace!(%keyword, "accepted modifier");
            return Ok(ScanState::Modifiers);
        }
        trace!(token, "modifier scan stopped");
    }
    descriptor.remainder.push(token.to_string());
    Ok(ScanState::Remainder)
}

/// Classifies a declaration's tokens. Token 0 is the target name.
///
/// # Errors
///
/// Returns an error if there are no tokens, if two modifiers conflict, or if
/// an interface library is followed by trailing tokens.
pub fn classify<S: AsRef<str>>(tokens: &[S]) -> Result<Descriptor> {
    let Some((name, rest)) = tokens.split_first() else {
        return Err(Error::new(ErrorKind::MissingTargetName));
    };

    let mut descriptor = Descriptor::new(name.as_ref());
    let mut state = ScanState::Modifiers;
    for token in rest {
        state = step(state, &mut descriptor, token.as_ref())?;
    }

    if descriptor.is_interface() && !descriptor.remainder.is_empty() {
        return Err(Error::new(ErrorKind::InterfaceWithSources));
    }

    Ok(descriptor)
}
