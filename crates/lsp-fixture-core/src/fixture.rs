//! The entry sequence: build two users and print what they report.

use std::io::Write;

use crate::config::FixtureConfig;
use crate::error::{Error, Result};
use crate::user::User;

/// Run the entry sequence against `out`.
///
/// Writes the primary user's description, its age as a string, and the
/// secondary user's description, one per line. A primary validation
/// failure returns [`Error::CreateUser`] before anything is written. A
/// secondary failure is dropped and its line omitted.
///
/// # Errors
///
/// Returns [`Error::CreateUser`] if the primary entry is invalid, or
/// [`Error::Io`] if writing to `out` fails.
pub fn run<W: Write>(config: &FixtureConfig, out: &mut W) -> Result<()> {
    let primary = &config.primary;
    let user = User::new(primary.name.as_str(), primary.age, primary.email.as_str())
        .map_err(Error::CreateUser)?;

    writeln!(out, "{}", user.describe())?;
    writeln!(out, "Age as string: {}", user.age_string())?;

    let secondary = &config.secondary;
    match User::new(secondary.name.as_str(), secondary.age, secondary.email.as_str()) {
        Ok(another) => writeln!(out, "{}", another.describe())?,
        Err(err) => tracing::debug!(error = %err, "secondary user discarded"),
    }

    out.flush()?;
    Ok(())
}
