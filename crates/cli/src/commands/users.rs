//! Demo user listing.

use std::io::{self, Write};

use almacen_panel::services::DEMO_USERS;

/// Print every demo account's username and role. Passwords are never shown.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn list(out: &mut impl Write) -> io::Result<()> {
    for user in DEMO_USERS {
        writeln!(out, "{}\t{}", user.username, user.role)?;
    }
    Ok(())
}
