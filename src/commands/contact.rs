//! Simulated contact form submission

use anyhow::Result;
use std::io::Write;

use crate::session::ContactForm;
use crate::Folio;

/// Validate and acknowledge a message; nothing is sent or kept
pub fn run<W: Write>(folio: &Folio, out: &mut W, mut form: ContactForm) -> Result<()> {
    let toast = form.submit()?;
    writeln!(out, "{}", toast.title)?;
    writeln!(out, "{}", toast.description)?;
    writeln!(
        out,
        "For anything urgent, write to {} directly.",
        folio.config.contact.email
    )?;
    Ok(())
}
