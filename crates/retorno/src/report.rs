//! Text rendering of import results.

use retorno_core::format_decimal;
use retorno_importer::{ImportResult, ReturnEntry};
use retorno_parser::Diagnostic;
use std::io::Write;
use std::path::Path;

/// Date format used in listings.
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Render one entry as a listing line:
/// `(<settlement>) <credit date> - <nosso número> - <credited value>`.
pub fn entry_line(entry: &ReturnEntry, human: bool) -> String {
    let settlement = match (&entry.settlement, entry.settlement_code.as_str()) {
        (Some(channel), _) => channel.to_string(),
        (None, "") => "not settled".to_string(),
        (None, code) => format!("unknown settlement code '{code}'"),
    };
    let credit_date = entry
        .credit_date
        .map_or_else(|| "--/--/----".to_string(), |d| d.format(DATE_FORMAT).to_string());
    let value = entry
        .credited
        .map_or_else(|| "?".to_string(), |v| format_decimal(v, human));

    format!(
        "({settlement}) {credit_date} - {} - {value}",
        entry.nosso_numero
    )
}

/// Format a diagnostic as `path:line: severity[code]: message`.
pub fn diagnostic_line(path: &Path, diagnostic: &Diagnostic) -> String {
    let mut message = diagnostic.message();
    if let (Some(field), Some(span)) = (diagnostic.field, diagnostic.span) {
        message = format!("{field} ({span}): {message}");
    }
    if let Some(raw) = &diagnostic.raw {
        message.push_str(&format!(" '{raw}'"));
    }
    format!(
        "{}:{}: {}[{}]: {message}",
        path.display(),
        diagnostic.line,
        diagnostic.severity(),
        diagnostic.code()
    )
}

/// Write the settlement listing of one file.
pub fn write_listing<W: Write>(
    path: &Path,
    result: &ImportResult,
    human: bool,
    writer: &mut W,
) -> std::io::Result<()> {
    match &result.header {
        Some(header) => writeln!(
            writer,
            "{} ({} {} ag {} cc {})",
            path.display(),
            result.issuer,
            header.company,
            header.agency,
            header.account
        )?,
        None => writeln!(writer, "{} (empty)", path.display())?,
    }

    for entry in &result.entries {
        writeln!(writer, "{}", entry_line(entry, human))?;
    }

    writeln!(
        writer,
        "{} entries, {} credited{}",
        result.entries.len(),
        format_decimal(result.total_credited(), human),
        if result.count_mismatch {
            ", trailer count mismatch"
        } else {
            ""
        }
    )?;
    Ok(())
}

/// Write diagnostics and import warnings of one file.
pub fn write_diagnostics<W: Write>(
    path: &Path,
    result: &ImportResult,
    writer: &mut W,
) -> std::io::Result<()> {
    for diagnostic in &result.diagnostics {
        writeln!(writer, "{}", diagnostic_line(path, diagnostic))?;
    }
    for warning in &result.warnings {
        writeln!(writer, "{}: warning: {warning}", path.display())?;
    }
    Ok(())
}

/// Print a summary line.
pub fn print_summary<W: Write>(
    errors: usize,
    warnings: usize,
    writer: &mut W,
) -> std::io::Result<()> {
    if errors == 0 && warnings == 0 {
        writeln!(writer, "\x1b[32m\u{2713}\x1b[0m No problems found")?;
    } else {
        let error_text = if errors == 1 { "error" } else { "errors" };
        let warning_text = if warnings == 1 { "warning" } else { "warnings" };

        if errors > 0 && warnings > 0 {
            writeln!(
                writer,
                "\x1b[31m\u{2717}\x1b[0m {errors} {error_text}, {warnings} {warning_text}"
            )?;
        } else if errors > 0 {
            writeln!(writer, "\x1b[31m\u{2717}\x1b[0m {errors} {error_text}")?;
        } else {
            writeln!(writer, "\x1b[33m\u{26A0}\x1b[0m {warnings} {warning_text}")?;
        }
    }
    Ok(())
}
