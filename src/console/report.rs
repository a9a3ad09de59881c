//! Titled reports wrapping the rendered sections.

use std::io::{self, Write};

use crate::console::ui::render;
use crate::core::{LoanStatus, ViewModel};

pub const SEPARATOR: &str = "***************************************************";

pub fn title_line(vm: &ViewModel) -> String {
    format!(
        "Printing sections for account with status: {} and loanStatus: {}",
        vm.active(),
        vm.loan_status()
    )
}

/// Title, separator, sections, separator, blank line.
pub fn report_lines(vm: &ViewModel) -> Vec<String> {
    let mut lines = vec![title_line(vm), SEPARATOR.to_string()];
    lines.extend(render(vm));
    lines.push(SEPARATOR.to_string());
    lines.push(String::new());
    lines
}

pub fn write_report<W: Write>(out: &mut W, vm: &ViewModel) -> io::Result<()> {
    write_lines(out, &report_lines(vm))
}

/// Writes a report for every `(active, loan_status)` pair, active first.
pub fn write_all_reports<W: Write>(out: &mut W) -> io::Result<()> {
    for active in [true, false] {
        for status in LoanStatus::ALL {
            write_report(out, &ViewModel::build(active, status))?;
        }
    }
    Ok(())
}

pub(crate) fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_framing() {
        let vm = ViewModel::build(true, LoanStatus::Offer);
        let lines = report_lines(&vm);
        assert_eq!(
            lines[0],
            "Printing sections for account with status: true and loanStatus: Offer"
        );
        assert_eq!(lines[1], SEPARATOR);
        assert_eq!(lines[lines.len() - 2], SEPARATOR);
        assert_eq!(lines[lines.len() - 1], "");
        assert_eq!(lines.len(), render(&vm).len() + 4);
    }

    #[test]
    fn test_write_report_to_buffer() {
        let mut buf = Vec::new();
        write_report(&mut buf, &ViewModel::build(false, LoanStatus::None)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Printing sections for account with status: false"));
        assert!(text.contains("  AccountClosed\n"));
        assert!(text.ends_with(&format!("{SEPARATOR}\n\n")));
    }

    #[test]
    fn test_write_all_reports_covers_every_combination() {
        let mut buf = Vec::new();
        write_all_reports(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let titles: Vec<_> = text
            .lines()
            .filter(|l| l.starts_with("Printing sections"))
            .collect();
        assert_eq!(titles.len(), 6);
        assert!(titles[0].ends_with("status: true and loanStatus: None"));
        assert!(titles[5].ends_with("status: false and loanStatus: Accepted"));
    }
}
