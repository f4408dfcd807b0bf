//! Paginated record display.

use phonebook_core::{Record, pages};
use std::io::{BufRead, Write};

/// Print `records` page by page, each record prefixed with its absolute
/// position in the sequence, blocking on an Enter keystroke after every
/// page. An empty sequence prints nothing and never prompts.
pub fn display_records<R, W>(
    records: &[Record],
    page_size: usize,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for page in pages(records, page_size) {
        for (offset, record) in page.records.iter().enumerate() {
            writeln!(output, "{}: {record}", page.start + offset)?;
        }

        write!(output, "Press Enter to continue...")?;
        output.flush()?;

        let mut ack = String::new();
        input.read_line(&mut ack)?;
        writeln!(output)?;
    }

    Ok(())
}
