//! The menu loop and the interactive flows behind each menu entry.

use crate::presenter::display_records;
use phonebook_core::{PhoneBook, Record};
use phonebook_storage::StorageError;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Configuration for an interactive session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The flat data file loaded at startup and overwritten on save.
    pub data_file: PathBuf,
    /// Records per page in paginated output. Always at least 1.
    pub page_size: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("phone_book.txt"),
            page_size: 10,
        }
    }
}

impl SessionConfig {
    /// Set the data file path.
    #[must_use]
    pub fn with_data_file(mut self, path: PathBuf) -> Self {
        self.data_file = path;
        self
    }

    /// Set the page size.
    #[must_use]
    pub const fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }
}

/// Errors that end a session.
///
/// User mistakes (bad menu choice, bad index) are not errors; they are
/// reported on the output stream and the loop continues.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// An interactive phone book session.
///
/// Owns the record set for the whole run. Generic over the input and
/// output streams so the loop can be scripted in tests.
pub struct Session<R, W> {
    config: SessionConfig,
    book: PhoneBook,
    input: R,
    output: W,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Create a session over an already-loaded book.
    pub fn new(config: SessionConfig, book: PhoneBook, input: R, output: W) -> Self {
        Self {
            config,
            book,
            input,
            output,
        }
    }

    /// Load the data file and create a session.
    ///
    /// A missing data file starts an empty book; an existing but
    /// unreadable or malformed file is fatal.
    pub fn load(config: SessionConfig, input: R, output: W) -> Result<Self, SessionError> {
        let book = if config.data_file.exists() {
            PhoneBook::from_records(phonebook_storage::load(&config.data_file)?)
        } else {
            warn!(
                "Data file {} not found, starting with an empty phone book",
                config.data_file.display()
            );
            PhoneBook::new()
        };

        Ok(Self::new(config, book, input, output))
    }

    /// The current record set.
    #[must_use]
    pub const fn book(&self) -> &PhoneBook {
        &self.book
    }

    /// Run the menu loop until save-and-exit or end of input.
    ///
    /// Save-and-exit is the only path that writes the data file. A closed
    /// input stream ends the session without saving.
    pub fn run(&mut self) -> Result<(), SessionError> {
        info!("Session started with {} records", self.book.len());

        loop {
            self.print_menu()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                info!("Input closed; exiting without saving");
                return Ok(());
            }

            match line.trim() {
                "1" => self.display_all()?,
                "2" => self.add_record()?,
                "3" => self.edit_record()?,
                "4" => self.search_records()?,
                "5" => {
                    phonebook_storage::save(&self.config.data_file, self.book.records())?;
                    writeln!(self.output, "Data saved. Exiting...")?;
                    info!("Session ended, {} records saved", self.book.len());
                    return Ok(());
                }
                other => {
                    debug!("Unrecognized menu choice: {other:?}");
                    writeln!(
                        self.output,
                        "Invalid choice. Please enter a number between 1 and 5."
                    )?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> std::io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "1. Display records")?;
        writeln!(self.output, "2. Add record")?;
        writeln!(self.output, "3. Edit record")?;
        writeln!(self.output, "4. Search records")?;
        writeln!(self.output, "5. Save and exit")?;
        write!(self.output, "Enter your choice (1-5): ")?;
        self.output.flush()
    }

    fn display_all(&mut self) -> Result<(), SessionError> {
        display_records(
            self.book.records(),
            self.config.page_size,
            &mut self.input,
            &mut self.output,
        )?;
        Ok(())
    }

    fn add_record(&mut self) -> Result<(), SessionError> {
        let record = self.prompt_record("")?;
        self.book.add(record);
        writeln!(self.output, "Record added successfully!")?;
        Ok(())
    }

    /// Edit one record by its current position.
    ///
    /// The full list is shown first so the user can pick an index. The
    /// replacement is a full overwrite; existing values are not pre-filled.
    fn edit_record(&mut self) -> Result<(), SessionError> {
        self.display_all()?;

        let index_text = self.prompt("Enter the index of the record to edit: ")?;
        let Ok(index) = index_text.trim().parse::<usize>() else {
            writeln!(self.output, "Invalid input. Please enter a numeric index.")?;
            return Ok(());
        };

        if index >= self.book.len() {
            writeln!(self.output, "Invalid index.")?;
            return Ok(());
        }

        let record = self.prompt_record("new ")?;
        if self.book.edit(index, record).is_err() {
            // Unreachable after the bounds check; nothing was mutated.
            writeln!(self.output, "Invalid index.")?;
            return Ok(());
        }

        writeln!(self.output, "Record edited successfully!")?;
        Ok(())
    }

    fn search_records(&mut self) -> Result<(), SessionError> {
        let term = self.prompt("Enter search term: ")?;
        let found = self.book.search(&term);

        if found.is_empty() {
            writeln!(self.output, "No matching records found.")?;
            return Ok(());
        }

        debug!("Search {term:?} matched {} records", found.len());
        display_records(
            &found,
            self.config.page_size,
            &mut self.input,
            &mut self.output,
        )?;
        Ok(())
    }

    /// Prompt for all six fields in declaration order.
    ///
    /// `adjective` is spliced into each label ("" for add, "new " for
    /// edit). Free text, empty values accepted.
    fn prompt_record(&mut self, adjective: &str) -> Result<Record, SessionError> {
        let last_name = self.prompt(&format!("Enter {adjective}last name: "))?;
        let first_name = self.prompt(&format!("Enter {adjective}first name: "))?;
        let surname = self.prompt(&format!("Enter {adjective}middle name: "))?;
        let organization = self.prompt(&format!("Enter {adjective}organization: "))?;
        let work_phone = self.prompt(&format!("Enter {adjective}work phone: "))?;
        let personal_phone = self.prompt(&format!("Enter {adjective}personal phone: "))?;

        Ok(Record::new(
            last_name,
            first_name,
            surname,
            organization,
            work_phone,
            personal_phone,
        ))
    }

    /// Write a prompt, read one line, strip the line terminator.
    ///
    /// Only the trailing newline is removed; interior and leading
    /// whitespace is part of the value.
    fn prompt(&mut self, label: &str) -> Result<String, SessionError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn record(last: &str, org: &str) -> Record {
        Record::new(
            last.to_string(),
            "First".to_string(),
            "M".to_string(),
            org.to_string(),
            "555-0000".to_string(),
            "555-0001".to_string(),
        )
    }

    fn session(
        book: PhoneBook,
        script: &str,
    ) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(
            SessionConfig::default(),
            book,
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
        )
    }

    fn output(session: &Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(session.output.clone()).unwrap()
    }

    #[test]
    fn test_unrecognized_choice_reprompts() {
        let mut s = session(PhoneBook::new(), "7\nbanana\n");
        s.run().unwrap();

        let text = output(&s);
        assert_eq!(
            text.matches("Invalid choice. Please enter a number between 1 and 5.")
                .count(),
            2
        );
        // Menu printed again after each bad choice, then once more before EOF.
        assert_eq!(text.matches("Enter your choice (1-5): ").count(), 3);
    }

    #[test]
    fn test_add_appends_record() {
        let mut s = session(
            PhoneBook::new(),
            "2\nSmith\nJohn\nA\nAcme\n555-1111\n555-2222\n",
        );
        s.run().unwrap();

        assert_eq!(s.book().len(), 1);
        assert_eq!(
            s.book().records()[0].to_string(),
            "Smith,John,A,Acme,555-1111,555-2222"
        );
        assert!(output(&s).contains("Record added successfully!"));
    }

    #[test]
    fn test_add_accepts_empty_fields() {
        let mut s = session(PhoneBook::new(), "2\n\n\n\n\n\n\n");
        s.run().unwrap();

        assert_eq!(s.book().len(), 1);
        assert_eq!(s.book().records()[0].to_string(), ",,,,,");
    }

    #[test]
    fn test_edit_non_numeric_index_is_reported_not_fatal() {
        let book = PhoneBook::from_records(vec![record("Smith", "Acme")]);
        // "3" -> edit, ack page prompt, bad index, loop continues to EOF.
        let mut s = session(book, "3\n\nabc\n");
        s.run().unwrap();

        assert!(output(&s).contains("Invalid input. Please enter a numeric index."));
        assert_eq!(s.book().records()[0].last_name, "Smith");
    }

    #[test]
    fn test_edit_out_of_range_index_mutates_nothing() {
        let book = PhoneBook::from_records(vec![record("Smith", "Acme")]);
        let mut s = session(book, "3\n\n5\n");
        s.run().unwrap();

        assert!(output(&s).contains("Invalid index."));
        assert_eq!(s.book().records()[0].last_name, "Smith");
    }

    #[test]
    fn test_edit_overwrites_in_place() {
        let book = PhoneBook::from_records(vec![
            record("Smith", "Acme"),
            record("Doe", "Beta"),
        ]);
        let mut s = session(
            book,
            "3\n\n0\nJones\nJim\nC\nGamma\n555-7777\n555-8888\n",
        );
        s.run().unwrap();

        assert!(output(&s).contains("Record edited successfully!"));
        assert_eq!(
            s.book().records()[0].to_string(),
            "Jones,Jim,C,Gamma,555-7777,555-8888"
        );
        assert_eq!(s.book().records()[1].last_name, "Doe");
    }

    #[test]
    fn test_search_no_matches_reports_and_skips_display() {
        let book = PhoneBook::from_records(vec![record("Smith", "Acme")]);
        let mut s = session(book, "4\nzebra\n");
        s.run().unwrap();

        let text = output(&s);
        assert!(text.contains("No matching records found."));
        assert!(!text.contains("Press Enter to continue..."));
    }

    #[test]
    fn test_search_displays_matches_reindexed_from_zero() {
        let book = PhoneBook::from_records(vec![
            record("Smith", "Acme"),
            record("Doe", "Beta"),
        ]);
        let mut s = session(book, "4\nbeta\n\n");
        s.run().unwrap();

        // The single match is numbered within the result subsequence.
        assert!(output(&s).contains("0: Doe,"));
    }

    #[test]
    fn test_display_empty_book_returns_to_menu() {
        let mut s = session(PhoneBook::new(), "1\n");
        s.run().unwrap();

        let text = output(&s);
        assert!(!text.contains("Press Enter to continue..."));
        assert_eq!(text.matches("Enter your choice (1-5): ").count(), 2);
    }

    #[test]
    fn test_eof_exits_without_saving() {
        let mut s = session(PhoneBook::new(), "");
        s.run().unwrap();
        assert!(!output(&s).contains("Data saved."));
    }
}
