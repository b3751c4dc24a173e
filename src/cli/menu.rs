//! Interactive numbered menu
//!
//! Collects raw answers, validates them and hands typed arguments to the
//! record store. Rejected input is reported and the menu continues; storage
//! and terminal failures end the session.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::record::{format_balance, format_record_details, format_record_register};
use crate::error::WalletResult;
use crate::models::{parse_amount, parse_date, Category, Record};
use crate::storage::RecordStore;

use super::input::{non_blank, parse_filter, parse_index, parse_update, today, Prompter};

const MENU: &str = "\n\
1. Show balance\n\
2. Add record\n\
3. Edit record\n\
4. Search records\n\
5. Delete record\n\
6. List records\n\
0. Exit\n";

/// What the loop should do after handling a choice
enum Flow {
    Continue,
    Exit,
}

/// Interactive session over a record store
pub struct Menu<'a, R, W> {
    store: &'a mut RecordStore,
    settings: &'a Settings,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a session reading answers from `input` and writing to `output`
    pub fn new(store: &'a mut RecordStore, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            store,
            settings,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> WalletResult<()> {
        if let Some(notice) = self.store.notice() {
            self.prompter.say_line(&notice)?;
        }

        loop {
            self.prompter.say(MENU)?;
            let Some(choice) = self.prompter.ask("Choose an option: ")? else {
                break;
            };

            match self.dispatch(&choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => self.prompter.say_line(&format!("Error: {}", e))?,
            }
        }

        self.prompter.say_line("Goodbye.")?;
        Ok(())
    }

    /// Consume the session, returning the writer
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    fn dispatch(&mut self, choice: &str) -> WalletResult<Flow> {
        match choice {
            "1" => self.show_balance()?,
            "2" => self.add()?,
            "3" => self.edit()?,
            "4" => self.search()?,
            "5" => self.delete()?,
            "6" => self.list()?,
            "0" => return Ok(Flow::Exit),
            other => self
                .prompter
                .say_line(&format!("Unknown option '{}'. Try again.", other))?,
        }
        Ok(Flow::Continue)
    }

    fn show_balance(&mut self) -> WalletResult<()> {
        let text = format_balance(&self.store.balance());
        self.prompter.say(&text)
    }

    fn add(&mut self) -> WalletResult<()> {
        let date = self.prompter.ask_or_blank("Date (YYYY-MM-DD) [today]: ")?;
        let date = match non_blank(&date) {
            Some(date) => parse_date(date)?,
            None => today(),
        };

        let category: Category = self
            .prompter
            .ask_or_blank("Category (income/expense): ")?
            .parse()?;
        let amount = parse_amount(&self.prompter.ask_or_blank("Amount: ")?)?;

        let currency_prompt = format!("Currency [{}]: ", self.settings.default_currency);
        let currency = self.prompter.ask_or_blank(&currency_prompt)?;
        let currency = non_blank(&currency)
            .map(str::to_string)
            .unwrap_or_else(|| self.settings.default_currency.clone());

        let description = self.prompter.ask_or_blank("Description: ")?;

        let index = self
            .store
            .add(Record::new(date, category, amount, currency, description))?;
        self.prompter
            .say_line(&format!("Record #{} added.", index))
    }

    fn edit(&mut self) -> WalletResult<()> {
        let index = parse_index(
            &self.prompter.ask_or_blank("Index of the record to edit: ")?,
            self.store.len(),
        )?;

        let current = format_record_details(index, self.store.get(index)?);
        self.prompter.say(&current)?;
        self.prompter.say_line("Leave a field blank to keep its value.")?;

        let date = self.prompter.ask_or_blank("New date (YYYY-MM-DD): ")?;
        let category = self.prompter.ask_or_blank("New category (income/expense): ")?;
        let amount = self.prompter.ask_or_blank("New amount: ")?;
        let currency = self.prompter.ask_or_blank("New currency: ")?;
        let description = self.prompter.ask_or_blank("New description: ")?;

        let update = parse_update(
            Some(&date),
            Some(&category),
            Some(&amount),
            Some(&currency),
            Some(&description),
        )?;
        self.store.edit(index, &update)?;
        self.prompter.say_line(&format!("Record #{} updated.", index))
    }

    fn search(&mut self) -> WalletResult<()> {
        self.prompter.say_line("Leave a field blank to match anything.")?;
        let category = self.prompter.ask_or_blank("Category (income/expense): ")?;
        let date = self.prompter.ask_or_blank("Date (YYYY-MM-DD): ")?;
        let amount = self.prompter.ask_or_blank("Amount: ")?;

        let filter = parse_filter(Some(&category), Some(&date), Some(&amount))?;
        let text = format_record_register(&self.store.search(&filter));
        self.prompter.say(&text)
    }

    fn delete(&mut self) -> WalletResult<()> {
        let index = parse_index(
            &self.prompter.ask_or_blank("Index of the record to delete: ")?,
            self.store.len(),
        )?;

        let removed = self.store.delete(index)?;
        self.prompter.say_line("Record deleted:")?;
        self.prompter.say(&format_record_details(index, &removed))
    }

    fn list(&mut self) -> WalletResult<()> {
        let records: Vec<(usize, &Record)> = self.store.records().iter().enumerate().collect();
        let text = format_record_register(&records);
        self.prompter.say(&text)
    }
}

/// Run the menu over a store with the given input and output
pub fn run_menu<R: BufRead, W: Write>(
    store: &mut RecordStore,
    settings: &Settings,
    input: R,
    output: W,
) -> WalletResult<()> {
    Menu::new(store, settings, input, output).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordFilter;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_script(store: &mut RecordStore, script: &str) -> String {
        let settings = Settings::default();
        let mut menu = Menu::new(store, &settings, Cursor::new(script.to_string()), Vec::new());
        menu.run().unwrap();
        String::from_utf8(menu.into_output()).unwrap()
    }

    fn create_test_store() -> (TempDir, RecordStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::open(temp_dir.path().join("records.txt")).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_missing_file_notice_and_exit() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run_script(&mut store, "0\n");

        assert!(output.contains("not found"));
        assert!(output.contains("Goodbye."));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run_script(&mut store, "");
        assert!(output.contains("Goodbye."));
    }

    #[test]
    fn test_add_then_balance() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run_script(
            &mut store,
            "2\n2024-06-01\nincome\n5000\n\nSalary\n2\n2024-06-02\nexpense\n1200.5\nEUR\nRent\n1\n0\n",
        );

        assert_eq!(store.len(), 2);
        assert_eq!(
            store.records()[0],
            Record::new("2024-06-01", Category::Income, 5000.0, "USD", "Salary")
        );
        assert_eq!(store.records()[1].currency, "EUR");
        assert!(output.contains("Balance:  3799.50"));
        assert!(output.contains("Income:   5000.00"));
        assert!(output.contains("Expenses: 1200.50"));
    }

    #[test]
    fn test_add_rejects_bad_category_and_continues() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run_script(&mut store, "2\n2024-06-01\nsalary\n1\n0\n");

        assert!(output.contains("Invalid category: 'salary'"));
        assert!(output.contains("Balance:  0.00"));
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_edit_blank_fields_keep_values() {
        let (_temp_dir, mut store) = create_test_store();
        store
            .add(Record::new("2024-05-02", Category::Expense, 1500.0, "USD", "Groceries"))
            .unwrap();

        run_script(&mut store, "3\n0\n\n\n\n\nWeekly groceries\n0\n");

        assert_eq!(
            store.records()[0],
            Record::new("2024-05-02", Category::Expense, 1500.0, "USD", "Weekly groceries")
        );
    }

    #[test]
    fn test_edit_invalid_index_reports_error() {
        let (_temp_dir, mut store) = create_test_store();
        store
            .add(Record::new("2024-05-02", Category::Expense, 1.0, "USD", "x"))
            .unwrap();

        let output = run_script(&mut store, "3\n-1\n5\n1\n0\n");
        assert!(output.contains("Invalid index: -1"));
        assert!(output.contains("Invalid index: 1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_search_and_delete() {
        let (_temp_dir, mut store) = create_test_store();
        store
            .add(Record::new("2024-01-01", Category::Income, 1000.0, "USD", "Salary"))
            .unwrap();
        store
            .add(Record::new("2024-01-01", Category::Expense, 300.0, "USD", "Rent"))
            .unwrap();

        let output = run_script(&mut store, "4\nincome\n\n\n5\n0\n0\n");
        assert!(output.contains("Salary"));
        assert!(output.contains("Record deleted:"));
        assert_eq!(store.len(), 1);
        assert!(store
            .search(&RecordFilter::new().category(Category::Income))
            .is_empty());
    }

    #[test]
    fn test_unknown_option() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run_script(&mut store, "9\n0\n");
        assert!(output.contains("Unknown option '9'"));
    }

    #[test]
    fn test_storage_failure_ends_session() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let mut store = RecordStore::open(blocker.join("records.txt")).unwrap();

        let settings = Settings::default();
        let result = run_menu(
            &mut store,
            &settings,
            Cursor::new("2\n2024-01-01\nincome\n1\n\nx\n0\n"),
            Vec::new(),
        );
        assert!(result.unwrap_err().is_fatal());
    }
}
