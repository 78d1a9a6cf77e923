use crate::currency;
use crate::errors::StoreError;
use crate::models::{EmployeeEdit, SalaryUpdate};
use crate::prompt::PromptSequence;
use crate::report::{self, Capabilities, ChartPoint, TableRow};
use crate::store::EmployeeStore;
use crate::utils;

/// User-facing commands, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Register,
    SetSalary,
    Edit,
    Search,
    Table,
    Chart,
    Exit,
}

impl Command {
    pub fn all() -> [Command; 7] {
        [
            Command::Register,
            Command::SetSalary,
            Command::Edit,
            Command::Search,
            Command::Table,
            Command::Chart,
            Command::Exit,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::Register => "Register New Employee",
            Command::SetSalary => "Set Salary",
            Command::Edit => "Edit Employee Info",
            Command::Search => "Search Employee",
            Command::Table => "Employee Table",
            Command::Chart => "Salary Chart",
            Command::Exit => "Exit",
        }
    }

    /// Keyboard shortcut, the digits 1 to 7.
    pub fn shortcut(&self) -> char {
        match self {
            Command::Register => '1',
            Command::SetSalary => '2',
            Command::Edit => '3',
            Command::Search => '4',
            Command::Table => '5',
            Command::Chart => '6',
            Command::Exit => '7',
        }
    }

    pub fn from_shortcut(key: &str) -> Option<Command> {
        Command::all().into_iter().find(|c| key.starts_with(c.shortcut()) && key.len() == 1)
    }
}

/// What a finished prompt sequence feeds into.
#[derive(Debug, Clone, PartialEq)]
pub enum Form {
    Register,
    SetSalary,
    Edit,
    Search,
    /// Second half of an edit whose user asked to change the salary too.
    EditSalary { id: String, edit: EmployeeEdit },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Prompt(Form, PromptSequence),
    Success(String),
    Failure(String),
    Info(String),
    Table(Vec<TableRow>),
    Chart(Vec<ChartPoint>),
    ConfirmExit,
}

fn currency_prompt(prefix: &str) -> String {
    let symbols: Vec<&str> = currency::supported_symbols().collect();
    format!("{prefix} ({}):", symbols.join(" "))
}

/// Starts `command`: opens its prompts or answers it right away.
pub fn begin(command: Command, store: &EmployeeStore, caps: Capabilities) -> Outcome {
    match command {
        Command::Register => Outcome::Prompt(
            Form::Register,
            PromptSequence::new("Register Employee", ["Full Name:", "Employee ID:", "Job Title:"]),
        ),
        Command::SetSalary => Outcome::Prompt(
            Form::SetSalary,
            PromptSequence::new(
                "Set Salary",
                ["Enter Employee ID:".to_string(), currency_prompt("Currency symbol"), "Salary amount:".to_string()],
            ),
        ),
        Command::Edit => Outcome::Prompt(
            Form::Edit,
            PromptSequence::new(
                "Edit Employee",
                [
                    "Enter Employee ID:",
                    "New Full Name (leave blank to keep):",
                    "New Job Title (leave blank to keep):",
                    "Update salary? (yes/no):",
                ],
            ),
        ),
        Command::Search => Outcome::Prompt(
            Form::Search,
            PromptSequence::new("Search Employee", ["Enter Employee ID:"]),
        ),
        Command::Table => match report::table_view(store.records()) {
            Err(nothing) => Outcome::Info(nothing.to_string()),
            Ok(_) if !caps.table => Outcome::Failure("Table view is not available in this build.".into()),
            Ok(rows) => Outcome::Table(rows),
        },
        Command::Chart => match report::chart_view(store.records()) {
            Err(nothing) => Outcome::Info(nothing.to_string()),
            Ok(_) if !caps.chart => Outcome::Failure("Salary chart is not available in this build.".into()),
            Ok(series) => Outcome::Chart(series),
        },
        Command::Exit => Outcome::ConfirmExit,
    }
}

/// Applies the answers of a completed prompt sequence.
pub fn finish(form: Form, answers: Vec<String>, store: &mut EmployeeStore) -> Outcome {
    match form {
        Form::Register => {
            let Ok([name, id, position]) = <[String; 3]>::try_from(answers) else {
                return malformed();
            };
            respond(store.register(&id, &name, &position), "Employee registered.")
        }
        Form::SetSalary => {
            let Ok([id, symbol, amount]) = <[String; 3]>::try_from(answers) else {
                return malformed();
            };
            respond(store.set_salary(&id, &symbol, &amount), "Salary recorded.")
        }
        Form::Search => {
            let Ok([id]) = <[String; 1]>::try_from(answers) else {
                return malformed();
            };
            match store.search(&id) {
                Ok(rec) => Outcome::Info(report::describe(rec)),
                Err(e) => failure(e),
            }
        }
        Form::Edit => {
            let Ok([id, name, position, update_salary]) = <[String; 4]>::try_from(answers) else {
                return malformed();
            };
            if store.find_by_id(&id).is_none() {
                return failure(StoreError::EmployeeNotFound(id));
            }
            let edit = EmployeeEdit {
                name: utils::non_blank(&name).map(str::to_string),
                position: utils::non_blank(&position).map(str::to_string),
                salary: None,
            };
            if utils::is_yes(&update_salary) {
                return Outcome::Prompt(
                    Form::EditSalary { id, edit },
                    PromptSequence::new(
                        "Update Salary",
                        [currency_prompt("New Currency symbol"), "New Salary amount:".to_string()],
                    ),
                );
            }
            respond(store.edit(&id, &edit), "Info updated.")
        }
        Form::EditSalary { id, mut edit } => {
            let Ok([symbol, amount_text]) = <[String; 2]>::try_from(answers) else {
                return malformed();
            };
            edit.salary = Some(SalaryUpdate { symbol, amount_text });
            respond(store.edit(&id, &edit), "Info and salary updated.")
        }
    }
}

fn respond(result: Result<(), StoreError>, success: &str) -> Outcome {
    match result {
        Ok(()) => Outcome::Success(success.to_string()),
        Err(e) => failure(e),
    }
}

fn failure(e: StoreError) -> Outcome {
    tracing::debug!(error = %e, "command rejected");
    Outcome::Failure(e.to_string())
}

fn malformed() -> Outcome {
    Outcome::Failure("Input was incomplete, please try again.".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Step;
    use crate::storage::DataFile;
    use tempfile::TempDir;

    const ALL: Capabilities = Capabilities { table: true, chart: true };

    fn store_in(dir: &TempDir) -> EmployeeStore {
        EmployeeStore::open(DataFile::new(dir.path().join("employees.json")))
    }

    /// Runs a command through its prompts, answering with `answers`.
    fn run(store: &mut EmployeeStore, command: Command, answers: &[&str]) -> Outcome {
        let mut outcome = begin(command, store, ALL);
        let mut answers = answers.iter();
        while let Outcome::Prompt(form, mut seq) = outcome {
            let collected = loop {
                let answer = answers.next().expect("ran out of answers");
                if let Step::Complete(all) = seq.submit(*answer) {
                    break all;
                }
            };
            outcome = finish(form, collected, store);
            if answers.as_slice().is_empty() {
                return outcome;
            }
        }
        outcome
    }

    #[test]
    fn shortcuts_map_to_menu_order() {
        assert_eq!(Command::from_shortcut("1"), Some(Command::Register));
        assert_eq!(Command::from_shortcut("7"), Some(Command::Exit));
        assert_eq!(Command::from_shortcut("8"), None);
        assert_eq!(Command::from_shortcut("12"), None);
    }

    #[test]
    fn register_set_salary_and_search() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let out = run(&mut store, Command::Register, &["Ann Lee", "E1", "Engineer"]);
        assert_eq!(out, Outcome::Success("Employee registered.".into()));
        let out = run(&mut store, Command::SetSalary, &["E1", "$", "5000"]);
        assert_eq!(out, Outcome::Success("Salary recorded.".into()));

        match run(&mut store, Command::Search, &["E1"]) {
            Outcome::Info(text) => {
                assert!(text.contains("5000"));
                assert!(text.contains('$'));
                assert!(text.contains("5000.00"));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(
            run(&mut store, Command::Search, &["E2"]),
            Outcome::Failure("Employee 'E2' not found.".into())
        );
    }

    #[test]
    fn duplicate_registration_reports_error() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        run(&mut store, Command::Register, &["Ann Lee", "E1", "Engineer"]);
        let out = run(&mut store, Command::Register, &["Bo Chan", "E1", "Designer"]);
        assert_eq!(out, Outcome::Failure("Employee ID 'E1' already exists. Use a unique ID.".into()));
        assert_eq!(store.records().len(), 1);
    }

    #[test]
    fn edit_without_salary_change() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        run(&mut store, Command::Register, &["Ann Lee", "E1", "Engineer"]);

        let out = run(&mut store, Command::Edit, &["E1", "", "Lead", "no"]);
        assert_eq!(out, Outcome::Success("Info updated.".into()));
        assert_eq!(store.find_by_id("E1").unwrap().position, "Lead");
    }

    #[test]
    fn edit_with_salary_opens_follow_up() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        run(&mut store, Command::Register, &["Ann Lee", "E1", "Engineer"]);

        let out = run(&mut store, Command::Edit, &["E1", "Ann Smith", "", "YES"]);
        let Outcome::Prompt(form, seq) = out else { panic!("expected follow-up prompt") };
        assert_eq!(seq.title(), "Update Salary");
        // Nothing changes until the follow-up completes.
        assert_eq!(store.find_by_id("E1").unwrap().name, "Ann Lee");

        let out = finish(form, vec!["€".into(), "3000".into()], &mut store);
        assert_eq!(out, Outcome::Success("Info and salary updated.".into()));
        let rec = store.find_by_id("E1").unwrap();
        assert_eq!(rec.name, "Ann Smith");
        assert_eq!(rec.salary().unwrap().symbol, "€");
    }

    #[test]
    fn edit_of_unknown_id_fails_before_follow_up() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let out = run(&mut store, Command::Edit, &["E9", "", "", "yes"]);
        assert_eq!(out, Outcome::Failure("Employee 'E9' not found.".into()));
    }

    #[test]
    fn table_and_chart_report_nothing_to_display() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        assert_eq!(begin(Command::Table, &store, ALL), Outcome::Info("No employee data to display.".into()));
        assert_eq!(begin(Command::Chart, &store, ALL), Outcome::Info("No employee data to display.".into()));

        run(&mut store, Command::Register, &["Ann Lee", "E1", "Engineer"]);
        assert!(matches!(begin(Command::Table, &store, ALL), Outcome::Table(rows) if rows.len() == 1));
        assert_eq!(begin(Command::Chart, &store, ALL), Outcome::Info("No valid salary data to plot.".into()));

        run(&mut store, Command::SetSalary, &["E1", "₽", "100000"]);
        match begin(Command::Chart, &store, ALL) {
            Outcome::Chart(series) => {
                assert_eq!(series[0].label, "Ann Lee (Engineer)");
                assert!((series[0].value - 1100.0).abs() < 1e-6);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_renderer_refuses_to_render() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        run(&mut store, Command::Register, &["Ann Lee", "E1", "Engineer"]);
        run(&mut store, Command::SetSalary, &["E1", "$", "10"]);

        let none = Capabilities { table: false, chart: false };
        assert!(matches!(begin(Command::Table, &store, none), Outcome::Failure(_)));
        assert!(matches!(begin(Command::Chart, &store, none), Outcome::Failure(_)));
    }

    #[test]
    fn currency_prompt_lists_accepted_symbols() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let Outcome::Prompt(_, mut seq) = begin(Command::SetSalary, &store, ALL) else {
            panic!("expected prompts")
        };
        seq.submit("E1");
        assert_eq!(seq.current(), Some("Currency symbol ($ € 3 ¥ ₽ ₹ ﷼):"));
    }

    #[test]
    fn exit_asks_for_confirmation() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(begin(Command::Exit, &store, ALL), Outcome::ConfirmExit);
    }
}
