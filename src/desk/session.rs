use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::info;

use crate::desk::command::{parse_birth_date, Command, MenuOption, Registration};
use crate::desk::errors::DeskError;
use crate::desk::FrontDesk;
use crate::models::Address;
use crate::types::{AccountNumber, Monetary};

const MENU: &str = "\
[d]  Deposit            [u]  New customer
[s]  Withdraw           [c]  New account
[e]  Statement          [a]  Select account
[i]  Switch customer    [lu] List customers
[q]  Quit               [lc] List accounts";

const BANNER_WIDTH: usize = 80;

/// Interactive menu loop over any line-based input and output.
///
/// End of input behaves like [q] so piped sessions terminate cleanly.
pub struct Session<R, W> {
    desk: FrontDesk,
    input: R,
    output: W
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(desk: FrontDesk, input: R, output: W) -> Self {
        Self { desk, input, output }
    }

    pub fn desk(&self) -> &FrontDesk {
        &self.desk
    }

    pub fn run(&mut self) -> Result<(), DeskError> {
        self.banner()?;

        let mut message = String::new();

        loop {
            if self.desk.current_customer().is_none() {
                writeln!(self.output, "No customer identified. Registering a new customer.")?;
                writeln!(self.output, "{}", "-".repeat(54))?;

                let Some(registration) = self.registration_form()? else {
                    break;
                };

                let reply = self.desk.execute(Command::RegisterCustomer(registration));
                writeln!(self.output, "{reply}")?;
                continue;
            }

            self.menu(&message)?;

            let Some(key) = self.read_line()? else {
                break;
            };

            let Some(option) = MenuOption::from_key(&key) else {
                message = "Unknown option. Please choose one of the options above.".to_string();
                continue;
            };

            if option == MenuOption::Quit {
                break;
            }

            let Some(command) = self.collect(option)? else {
                break;
            };

            message = self.desk.execute(command);
        }

        info!("Session finished");
        writeln!(self.output, "{}", self.desk.execute(Command::Quit))?;
        self.output.flush()?;

        Ok(())
    }

    fn banner(&mut self) -> Result<(), DeskError> {
        let title = format!("BANK {} - FRONT DESK", self.desk.settings().bank_name);

        writeln!(self.output, "{}", "=".repeat(BANNER_WIDTH))?;
        writeln!(self.output, "{:^width$}", title, width = BANNER_WIDTH)?;
        writeln!(self.output, "{}", "=".repeat(BANNER_WIDTH))?;

        Ok(())
    }

    fn menu(&mut self, message: &str) -> Result<(), DeskError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "=".repeat(40))?;
        writeln!(self.output, "{}", self.desk.header())?;
        writeln!(self.output)?;
        writeln!(self.output, "{MENU}")?;
        writeln!(self.output, "-----------------")?;
        writeln!(self.output, "{message}")?;
        write!(self.output, "=> ")?;
        self.output.flush()?;

        Ok(())
    }

    /// Prompts for whatever `option` needs. `None` means input ended mid-form.
    fn collect(&mut self, option: MenuOption) -> Result<Option<Command>, DeskError> {
        let command = match option {
            MenuOption::Deposit => self.prompt_amount("Deposit amount: ")?.map(Command::Deposit),
            MenuOption::Withdraw => self.prompt_amount("Withdrawal amount: ")?.map(Command::Withdraw),
            MenuOption::Statement => Some(Command::Statement),
            MenuOption::NewCustomer => self.registration_form()?.map(Command::RegisterCustomer),
            MenuOption::NewAccount => {
                writeln!(self.output, "Opening new account")?;
                self.prompt("Branch: ")?.map(|branch| Command::OpenAccount { branch })
            },
            MenuOption::SelectAccount => self.prompt_number("Account number: ")?.map(Command::SelectAccount),
            MenuOption::SwitchCustomer => self.prompt("Tax id: ")?.map(Command::SelectCustomer),
            MenuOption::ListCustomers => Some(Command::ListCustomers),
            MenuOption::ListAccounts => Some(Command::ListAccounts),
            MenuOption::Quit => Some(Command::Quit)
        };

        Ok(command)
    }

    fn registration_form(&mut self) -> Result<Option<Registration>, DeskError> {
        writeln!(self.output, "Registering new customer")?;

        let Some(tax_id) = self.prompt("Tax id: ")? else { return Ok(None) };
        let Some(name) = self.prompt("Name: ")? else { return Ok(None) };
        let Some(birth_date) = self.prompt_date("Birth date (dd/mm/yyyy): ")? else { return Ok(None) };
        let Some(street) = self.prompt("Street: ")? else { return Ok(None) };
        let Some(number) = self.prompt("Number: ")? else { return Ok(None) };
        let Some(district) = self.prompt("District: ")? else { return Ok(None) };
        let Some(city) = self.prompt("City: ")? else { return Ok(None) };
        let Some(state) = self.prompt("State: ")? else { return Ok(None) };
        let Some(branch) = self.prompt("Branch: ")? else { return Ok(None) };

        let address = Address { street, number, district, city, state };

        Ok(Some(Registration {
            tax_id,
            name,
            birth_date,
            address: address.to_string(),
            branch
        }))
    }

    fn prompt_amount(&mut self, label: &str) -> Result<Option<Monetary>, DeskError> {
        loop {
            let Some(value) = self.prompt(label)? else { return Ok(None) };

            match Monetary::from_str(&value) {
                Ok(amount) => return Ok(Some(amount)),
                Err(error) => writeln!(self.output, "Invalid amount '{value}': {error}")?
            }
        }
    }

    fn prompt_number(&mut self, label: &str) -> Result<Option<AccountNumber>, DeskError> {
        loop {
            let Some(value) = self.prompt(label)? else { return Ok(None) };

            match value.parse::<AccountNumber>() {
                Ok(number) => return Ok(Some(number)),
                Err(error) => writeln!(self.output, "Invalid account number '{value}': {error}")?
            }
        }
    }

    fn prompt_date(&mut self, label: &str) -> Result<Option<chrono::NaiveDate>, DeskError> {
        loop {
            let Some(value) = self.prompt(label)? else { return Ok(None) };

            match parse_birth_date(&value) {
                Some(date) => return Ok(Some(date)),
                None => writeln!(self.output, "Invalid date '{value}', expected dd/mm/yyyy")?
            }
        }
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>, DeskError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>, DeskError> {
        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }
}
