use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{error, warn};

use crate::desk::command::{parse_birth_date, Command, Registration};
use crate::desk::errors::DeskError;
use crate::desk::FrontDesk;
use crate::registry::{list_accounts, list_customers};
use crate::types::{AccountNumber, Monetary, TaxId};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Action {
    Register,
    Open,
    Select,
    Deposit,
    Withdraw,
    Statement,
    Customers,
    Accounts
}

/// One line of a replay script. Which columns matter depends on the action.
#[derive(Debug, Deserialize)]
struct ReplayRow {
    action: Action,
    customer: Option<TaxId>,
    amount: Option<Monetary>,
    branch: Option<String>,
    account: Option<AccountNumber>,
    name: Option<String>,
    birth_date: Option<String>,
    address: Option<String>
}

/// Feeds a CSV script through the desk and writes every reply, then the directory, to `output`.
pub fn replay_file(desk: &mut FrontDesk, path: &Path, output: &mut impl Write) -> Result<(), DeskError> {
    let file = File::open(path).map_err(|error| {
        error!("Error opening replay script at path: {} | {error}", path.display());
        error
    })?;

    replay(desk, BufReader::new(file), output)
}

pub fn replay(desk: &mut FrontDesk, script: impl Read, output: &mut impl Write) -> Result<(), DeskError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(script);

    for (index, result) in reader.deserialize::<ReplayRow>().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(error) => {
                error!("Replay deserialization error: {error}");
                continue;
            }
        };

        let Some(commands) = to_commands(row) else {
            warn!("Replay row {} is missing a required column, skipping", index + 1);
            continue;
        };

        for command in commands {
            let unknown_customer = matches!(
                &command,
                Command::SelectCustomer(tax_id) if desk.registry().customer(tax_id).is_none()
            );

            writeln!(output, "{}", desk.execute(command))?;

            if unknown_customer {
                warn!("Replay row {} names an unknown customer, skipping", index + 1);
                break;
            }
        }
    }

    write!(output, "{}", list_customers(desk.registry()))?;
    write!(output, "{}", list_accounts(desk.registry()))?;
    output.flush()?;

    Ok(())
}

/// Translates a row into desk commands. Rows naming a customer first switch to that customer,
/// and the rest of the row only runs if that switch succeeds.
fn to_commands(row: ReplayRow) -> Option<Vec<Command>> {
    let ReplayRow { action, customer, amount, branch, account, name, birth_date, address } = row;

    if let Action::Register = action {
        let registration = Registration {
            tax_id: customer?,
            name: name?,
            birth_date: parse_birth_date(&birth_date?)?,
            address: address.unwrap_or_default(),
            branch: branch?
        };

        return Some(vec![Command::RegisterCustomer(registration)]);
    }

    let command = match action {
        Action::Open => Command::OpenAccount { branch: branch? },
        Action::Select => Command::SelectAccount(account?),
        Action::Deposit => Command::Deposit(amount?),
        Action::Withdraw => Command::Withdraw(amount?),
        Action::Statement => Command::Statement,
        Action::Customers => Command::ListCustomers,
        Action::Accounts => Command::ListAccounts,
        Action::Register => return None
    };

    let mut commands = Vec::with_capacity(2);

    if let Some(tax_id) = customer {
        commands.push(Command::SelectCustomer(tax_id));
    }

    commands.push(command);

    Some(commands)
}
