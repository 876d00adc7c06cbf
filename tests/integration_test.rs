use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use anyhow::{anyhow, Result};

#[test]
fn test_cli_replays_sample_script() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_bank-front-desk");
    let script_path = Path::new("samples").join("desk_script.csv");

    let output = Command::new(binary_path)
        .arg("--replay")
        .arg(script_path)
        .output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("Customer [12345678900] registered with account [1]."));
    assert!(stdout.contains("Deposit completed. Balance: 1000.00"));
    assert!(stdout.contains("exceeds transaction limit"));
    assert!(stdout.contains("Withdrawal completed. Balance: 0.00"));
    assert!(stdout.contains("insufficient funds"));
    assert!(stdout.contains("amount must be greater than zero"));
    assert!(stdout.contains("Deposit completed. Balance: 75.25"));

    let directory = stdout.find("BANK CUSTOMERS").ok_or_else(|| anyhow!("customer listing missing"))?;
    let listing: Vec<&str> = stdout[directory..].lines().collect();

    assert_eq!(listing, vec![
        "BANK CUSTOMERS",
        "12345678900: Maria Silva",
        "98765432100: Joao Pereira",
        "BANK ACCOUNTS",
        "1: 12345678900 (Maria Silva)",
        "2: 98765432100 (Joao Pereira)",
        "3: 98765432100 (Joao Pereira)",
    ]);

    Ok(())
}

#[test]
fn test_cli_statement_keeps_only_successful_transactions() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_bank-front-desk");
    let script_path = Path::new("samples").join("desk_script.csv");

    let output = Command::new(binary_path)
        .arg("--replay")
        .arg(script_path)
        .output()?;

    let stdout = String::from_utf8(output.stdout)?;
    let statement = stdout.find("ACCOUNT STATEMENT").ok_or_else(|| anyhow!("statement missing"))?;
    let entries: Vec<&str> = stdout[statement..].lines()
        .take_while(|line| !line.starts_with("Balance:"))
        .filter(|line| line.starts_with("+ ") || line.starts_with("- "))
        .collect();

    assert_eq!(entries.len(), 3);
    assert!(entries[0].starts_with("+ 1000.00"));
    assert!(entries[1].starts_with("- 500.00"));
    assert!(entries[2].starts_with("- 500.00"));

    Ok(())
}

#[test]
fn test_cli_interactive_session_over_stdin() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_bank-front-desk");

    let mut child = Command::new(binary_path)
        .args(["--bank-name", "ACME", "--withdrawal-limit", "100", "--max-withdrawals", "1"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let mut stdin = child.stdin.take().ok_or_else(|| anyhow!("stdin unavailable"))?;
    stdin.write_all(b"111\nAna\n01/01/1990\nRua A\n1\nCentro\nRecife\nPE\n0001\nd\n300\ns\n150\ns\n100\ns\n50\nlc\nq\n")?;
    drop(stdin);

    let output = child.wait_with_output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("BANK ACME - FRONT DESK"));
    assert!(stdout.contains("Customer: 111  Account: 1  Branch: 0001"));
    assert!(stdout.contains("exceeds transaction limit"));
    assert!(stdout.contains("Withdrawal completed. Balance: 200.00"));
    assert!(stdout.contains("exceeded allowed withdrawal count"));
    assert!(stdout.contains("BANK ACCOUNTS\n1: 111 (Ana)"));

    Ok(())
}

#[test]
fn test_cli_fails_on_missing_replay_script() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_bank-front-desk");

    let output = Command::new(binary_path)
        .args(["--replay", "samples/does_not_exist.csv"])
        .output()?;

    assert!(!output.status.success());

    Ok(())
}
