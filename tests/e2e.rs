use std::io::Write;
use std::process::{Command, Stdio};

fn run(script: &[&str]) -> (String, String, bool) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_shoplet"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .env("RUST_LOG", "warn")
        .spawn()
        .expect("failed to run binary");

    let input = script.join("\n") + "\n";
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().expect("failed to wait for binary");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

#[test]
fn exit_from_role_select() {
    let (stdout, _stderr, success) = run(&["3"]);

    assert!(success);
    assert!(stdout.contains("Choose user type:"));
    assert!(stdout.contains("Exiting the program. Goodbye!"));
}

#[test]
fn failed_login_warns_but_does_not_terminate() {
    let (stdout, stderr, success) = run(&["1", "admin1", "wrong", "3"]);

    assert!(success);
    assert!(stdout.contains("Login failed. Please try again."));
    assert!(stderr.contains("login failed"));
}

#[test]
fn user_buys_two_seeded_items_with_cod() {
    let (stdout, _stderr, success) = run(&[
        "2", "user1", "userpassword", // login
        "1", // view items
        "2", "001", // Kemeja, 150.00
        "2", "003", // Sepatu, 200.00
        "3", "2", // checkout, pay COD
        "4", // view history
        "5", // exit
    ]);

    assert!(success);
    assert!(stdout.contains("Regular user login successful!"));
    assert!(stdout.contains("ID: 001 | Name: Kemeja | Price: 150.00"));
    assert!(stdout.contains("Total Price: 350.00"));
    assert!(stdout.contains("Checkout successful! Thank you for shopping."));
    assert!(stdout.contains("Shopping History for User: user1"));
    assert!(stdout.contains("Payment Method: COD"));
}

#[test]
fn admin_edits_seeded_item_price() {
    let (stdout, _stderr, success) = run(&[
        "1", "admin2", "adminpassword2", // second seeded admin
        "3", "001", "", "175.50", // keep name, new price
        "6", // logout
        "2", "user1", "userpassword", // user checks the listing
        "1", "5",
    ]);

    assert!(success);
    assert!(stdout.contains("Item edited successfully!"));
    assert!(stdout.contains("ID: 001 | Name: Kemeja | Price: 175.50"));
}

#[test]
fn closed_input_stream_ends_cleanly() {
    // Script stops mid-menu; the process should still exit 0.
    let (stdout, _stderr, success) = run(&["2", "user1", "userpassword"]);

    assert!(success);
    assert!(stdout.contains("User Menu:"));
}
