use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn taskbook_help_works() {
    Command::cargo_bin("taskbook")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("personal task tracker"));
}

#[test]
fn subcommand_help_works() {
    let subcommands = ["todo", "deadline", "event", "list", "done", "delete", "find"];

    for cmd in subcommands {
        Command::cargo_bin("taskbook")
            .expect("binary")
            .arg(cmd)
            .arg("--help")
            .assert()
            .success();
    }
}
