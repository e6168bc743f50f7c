mod support;

use predicates::str::contains;
use support::Sandbox;

const MIXED_FILE: &str = "T/nextfalse/nextgood\nnot a record\nT/nexttrue/nextalso good\n";

#[test]
fn skip_policy_warns_and_keeps_going() {
    let sandbox = Sandbox::new();
    sandbox.write_tasks(MIXED_FILE);

    sandbox
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("1.[T][ ] good"))
        .stdout(contains("2.[T][X] also good"))
        .stderr(contains("skipped 1 malformed line"));
}

#[test]
fn skipped_lines_are_dropped_on_next_save() {
    let sandbox = Sandbox::new();
    sandbox.write_tasks(MIXED_FILE);

    sandbox.cmd().args(["todo", "new"]).assert().success();

    assert_eq!(
        sandbox.read_tasks(),
        "T/nextfalse/nextgood\nT/nexttrue/nextalso good\nT/nextfalse/nextnew\n"
    );
}

#[test]
fn abort_policy_fails_the_load() {
    let sandbox = Sandbox::new();
    sandbox.write_tasks(MIXED_FILE);
    sandbox.write_config("[storage]\non_decode_error = \"abort\"\n");

    sandbox
        .cmd()
        .arg("list")
        .assert()
        .failure()
        .code(3)
        .stderr(contains("Malformed record at line 2"));

    // The file is left untouched for the user to repair.
    assert_eq!(sandbox.read_tasks(), MIXED_FILE);
}

#[test]
fn unknown_discriminator_and_bad_date_are_malformed() {
    let sandbox = Sandbox::new();
    sandbox.write_tasks(
        "X/nextfalse/nextmystery\nD/nextfalse/nextrent/next2024-13-01\nT/nextfalse/nextok\n",
    );

    sandbox
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("1.[T][ ] ok"))
        .stderr(contains("skipped 2 malformed line"));
}
