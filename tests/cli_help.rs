use assert_cmd::Command;

#[test]
fn cli_help_smoke() {
    let mut cmd = Command::cargo_bin("kira-dpcrqc").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}
