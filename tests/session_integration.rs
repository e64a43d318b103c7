use std::io::Write;
use std::process::{Command, Stdio};

fn run_session(input: &[u8]) -> String {
    let exe = env!("CARGO_BIN_EXE_hotseat_chess");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn session binary");

    child.stdin.as_mut().unwrap().write_all(input).unwrap();
    let output = child.wait_with_output().expect("failed to read output");
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn session_selects_and_moves() {
    let stdout = run_session(b"activate e2\nactivate e4\nquit\n");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["selected e2 pawn destinations e4 e3", "moved e2 e4 pawn"]
    );
}

#[test]
fn session_reselects_and_cancels() {
    let stdout = run_session(b"click 52\nclick 57\nclick 36\nquit\n");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "selected e2 pawn destinations e4 e3");
    assert_eq!(lines[1], "reselected e2 b1 knight destinations a3 c3");
    assert_eq!(lines[2], "cancelled b1");
}

#[test]
fn session_reports_options_and_handles_setoption() {
    let input = b"options\nsetoption name Notation value index\nsetoption name Bogus value 1\nactivate 62\nquit\n";
    let stdout = run_session(input);

    assert!(stdout.contains("option name Coordinates type check default true"));
    assert!(stdout.contains("option name Notation type combo default algebraic"));
    assert!(stdout.contains("option name Echo Board"));
    assert!(stdout.contains("error: Unknown option 'Bogus'"));
    assert!(stdout.contains("selected 62 knight destinations 45 47"));
}

#[test]
fn session_renders_board_and_survives_bad_input() {
    let stdout = run_session(b"show\nactivate q9\nfly away\nlayout 8/8\nshow\n");
    assert!(stdout.contains("8 | R | N | B | Q | K | B | N | R |"));
    assert!(stdout.contains("1 | R | N | B | Q | K | B | N | R |"));
    assert!(stdout.contains("error: Invalid square notation 'q9'"));
    assert!(stdout.contains("error: unknown command 'fly away'"));
    assert!(stdout.contains("error: Layout must have 8 rows, found 2"));
    // Ran to end of input without quit; the second board is still printed.
    assert_eq!(stdout.matches("    a   b   c   d   e   f   g   h").count(), 2);
}

#[test]
fn verbose_cluster_logs_transitions_to_stderr() {
    let exe = env!("CARGO_BIN_EXE_hotseat_chess");
    let mut child = Command::new(exe)
        .arg("-vvv")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn session binary");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"activate e2\nquit\n")
        .unwrap();
    let output = child.wait_with_output().expect("failed to read output");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stdout.trim_end(), "selected e2 pawn destinations e4 e3");
    assert!(stderr.contains("selected pawn at 52, 2 destinations"));
}

#[test]
fn unknown_flag_prints_usage() {
    let exe = env!("CARGO_BIN_EXE_hotseat_chess");
    let output = Command::new(exe)
        .arg("-vx")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run session binary");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage"));
}

#[test]
fn legal_moves_binary_lists_destinations() {
    let exe = env!("CARGO_BIN_EXE_legal_moves");
    let output = Command::new(exe)
        .args(["b1", "e2", "d1"])
        .output()
        .expect("failed to run legal_moves");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["b1 knight: [a3 c3]", "e2 pawn: [e4 e3]", "d1 queen: []"]
    );
}
