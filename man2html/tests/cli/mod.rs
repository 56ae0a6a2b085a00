//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

struct TestPlan {
    args: Vec<String>,
    stdin_data: String,
    expected_out: String,
    expected_err: String,
    expected_exit_code: i32,
}

fn run_test(plan: TestPlan) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_man2html"))
        .args(&plan.args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn man2html");

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(plan.stdin_data.as_bytes())
            .expect("failed to write stdin");
    }

    let output = child.wait_with_output().expect("failed to wait for man2html");

    similar_asserts::assert_eq!(String::from_utf8_lossy(&output.stdout), plan.expected_out);
    similar_asserts::assert_eq!(String::from_utf8_lossy(&output.stderr), plan.expected_err);
    assert_eq!(output.status.code(), Some(plan.expected_exit_code));
}

fn temp_file(content: &str) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), content).unwrap();
    file
}

fn path_arg(file: &NamedTempFile) -> String {
    file.path().to_string_lossy().to_string()
}

const LS_MAN: &str = ".TH LS 1 2024-01-01 GNU \"User Commands\"
.SH NAME
ls \\- list directory contents
.SH SYNOPSIS
.B ls
[\\fIOPTION\\fR]...
";

const LS_HTML: &str = "<p><span>LS(1)</span><span>User Commands</span><span>LS(1)</span></p>
<h2>NAME</h2><section style=\"margin-left:8%;\">
ls  &minus;list directory contents
</section><h2>SYNOPSIS</h2><section style=\"margin-left:8%;\">
<strong>ls</strong>
[ <i>  OPTION </i> ]... 
</section><p><span>GNU</span><span>2024-01-01</span><span>GNU</span></p>
";

const ECHO_MDOC: &str = ".Dd January 1, 2024
.Dt ECHO 1
.Os NetBSD
.Sh NAME
.Nm echo
.Nd write arguments
";

const ECHO_HTML: &str = "
<p><span>ECHO(1)</span><span>BSD General Commands Manual</span><span>ECHO(1)</span></p><section>

</section><h2>NAME</h2><section style=\"margin-left:8%;\">
<strong>echo</strong>
<span>-- write arguments</span>
</section><p><span>NetBSD</span><span>January 1, 2024</span><span>NetBSD</span></p>
";

#[test]
fn test_man_from_stdin() {
    run_test(TestPlan {
        args: vec![],
        stdin_data: LS_MAN.to_string(),
        expected_out: LS_HTML.to_string(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

#[test]
fn test_mdoc_from_files() {
    let echo = temp_file(ECHO_MDOC);
    let ls = temp_file(LS_MAN);

    run_test(TestPlan {
        args: vec![path_arg(&echo), path_arg(&ls)],
        stdin_data: String::new(),
        expected_out: format!("{ECHO_HTML}{LS_HTML}"),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

#[test]
fn test_forced_dialect() {
    // man macros are unknown to mdoc and only their content is kept
    run_test(TestPlan {
        args: vec!["-m".to_string(), "mdoc".to_string()],
        stdin_data: ".B bold\n".to_string(),
        expected_out: "bold\n\n".to_string(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });

    run_test(TestPlan {
        args: vec!["-m".to_string(), "an".to_string()],
        stdin_data: ".B bold\n".to_string(),
        expected_out: "<strong>bold</strong>\n\n".to_string(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

#[test]
fn test_config_file() {
    let config = temp_file("# site settings\ndialect man\noutput indent 4\n");

    run_test(TestPlan {
        args: vec!["-C".to_string(), path_arg(&config)],
        stdin_data: ".SH X\n".to_string(),
        expected_out: "<h2>X</h2><section style=\"margin-left:4%;\">\n</section>\n".to_string(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

#[test]
fn test_missing_config_file() {
    run_test(TestPlan {
        args: vec!["-C".to_string(), "/nonexistent/man2html.conf".to_string()],
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: "man2html: configuration file was not found: /nonexistent/man2html.conf\n"
            .to_string(),
        expected_exit_code: 1,
    });
}

#[test]
fn test_missing_input_file() {
    run_test(TestPlan {
        args: vec!["/nonexistent/page.1".to_string()],
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: "man2html: No such file or directory (os error 2)\n".to_string(),
        expected_exit_code: 1,
    });
}

#[test]
fn test_empty_input() {
    run_test(TestPlan {
        args: vec!["-".to_string()],
        stdin_data: String::new(),
        expected_out: "\n".to_string(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

#[test]
fn test_unsupported_macro_warning() {
    let output = Command::new(env!("CARGO_BIN_EXE_man2html"))
        .args(["-m", "mdoc", "-"])
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(b".Zz hello\n.Nm ls\n.Yy a\n.Zz again\n")?;
            }
            child.wait_with_output()
        })
        .expect("failed to run man2html");

    let stderr = String::from_utf8_lossy(&output.stderr);
    let warnings: Vec<&str> = stderr
        .lines()
        .filter(|line| line.contains("unsupported macro:"))
        .collect();

    assert_eq!(warnings.len(), 3, "{stderr}");
    assert_eq!(
        warnings
            .iter()
            .filter(|line| line.ends_with("unsupported macro: Zz"))
            .count(),
        2
    );
    assert!(warnings.iter().all(|line| line.contains("WARN")));
    similar_asserts::assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "hello\n<strong>ls</strong>\na\nagain\n\n"
    );
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_no_warnings_without_logger_config() {
    run_test(TestPlan {
        args: vec!["-m".to_string(), "mdoc".to_string()],
        stdin_data: ".Zz hello\n".to_string(),
        expected_out: "hello\n\n".to_string(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}
