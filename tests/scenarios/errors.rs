use crate::common::*;

#[test]
fn invalid_form_exits_non_zero_and_names_the_file() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", "[[inputs]\nname = ");

    let result = env.run(&["quote", "form.toml"]);
    assert!(!result.is_success());
    assert_ne!(result.exit_code, 0);
    assert!(result.stderr.contains("invalid form"), "{}", result.stderr);
    assert!(result.stderr.contains("form.toml"));
}

#[test]
fn missing_form_is_an_error() {
    let env = TestEnv::new();

    let result = env.run(&["quote", "missing.toml"]);
    assert!(!result.is_success());
    assert!(!result.stderr.is_empty());
}

#[test]
fn negative_ticket_price_in_config_is_rejected() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", UNCOVERED_FORM);
    env.write_project_file("tally.toml", "[pricing]\nticket_price = -5\n");

    let result = env.run(&["quote", "form.toml"]);
    assert!(!result.is_success());
}

#[test]
fn session_needs_a_terminal() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", SERIES_BONUS_FORM);

    let result = env.run(&["session", "form.toml"]);
    assert!(!result.is_success());
    assert!(
        result.stderr.contains("interactive terminal"),
        "{}",
        result.stderr
    );
}

#[test]
fn unknown_subcommand_is_rejected_by_the_parser() {
    let env = TestEnv::new();

    let result = env.run(&["frobnicate"]);
    assert!(!result.is_success());
    assert_eq!(result.exit_code, 2);
}

#[test]
fn oversized_ticket_price_is_an_error_not_a_crash() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", UNCOVERED_FORM);
    env.write_project_file(
        "tally.toml",
        "[pricing]\nticket_price = 9223372036854775807\n",
    );

    let result = env.run(&["quote", "form.toml"]);
    assert!(!result.is_success());
    assert!(result.stderr.contains("too large"), "{}", result.stderr);
    assert!(!result.stderr.contains("panicked"));
}
