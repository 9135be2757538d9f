use crate::common::*;

#[test]
fn project_config_overrides_the_tariff() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", UNCOVERED_FORM);
    env.write_project_file(
        "tally.toml",
        r#"
[pricing]
ticket_price = 30
currency = "CHF"
"#,
    );

    let result = env.run(&["quote", "form.toml", "--json"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let event = &result.json_lines()[0];
    assert_eq!(event["quote"]["final_price"], 30);
    assert_eq!(event["panel"]["price"], "30");
}

#[test]
fn user_config_applies_when_project_has_none() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", UNCOVERED_FORM);
    env.write_user_config(
        r#"
[labels]
locale = "de"
"#,
    );

    let result = env.run(&["quote", "form.toml", "--json"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let event = &result.json_lines()[0];
    assert_eq!(event["panel"]["details"], "1 Positionen gewählt");
}

#[test]
fn project_config_wins_over_user_config() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", UNCOVERED_FORM);
    env.write_user_config("[pricing]\nticket_price = 40\n");
    env.write_project_file("tally.toml", "[pricing]\nticket_price = 25\n");

    let result = env.run(&["quote", "form.toml", "--json"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(result.json_lines()[0]["quote"]["final_price"], 25);
}

#[test]
fn env_var_overrides_config_file() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", UNCOVERED_FORM);
    env.write_project_file("tally.toml", "[pricing]\nticket_price = 30\n");

    let result = env.run_with_env(
        &["quote", "form.toml", "--json"],
        &[("TALLY_TICKET_PRICE", "19,50")],
    );
    assert!(result.is_success(), "{}", result.combined_output());

    let event = &result.json_lines()[0];
    assert_eq!(event["quote"]["final_price"], 19.5);
    assert_eq!(event["panel"]["price"], "19.5");
}

#[test]
fn explicit_config_flag_is_used() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", UNCOVERED_FORM);
    env.write_project_file("configs/cheap.toml", "[pricing]\nticket_price = 10\n");

    let result = env.run(&["--config", "configs/cheap.toml", "quote", "form.toml", "--json"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(result.json_lines()[0]["quote"]["final_price"], 10);
}

#[test]
fn unknown_config_key_warns_with_suggestion() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", UNCOVERED_FORM);
    env.write_project_file("tally.toml", "[pricing]\nticket_prise = 30\n");

    let result = env.run(&["quote", "form.toml"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert!(
        result.stderr.contains("Unknown key 'ticket_prise'"),
        "{}",
        result.stderr
    );
    assert!(result.stderr.contains("Did you mean 'ticket_price'?"));
    assert!(result.stdout.contains("| 23 €"), "default tariff still applies");
}

#[test]
fn broken_config_file_is_an_error() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", UNCOVERED_FORM);
    env.write_project_file("tally.toml", "[pricing\nticket_price = 30\n");

    let result = env.run(&["quote", "form.toml"]);
    assert!(!result.is_success());
    assert!(result.stderr.contains("invalid config"), "{}", result.stderr);
}
