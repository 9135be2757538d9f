use crate::common::*;

#[test]
fn build_prints_form_toml_to_stdout() {
    let env = TestEnv::new();
    env.write_project_file("catalog.toml", CATALOG);

    let result = env.run(&["build", "catalog.toml"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let out = &result.stdout;
    assert!(out.contains("title = \"alice@example.org\""), "{out}");
    assert!(out.contains("name = \"group_2\""));
    assert!(out.contains("value = \"t-2\""));
    assert!(out.contains("Alice (late arrival)"));
    assert!(!out.contains("value = \"t-1\""), "booked ticket is locked");
}

#[test]
fn built_form_can_be_quoted() {
    let env = TestEnv::new();
    env.write_project_file("catalog.toml", CATALOG);

    let result = env.run(&["build", "catalog.toml", "-o", "out/form.toml"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stdout.contains("[OK] Wrote"));
    assert!(result.stdout.contains("(1 inputs, 2 booked)"));

    let written = env.read_project_file("out/form.toml");
    assert!(written.contains("[[locked]]"));

    let quote = env.run(&["quote", "out/form.toml", "--json"]);
    assert!(quote.is_success(), "{}", quote.combined_output());
    let event = &quote.json_lines()[0];
    assert_eq!(event["panel"]["panel"], "hidden");
    assert_eq!(event["quote"]["locked_count"], 2);
    assert_eq!(event["quote"]["event_count"], 3);
}

#[test]
fn build_reports_json_summary() {
    let env = TestEnv::new();
    env.write_project_file("catalog.toml", CATALOG);

    let result = env.run(&["build", "catalog.toml", "--output", "form.toml", "--json"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let event = &result.json_lines()[0];
    assert_eq!(event["event"], "complete");
    assert_eq!(event["command"], "build");
    assert_eq!(event["inputs"], 1);
    assert_eq!(event["locked"], 2);
}
