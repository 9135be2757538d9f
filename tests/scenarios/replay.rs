use crate::common::*;

#[test]
fn leaving_with_unsaved_changes_asks_first() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", BLANK_FORM);
    env.write_project_file("leave.toml", LEAVE_DIRTY_SCRIPT);

    let result = env.run(&["replay", "form.toml", "leave.toml", "--json"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let lines = result.json_lines();
    assert!(lines.iter().all(|l| l["command"] == "replay"));

    let initial = &lines[0];
    assert_eq!(initial["event"], "rendered");
    assert_eq!(initial["at_ms"], 0);
    assert_eq!(initial["panel"]["panel"], "hidden");

    let toggle = &lines[1];
    assert_eq!(toggle["event"], "step");
    assert_eq!(toggle["index"], 0);
    assert_eq!(toggle["step"]["action"], "toggle");
    assert_eq!(toggle["outcome"]["outcome"], "recompute_scheduled");

    let rendered: Vec<_> = lines.iter().filter(|l| l["event"] == "rendered").collect();
    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[1]["at_ms"], 600);
    assert_eq!(rendered[1]["final_price"], 23);
    assert_eq!(rendered[1]["panel"]["details"], "1 items selected");

    let unload = lines
        .iter()
        .find(|l| l["step"]["action"] == "unload")
        .expect("unload step");
    assert_eq!(unload["outcome"]["outcome"], "unload");
    assert_eq!(unload["outcome"]["decision"], "prompt");

    let finished = lines.last().expect("finished event");
    assert_eq!(finished["event"], "finished");
    assert_eq!(finished["dirty"], true);
    assert_eq!(finished["submitting"], false);
}

#[test]
fn submitting_lets_the_user_leave() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", BLANK_FORM);
    env.write_project_file("submit.toml", SUBMIT_SCRIPT);

    let result = env.run(&["replay", "form.toml", "submit.toml", "--json"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let lines = result.json_lines();
    let outcomes: Vec<&str> = lines
        .iter()
        .filter_map(|l| l["outcome"]["outcome"].as_str())
        .collect();
    assert_eq!(
        outcomes,
        vec!["recompute_scheduled", "submit_started", "submitted", "unload"]
    );

    let submitted = lines
        .iter()
        .find(|l| l["outcome"]["outcome"] == "submitted")
        .expect("submitted outcome");
    assert_eq!(
        submitted["outcome"]["submission"]["tickets"],
        serde_json::json!(["t-2"])
    );

    let unload = lines
        .iter()
        .find(|l| l["outcome"]["outcome"] == "unload")
        .expect("unload outcome");
    assert_eq!(unload["outcome"]["decision"], "proceed");

    let rendered: Vec<_> = lines.iter().filter(|l| l["event"] == "rendered").collect();
    assert_eq!(rendered.len(), 2, "load render plus the flushed recompute");
    assert_eq!(rendered[0]["final_price"], 0);
    assert_eq!(rendered[1]["final_price"], 23);

    let finished = lines.last().expect("finished event");
    assert_eq!(finished["submitting"], true);
}

#[test]
fn prechecked_form_is_rendered_on_load() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", SERIES_BONUS_FORM);
    env.write_project_file(
        "idle.toml",
        r#"
[[steps]]
action = "wait"
ms = 100

[[steps]]
action = "unload"
"#,
    );

    let result = env.run(&["replay", "form.toml", "idle.toml", "--json"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let lines = result.json_lines();
    assert_eq!(lines[0]["event"], "rendered");
    assert_eq!(lines[0]["at_ms"], 0);
    assert_eq!(lines[0]["final_price"], 27);
    assert_eq!(lines[0]["panel"]["badge"], "series bonus: one free seat");

    let unload = lines
        .iter()
        .find(|l| l["step"]["action"] == "unload")
        .expect("unload step");
    assert_eq!(unload["outcome"]["decision"], "proceed");
}

#[test]
fn human_replay_lists_steps_and_final_panel() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", BLANK_FORM);
    env.write_project_file("leave.toml", LEAVE_DIRTY_SCRIPT);

    let result = env.run(&["replay", "form.toml", "leave.toml"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let out = &result.stdout;
    assert!(out.starts_with("[REPLAY] Tally Replay"), "{out}");
    assert!(out.contains("leave.toml (3 steps)"));
    assert!(out.contains("#1 toggle group_e1=t-1"));
    assert!(out.contains("#2 wait 600ms"));
    assert!(out.contains("#3 leave page [>] asks before leaving"));
    assert!(out.contains("[WARN] Finished: unsaved changes"));
    assert!(out.contains("| 23 €"));
}

#[test]
fn toggling_an_unknown_input_fails() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", BLANK_FORM);
    env.write_project_file(
        "bad.toml",
        r#"
[[steps]]
action = "toggle"
name = "group_e9"
value = "t-9"
"#,
    );

    let result = env.run(&["replay", "form.toml", "bad.toml"]);
    assert!(!result.is_success());
    assert!(result.stderr.contains("group_e9"), "{}", result.stderr);
}
