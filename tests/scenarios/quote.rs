use crate::common::*;

#[test]
fn series_bonus_makes_cheapest_selection_free() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", SERIES_BONUS_FORM);

    let result = env.run(&["quote", "form.toml", "--json"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let lines = result.json_lines();
    assert_eq!(lines.len(), 1);
    let event = &lines[0];
    assert_eq!(event["event"], "quote");
    assert_eq!(event["command"], "quote");

    let quote = &event["quote"];
    assert_eq!(quote["total"], 50);
    assert_eq!(quote["discount"]["kind"], "series_bonus");
    assert_eq!(quote["discount"]["amount"], 23);
    assert_eq!(quote["final_price"], 27);
    assert_eq!(quote["coverage"], "single");
    assert_eq!(quote["locked_count"], 1);
    assert_eq!(quote["event_count"], 3);

    let panel = &event["panel"];
    assert_eq!(panel["panel"], "visible");
    assert_eq!(panel["price"], "27");
    assert_eq!(panel["badge"], "series bonus: one free seat");
    assert_eq!(
        panel["details"],
        "Regular: 50 € - Discount: 23 € (+1 already booked)"
    );
}

#[test]
fn double_coverage_makes_two_selections_free() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", DOUBLE_BONUS_FORM);

    let result = env.run(&["--json", "quote", "form.toml"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let event = &result.json_lines()[0];
    assert_eq!(event["quote"]["total"], 69);
    assert_eq!(event["quote"]["discount"]["kind"], "double_bonus");
    assert_eq!(event["quote"]["discount"]["amount"], 46);
    assert_eq!(event["quote"]["final_price"], 23);
    assert_eq!(event["quote"]["coverage"], "double");
    assert_eq!(event["panel"]["badge"], "double bonus: two free seats");
}

#[test]
fn uncovered_event_gets_no_discount() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", UNCOVERED_FORM);

    let result = env.run(&["quote", "form.toml", "--json"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let event = &result.json_lines()[0];
    assert_eq!(event["quote"]["final_price"], 23);
    assert_eq!(event["quote"]["discount"]["amount"], 0);
    assert!(event["panel"]["badge"].is_null());
    assert_eq!(event["panel"]["details"], "1 items selected");
}

#[test]
fn blank_form_hides_the_panel() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", BLANK_FORM);

    let result = env.run(&["quote", "form.toml", "--json"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let event = &result.json_lines()[0];
    assert_eq!(event["panel"]["panel"], "hidden");
    assert_eq!(event["quote"]["final_price"], 0);
}

#[test]
fn human_output_shows_header_and_framed_panel() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", SERIES_BONUS_FORM);

    let result = env.run(&["quote", "form.toml"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let out = &result.stdout;
    assert!(out.starts_with("[QUOTE] Tally Quote"), "{out}");
    assert!(out.contains("form.toml"));
    assert!(out.contains("Booked"));
    assert!(out.contains("| 27 €"));
    assert!(out.contains("[OK] series bonus: one free seat"));
    assert!(!out.contains('\u{1b}'), "no ANSI codes when NO_COLOR is set");
}

#[test]
fn human_output_for_blank_form_says_nothing_selected() {
    let env = TestEnv::new();
    env.write_project_file("form.toml", BLANK_FORM);

    let result = env.run(&["quote", "form.toml"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stdout.contains("[>] No new selections"));
}
