//! Test fixtures - reusable documents for scenario tests.
//!
//! Default conventions: tickets are `group_<eventId>`, no-ticket entries are
//! `no_ticket_events_dynamic` with the event id as value. Default tariff is
//! 23 per ticket and 27 per no-ticket participation.

/// e1 already booked, e2 ticket and e3 no-ticket checked.
/// Every event covered once: the cheapest selection (23) is free.
pub const SERIES_BONUS_FORM: &str = r#"
title = "Spring series"

[controls]
submit = true
cancel = true

[[locked]]
event_id = "e1"
label = "Opening night"

[[inputs]]
name = "group_e2"
value = "t-2"
label = "Workshop ticket"
checked = true

[[inputs]]
name = "no_ticket_events_dynamic"
value = "e3"
label = "Closing party"
checked = true
"#;

/// Two events, each covered twice: the two cheapest selections are free.
pub const DOUBLE_BONUS_FORM: &str = r#"
[[locked]]
event_id = "e2"

[[inputs]]
name = "group_e1"
value = "t-1"
checked = true

[[inputs]]
name = "group_e1"
value = "t-1b"
checked = true

[[inputs]]
name = "group_e2"
value = "t-2"
checked = true
"#;

/// e2 is offered but not selected: no discount.
pub const UNCOVERED_FORM: &str = r#"
[[inputs]]
name = "group_e1"
value = "t-1"
checked = true

[[inputs]]
name = "group_e2"
value = "t-2"
"#;

/// Nothing selected yet; only a submit control.
pub const BLANK_FORM: &str = r#"
[[inputs]]
name = "group_e1"
value = "t-1"

[[inputs]]
name = "group_e2"
value = "t-2"
"#;

/// Toggle one ticket, let the recompute run, then try to leave.
pub const LEAVE_DIRTY_SCRIPT: &str = r#"
confirm = false

[[steps]]
action = "toggle"
name = "group_e1"
value = "t-1"

[[steps]]
action = "wait"
ms = 600

[[steps]]
action = "unload"
"#;

/// Toggle, then save the form.
pub const SUBMIT_SCRIPT: &str = r#"
[[steps]]
action = "toggle"
name = "group_e2"
value = "t-2"

[[steps]]
action = "submit"

[[steps]]
action = "form_submit"

[[steps]]
action = "unload"
"#;

pub const CATALOG: &str = r#"
participant = "alice@example.org"
booked_without_ticket = ["3"]

[[events]]
id = "1"
name = "Spring run"
date = "2026-04-12"

[[events]]
id = "2"
name = "Autumn trail"
date = "2026-09-20"

[[events]]
id = "3"
name = "Summer meetup"
date = "2026-07-01"

[[tickets]]
id = "t-1"
event_id = "1"
name = "Alice"
booked = true

[[tickets]]
id = "t-2"
event_id = "2"
name = "Alice"
comment = "late arrival"
"#;
