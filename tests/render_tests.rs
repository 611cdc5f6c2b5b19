use chrono::NaiveDate;
use stockroom::dashboard::Action;
use stockroom::db::{AccessRequest, Resource};
use stockroom::types::Role;
use stockroom::ui::{Notice, render};

#[test]
fn table_aligns_columns() {
    let rows = vec![
        Resource {
            id: 1,
            name: "Laptop".to_string(),
            timeline: "Q1-2025".to_string(),
            quantity: 10,
            cost: 999.99,
        },
        Resource {
            id: 12,
            name: "Projector".to_string(),
            timeline: "late".to_string(),
            quantity: 1,
            cost: 250.0,
        },
    ];
    let text = render::resource_table(&rows);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Resources");
    assert_eq!(lines[1], "ID | Name      | Timeline | Quantity | Cost");
    assert_eq!(lines[3], "1  | Laptop    | Q1-2025  | 10       | 999.99");
    assert_eq!(lines[4], "12 | Projector | late     | 1        | 250");
}

#[test]
fn cost_is_shown_exactly_as_stored() {
    let rows: Vec<Resource> = [(1, 0.004), (2, 999.999)]
        .into_iter()
        .map(|(id, cost)| Resource {
            id,
            name: "Bolt".to_string(),
            timeline: "t".to_string(),
            quantity: 1,
            cost,
        })
        .collect();
    let text = render::resource_table(&rows);
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[3].ends_with("| 0.004"), "{text}");
    assert!(lines[4].ends_with("| 999.999"), "{text}");
    assert!(!text.contains("1000"), "{text}");
}

#[test]
fn empty_table_has_placeholder() {
    let text = render::resource_table(&[]);
    assert!(text.contains("(no resources)"));
}

#[test]
fn requests_render_one_line_each() {
    assert_eq!(render::request_list(&[]), "No requests.\n");

    let at = NaiveDate::from_ymd_opt(2025, 3, 1)
        .and_then(|d| d.and_hms_milli_opt(9, 30, 0, 250))
        .unwrap();
    let text = render::request_list(&[AccessRequest {
        username: "user1".to_string(),
        requested_at: at,
    }]);
    assert_eq!(text, "User: user1 | Time: 2025-03-01 09:30:00.250\n");
}

#[test]
fn menu_numbers_actions() {
    let text = render::menu("User Dashboard", "user1", &Action::available(Role::StandardUser));
    assert!(text.contains("1. View Resources [view]"));
    assert!(text.contains("2. Request Access [request]"));
    assert!(text.contains("3. Logout [logout]"));
}

#[test]
fn notices_are_prefixed_by_kind() {
    assert_eq!(Notice::info("Deleted.").to_string(), "Deleted.");
    assert_eq!(Notice::warning("ID not found.").to_string(), "Warning: ID not found.");
    assert_eq!(Notice::error("boom").to_string(), "Error: boom");
}
