//! End-to-end flows through the dispatch seam
//!
//! Each flow drives the reducer the way the runtime does: a Submit intent
//! produces the request that would go on the wire, and the completion
//! action is applied afterwards, exactly as it would arrive on the action
//! channel.

use reqwest::Method;
use serde_json::json;
use wishlist_tui::components::{Component, ResultsTable, ResultsTableProps};
use wishlist_tui::testing::RenderHarness;
use wishlist_tui::{
    Action, AppState, Effect, Flash, FlashLevel, FormState, Operation, Wishlist, reducer,
};

fn dispatch_request(state: &mut AppState, op: Operation) -> wishlist_tui::ApiRequest {
    let result = reducer(state, Action::Submit(op));
    match result.effects.into_iter().next() {
        Some(Effect::Request { request, .. }) => request,
        None => panic!("submit must emit a request effect"),
    }
}

#[test]
fn test_create_flow() {
    let mut state = AppState {
        form: FormState {
            name: "Birthday".into(),
            kind: "gift".into(),
            user_id: "42".into(),
            ..Default::default()
        },
        ..Default::default()
    };
    state.flash = Some(Flash::error("stale message"));

    // dispatch: the flash slot empties and the form snapshot goes out
    let request = dispatch_request(&mut state, Operation::Create);
    assert!(state.flash.is_none());
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/wishlists");
    assert_eq!(
        request.body,
        Some(json!({
            "name": "Birthday",
            "type": "gift",
            "user_id": "42",
            "created_date": "",
            "items": "",
        }))
    );

    // completion: the server's record lands in the form
    let record: Wishlist = serde_json::from_value(json!({
        "id": 7,
        "name": "Birthday",
        "type": "gift",
        "user_id": "42",
        "created_date": "2024-01-01",
    }))
    .unwrap();
    reducer(&mut state, Action::WishlistDidLoad(Operation::Create, record));

    assert_eq!(state.form.id, "7");
    assert_eq!(state.form.created_date, "2024-01-01");
    assert_eq!(state.flash, Some(Flash::success("Success")));
    assert_eq!(state.in_flight, 0);
}

#[test]
fn test_search_flow() {
    let mut state = AppState {
        form: FormState {
            name: "Birthday".into(),
            ..Default::default()
        },
        ..Default::default()
    };

    let request = dispatch_request(&mut state, Operation::Search);
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/wishlists?name=Birthday");
    assert_eq!(request.body, None);

    let results: Vec<Wishlist> = serde_json::from_value(json!([
        {"id": 1, "name": "Birthday", "type": "gift", "user_id": 42,
         "created_date": "2024-01-01", "items": [{"id": 3, "name": "socks"}]},
        {"id": 2, "name": "Birthday", "type": "party", "user_id": 7,
         "created_date": "2024-02-01", "items": []},
    ]))
    .unwrap();
    reducer(&mut state, Action::SearchDidLoad(results));

    // first record is promoted into the form
    assert_eq!(state.form.id, "1");
    assert_eq!(state.form.kind, "gift");
    assert_eq!(state.flash, Some(Flash::success("Success")));

    // and the table shows both rows
    let mut render = RenderHarness::new(80, 8);
    let mut table = ResultsTable;
    let output = render.render_to_string_plain(|frame| {
        table.render(
            frame,
            frame.area(),
            ResultsTableProps {
                results: &state.results,
            },
        );
    });
    assert!(output.contains("gift"));
    assert!(output.contains("party"));
}

#[test]
fn test_retrieve_failure_flow_clears_stale_state() {
    let mut state = AppState {
        form: FormState {
            id: "999".into(),
            name: "Ghost".into(),
            ..Default::default()
        },
        ..Default::default()
    };

    let request = dispatch_request(&mut state, Operation::Retrieve);
    assert_eq!(request.path, "/wishlists/999");

    reducer(
        &mut state,
        Action::RequestDidFail {
            op: Operation::Retrieve,
            message: Some("404 Not Found: Wishlist with id 999 was not found".into()),
        },
    );

    assert_eq!(state.form, FormState::default());
    let flash = state.flash.unwrap();
    assert_eq!(flash.level, FlashLevel::Error);
}

#[test]
fn test_overlapping_retrieves_apply_in_arrival_order() {
    let mut state = AppState {
        form: FormState {
            id: "1".into(),
            ..Default::default()
        },
        ..Default::default()
    };

    // two dispatches fire independently; nothing guards the overlap
    let first = dispatch_request(&mut state, Operation::Retrieve);
    state.form.id = "2".into();
    let second = dispatch_request(&mut state, Operation::Retrieve);
    assert_eq!(first.path, "/wishlists/1");
    assert_eq!(second.path, "/wishlists/2");
    assert_eq!(state.in_flight, 2);

    // responses land out of order: the slow first request finishes last
    reducer(
        &mut state,
        Action::WishlistDidLoad(
            Operation::Retrieve,
            Wishlist {
                id: "2".into(),
                name: "Holiday".into(),
                ..Default::default()
            },
        ),
    );
    reducer(
        &mut state,
        Action::WishlistDidLoad(
            Operation::Retrieve,
            Wishlist {
                id: "1".into(),
                name: "Birthday".into(),
                ..Default::default()
            },
        ),
    );

    // last writer wins, stale data and all
    assert_eq!(state.form.id, "1");
    assert_eq!(state.form.name, "Birthday");
    assert_eq!(state.in_flight, 0);
}

#[test]
fn test_purchase_flow_touches_only_item_fields() {
    let mut state = AppState {
        form: FormState {
            id: "7".into(),
            name: "Birthday".into(),
            item_id: "3".into(),
            item_name: "socks".into(),
            item_purchased: "false".into(),
            ..Default::default()
        },
        ..Default::default()
    };

    let request = dispatch_request(&mut state, Operation::Purchase);
    assert_eq!(request.method, Method::PUT);
    assert_eq!(request.path, "/wishlists/7/items/3/purchase");
    assert_eq!(request.body, None);

    let item = serde_json::from_value(json!({
        "id": 3, "name": "socks", "category": "clothing", "price": 12, "purchased": true
    }))
    .unwrap();
    reducer(&mut state, Action::ItemDidLoad(Operation::Purchase, item));

    assert_eq!(state.form.id, "7");
    assert_eq!(state.form.name, "Birthday");
    assert_eq!(state.form.item_purchased, "true");
    assert_eq!(state.flash, Some(Flash::success("Success: Item Purchased!")));
}
