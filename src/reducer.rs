//! Reducer - (state, action) -> state change + effects
//!
//! All state transitions happen here, including the reconciliation rules
//! for request completions:
//!
//! - Create/Update/Retrieve success overwrites the wishlist fields; item
//!   additions and purchases overwrite the item fields.
//! - Retrieve failure clears the whole form: the referenced wishlist may
//!   not exist, and a stale id must not survive.
//! - Delete failure shows a fixed generic message.
//! - Every other failure shows the server-provided message (generic
//!   fallback) and leaves in-progress edits untouched for a retry.
//!
//! Completions are applied in arrival order; overlapping submissions are
//! not correlated to their responses, so the last writer wins.

use crate::action::{Action, Operation};
use crate::effect::{DispatchResult, Effect};
use crate::request;
use crate::state::{AppState, Flash};

/// Flash text when a failure carries no server message, and for every
/// delete failure.
pub const GENERIC_FAILURE: &str = "Server error!";

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult {
    match action {
        Action::FieldChange(field, value) => {
            state.form.write(field, value);
            DispatchResult::changed()
        }

        Action::FocusNext => {
            state.focus = state.focus.next();
            DispatchResult::changed()
        }

        Action::FocusPrev => {
            state.focus = state.focus.prev();
            DispatchResult::changed()
        }

        Action::Submit(op) => {
            // The flash slot empties before the request goes out, and the
            // request is built from the form as it stands right now.
            state.flash = None;
            state.in_flight += 1;
            let request = request::build(op, &state.form);
            DispatchResult::changed_with(Effect::Request { op, request })
        }

        Action::FormClear => {
            state.form.clear();
            state.flash = None;
            DispatchResult::changed()
        }

        Action::WishlistDidLoad(op, wishlist) => {
            state.in_flight = state.in_flight.saturating_sub(1);
            state.form.apply_wishlist(&wishlist);
            state.flash = Some(Flash::success(success_text(op)));
            DispatchResult::changed()
        }

        Action::ItemDidLoad(op, item) => {
            state.in_flight = state.in_flight.saturating_sub(1);
            state.form.apply_item(&item);
            state.flash = Some(Flash::success(success_text(op)));
            DispatchResult::changed()
        }

        Action::DeleteDidSucceed => {
            state.in_flight = state.in_flight.saturating_sub(1);
            state.form.clear();
            state.flash = Some(Flash::success("Wishlist has been Deleted!"));
            DispatchResult::changed()
        }

        Action::SearchDidLoad(results) => {
            state.in_flight = state.in_flight.saturating_sub(1);
            // promote the first result into the form for immediate editing
            if let Some(first) = results.first() {
                state.form.apply_wishlist(first);
            }
            state.results = results;
            state.flash = Some(Flash::success("Success"));
            DispatchResult::changed()
        }

        Action::RequestDidFail { op, message } => {
            state.in_flight = state.in_flight.saturating_sub(1);
            if op == Operation::Retrieve {
                state.form.clear();
            }
            let text = match op {
                Operation::Delete => GENERIC_FAILURE.to_string(),
                _ => message.unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            };
            state.flash = Some(Flash::error(text));
            DispatchResult::changed()
        }

        Action::Redraw => DispatchResult::changed(),

        // Quit is handled in the runtime loop, not here
        Action::Quit => DispatchResult::unchanged(),
    }
}

fn success_text(op: Operation) -> &'static str {
    match op {
        Operation::AddItem => "Success: Item added to Wishlist",
        Operation::Purchase => "Success: Item Purchased!",
        _ => "Success",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FlashLevel, FormField, FormState, Wishlist, WishlistItem};
    use reqwest::Method;

    fn populated_state() -> AppState {
        AppState {
            form: FormState {
                id: "7".into(),
                name: "Birthday".into(),
                kind: "gift".into(),
                user_id: "42".into(),
                created_date: "2024-01-01".into(),
                items: "two socks".into(),
                item_id: "3".into(),
                item_name: "socks".into(),
                item_category: "clothing".into(),
                item_price: "12".into(),
                item_purchased: "false".into(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_submit_clears_flash_and_emits_request() {
        let mut state = populated_state();
        state.flash = Some(Flash::error("old news"));

        let result = reducer(&mut state, Action::Submit(Operation::Create));

        assert!(result.changed);
        assert!(state.flash.is_none());
        assert_eq!(state.in_flight, 1);
        match &result.effects[..] {
            [Effect::Request { op, request }] => {
                assert_eq!(*op, Operation::Create);
                assert_eq!(request.method, Method::POST);
                assert_eq!(request.path, "/wishlists");
            }
            other => panic!("expected one request effect, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_snapshots_the_form_at_dispatch_time() {
        let mut state = populated_state();
        let result = reducer(&mut state, Action::Submit(Operation::Retrieve));
        // editing after dispatch must not change the request already built
        state.form.id = "999".into();
        match &result.effects[..] {
            [Effect::Request { request, .. }] => assert_eq!(request.path, "/wishlists/7"),
            other => panic!("expected one request effect, got {other:?}"),
        }
    }

    #[test]
    fn test_create_success_applies_wishlist_and_flashes() {
        let mut state = AppState::default();
        state.in_flight = 1;

        reducer(
            &mut state,
            Action::WishlistDidLoad(
                Operation::Create,
                Wishlist {
                    id: "7".into(),
                    name: "Birthday".into(),
                    kind: "gift".into(),
                    user_id: "42".into(),
                    created_date: "2024-01-01".into(),
                    items: vec![],
                },
            ),
        );

        assert_eq!(state.form.id, "7");
        assert_eq!(state.form.name, "Birthday");
        assert_eq!(state.flash, Some(Flash::success("Success")));
        assert_eq!(state.in_flight, 0);
    }

    #[test]
    fn test_retrieve_failure_clears_the_form() {
        let mut state = populated_state();

        reducer(
            &mut state,
            Action::RequestDidFail {
                op: Operation::Retrieve,
                message: Some("404 Not Found: Wishlist with id 7 was not found".into()),
            },
        );

        assert_eq!(state.form, FormState::default());
        let flash = state.flash.unwrap();
        assert_eq!(flash.level, FlashLevel::Error);
        assert!(flash.text.contains("404 Not Found"));
    }

    #[test]
    fn test_update_failure_preserves_the_form() {
        let mut state = populated_state();
        let before = state.form.clone();

        reducer(
            &mut state,
            Action::RequestDidFail {
                op: Operation::Update,
                message: Some("Invalid Wishlist: missing name".into()),
            },
        );

        assert_eq!(state.form, before);
        assert_eq!(
            state.flash,
            Some(Flash::error("Invalid Wishlist: missing name"))
        );
    }

    #[test]
    fn test_delete_failure_uses_the_fixed_message() {
        let mut state = populated_state();
        let before = state.form.clone();

        reducer(
            &mut state,
            Action::RequestDidFail {
                op: Operation::Delete,
                message: Some("detailed server text that must not surface".into()),
            },
        );

        assert_eq!(state.form, before);
        assert_eq!(state.flash, Some(Flash::error(GENERIC_FAILURE)));
    }

    #[test]
    fn test_failure_without_message_falls_back_to_generic() {
        let mut state = populated_state();

        reducer(
            &mut state,
            Action::RequestDidFail {
                op: Operation::Create,
                message: None,
            },
        );

        assert_eq!(state.flash, Some(Flash::error(GENERIC_FAILURE)));
    }

    #[test]
    fn test_delete_success_clears_the_form() {
        let mut state = populated_state();

        reducer(&mut state, Action::DeleteDidSucceed);

        assert_eq!(state.form, FormState::default());
        assert_eq!(state.flash, Some(Flash::success("Wishlist has been Deleted!")));
    }

    #[test]
    fn test_purchase_success_touches_only_item_fields() {
        let mut state = populated_state();

        reducer(
            &mut state,
            Action::ItemDidLoad(
                Operation::Purchase,
                WishlistItem {
                    id: "3".into(),
                    name: "socks".into(),
                    category: "clothing".into(),
                    price: "12".into(),
                    purchased: "true".into(),
                },
            ),
        );

        assert_eq!(state.form.id, "7");
        assert_eq!(state.form.name, "Birthday");
        assert_eq!(state.form.kind, "gift");
        assert_eq!(state.form.user_id, "42");
        assert_eq!(state.form.created_date, "2024-01-01");
        assert_eq!(state.form.item_purchased, "true");
        assert_eq!(state.flash, Some(Flash::success("Success: Item Purchased!")));
    }

    #[test]
    fn test_add_item_success_flashes_item_message() {
        let mut state = populated_state();

        reducer(
            &mut state,
            Action::ItemDidLoad(
                Operation::AddItem,
                WishlistItem {
                    id: "4".into(),
                    name: "scarf".into(),
                    ..Default::default()
                },
            ),
        );

        assert_eq!(state.form.item_id, "4");
        assert_eq!(
            state.flash,
            Some(Flash::success("Success: Item added to Wishlist"))
        );
    }

    #[test]
    fn test_search_promotes_the_first_result() {
        let mut state = AppState::default();
        let results = vec![
            Wishlist {
                id: "1".into(),
                name: "Birthday".into(),
                ..Default::default()
            },
            Wishlist {
                id: "2".into(),
                name: "Holiday".into(),
                ..Default::default()
            },
        ];

        reducer(&mut state, Action::SearchDidLoad(results));

        assert_eq!(state.results.len(), 2);
        assert_eq!(state.form.id, "1");
        assert_eq!(state.flash, Some(Flash::success("Success")));
    }

    #[test]
    fn test_search_with_empty_result_set_promotes_nothing() {
        let mut state = populated_state();
        state.results = vec![Wishlist::default()];

        reducer(&mut state, Action::SearchDidLoad(vec![]));

        assert!(state.results.is_empty());
        assert_eq!(state.form.id, "7");
        assert_eq!(state.flash, Some(Flash::success("Success")));
    }

    #[test]
    fn test_overlapping_completions_apply_in_arrival_order() {
        let mut state = AppState::default();
        state.in_flight = 2;

        let first = Wishlist {
            id: "1".into(),
            ..Default::default()
        };
        let second = Wishlist {
            id: "2".into(),
            ..Default::default()
        };

        // no correlation: whichever response lands last owns the form
        reducer(
            &mut state,
            Action::WishlistDidLoad(Operation::Retrieve, first),
        );
        reducer(
            &mut state,
            Action::WishlistDidLoad(Operation::Retrieve, second),
        );

        assert_eq!(state.form.id, "2");
        assert_eq!(state.in_flight, 0);
    }

    #[test]
    fn test_field_change_and_focus() {
        let mut state = AppState::default();

        reducer(
            &mut state,
            Action::FieldChange(FormField::Name, "Birthday".into()),
        );
        assert_eq!(state.form.name, "Birthday");

        reducer(&mut state, Action::FocusNext);
        assert_eq!(state.focus, FormField::Name);
        reducer(&mut state, Action::FocusPrev);
        assert_eq!(state.focus, FormField::Id);
    }

    #[test]
    fn test_form_clear_resets_form_and_flash() {
        let mut state = populated_state();
        state.flash = Some(Flash::success("Success"));

        reducer(&mut state, Action::FormClear);

        assert_eq!(state.form, FormState::default());
        assert!(state.flash.is_none());
    }
}
