//! Actions - every state transition flows through here
//!
//! Naming follows the two-phase convention: intent actions come from the
//! UI, `*Did*` actions carry request completions back through the action
//! channel.

use crate::state::{FormField, Wishlist, WishlistItem};

/// The REST operations the controller can dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    AddItem,
    Retrieve,
    Delete,
    Search,
    Purchase,
}

impl Operation {
    /// Operation name for logging.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::AddItem => "add_item",
            Operation::Retrieve => "retrieve",
            Operation::Delete => "delete",
            Operation::Search => "search",
            Operation::Purchase => "purchase",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// The focused field was edited to a new value.
    FieldChange(FormField, String),
    FocusNext,
    FocusPrev,
    /// Intent: snapshot the form and issue the request for this operation.
    Submit(Operation),
    /// Reset the form and the flash slot without touching the network.
    FormClear,
    /// Result: Create/Update/Retrieve returned a wishlist.
    WishlistDidLoad(Operation, Wishlist),
    /// Result: AddItem/Purchase returned an item.
    ItemDidLoad(Operation, WishlistItem),
    /// Result: Delete succeeded; its response body is ignored.
    DeleteDidSucceed,
    /// Result: Search returned a result set (possibly empty).
    SearchDidLoad(Vec<Wishlist>),
    /// Result: any operation failed; `message` is the server-provided text
    /// when the error body carried one.
    RequestDidFail {
        op: Operation,
        message: Option<String>,
    },
    /// The terminal was resized; re-render with the new geometry.
    Redraw,
    Quit,
}

impl Action {
    /// Action name for logging and filtering.
    pub fn name(&self) -> &'static str {
        match self {
            Action::FieldChange(..) => "FieldChange",
            Action::FocusNext => "FocusNext",
            Action::FocusPrev => "FocusPrev",
            Action::Submit(_) => "Submit",
            Action::FormClear => "FormClear",
            Action::WishlistDidLoad(..) => "WishlistDidLoad",
            Action::ItemDidLoad(..) => "ItemDidLoad",
            Action::DeleteDidSucceed => "DeleteDidSucceed",
            Action::SearchDidLoad(_) => "SearchDidLoad",
            Action::RequestDidFail { .. } => "RequestDidFail",
            Action::Redraw => "Redraw",
            Action::Quit => "Quit",
        }
    }
}
