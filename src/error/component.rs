//! Component descriptor errors

use super::FuiError;

/// Creates a component unreadable error
pub fn unreadable(path: impl Into<String>, reason: impl Into<String>) -> FuiError {
    FuiError::ComponentUnreadable {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an unknown component kind warning
pub fn unknown_kind(component: impl Into<String>, kind: impl Into<String>) -> FuiError {
    FuiError::UnknownComponentKind {
        component: component.into(),
        kind: kind.into(),
    }
}

/// Creates an unknown display node warning
pub fn unknown_node(
    component: impl Into<String>,
    node: impl Into<String>,
    name: impl Into<String>,
) -> FuiError {
    FuiError::UnknownNodeKind {
        component: component.into(),
        node: node.into(),
        name: name.into(),
    }
}
