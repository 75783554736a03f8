//! Resolution errors

use super::FuiError;

/// Creates a dangling component reference error
pub fn dangling(
    component: impl Into<String>,
    variable: impl Into<String>,
    target: impl Into<String>,
) -> FuiError {
    FuiError::DanglingComponentReference {
        component: component.into(),
        variable: variable.into(),
        target: target.into(),
    }
}
