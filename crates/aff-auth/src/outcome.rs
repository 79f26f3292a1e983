//! Navigation as a return value.
//!
//! Session operations never navigate. They produce an [`Outcome`], and a thin
//! [`ViewAdapter`] owned by the presentation layer turns redirects into real
//! navigation and errors into alerts.

use aff_core::View;

use crate::error::{AuthError, ErrorKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Ok(T),
    Redirect(View),
    Error { kind: ErrorKind, message: String },
}

/// Presentation-side sink for navigation and user-visible alerts.
pub trait ViewAdapter {
    fn navigate(&self, view: View);
    fn alert(&self, kind: ErrorKind, message: &str);
}

impl<T> Outcome<T> {
    /// Hand redirects and errors to the adapter; yield the value otherwise.
    ///
    /// `None` means the caller must stop: either navigation already happened
    /// or an alert was shown.
    pub fn resolve(self, adapter: &impl ViewAdapter) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Redirect(view) => {
                adapter.navigate(view);
                None
            }
            Self::Error { kind, message } => {
                adapter.alert(kind, &message);
                None
            }
        }
    }

    #[must_use]
    pub const fn redirect_target(&self) -> Option<View> {
        match self {
            Self::Redirect(view) => Some(*view),
            _ => None,
        }
    }
}

impl Outcome<()> {
    /// Outcome of an operation whose success value is "go to this view".
    #[must_use]
    pub fn from_navigation(result: Result<View, AuthError>) -> Self {
        match result {
            Ok(view) => Self::Redirect(view),
            Err(error) => error.into(),
        }
    }
}

impl<T> From<AuthError> for Outcome<T> {
    fn from(error: AuthError) -> Self {
        match error.redirect_target() {
            Some(view) => Self::Redirect(view),
            None => Self::Error {
                kind: error.kind(),
                message: error.to_string(),
            },
        }
    }
}

impl<T> From<Result<T, AuthError>> for Outcome<T> {
    fn from(result: Result<T, AuthError>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        views: RefCell<Vec<View>>,
        alerts: RefCell<Vec<(ErrorKind, String)>>,
    }

    impl ViewAdapter for Recorder {
        fn navigate(&self, view: View) {
            self.views.borrow_mut().push(view);
        }

        fn alert(&self, kind: ErrorKind, message: &str) {
            self.alerts.borrow_mut().push((kind, message.to_string()));
        }
    }

    #[test]
    fn unauthenticated_becomes_entry_redirect() {
        let outcome: Outcome<u8> = Err(AuthError::Unauthenticated).into();
        assert_eq!(outcome, Outcome::Redirect(View::Entry));
    }

    #[test]
    fn resolve_navigates_once_and_yields_nothing() {
        let recorder = Recorder::default();
        let outcome: Outcome<u8> = Outcome::Redirect(View::Entry);
        assert_eq!(outcome.resolve(&recorder), None);
        assert_eq!(*recorder.views.borrow(), vec![View::Entry]);
        assert!(recorder.alerts.borrow().is_empty());
    }

    #[test]
    fn resolve_alerts_on_error() {
        let recorder = Recorder::default();
        let outcome: Outcome<u8> = Err(AuthError::Connection("down".into())).into();
        assert_eq!(outcome.resolve(&recorder), None);
        let alerts = recorder.alerts.borrow();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].0, ErrorKind::Connection);
        assert!(recorder.views.borrow().is_empty());
    }

    #[test]
    fn navigation_result_becomes_redirect() {
        let outcome = Outcome::from_navigation(Ok(View::Entry));
        assert_eq!(outcome.redirect_target(), Some(View::Entry));
    }
}
