//! Delete Confirm Button Component
//!
//! Inline delete confirmation button with confirm/cancel actions.

use leptos::prelude::*;

/// Where the button is in its two-step flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmStep {
    #[default]
    Idle,
    Asking,
}

impl ConfirmStep {
    /// First click. Ignored while disabled.
    pub fn request(self, disabled: bool) -> Self {
        if disabled {
            self
        } else {
            Self::Asking
        }
    }

    /// Second click. Returns the next step and whether `on_confirm` should run;
    /// only a confirmation that follows a request counts.
    pub fn confirm(self, disabled: bool) -> (Self, bool) {
        match self {
            Self::Asking if !disabled => (Self::Idle, true),
            other => (other, false),
        }
    }

    pub fn cancel(self) -> Self {
        Self::Idle
    }
}

/// Inline delete confirmation button
///
/// Shows a × button initially. When clicked, shows "Delete?" with ✓/✗ buttons.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `disabled` - Blocks both steps, e.g. while the delete request runs
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let step = RwSignal::new(ConfirmStep::Idle);

    view! {
        <Show when=move || step.get() == ConfirmStep::Idle>
            <button
                class=button_class.clone()
                title="Delete goal"
                disabled=move || disabled.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    step.update(|s| *s = s.request(disabled.get_untracked()));
                }
            >
                "×"
            </button>
        </Show>
        <Show when=move || step.get() == ConfirmStep::Asking>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    disabled=move || disabled.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        let (next, run) = step.get_untracked().confirm(disabled.get_untracked());
                        step.set(next);
                        if run {
                            on_confirm.run(());
                        }
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        step.update(|s| *s = s.cancel());
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_requires_prior_request() {
        assert_eq!(ConfirmStep::Idle.confirm(false), (ConfirmStep::Idle, false));

        let asking = ConfirmStep::Idle.request(false);
        assert_eq!(asking, ConfirmStep::Asking);
        assert_eq!(asking.confirm(false), (ConfirmStep::Idle, true));
    }

    #[test]
    fn test_cancel_returns_to_idle_without_deleting() {
        let step = ConfirmStep::Idle.request(false).cancel();
        assert_eq!(step, ConfirmStep::Idle);
        assert_eq!(step.confirm(false), (ConfirmStep::Idle, false));
    }

    #[test]
    fn test_disabled_blocks_both_steps() {
        assert_eq!(ConfirmStep::Idle.request(true), ConfirmStep::Idle);
        assert_eq!(ConfirmStep::Asking.confirm(true), (ConfirmStep::Asking, false));
    }
}
