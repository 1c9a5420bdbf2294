//! Calculator widget with a local theme toggle and inline feedback.

use dioxus::prelude::*;

use crate::app::calculator::{format_result, CalculatorState, Feedback, Operand, Operation};
use crate::app::settings_context::try_use_settings;
use crate::app::theme::Theme;

/// Signals behind one calculator view. Copy, so event handlers can own it.
#[derive(Clone, Copy, PartialEq)]
pub struct CalculatorSignals {
    theme: Signal<Theme>,
    // Set once the user toggles, so a late settings load does not override them
    theme_chosen: Signal<bool>,
    state: Signal<CalculatorState>,
}

impl CalculatorSignals {
    pub fn theme(&self) -> Theme {
        (self.theme)()
    }

    pub fn toggle_theme(&mut self) {
        self.theme_chosen.set(true);
        let next = self.theme().toggled();
        tracing::debug!(theme = next.as_str(), "Calculator theme toggled");
        self.theme.set(next);
    }

    pub fn edit(&mut self, operand: Operand, text: String) {
        self.state.write().set_operand(operand, text);
    }

    pub fn run(&mut self, op: Operation) {
        // Failures land in the state's feedback
        let _ = self.state.write().apply(op);
    }
}

/// Create the calculator signals, seeding the theme from site settings if any.
pub fn use_calculator() -> CalculatorSignals {
    let settings = try_use_settings();

    let mut theme = use_signal(|| settings.map(|s| s.default_theme()).unwrap_or_default());
    let theme_chosen = use_signal(|| false);
    let state = use_signal(CalculatorState::new);

    use_effect(move || {
        if let Some(settings) = settings {
            let default_theme = settings.default_theme();
            if !theme_chosen() {
                theme.set(default_theme);
            }
        }
    });

    CalculatorSignals {
        theme,
        theme_chosen,
        state,
    }
}

/// Two-operand calculator. All state is local to this view.
#[component]
pub fn Calculator() -> Element {
    let calc = use_calculator();
    rsx! { CalculatorPanel { calc } }
}

#[component]
fn CalculatorPanel(calc: CalculatorSignals) -> Element {
    let mut calc = calc;
    let current_theme = calc.theme();
    let palette = current_theme.palette();
    let toggle_label = current_theme.toggle_label();

    let snapshot = calc.state.read().clone();
    let first = snapshot.operand(Operand::First).to_string();
    let second = snapshot.operand(Operand::Second).to_string();
    let feedback = snapshot.feedback();
    let result_text = snapshot.result().map(format_result);

    let panel_style = palette.panel_style();
    let button_style = palette.button_style();
    let input_style = palette.input_style();
    let error_style = palette.error_style();
    let success_style = palette.success_style();
    let result_style = palette.result_style();

    rsx! {
        div { class: "calculator", "data-theme": current_theme.as_str(), style: panel_style,
            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 20px;",
                h2 { style: "margin: 0;", "Calculator with Feedback" }
                button {
                    class: "theme-toggle",
                    style: button_style.clone(),
                    onclick: move |_| calc.toggle_theme(),
                    "{toggle_label}"
                }
            }

            div { style: "margin-bottom: 15px;",
                input {
                    r#type: "text",
                    name: Operand::First.name(),
                    value: "{first}",
                    placeholder: Operand::First.placeholder(),
                    style: format!("margin-right: 10px; {input_style}"),
                    oninput: move |e| calc.edit(Operand::First, e.value()),
                }
                input {
                    r#type: "text",
                    name: Operand::Second.name(),
                    value: "{second}",
                    placeholder: Operand::Second.placeholder(),
                    style: input_style.clone(),
                    oninput: move |e| calc.edit(Operand::Second, e.value()),
                }
            }

            div { style: "margin-bottom: 15px;",
                button {
                    class: "op-add",
                    style: format!("margin-right: 10px; {button_style}"),
                    onclick: move |_| calc.run(Operation::Add),
                    {Operation::Add.label()}
                }
                button {
                    class: "op-subtract",
                    style: button_style.clone(),
                    onclick: move |_| calc.run(Operation::Subtract),
                    {Operation::Subtract.label()}
                }
            }

            match feedback {
                Some(Feedback::Error(e)) => rsx! {
                    div { class: "feedback feedback-error", role: "alert", style: error_style,
                        "⚠️ {e}"
                    }
                },
                Some(Feedback::Success(op)) => rsx! {
                    div { class: "feedback feedback-success", role: "status", style: success_style,
                        "✅ "
                        {op.success_message()}
                    }
                },
                None => rsx! {},
            }

            if let Some(text) = result_text {
                div { class: "result", style: result_style, "Result: {text}" }
            }
        }
    }
}
