//! Two-operand calculator state.
//!
//! Pure view state with no Dioxus types, so the component stays a thin
//! binding and every rule here is unit-testable.

use thiserror::Error;

/// Why an operation was refused. `Display` is the inline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please fill in both numbers")]
    Empty,
    #[error("Please enter valid numbers")]
    NotANumber,
}

/// Which input field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    First,
    Second,
}

impl Operand {
    pub fn name(&self) -> &'static str {
        match self {
            Operand::First => "num1",
            Operand::Second => "num2",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Operand::First => "Enter first number",
            Operand::Second => "Enter second number",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
}

impl Operation {
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Operation::Add => "Addition successful!",
            Operation::Subtract => "Subtraction successful!",
        }
    }

    pub fn compute(&self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
        }
    }
}

/// Transient banner shown under the buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Error(InputError),
    Success(Operation),
}

impl Feedback {
    pub fn message(&self) -> String {
        match self {
            Feedback::Error(e) => e.to_string(),
            Feedback::Success(op) => op.success_message().to_string(),
        }
    }
}

/// Parse one operand. Zero-length text is `Empty`; anything that is not a
/// finite decimal number after trimming is `NotANumber`.
pub fn parse_operand(text: &str) -> Result<f64, InputError> {
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::NotANumber),
    }
}

/// Render a result the way a person would write it: `7`, not `7.0`.
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        // Also folds -0
        "0".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
    first: String,
    second: String,
    result: Option<f64>,
    feedback: Option<Feedback>,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operand(&self, which: Operand) -> &str {
        match which {
            Operand::First => &self.first,
            Operand::Second => &self.second,
        }
    }

    pub fn result(&self) -> Option<f64> {
        self.result
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn error(&self) -> Option<InputError> {
        match self.feedback {
            Some(Feedback::Error(e)) => Some(e),
            _ => None,
        }
    }

    /// Replace one field. Clears any message, keeps the last result.
    pub fn set_operand(&mut self, which: Operand, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!(
            field = which.name(),
            previous_first = %self.first,
            previous_second = %self.second,
            new_value = %value,
            "Calculator input changed"
        );

        match which {
            Operand::First => self.first = value,
            Operand::Second => self.second = value,
        }
        self.feedback = None;
    }

    /// Both fields must be non-empty before either is checked for being numeric.
    fn validate(&self) -> Result<(f64, f64), InputError> {
        if self.first.is_empty() || self.second.is_empty() {
            return Err(InputError::Empty);
        }
        Ok((parse_operand(&self.first)?, parse_operand(&self.second)?))
    }

    /// Validate and compute. On failure the previous result is left untouched.
    pub fn apply(&mut self, op: Operation) -> Result<f64, InputError> {
        match self.validate() {
            Ok((a, b)) => {
                let value = op.compute(a, b);
                tracing::debug!(operation = op.label(), a, b, value, "Calculation complete");
                self.result = Some(value);
                self.feedback = Some(Feedback::Success(op));
                Ok(value)
            }
            Err(e) => {
                tracing::debug!(operation = op.label(), error = %e, "Calculator input rejected");
                self.feedback = Some(Feedback::Error(e));
                Err(e)
            }
        }
    }
}
