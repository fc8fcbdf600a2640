//! Keypad Session
//!
//! Collects key presses into an [`Expression`], evaluates it on `=`, and keeps
//! the calculation history in sync with its [`HistoryStore`]. The session owns
//! the text of the display; a front-end only forwards keys and renders
//! [`Session::display`] and [`Session::history`].
//!
//! ```text
//! AwaitingFirstOperand ──digit──▶ AwaitingOperator ──op──▶ AwaitingOperand
//!          ▲                            ▲    │                  │
//!          │                            └────┼──────digit───────┘
//!          └─────────────── "=" ─────────────┘──▶ Error (on ÷ 0, until "C")
//! ```

use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::expression::{CalculationError, Expression, Operator};
use crate::format::{NumberFormat, DECIMAL_SEPARATOR};
use crate::history::{CalculationRecord, HistoryList, HistoryStore};
use crate::storage::KeyValueStore;

/// Text shown on a cleared display
const ZERO: &str = "0";

/// A key on the calculator keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `0` through `9`
    Digit(char),
    /// The decimal separator
    Period,
    /// `+ − × ÷`
    Operator(Operator),
    /// `=`
    Equals,
    /// `C`
    Clear,
}

impl Key {
    /// Map a keypad label to its key
    ///
    /// Operators use their keypad symbols (`+ − × ÷`), clear is `C`.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => Some(Key::Digit(ch)),
            DECIMAL_SEPARATOR => Some(Key::Period),
            '=' => Some(Key::Equals),
            'C' => Some(Key::Clear),
            _ => {
                let mut buf = [0u8; 4];
                Operator::from_symbol(ch.encode_utf8(&mut buf)).map(Key::Operator)
            }
        }
    }
}

/// Where the session is in collecting an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    /// Nothing typed since start, clear, or the last result
    AwaitingFirstOperand,
    /// An operand is being typed
    AwaitingOperator,
    /// An operator was just pressed
    AwaitingOperand,
    /// The last evaluation failed; only clear is accepted
    Error,
}

/// One history row, rendered for read-only listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Items separated by spaces, e.g. `10.0 ÷ 2.0`
    pub expression: String,
    /// Full-precision result
    pub result: String,
}

impl From<&CalculationRecord> for HistoryEntry {
    fn from(record: &CalculationRecord) -> Self {
        Self {
            expression: record.expression().display_string(),
            result: record.result_string(),
        }
    }
}

/// Calculator input session backed by a persistent history
pub struct Session<S> {
    history_store: HistoryStore<S>,
    history: HistoryList,
    expression: Expression,
    display: String,
    state: InputState,
    format: NumberFormat,
    error_token: String,
}

impl<S: KeyValueStore> Session<S> {
    /// Start a session with default settings, loading history from `store`
    pub fn new(store: S) -> Self {
        Self::with_config(store, &CalculatorConfig::default())
    }

    /// Start a session configured by `config`, loading history from `store`
    pub fn with_config(store: S, config: &CalculatorConfig) -> Self {
        let history_store = HistoryStore::with_key(store, config.history_key.clone());
        let history = history_store.load();

        Self {
            history_store,
            history,
            expression: Expression::new(),
            display: ZERO.to_string(),
            state: InputState::AwaitingFirstOperand,
            format: config.number_format(),
            error_token: config.error_token.clone(),
        }
    }

    /// Current display text
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Current input state
    pub fn state(&self) -> InputState {
        self.state
    }

    /// Operands and operators entered since the last clear or `=`
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Completed calculations, oldest first
    pub fn records(&self) -> &[CalculationRecord] {
        &self.history
    }

    /// Completed calculations rendered for display, oldest first
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.iter().map(HistoryEntry::from).collect()
    }

    /// The store the history is saved to
    pub fn history_store(&self) -> &HistoryStore<S> {
        &self.history_store
    }

    /// Dispatch a key press
    ///
    /// Returns the evaluation outcome for [`Key::Equals`], `Ok(None)` otherwise.
    pub fn press_key(&mut self, key: Key) -> Result<Option<f64>, CalculationError> {
        match key {
            Key::Digit(ch) => self.press_digit_or_period(ch),
            Key::Period => self.press_digit_or_period(DECIMAL_SEPARATOR),
            Key::Operator(op) => self.press_operator(op),
            Key::Equals => return self.press_equals(),
            Key::Clear => self.press_clear(),
        }
        Ok(None)
    }

    /// Type a digit or the decimal separator into the display
    pub fn press_digit_or_period(&mut self, ch: char) {
        if self.state == InputState::Error {
            debug!(%ch, "ignoring input while error is displayed");
            return;
        }

        let starting = self.state != InputState::AwaitingOperator || self.display == ZERO;

        match ch {
            '0'..='9' if starting => {
                self.display.clear();
                self.display.push(ch);
            }
            '0'..='9' => self.display.push(ch),
            DECIMAL_SEPARATOR if starting => {
                self.display = format!("{ZERO}{DECIMAL_SEPARATOR}");
            }
            DECIMAL_SEPARATOR if self.display.contains(DECIMAL_SEPARATOR) => return,
            DECIMAL_SEPARATOR => self.display.push(ch),
            _ => {
                debug!(%ch, "ignoring non-numeric key");
                return;
            }
        }

        self.state = InputState::AwaitingOperator;
    }

    /// Commit the displayed operand followed by `op`
    pub fn press_operator(&mut self, op: Operator) {
        let Some(value) = self.format.parse(&self.display) else {
            debug!(display = %self.display, "display is not a number, ignoring operator");
            return;
        };

        self.expression.append_number(value);
        self.expression.append_operator(op);
        debug!(expression = %self.expression, "operator appended");

        self.display = ZERO.to_string();
        self.state = InputState::AwaitingOperand;
    }

    /// Commit the displayed operand and evaluate the expression
    ///
    /// A successful evaluation is appended to the history, which is then saved
    /// in full. Results or operands that overflowed to a non-finite value are
    /// shown but not recorded. Either way the expression is cleared. Returns `Ok(None)` when
    /// the display does not hold a number (for example the error token).
    pub fn press_equals(&mut self) -> Result<Option<f64>, CalculationError> {
        let Some(value) = self.format.parse(&self.display) else {
            debug!(display = %self.display, "display is not a number, ignoring equals");
            return Ok(None);
        };

        self.expression.append_number(value);
        let expression = std::mem::take(&mut self.expression);

        match expression.evaluate() {
            Ok(result) => {
                debug!(%expression, result, "evaluated");
                self.display = self.format.format(result);
                self.state = InputState::AwaitingFirstOperand;

                let record = CalculationRecord::new(expression, result);
                if record.is_encodable() {
                    self.history.push(record);
                    self.history_store.save(&self.history);
                } else {
                    // JSON has no inf/NaN; one such record would make every later save fail
                    warn!(result, "non-finite calculation left out of history");
                }

                Ok(Some(result))
            }
            Err(e) => {
                debug!(%expression, "evaluation failed: {e}");
                self.display = self.error_token.clone();
                self.state = InputState::Error;
                Err(e)
            }
        }
    }

    /// Discard the expression and reset the display
    pub fn press_clear(&mut self) {
        self.expression.clear();
        self.display = ZERO.to_string();
        self.state = InputState::AwaitingFirstOperand;
    }
}
