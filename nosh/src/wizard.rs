//! Chat Wizard — the fixed three-question preference flow.
//!
//! A linear state machine: closed until opened, then one state per
//! question index. Selecting an option records the answer under `q{i}`
//! and advances; answering the last question closes the wizard and
//! discards the answers. Nothing downstream consumes them yet.

use crate::interface::{WizardPrompt, WizardTransition};
use parking_lot::Mutex;
use std::collections::HashMap;

struct WizardQuestion {
    question: &'static str,
    options: &'static [&'static str],
}

const QUESTIONS: &[WizardQuestion] = &[
    WizardQuestion {
        question: "What type of taste are you looking for?",
        options: &["Spicy", "Sweet", "Sour", "Crunchy", "Healthy"],
    },
    WizardQuestion {
        question: "What’s your meal timing?",
        options: &["Breakfast", "Lunch", "Dinner", "Snacks"],
    },
    WizardQuestion {
        question: "Veg or Non-Veg?",
        options: &["Veg", "Non-Veg", "Both"],
    },
];

#[derive(Debug, Clone, Default, PartialEq)]
struct WizardState {
    open: bool,
    step: usize,
    answers: HashMap<String, String>,
}

/// The floating chatbot's modal state machine.
/// Fully decoupled from the menu store; its state lives only while the
/// modal is open.
#[derive(uniffi::Object)]
pub struct ChatWizard {
    state: Mutex<WizardState>,
}

#[uniffi::export]
impl ChatWizard {
    /// A closed wizard at step 0 with no answers
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(WizardState::default()),
        }
    }

    /// Open the modal at the first question with empty answers
    pub fn open(&self) {
        let mut state = self.state.lock();
        *state = WizardState {
            open: true,
            ..WizardState::default()
        };
    }

    /// Close the modal, resetting step and answers
    pub fn close(&self) {
        *self.state.lock() = WizardState::default();
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().open
    }

    /// Current question index; 0 when closed
    pub fn step(&self) -> u32 {
        self.state.lock().step as u32
    }

    /// Number of questions in the script
    pub fn total_steps(&self) -> u32 {
        QUESTIONS.len() as u32
    }

    /// The question currently on screen, or None while closed
    pub fn prompt(&self) -> Option<WizardPrompt> {
        let state = self.state.lock();
        if !state.open {
            return None;
        }
        let q = &QUESTIONS[state.step];
        Some(WizardPrompt {
            question: q.question.to_string(),
            options: q.options.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Answers accumulated so far, keyed `q0`, `q1`, `q2`
    pub fn answers(&self) -> HashMap<String, String> {
        self.state.lock().answers.clone()
    }

    /// Record `option` for the current question. Advances to the next
    /// question, or closes and clears after the last one. Every tap is
    /// a valid transition; the option text is not validated against the
    /// script.
    pub fn select_option(&self, option: String) -> WizardTransition {
        let mut state = self.state.lock();
        if !state.open {
            return WizardTransition::Ignored;
        }

        let key = format!("q{}", state.step);
        state.answers.insert(key, option);

        if state.step < QUESTIONS.len() - 1 {
            state.step += 1;
            WizardTransition::Advanced {
                step: state.step as u32,
            }
        } else {
            *state = WizardState::default();
            WizardTransition::Completed
        }
    }
}

impl Default for ChatWizard {
    fn default() -> Self {
        Self::new()
    }
}
