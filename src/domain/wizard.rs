use crate::error::{DemoError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A value entered into one of the wizard's form fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(Decimal),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::Number(value) => Some(*value),
        }
    }

    /// Text made only of whitespace counts as blank; numbers never do.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Number(_) => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{text}"),
            FieldValue::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(Decimal::from(value))
    }
}

/// Condition that must hold before leaving a step forwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepGuard {
    Always,
    RequiredText(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub title: String,
    pub description: String,
    pub guard: StepGuard,
}

impl Step {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            guard: StepGuard::Always,
        }
    }

    pub fn requiring(mut self, field: impl Into<String>) -> Self {
        self.guard = StepGuard::RequiredText(field.into());
        self
    }
}

/// The fixed shape of a wizard: its steps, which step (if any) runs the
/// generation action, and the values fields take before the user edits them.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardDefinition {
    steps: Vec<Step>,
    generation_step: Option<usize>,
    defaults: BTreeMap<String, FieldValue>,
}

impl WizardDefinition {
    pub fn new(steps: Vec<Step>) -> Result<Self> {
        if steps.is_empty() {
            return Err(DemoError::ValidationError(
                "A wizard needs at least one step".to_string(),
            ));
        }
        Ok(Self {
            steps,
            generation_step: None,
            defaults: BTreeMap::new(),
        })
    }

    pub fn with_generation_step(mut self, index: usize) -> Result<Self> {
        if index >= self.steps.len() {
            return Err(DemoError::ValidationError(format!(
                "Generation step {index} is out of range for {} steps",
                self.steps.len()
            )));
        }
        self.generation_step = Some(index);
        Ok(self)
    }

    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.defaults.insert(name.into(), value.into());
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn generation_step(&self) -> Option<usize> {
        self.generation_step
    }

    pub fn default_value(&self, name: &str) -> Option<&FieldValue> {
        self.defaults.get(name)
    }
}

/// Issued when a generation starts. A completion is only applied while its
/// ticket is still the pending one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenerationTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Generation {
    Idle,
    Pending(GenerationTicket),
    Done(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardPhase {
    Idle(usize),
    Generating(usize),
    Generated(usize, String),
}

/// How the stepper renders a step relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Complete,
    Active,
    Incomplete,
}

/// Transient state of one pass through a wizard.
///
/// Every operation is infallible: a disallowed move leaves the session
/// untouched and reports `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardSession {
    definition: WizardDefinition,
    current: usize,
    furthest: usize,
    fields: BTreeMap<String, FieldValue>,
    generation: Generation,
    tickets_issued: u64,
}

impl WizardSession {
    pub fn new(definition: WizardDefinition) -> Self {
        Self {
            definition,
            current: 0,
            furthest: 0,
            fields: BTreeMap::new(),
            generation: Generation::Idle,
            tickets_issued: 0,
        }
    }

    pub fn definition(&self) -> &WizardDefinition {
        &self.definition
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn total_steps(&self) -> usize {
        self.definition.len()
    }

    pub fn furthest_visited(&self) -> usize {
        self.furthest
    }

    /// Values the user has set explicitly, without defaults.
    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    /// The user's value for `name`, or the definition's default.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .get(name)
            .or_else(|| self.definition.default_value(name))
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn artifact(&self) -> Option<&str> {
        match &self.generation {
            Generation::Done(artifact) => Some(artifact),
            _ => None,
        }
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.generation, Generation::Pending(_))
    }

    pub fn phase(&self) -> WizardPhase {
        match &self.generation {
            Generation::Idle => WizardPhase::Idle(self.current),
            Generation::Pending(_) => WizardPhase::Generating(self.current),
            Generation::Done(artifact) => WizardPhase::Generated(self.current, artifact.clone()),
        }
    }

    pub fn step_status(&self, index: usize) -> StepStatus {
        match index.cmp(&self.current) {
            std::cmp::Ordering::Less => StepStatus::Complete,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Incomplete,
        }
    }

    /// Whether the current step's exit guard passes and a next step exists.
    pub fn can_advance(&self) -> bool {
        if self.current + 1 >= self.total_steps() {
            return false;
        }

        let guard_passes = match &self.definition.steps()[self.current].guard {
            StepGuard::Always => true,
            StepGuard::RequiredText(name) => self.field(name).is_some_and(|v| !v.is_blank()),
        };

        let generated = self.definition.generation_step() != Some(self.current)
            || self.artifact().is_some();

        guard_passes && generated
    }

    /// Moves to `index` if it was already visited, or if it is the next
    /// step and the current guard passes. Returns whether the move happened.
    pub fn go_to_step(&mut self, index: usize) -> bool {
        if self.is_generating() || index >= self.total_steps() || index == self.current {
            return false;
        }

        if index <= self.furthest || (index == self.current + 1 && self.can_advance()) {
            self.current = index;
            self.furthest = self.furthest.max(index);
            return true;
        }

        false
    }

    pub fn next(&mut self) -> bool {
        self.go_to_step(self.current + 1)
    }

    pub fn back(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(index) => self.go_to_step(index),
            None => false,
        }
    }

    /// Starts generation when idle at the generation step.
    pub fn begin_generation(&mut self) -> Option<GenerationTicket> {
        if self.definition.generation_step() != Some(self.current)
            || self.generation != Generation::Idle
        {
            return None;
        }

        self.tickets_issued += 1;
        let ticket = GenerationTicket(self.tickets_issued);
        self.generation = Generation::Pending(ticket);
        Some(ticket)
    }

    /// Stores the artifact if `ticket` is still pending. Stale tickets from
    /// a reset session are rejected.
    pub fn complete_generation(&mut self, ticket: GenerationTicket, artifact: String) -> bool {
        match self.generation {
            Generation::Pending(pending) if pending == ticket => {
                self.generation = Generation::Done(artifact);
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.furthest = 0;
        self.fields.clear();
        self.generation = Generation::Idle;
    }
}
