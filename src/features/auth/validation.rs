//! Declarative client-side form validation. A `Schema` lists the rules for
//! each field; `validate` runs all of them synchronously and reports the first
//! failing rule per field. This is advisory only: the backend re-validates.

use regex::Regex;
use std::collections::BTreeMap;

/// Read access to the current value of each field of a form.
pub trait FormValues<F> {
    fn value(&self, field: F) -> &str;
}

#[derive(Clone, Copy, Debug)]
pub enum Rule<F> {
    /// Non-blank after trimming.
    Required(&'static str),
    /// At least this many characters, counted as entered.
    MinChars(usize, &'static str),
    /// Looks like `local@domain.tld`.
    Email(&'static str),
    /// Matches the given regular expression.
    Pattern(&'static str, &'static str),
    /// Equal to another field; the error belongs to this field.
    SameAs(F, &'static str),
}

impl<F: Copy> Rule<F> {
    fn check<V: FormValues<F> + ?Sized>(&self, value: &str, values: &V) -> Result<(), &'static str> {
        let passed = match *self {
            Rule::Required(_) => !value.trim().is_empty(),
            Rule::MinChars(min, _) => value.chars().count() >= min,
            Rule::Email(_) => is_valid_email(value.trim()),
            Rule::Pattern(pattern, _) => {
                Regex::new(pattern).is_ok_and(|regex| regex.is_match(value))
            }
            Rule::SameAs(other, _) => value == values.value(other),
        };
        if passed { Ok(()) } else { Err(self.message()) }
    }

    fn message(&self) -> &'static str {
        match *self {
            Rule::Required(message)
            | Rule::MinChars(_, message)
            | Rule::Email(message)
            | Rule::Pattern(_, message)
            | Rule::SameAs(_, message) => message,
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|regex| regex.is_match(email))
}

/// Per-field error messages, at most one per field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors<F: Ord>(BTreeMap<F, &'static str>);

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn get(&self, field: F) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.0.keys().copied()
    }
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

pub struct Schema<F> {
    fields: Vec<(F, Vec<Rule<F>>)>,
}

impl<F: Copy + Ord> Default for Schema<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Copy + Ord> Schema<F> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    #[must_use]
    pub fn field(mut self, field: F, rules: Vec<Rule<F>>) -> Self {
        self.fields.push((field, rules));
        self
    }

    /// Validates every field; `Err` carries one message per failing field.
    pub fn validate<V: FormValues<F> + ?Sized>(&self, values: &V) -> Result<(), FieldErrors<F>> {
        let mut errors = BTreeMap::new();
        for (field, rules) in &self.fields {
            let value = values.value(*field);
            if let Some(message) = rules.iter().find_map(|rule| rule.check(value, values).err()) {
                errors.insert(*field, message);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FieldErrors(errors))
        }
    }
}
