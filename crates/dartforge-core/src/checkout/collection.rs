//! Ordered, duplicate-free collection of checkouts

use std::collections::HashSet;
use std::fmt;
use std::ops::Index;

use super::Checkout;

/// Checkouts in discovery order.
///
/// Two checkouts with the same text form are duplicates; the later one is
/// discarded on [`Checkouts::push`].
///
/// # Examples
///
/// ```
/// use dartforge_core::{Checkout, Checkouts, Score};
///
/// let mut checkouts = Checkouts::new();
/// assert!(checkouts.push(Checkout::single(Score::double(20).unwrap())));
/// assert!(!checkouts.push(Checkout::single(Score::double(20).unwrap())));
/// assert!(checkouts.push(Checkout::single(Score::double(25).unwrap())));
///
/// assert_eq!(checkouts.len(), 2);
/// assert_eq!(checkouts.to_string(), "D20, DB");
/// assert_eq!(checkouts.preview(1), "D20, …");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checkouts {
    items: Vec<Checkout>,
    rendered: HashSet<String>,
}

impl Checkouts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a checkout unless one with the same text form is present.
    ///
    /// Returns `true` if the checkout was added.
    pub fn push(&mut self, checkout: Checkout) -> bool {
        if !self.rendered.insert(checkout.render()) {
            return false;
        }
        self.items.push(checkout);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Checkout> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&Checkout> {
        self.items.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Checkout> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Checkout] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Checkout> {
        self.items
    }

    /// Renders the first `shown` checkouts, followed by `, …` when more exist.
    pub fn preview(&self, shown: usize) -> String {
        let mut out = self
            .items
            .iter()
            .take(shown)
            .map(Checkout::render)
            .collect::<Vec<_>>()
            .join(", ");

        if self.items.len() > shown {
            if shown > 0 {
                out.push_str(", ");
            }
            out.push('…');
        }
        out
    }
}

impl Index<usize> for Checkouts {
    type Output = Checkout;

    fn index(&self, index: usize) -> &Checkout {
        &self.items[index]
    }
}

impl IntoIterator for Checkouts {
    type Item = Checkout;
    type IntoIter = std::vec::IntoIter<Checkout>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Checkouts {
    type Item = &'a Checkout;
    type IntoIter = std::slice::Iter<'a, Checkout>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Checkouts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, checkout) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{checkout}")?;
        }
        Ok(())
    }
}
