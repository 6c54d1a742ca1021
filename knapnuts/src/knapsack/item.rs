use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::{Error, Result};

/// A type of item (a "cake") which can be taken any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Item {
    weight: u64,
    value: u64,
}

impl Item {
    /// Creates a new item type, `weight` has to be strictly positive.
    pub fn new(weight: u64, value: u64) -> Result<Self> {
        if weight == 0 {
            return Err(Error::InvalidInput(format!(
                "item weight must be positive (value {value})"
            )));
        }
        Ok(Item { weight, value })
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Value per unit of weight.
    /// Only meant for reporting, use [`Item::ratio_cmp`] to compare items.
    pub fn ratio(&self) -> f64 {
        self.value as f64 / self.weight as f64
    }

    /// Compares the value-to-weight ratio of two items exactly.
    pub fn ratio_cmp(&self, other: &Item) -> Ordering {
        let lhs = self.value as u128 * other.weight as u128;
        let rhs = other.value as u128 * self.weight as u128;
        lhs.cmp(&rhs)
    }

    /// Takes as many copies of this item as fit in `capacity`.
    /// Returns the value gained and the capacity left over.
    pub(crate) fn fill(&self, capacity: u64) -> (u64, u64) {
        let copies = capacity / self.weight;
        (copies.saturating_mul(self.value), capacity % self.weight)
    }
}

/// Greedy preference order: higher ratio first, lighter item first when ratios are equal.
///
/// `Ordering::Less` means `a` is preferred over `b`, so sorting ascending with this comparator
/// puts the most attractive item in front.
pub fn best_first(a: &Item, b: &Item) -> Ordering {
    b.ratio_cmp(a).then(a.weight.cmp(&b.weight))
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.weight, self.value)
    }
}

/// Parses the `weight:value` notation used on the command line.
impl FromStr for Item {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidInput(format!("expected <weight>:<value>, got {s:?}"));
        let (weight, value) = s.split_once(':').ok_or_else(invalid)?;
        let weight = weight.trim().parse::<u64>().map_err(|_| invalid())?;
        let value = value.trim().parse::<u64>().map_err(|_| invalid())?;
        Item::new(weight, value)
    }
}
