//! Elementary cellular automaton rules.
//!
//! A rule number in `0..=255` is expanded big-endian into an 8-entry lookup
//! table. Entry 0 is the next state for neighborhood `111` (encoding 7) and
//! entry 7 the next state for `000` (encoding 0), so a neighborhood with
//! encoding `e` is looked up at `7 - e`.

use crate::error::{CaError, Result};
use ca_planter_data::is_binary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lookup table indexed by `7 - encoding`.
pub type RuleTable = [u8; 8];

/// Expands a rule number into its lookup table.
pub fn decode(rule_number: i64) -> Result<RuleTable> {
    let n = u8::try_from(rule_number).map_err(|_| CaError::InvalidRule(rule_number))?;
    Ok(expand(n))
}

fn expand(n: u8) -> RuleTable {
    let mut table = [0u8; 8];
    for (idx, entry) in table.iter_mut().enumerate() {
        *entry = (n >> (7 - idx)) & 1;
    }
    table
}

/// Folds a lookup table back into its rule number.
///
/// Entries are read as bits, so any non-zero entry counts as 1.
pub fn encode(table: &RuleTable) -> u8 {
    table
        .iter()
        .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit != 0))
}

/// Next state of the center cell of `(left, center, right)`.
pub fn apply(left: u8, center: u8, right: u8, table: &RuleTable) -> Result<u8> {
    for v in [left, center, right] {
        if !is_binary(v) {
            return Err(CaError::InvalidCellState(v));
        }
    }
    let encoding = (left * 4 + center * 2 + right) as usize;
    Ok(table[7 - encoding])
}

/// A validated rule number together with its decoded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rule {
    number: u8,
    table: RuleTable,
}

impl Rule {
    pub fn new(rule_number: i64) -> Result<Self> {
        let table = decode(rule_number)?;
        Ok(Self {
            number: encode(&table),
            table,
        })
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn apply(&self, left: u8, center: u8, right: u8) -> Result<u8> {
        apply(left, center, right, &self.table)
    }
}

impl TryFrom<i64> for Rule {
    type Error = CaError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<u8> for Rule {
    fn from(number: u8) -> Self {
        Self {
            number,
            table: expand(number),
        }
    }
}

impl From<Rule> for i64 {
    fn from(rule: Rule) -> Self {
        i64::from(rule.number)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule {}", self.number)
    }
}
