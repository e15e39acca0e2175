use crate::config::Rules;

pub trait Validate<T> {
    fn validate(&self, entity: &T) -> bool;
}

/// Accepts a parsed amount when it lies in `min_take..=max_take`. Deck size
/// is not considered here; the controller checks that separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveValidator {
    pub min: u32,
    pub max: u32,
}

impl MoveValidator {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn from_rules(rules: &Rules) -> Self {
        Self::new(rules.min_take, rules.max_take)
    }
}

impl Default for MoveValidator {
    fn default() -> Self {
        Self::from_rules(&Rules::default())
    }
}

impl Validate<Option<i64>> for MoveValidator {
    fn validate(&self, entity: &Option<i64>) -> bool {
        match *entity {
            Some(n) => (self.min as i64..=self.max as i64).contains(&n),
            None => false,
        }
    }
}
