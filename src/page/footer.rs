//! Footer with the live copyright year.

use serde::Serialize;

use crate::traits::Clock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub year: i32,
    pub owner: &'static str,
}

impl Footer {
    /// Read the year from `clock` now. Never cached.
    pub fn at(clock: &dyn Clock, owner: &'static str) -> Self {
        Self {
            year: clock.current_year(),
            owner,
        }
    }

    pub fn text(&self) -> String {
        format!("© {} {}. All rights reserved.", self.year, self.owner)
    }
}
