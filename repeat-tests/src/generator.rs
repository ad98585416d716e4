// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display, Formatter, Write as _};
use std::io::Write;
use std::iter::FusedIterator;
use std::ops::Range;

use log::trace;

use crate::errors::Result;

/// A single generated `[UnityTest]` wrapper: the test at `index` in the input
/// list, called during round `round`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedUnit<'a> {
    pub round: i64,
    pub index: usize,
    pub name: &'a str,
}

impl Display for GeneratedUnit<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[UnityTest]\npublic IEnumerator A{}{}{}(){{ yield return {}();}}",
            self.round, self.name, self.index, self.name
        )
    }
}

/// The list of test names and how many rounds to repeat them for.
///
/// Rounds are numbered from 1 up to, but not including, `count`, so a count
/// of `N` yields `N - 1` rounds. Iterating the plan by reference starts a
/// fresh sequence every time.
#[derive(Debug, Clone)]
pub struct RepeatPlan<'a, S> {
    tests: &'a [S],
    count: i64,
}

impl<'a, S: AsRef<str>> RepeatPlan<'a, S> {
    pub fn new(tests: &'a [S], count: i64) -> Self {
        RepeatPlan { tests, count }
    }

    pub fn tests(&self) -> &'a [S] {
        self.tests
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    /// Round indices covered by this plan, empty when `count <= 1`.
    pub fn rounds(&self) -> Range<i64> {
        1..self.count.max(1)
    }

    /// Number of units the plan produces, `(count - 1) * tests.len()`.
    pub fn unit_count(&self) -> usize {
        let rounds = usize::try_from(self.count.saturating_sub(1)).unwrap_or(0);
        rounds.saturating_mul(self.tests.len())
    }

    pub fn units(&self) -> Units<'a, S> {
        let rounds = self.rounds();
        Units {
            tests: self.tests,
            round: rounds.start,
            end: rounds.end,
            index: 0,
        }
    }
}

impl<'a, S: AsRef<str>> IntoIterator for &RepeatPlan<'a, S> {
    type Item = GeneratedUnit<'a>;
    type IntoIter = Units<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.units()
    }
}

/// Lazy iterator over the units of a [`RepeatPlan`], rounds outermost.
#[derive(Debug, Clone)]
pub struct Units<'a, S> {
    tests: &'a [S],
    round: i64,
    end: i64,
    index: usize,
}

impl<'a, S: AsRef<str>> Iterator for Units<'a, S> {
    type Item = GeneratedUnit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.round >= self.end {
            return None;
        }
        let name = self.tests.get(self.index)?;

        let unit = GeneratedUnit {
            round: self.round,
            index: self.index,
            name: name.as_ref(),
        };

        self.index += 1;
        if self.index == self.tests.len() {
            self.index = 0;
            self.round += 1;
        }

        Some(unit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.tests.is_empty() || self.round >= self.end {
            0
        } else {
            let rounds_left = usize::try_from(self.end - self.round).unwrap_or(usize::MAX);
            rounds_left
                .saturating_mul(self.tests.len())
                .saturating_sub(self.index)
        };
        (remaining, Some(remaining))
    }
}

impl<S: AsRef<str>> FusedIterator for Units<'_, S> {}

/// Writes every unit of `plan`, each followed by a newline, and returns how
/// many were written. Stops at the first failed write.
pub fn write_units<S, W>(plan: &RepeatPlan<'_, S>, writer: &mut W) -> Result<usize>
where
    S: AsRef<str>,
    W: Write,
{
    let mut written = 0;
    for unit in plan {
        trace!(
            "Writing round {} test {} ({})",
            unit.round,
            unit.index,
            unit.name
        );
        writeln!(writer, "{}", unit)?;
        written += 1;
    }
    Ok(written)
}

/// Same bytes as [`write_units`], collected into a `String`.
pub fn render<S: AsRef<str>>(plan: &RepeatPlan<'_, S>) -> Result<String> {
    let mut out = String::new();
    for unit in plan {
        writeln!(out, "{}", unit)?;
    }
    Ok(out)
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod generator_tests;
