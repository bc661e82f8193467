//! Winner selection shared by every award.
//!
//! A contest picks the candidates whose metric is best (within a tolerance),
//! then narrows them with an optional tie-break. Whatever is left is the
//! winner set, reported in candidate order; more than one is a tie.

use std::cmp::Ordering;

/// Whether the award goes to the highest or the lowest metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    Highest,
    Lowest,
}

type Metric<'a, C> = Box<dyn Fn(&C) -> f64 + 'a>;
type TieBreak<'a, C> = Box<dyn Fn(&C, &C) -> Ordering + 'a>;

pub struct Contest<'a, C> {
    goal: Goal,
    tolerance: f64,
    metric: Metric<'a, C>,
    tie_break: Option<TieBreak<'a, C>>,
}

impl<'a, C> Contest<'a, C> {
    pub fn highest(metric: impl Fn(&C) -> f64 + 'a) -> Self {
        Self::new(Goal::Highest, metric)
    }

    pub fn lowest(metric: impl Fn(&C) -> f64 + 'a) -> Self {
        Self::new(Goal::Lowest, metric)
    }

    fn new(goal: Goal, metric: impl Fn(&C) -> f64 + 'a) -> Self {
        Self {
            goal,
            tolerance: 0.0,
            metric: Box::new(metric),
            tie_break: None,
        }
    }

    /// Treat metrics within `tolerance` of the best as equal.
    pub fn within(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Secondary ordering among the leaders: `Less` means `a` is better.
    pub fn then(mut self, tie_break: impl Fn(&C, &C) -> Ordering + 'a) -> Self {
        self.tie_break = Some(Box::new(tie_break));
        self
    }

    /// Winning candidates in their original order. Empty only when there are
    /// no candidates.
    pub fn winners<'c>(&self, candidates: &'c [C]) -> Vec<&'c C> {
        let Some(best) = self.best_metric(candidates) else {
            return Vec::new();
        };

        let leaders: Vec<&C> = candidates
            .iter()
            .filter(|c| ((self.metric)(*c) - best).abs() <= self.tolerance)
            .collect();

        let Some(tie_break) = &self.tie_break else {
            return leaders;
        };

        let Some(top) = leaders
            .iter()
            .copied()
            .reduce(|best, c| if tie_break(c, best) == Ordering::Less { c } else { best })
        else {
            return leaders;
        };

        leaders
            .into_iter()
            .filter(|c| tie_break(*c, top) == Ordering::Equal)
            .collect()
    }

    /// Best metric value across `candidates`.
    pub fn best_metric(&self, candidates: &[C]) -> Option<f64> {
        candidates
            .iter()
            .map(|c| (self.metric)(c))
            .reduce(|a, b| match self.goal {
                Goal::Highest => a.max(b),
                Goal::Lowest => a.min(b),
            })
    }
}
