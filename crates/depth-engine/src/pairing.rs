//! Left/right pairing with a fixed side preference.
//!
//! Every place that may read either side of the body goes through
//! [`SidePair`], so "which side wins" is decided in exactly one place:
//! the left side first, the right side as fallback.

use squatcheck_pose_model::Side;

/// An optional value for each side of the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidePair<T> {
    pub left: Option<T>,
    pub right: Option<T>,
}

impl<T> SidePair<T> {
    /// Build a pair by resolving each side independently.
    pub fn from_fn(mut resolve: impl FnMut(Side) -> Option<T>) -> Self {
        Self {
            left: resolve(Side::Left),
            right: resolve(Side::Right),
        }
    }

    pub fn get(&self, side: Side) -> Option<&T> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }

    /// Present values in preference order.
    pub fn present(&self) -> impl Iterator<Item = (Side, &T)> + '_ {
        Side::PREFERENCE
            .into_iter()
            .filter_map(move |side| self.get(side).map(|value| (side, value)))
    }

    /// The preferred present value: left if available, else right.
    pub fn primary_or_fallback(&self) -> Option<(Side, &T)> {
        self.present().next()
    }

    /// The present value with the smallest key. Ties keep the preferred side.
    pub fn least_by(&self, mut key: impl FnMut(&T) -> f64) -> Option<(Side, &T)> {
        let mut best: Option<(Side, &T, f64)> = None;
        for (side, value) in self.present() {
            let k = key(value);
            match best {
                Some((_, _, best_key)) if k >= best_key => {}
                _ => best = Some((side, value, k)),
            }
        }
        best.map(|(side, value, _)| (side, value))
    }
}
