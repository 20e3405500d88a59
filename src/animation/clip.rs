use rustc_hash::FxHashMap;

use crate::animation::binding::CurveName;
use crate::animation::curve::{AnimationCurve, Keyframe};
use crate::animation::sink::CurveSink;

/// Curves produced for one target bone, all bound at the same path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RetargetedCurveSet {
    pub path: String,
    pub curves: Vec<(CurveName, AnimationCurve)>,
}

impl RetargetedCurveSet {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            curves: Vec::new(),
        }
    }

    #[must_use]
    pub fn curve(&self, name: CurveName) -> Option<&AnimationCurve> {
        self.curves.iter().find(|(n, _)| *n == name).map(|(_, c)| c)
    }

    /// Adds a curve, replacing any existing curve with the same name.
    pub fn insert(&mut self, name: CurveName, curve: AnimationCurve) {
        if let Some(slot) = self.curves.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = curve;
        } else {
            self.curves.push((name, curve));
        }
    }

    pub fn names(&self) -> impl Iterator<Item = CurveName> + '_ {
        self.curves.iter().map(|(n, _)| *n)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

/// In-memory curve sink: named collection of curve sets keyed by path.
#[derive(Debug, Clone, Default)]
pub struct AnimationClip {
    pub name: String,
    sets: Vec<RetargetedCurveSet>,
    index: FxHashMap<String, usize>,
}

impl AnimationClip {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn curve(&self, path: &str, name: CurveName) -> Option<&AnimationCurve> {
        self.bindings_for(path)?.curve(name)
    }

    #[must_use]
    pub fn bindings_for(&self, path: &str) -> Option<&RetargetedCurveSet> {
        self.index.get(path).map(|&i| &self.sets[i])
    }

    /// Bound paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.sets.iter().map(|s| s.path.as_str())
    }

    #[must_use]
    pub fn curve_sets(&self) -> &[RetargetedCurveSet] {
        &self.sets
    }

    #[must_use]
    pub fn curve_count(&self) -> usize {
        self.sets.iter().map(RetargetedCurveSet::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Last key time across all curves.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.sets
            .iter()
            .flat_map(|s| s.curves.iter())
            .map(|(_, c)| c.duration())
            .fold(0.0_f32, f32::max)
    }

    fn set_mut(&mut self, path: &str) -> &mut RetargetedCurveSet {
        let i = match self.index.get(path) {
            Some(&i) => i,
            None => {
                let i = self.sets.len();
                self.sets.push(RetargetedCurveSet::new(path));
                self.index.insert(path.to_owned(), i);
                i
            }
        };
        &mut self.sets[i]
    }
}

impl CurveSink for AnimationClip {
    fn set_curve(&mut self, path: &str, name: CurveName, keys: &[Keyframe]) {
        self.set_mut(path).insert(name, AnimationCurve::new(keys.to_vec()));
    }
}
