use crate::animation::binding::CurveName;
use crate::animation::clip::RetargetedCurveSet;
use crate::animation::curve::Keyframe;

/// Consumer of retargeted curves.
///
/// Several curves may share a path. Setting a curve that already exists for
/// the same `(path, name)` replaces it.
pub trait CurveSink {
    fn set_curve(&mut self, path: &str, name: CurveName, keys: &[Keyframe]);

    /// Hands over every curve of a set.
    fn add_curve_set(&mut self, set: RetargetedCurveSet) {
        for (name, curve) in &set.curves {
            self.set_curve(&set.path, *name, &curve.keys);
        }
    }
}

impl CurveSink for Vec<RetargetedCurveSet> {
    fn set_curve(&mut self, path: &str, name: CurveName, keys: &[Keyframe]) {
        let curve = keys.to_vec().into();
        if let Some(set) = self.iter_mut().find(|s| s.path == path) {
            set.insert(name, curve);
        } else {
            let mut set = RetargetedCurveSet::new(path);
            set.insert(name, curve);
            self.push(set);
        }
    }

    fn add_curve_set(&mut self, set: RetargetedCurveSet) {
        if self.iter().any(|s| s.path == set.path) {
            for (name, curve) in &set.curves {
                self.set_curve(&set.path, *name, &curve.keys);
            }
        } else {
            self.push(set);
        }
    }
}

impl<S: CurveSink + ?Sized> CurveSink for &mut S {
    fn set_curve(&mut self, path: &str, name: CurveName, keys: &[Keyframe]) {
        (**self).set_curve(path, name, keys);
    }

    fn add_curve_set(&mut self, set: RetargetedCurveSet) {
        (**self).add_curve_set(set);
    }
}
