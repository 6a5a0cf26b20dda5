use std::ops::{Index, IndexMut};

use serde::{Serialize, Serializer, ser::SerializeMap as _};

use crate::Pattern;

/// A value for every pattern, stored in canonical pattern order.
///
/// Serializes as a map keyed by pattern id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternMap<T>([T; Pattern::COUNT]);

impl<T> PatternMap<T> {
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Pattern) -> T,
    {
        Self(Pattern::ALL.map(&mut f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pattern, &T)> + '_ {
        Pattern::ALL.into_iter().zip(&self.0)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.0.iter()
    }

    #[must_use]
    pub fn map<U, F>(&self, mut f: F) -> PatternMap<U>
    where
        F: FnMut(Pattern, &T) -> U,
    {
        PatternMap::from_fn(|p| f(p, &self.0[p.index()]))
    }
}

impl<T: Default> Default for PatternMap<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<Pattern> for PatternMap<T> {
    type Output = T;

    fn index(&self, pattern: Pattern) -> &T {
        &self.0[pattern.index()]
    }
}

impl<T> IndexMut<Pattern> for PatternMap<T> {
    fn index_mut(&mut self, pattern: Pattern) -> &mut T {
        &mut self.0[pattern.index()]
    }
}

impl<T: Serialize> Serialize for PatternMap<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Pattern::COUNT))?;
        for (pattern, value) in self.iter() {
            map.serialize_entry(pattern.id(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_by_pattern() {
        let mut map = PatternMap::from_fn(Pattern::index);
        assert_eq!(map[Pattern::TotalSum], 0);
        assert_eq!(map[Pattern::FrogExclusion], 16);
        map[Pattern::AcValue] = 100;
        assert_eq!(map.values().copied().sum::<usize>(), (0..17).sum::<usize>() - 1 + 100);
    }

    #[test]
    fn test_serializes_as_id_map_in_order() {
        let map = PatternMap::from_fn(|p| p == Pattern::TotalSum);
        let json = serde_json::to_string(&map).unwrap();
        assert!(json.starts_with(r#"{"total_sum":true,"ac_value":false"#));
        assert!(json.ends_with(r#""frog_exclusion":false}"#));
    }
}
