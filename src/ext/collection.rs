//! Extension traits for slices and vectors.
//!
//! `first`, `last`, `len`, `is_empty`, `concat` and `windows` are the slice's own inherent
//! methods and already behave the way the helpers below expect, so they are not repeated here.

use crate::config::SentenceConnectors;
use crate::constants::PARAM_SEPARATOR;
use crate::error::{Error, Result};
use crate::ext::dig::resolve_index;
use indexmap::{Equivalent, IndexMap, IndexSet};
use rand::seq::{index, SliceRandom};
use rand::Rng;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::Hash;
use std::iter::Sum;

/// Extension trait for ordered, indexable sequences.
pub trait SliceExt<T> {
    /// Element at `index`; negative indices count from the end.
    ///
    /// # Examples
    /// ```
    /// use garnish::ext::SliceExt;
    ///
    /// let items = [10, 20, 30];
    /// assert_eq!(items.at(-1), Some(&30));
    /// assert_eq!(items.at(3), None);
    /// ```
    fn at(&self, index: isize) -> Option<&T>;
    fn second(&self) -> Option<&T>;
    fn third(&self) -> Option<&T>;
    fn fourth(&self) -> Option<&T>;
    fn fifth(&self) -> Option<&T>;
    /// The 42nd element.
    fn forty_two(&self) -> Option<&T>;
    fn third_to_last(&self) -> Option<&T>;
    fn second_to_last(&self) -> Option<&T>;
    /// The `n`-th element counting back from the end, where `1` is the last element.
    fn nth_to_last(&self, n: usize) -> Option<&T>;

    /// Up to `n` leading elements.
    fn first_n(&self, n: usize) -> &[T];
    /// Up to `n` trailing elements.
    fn last_n(&self, n: usize) -> &[T];
    /// The tail starting at `index`, empty when `index` is past the end.
    fn from(&self, index: usize) -> &[T];

    fn minimum(&self) -> Option<&T>
    where
        T: PartialOrd;
    fn maximum(&self) -> Option<&T>
    where
        T: PartialOrd;
    /// Smallest and largest element in one pass.
    fn minmax(&self) -> Option<(&T, &T)>
    where
        T: PartialOrd;
    /// Sum of the elements; zero for an empty sequence.
    fn sum(&self) -> T
    where
        T: Clone + Sum<T>;

    /// Copy without later duplicates, in first-occurrence order.
    fn uniq(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone;
    /// Occurrence count of each distinct element, in first-occurrence order.
    fn tally(&self) -> IndexMap<T, usize>
    where
        T: Eq + Hash + Clone;
    /// Ascending copy. Incomparable pairs (NaN) keep their relative order.
    fn sorted(&self) -> Vec<T>
    where
        T: PartialOrd + Clone;

    /// Joins the elements with `/`.
    fn to_param(&self) -> String
    where
        T: Display;
    /// Joins the elements into an English list: `"a, b and c"`.
    fn to_sentence(&self) -> String
    where
        T: Display;
    fn to_sentence_with(&self, connectors: &SentenceConnectors) -> String
    where
        T: Display;
    /// Bracketed, comma-separated rendering: `"[1, 2, 3]"`.
    fn to_s(&self) -> String
    where
        T: Display;

    fn reject<F>(&self, pred: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool;
    /// Splits into (matching, not matching), both in original order.
    fn partition<F>(&self, pred: F) -> (Vec<T>, Vec<T>)
    where
        T: Clone,
        F: FnMut(&T) -> bool;
    fn any_matching<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool;
    fn is_non_empty(&self) -> bool;
    /// True when exactly one element matches.
    fn one_matching<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool;
    /// True when the sequence has exactly one element.
    fn has_one(&self) -> bool;
    fn count_matching<F>(&self, pred: F) -> usize
    where
        F: FnMut(&T) -> bool;

    /// Every `n`-element subsequence, preserving relative order.
    ///
    /// Empty when `n` is zero or larger than the sequence.
    ///
    /// # Examples
    /// ```
    /// use garnish::ext::SliceExt;
    ///
    /// assert_eq!(
    ///     [1, 2, 3].combination(2),
    ///     vec![vec![1, 2], vec![1, 3], vec![2, 3]]
    /// );
    /// ```
    fn combination(&self, n: usize) -> Vec<Vec<T>>
    where
        T: Clone;
    /// Cartesian product with `other`.
    fn product<U: Clone>(&self, other: &[U]) -> Vec<(T, U)>
    where
        T: Clone;
    /// Wraps each element into a one-element vector.
    fn wrap_each(&self) -> Vec<Vec<T>>
    where
        T: Clone;
    /// Sliding windows of width `n`.
    fn each_cons(&self, n: usize) -> Vec<Vec<T>>
    where
        T: Clone;
    fn each_cons_map<R, F>(&self, n: usize, f: F) -> Vec<R>
    where
        F: FnMut(&[T]) -> R;
    /// Cyclic left rotation by `n`; negative `n` rotates right.
    fn rotate(&self, n: isize) -> Vec<T>
    where
        T: Clone;
    /// Positional pairs, truncated to the shorter sequence.
    fn zip<U: Clone>(&self, other: &[U]) -> Vec<(T, U)>
    where
        T: Clone;
    /// Pairs every element with the element at the same position in `other`, if any.
    fn zip_padded<U: Clone>(&self, other: &[U]) -> Vec<(T, Option<U>)>
    where
        T: Clone;

    fn union<S: AsRef<[T]>>(&self, others: &[S]) -> Vec<T>
    where
        T: Eq + Hash + Clone;
    fn intersection<S: AsRef<[T]>>(&self, others: &[S]) -> Vec<T>
    where
        T: Eq + Hash + Clone;
    fn difference<S: AsRef<[T]>>(&self, others: &[S]) -> Vec<T>
    where
        T: Eq + Hash + Clone;

    /// A uniformly chosen element, or `None` when empty.
    fn sample(&self) -> Option<&T>;
    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T>;
    /// `n` distinct positions drawn without replacement, in random order.
    ///
    /// Asking for more than the sequence holds returns every element, shuffled.
    fn sample_n(&self, n: usize) -> Vec<&T>;
    fn sample_n_with<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<&T>;
    /// Uniformly permuted copy (Fisher-Yates); `self` is untouched.
    fn shuffle(&self) -> Vec<T>
    where
        T: Clone;
    fn shuffle_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<T>
    where
        T: Clone;
}

fn join_display<T: Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

impl<T> SliceExt<T> for [T] {
    fn at(&self, index: isize) -> Option<&T> {
        self.get(resolve_index(index, self.len())?)
    }

    fn second(&self) -> Option<&T> {
        self.get(1)
    }

    fn third(&self) -> Option<&T> {
        self.get(2)
    }

    fn fourth(&self) -> Option<&T> {
        self.get(3)
    }

    fn fifth(&self) -> Option<&T> {
        self.get(4)
    }

    fn forty_two(&self) -> Option<&T> {
        self.get(41)
    }

    fn third_to_last(&self) -> Option<&T> {
        self.nth_to_last(3)
    }

    fn second_to_last(&self) -> Option<&T> {
        self.nth_to_last(2)
    }

    fn nth_to_last(&self, n: usize) -> Option<&T> {
        if n == 0 {
            return None;
        }
        self.get(self.len().checked_sub(n)?)
    }

    fn first_n(&self, n: usize) -> &[T] {
        &self[..n.min(self.len())]
    }

    fn last_n(&self, n: usize) -> &[T] {
        &self[self.len() - n.min(self.len())..]
    }

    fn from(&self, index: usize) -> &[T] {
        &self[index.min(self.len())..]
    }

    fn minimum(&self) -> Option<&T>
    where
        T: PartialOrd,
    {
        self.iter().reduce(|min, x| if x < min { x } else { min })
    }

    fn maximum(&self) -> Option<&T>
    where
        T: PartialOrd,
    {
        self.iter().reduce(|max, x| if x > max { x } else { max })
    }

    fn minmax(&self) -> Option<(&T, &T)>
    where
        T: PartialOrd,
    {
        let first = self.first()?;
        Some(self.iter().fold((first, first), |(min, max), x| {
            (if x < min { x } else { min }, if x > max { x } else { max })
        }))
    }

    fn sum(&self) -> T
    where
        T: Clone + Sum<T>,
    {
        self.iter().cloned().sum()
    }

    fn uniq(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        self.iter().cloned().collect::<IndexSet<T>>().into_iter().collect()
    }

    fn tally(&self) -> IndexMap<T, usize>
    where
        T: Eq + Hash + Clone,
    {
        let mut totals = IndexMap::new();
        for item in self {
            *totals.entry(item.clone()).or_insert(0) += 1;
        }
        totals
    }

    fn sorted(&self) -> Vec<T>
    where
        T: PartialOrd + Clone,
    {
        let mut copy = self.to_vec();
        copy.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        copy
    }

    fn to_param(&self) -> String
    where
        T: Display,
    {
        join_display(self, PARAM_SEPARATOR)
    }

    fn to_sentence(&self) -> String
    where
        T: Display,
    {
        self.to_sentence_with(&SentenceConnectors::default())
    }

    fn to_sentence_with(&self, connectors: &SentenceConnectors) -> String
    where
        T: Display,
    {
        match self {
            [] => String::new(),
            [only] => only.to_string(),
            [a, b] => format!("{a}{}{b}", connectors.two_words_connector),
            [init @ .., last] => format!(
                "{}{}{last}",
                join_display(init, &connectors.words_connector),
                connectors.last_word_connector
            ),
        }
    }

    fn to_s(&self) -> String
    where
        T: Display,
    {
        format!("[{}]", join_display(self, ", "))
    }

    fn reject<F>(&self, mut pred: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|&x| !pred(x)).cloned().collect()
    }

    fn partition<F>(&self, mut pred: F) -> (Vec<T>, Vec<T>)
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.iter().cloned().partition(|x| pred(x))
    }

    fn any_matching<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(pred)
    }

    fn is_non_empty(&self) -> bool {
        !self.is_empty()
    }

    fn one_matching<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.count_matching(pred) == 1
    }

    fn has_one(&self) -> bool {
        self.len() == 1
    }

    fn count_matching<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|&x| pred(x)).count()
    }

    fn combination(&self, n: usize) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        let len = self.len();
        if n == 0 || n > len {
            return Vec::new();
        }

        // Index vectors in lexicographic order; position i never exceeds i + len - n.
        let mut indices: Vec<usize> = (0..n).collect();
        let mut result = Vec::new();
        loop {
            result.push(indices.iter().map(|&i| self[i].clone()).collect());

            let mut i = n;
            loop {
                if i == 0 {
                    return result;
                }
                i -= 1;
                if indices[i] != i + len - n {
                    break;
                }
            }
            indices[i] += 1;
            for j in i + 1..n {
                indices[j] = indices[j - 1] + 1;
            }
        }
    }

    fn product<U: Clone>(&self, other: &[U]) -> Vec<(T, U)>
    where
        T: Clone,
    {
        self.iter()
            .flat_map(|x| other.iter().map(move |y| (x.clone(), y.clone())))
            .collect()
    }

    fn wrap_each(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.iter().map(|x| vec![x.clone()]).collect()
    }

    fn each_cons(&self, n: usize) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.each_cons_map(n, |window| window.to_vec())
    }

    fn each_cons_map<R, F>(&self, n: usize, f: F) -> Vec<R>
    where
        F: FnMut(&[T]) -> R,
    {
        if n == 0 {
            return Vec::new();
        }
        self.windows(n).map(f).collect()
    }

    fn rotate(&self, n: isize) -> Vec<T>
    where
        T: Clone,
    {
        let mut copy = self.to_vec();
        if !copy.is_empty() {
            let shift = n.rem_euclid(copy.len() as isize) as usize;
            copy.rotate_left(shift);
        }
        copy
    }

    fn zip<U: Clone>(&self, other: &[U]) -> Vec<(T, U)>
    where
        T: Clone,
    {
        self.iter().cloned().zip(other.iter().cloned()).collect()
    }

    fn zip_padded<U: Clone>(&self, other: &[U]) -> Vec<(T, Option<U>)>
    where
        T: Clone,
    {
        self.iter()
            .enumerate()
            .map(|(i, x)| (x.clone(), other.get(i).cloned()))
            .collect()
    }

    fn union<S: AsRef<[T]>>(&self, others: &[S]) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        let mut seen: IndexSet<T> = self.iter().cloned().collect();
        for other in others {
            seen.extend(other.as_ref().iter().cloned());
        }
        seen.into_iter().collect()
    }

    fn intersection<S: AsRef<[T]>>(&self, others: &[S]) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        let sets: Vec<IndexSet<&T>> =
            others.iter().map(|other| other.as_ref().iter().collect()).collect();
        self.iter()
            .filter(|x| sets.iter().all(|set| set.contains(x)))
            .cloned()
            .collect::<IndexSet<T>>()
            .into_iter()
            .collect()
    }

    fn difference<S: AsRef<[T]>>(&self, others: &[S]) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        let sets: Vec<IndexSet<&T>> =
            others.iter().map(|other| other.as_ref().iter().collect()).collect();
        self.iter()
            .filter(|x| !sets.iter().any(|set| set.contains(x)))
            .cloned()
            .collect::<IndexSet<T>>()
            .into_iter()
            .collect()
    }

    fn sample(&self) -> Option<&T> {
        self.sample_with(&mut rand::thread_rng())
    }

    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        SliceRandom::choose(self, rng)
    }

    fn sample_n(&self, n: usize) -> Vec<&T> {
        self.sample_n_with(n, &mut rand::thread_rng())
    }

    fn sample_n_with<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<&T> {
        let amount = n.min(self.len());
        index::sample(rng, self.len(), amount)
            .into_iter()
            .map(|i| &self[i])
            .collect()
    }

    fn shuffle(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.shuffle_with(&mut rand::thread_rng())
    }

    fn shuffle_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<T>
    where
        T: Clone,
    {
        let mut copy = self.to_vec();
        SliceRandom::shuffle(copy.as_mut_slice(), rng);
        copy
    }
}

/// Extension trait for in-place edits of vectors.
pub trait VecExt<T> {
    /// Removes and returns the element at `index` (negative counts from the end).
    ///
    /// Out-of-range indices return `None` and leave the vector unchanged.
    fn delete_at(&mut self, index: isize) -> Option<T>;
}

impl<T> VecExt<T> for Vec<T> {
    fn delete_at(&mut self, index: isize) -> Option<T> {
        let i = resolve_index(index, self.len())?;
        Some(self.remove(i))
    }
}

/// Dropping absent values from a container.
pub trait Compact {
    type Output;

    fn compact(&self) -> Self::Output;
}

impl<T: Clone> Compact for [Option<T>] {
    type Output = Vec<T>;

    fn compact(&self) -> Vec<T> {
        self.iter().flatten().cloned().collect()
    }
}

impl Compact for [Value] {
    type Output = Vec<Value>;

    fn compact(&self) -> Vec<Value> {
        self.iter().filter(|v| !v.is_null()).cloned().collect()
    }
}

/// Extension trait for sequences of rows.
pub trait MatrixExt<T> {
    /// Swaps rows and columns.
    ///
    /// # Errors
    /// * `Error::InvalidArgument` - If the rows do not all have the same length
    fn transpose(&self) -> Result<Vec<Vec<T>>>
    where
        T: Clone;
}

impl<T> MatrixExt<T> for [Vec<T>] {
    fn transpose(&self) -> Result<Vec<Vec<T>>>
    where
        T: Clone,
    {
        let Some(first) = self.first() else {
            return Ok(Vec::new());
        };
        let width = first.len();
        if let Some(row) = self.iter().position(|row| row.len() != width) {
            return Err(Error::InvalidArgument(format!(
                "row {row} has {} elements, expected {width}",
                self[row].len()
            )));
        }
        Ok((0..width)
            .map(|col| self.iter().map(|row| row[col].clone()).collect())
            .collect())
    }
}

/// Extension trait for sequences of maps.
pub trait PluckExt<K, V> {
    /// The value under `key` in every map, `None` where it is missing.
    fn pluck<Q>(&self, key: &Q) -> Vec<Option<&V>>
    where
        Q: ?Sized + Hash + Equivalent<K>;
}

impl<K: Hash + Eq, V> PluckExt<K, V> for [IndexMap<K, V>] {
    fn pluck<Q>(&self, key: &Q) -> Vec<Option<&V>>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.iter().map(|map| map.get(key)).collect()
    }
}
