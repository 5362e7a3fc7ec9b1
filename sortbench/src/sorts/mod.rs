use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::SortError;

pub mod comparison;
pub mod distribution;

pub use comparison::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, selection_sort, shell_sort,
};
pub use distribution::{bucket_sort, counting_sort, radix_sort};

/// A sort routine the harness can time.
///
/// Implementors sort `seq` ascending in place and hand it back.
pub trait SortRoutine {
    fn algorithm(&self) -> Algorithm;

    fn sort<'a>(&self, seq: &'a mut [i64]) -> Result<&'a mut [i64], SortError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Works on any `Ord` type through pairwise comparison
    Comparison,
    /// Works on non-negative integers only
    Distribution,
}

/// Identifier for every algorithm in the catalogue.
#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[clap(rename_all = "kebab_case")]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Quick,
    Merge,
    Heap,
    Radix,
    Counting,
    Shell,
    Bucket,
}

impl Algorithm {
    /// The whole catalogue, in reporting order.
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::Radix,
        Algorithm::Counting,
        Algorithm::Shell,
        Algorithm::Bucket,
    ];

    /// Short kebab-case key, as used in configs and CSV output.
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Heap => "heap",
            Algorithm::Radix => "radix",
            Algorithm::Counting => "counting",
            Algorithm::Shell => "shell",
            Algorithm::Bucket => "bucket",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Radix => "Radix Sort",
            Algorithm::Counting => "Counting Sort",
            Algorithm::Shell => "Shell Sort",
            Algorithm::Bucket => "Bucket Sort",
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Algorithm::Radix | Algorithm::Counting | Algorithm::Bucket => Family::Distribution,
            _ => Family::Comparison,
        }
    }

    /// Whether equal elements always keep their input order.
    pub fn is_stable(&self) -> bool {
        matches!(self, Algorithm::Merge)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl SortRoutine for Algorithm {
    fn algorithm(&self) -> Algorithm {
        *self
    }

    fn sort<'a>(&self, seq: &'a mut [i64]) -> Result<&'a mut [i64], SortError> {
        Ok(match self {
            Algorithm::Bubble => bubble_sort(seq),
            Algorithm::Insertion => insertion_sort(seq),
            Algorithm::Selection => selection_sort(seq),
            Algorithm::Quick => {
                if seq.is_empty() {
                    return Ok(seq);
                }
                let high = seq.len() - 1;
                quick_sort(seq, 0, high)
            }
            Algorithm::Merge => merge_sort(seq),
            Algorithm::Heap => heap_sort(seq),
            Algorithm::Shell => shell_sort(seq),
            Algorithm::Radix => radix_sort(seq)?,
            Algorithm::Counting => counting_sort(seq)?,
            Algorithm::Bucket => bucket_sort(seq)?,
        })
    }
}
