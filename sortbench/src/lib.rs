//! A catalogue of classic sorting algorithms and a harness for timing them.
//!
//! ```
//! use sortbench::{merge_sort, quick_sort, Algorithm, Bencher, SortRoutine};
//!
//! let mut list = vec![5, 3, 8, 1, 9, 2];
//! assert_eq!(merge_sort(&mut list), &[1, 2, 3, 5, 8, 9]);
//!
//! let mut list = vec![4, 2, 7, 1];
//! assert_eq!(quick_sort(&mut list, 0, 3), &[1, 2, 4, 7]);
//!
//! let mut list = vec![170, 45, 75, 90];
//! let result = Bencher::new(100).bench(&Algorithm::Radix, &mut list).unwrap();
//! assert_eq!(result.iterations, 100);
//! ```

mod bencher;
mod error;
pub mod sorts;
mod suite;
pub mod workload;

pub use bencher::{
    BenchTimer, Bencher, BenchmarkResult, WorkloadPolicy, DEFAULT_ITERATIONS, TIME_SCALE,
};
pub use error::{InvalidInput, SortError};
pub use sorts::{
    bubble_sort, bucket_sort, counting_sort, heap_sort, insertion_sort, merge_sort, quick_sort,
    radix_sort, selection_sort, shell_sort, Algorithm, Family, SortRoutine,
};
pub use std::hint::black_box;
pub use suite::{SharingPolicy, Suite, SuiteEntry};
pub use workload::{FixedWorkload, RandomWorkload, Workload};
