/// Uniform entry points every sort implementation exposes, so the test suite and the benchmarks
/// only have to be written once.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;

#[doc(hidden)]
pub use paste;

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_sort_test_inner {
    ($sort_impl:ty, $test_fn_name:ident) => {
        #[test]
        fn $test_fn_name() {
            $crate::tests::$test_fn_name::<$sort_impl>();
        }
    };
    ($sort_impl:ty, $test_fn_name:ident, $type_name:ident, $type:ty) => {
        $crate::paste::paste! {
            #[test]
            fn [<$test_fn_name _ $type_name>]() {
                $crate::tests::$test_fn_name::<$type, $sort_impl>();
            }
        }
    };
}

/// Stamps out one `#[test]` per generic test in [`tests`] for the given [`Sort`] implementation.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_test_inner!($sort_impl, basic);
        $crate::instantiate_sort_test_inner!($sort_impl, fixed_seed);
        $crate::instantiate_sort_test_inner!($sort_impl, idempotent);

        $crate::instantiate_sort_test_inner!($sort_impl, random, i32, i32);
        $crate::instantiate_sort_test_inner!($sort_impl, random, u64, u64);
        $crate::instantiate_sort_test_inner!($sort_impl, random, i128, i128);
        $crate::instantiate_sort_test_inner!($sort_impl, random, string, String);
        $crate::instantiate_sort_test_inner!($sort_impl, random, large_val, [u64; 4]);

        $crate::instantiate_sort_test_inner!($sort_impl, random_d2, i32, i32);
        $crate::instantiate_sort_test_inner!($sort_impl, random_d20, i32, i32);
        $crate::instantiate_sort_test_inner!($sort_impl, random_d20, string, String);
        $crate::instantiate_sort_test_inner!($sort_impl, random_zipf, i32, i32);
        $crate::instantiate_sort_test_inner!($sort_impl, all_equal, i32, i32);
        $crate::instantiate_sort_test_inner!($sort_impl, ascending, i32, i32);
        $crate::instantiate_sort_test_inner!($sort_impl, descending, i32, i32);
        $crate::instantiate_sort_test_inner!($sort_impl, descending, string, String);
        $crate::instantiate_sort_test_inner!($sort_impl, saw_mixed, i32, i32);
        $crate::instantiate_sort_test_inner!($sort_impl, pipe_organ, i32, i32);

        $crate::instantiate_sort_test_inner!($sort_impl, int_edge);
        $crate::instantiate_sort_test_inner!($sort_impl, sort_vs_sort_by);
        $crate::instantiate_sort_test_inner!($sort_impl, sort_by_reverse);
        $crate::instantiate_sort_test_inner!($sort_impl, float_total_cmp);
        $crate::instantiate_sort_test_inner!($sort_impl, stability);
        $crate::instantiate_sort_test_inner!($sort_impl, stability_with_patterns);
        $crate::instantiate_sort_test_inner!($sort_impl, panic_retain_orig_set);
        $crate::instantiate_sort_test_inner!($sort_impl, violate_ord_retain_orig_set);
    };
}
