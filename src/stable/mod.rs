// In-place bubble sort with early exit on a swap-free pass.
pub mod rust_bubble;

// Calls slice::sort and slice::sort_by, used as reference.
pub mod rust_std;
