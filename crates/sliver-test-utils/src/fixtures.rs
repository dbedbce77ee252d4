//! Reusable views for tests and benches.
//!
//! - [`fruits`]: five fruit names, length = capacity = 5.
//! - [`fruits_with_spare_capacity`]: the same five names with capacity 8.
//! - [`hundreds`]: `0, 100, 200, ...` filling a full view.
//! - [`records`]: `"Rec: 1"`, `"Rec: 2"`, ... built by repeated append.
//! - [`names`]: six names in a fixed-size view.

use sliver_store::SliceView;

pub const FRUITS: [&str; 5] = ["Apple", "Orange", "Banana", "Grape", "Plum"];

pub const NAMES: [&str; 6] = ["Annie", "Betty", "Charley", "Doug", "Edward", "Hoanh"];

/// `make(5)` filled with [`FRUITS`].
pub fn fruits() -> SliceView<String> {
    fill(SliceView::make(FRUITS.len()))
}

/// `make(5, 8)` filled with [`FRUITS`].
pub fn fruits_with_spare_capacity() -> SliceView<String> {
    fill(SliceView::with_capacity(FRUITS.len(), 8))
}

fn fill(view: SliceView<String>) -> SliceView<String> {
    for (i, name) in FRUITS.iter().enumerate() {
        view.set(i, (*name).to_string())
            .expect("fixture view is sized to hold every fruit");
    }
    view
}

/// A full view of `n` elements where element `i` is `i * 100`.
pub fn hundreds(n: usize) -> SliceView<i64> {
    (0..n as i64).map(|i| i * 100).collect()
}

/// `n` records appended one at a time to an empty view.
pub fn records(n: usize) -> SliceView<String> {
    let mut view = SliceView::new();
    for record in 1..=n {
        view.push(format!("Rec: {record}"));
    }
    view
}

/// A fixed-size view of [`NAMES`].
pub fn names() -> SliceView<String> {
    NAMES.iter().map(|name| (*name).to_string()).collect()
}
