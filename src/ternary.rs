/// A ternary expression handler.  Rust's ifs are already expressions,
/// but `cargo fmt` insists on breaking them up line-by-line, and the
/// border-handling tables in the energy and backtrace code are far
/// easier to read as one-liners.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
