/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !($crate::core::traits::FuzzyEq::fuzzy_eq(left_val, *right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
}

/// Construct a closed ring (`Vec<Point<_>>`) from a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use cavalier_clipper::ring;
/// # use cavalier_clipper::geometry::*;
/// let r = ring![(0, 0), (4, 0), (4, 4)];
/// assert_eq!(r.len(), 3);
/// assert_eq!(r[1], point(4, 0));
/// ```
#[macro_export]
macro_rules! ring {
    ($( $x:expr ),* $(,)?) => {
        {
            vec![$($crate::geometry::Point::new($x.0, $x.1)),*]
        }
    };
}
