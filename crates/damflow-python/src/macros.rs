/// Generate a scalar `#[pyfunction]` wrapping a core rating-curve lookup,
/// plus a vectorized variant mapping the lookup over a numpy array.
///
/// The doc comment on the invocation becomes the scalar function's
/// docstring; the vectorized function is named `{scalar}_array`.
macro_rules! curve_bindings {
    (
        $(#[$meta:meta])*
        $scalar:ident, $vector:ident, $core_fn:path
    ) => {
        $(#[$meta])*
        #[pyo3::pyfunction]
        fn $scalar(x: f64) -> f64 {
            $core_fn(x)
        }

        /// Vectorized variant: apply the lookup element-wise to an array.
        #[pyo3::pyfunction]
        fn $vector<'py>(
            py: pyo3::Python<'py>,
            xs: numpy::PyReadonlyArray1<'py, f64>,
        ) -> pyo3::PyResult<pyo3::Bound<'py, numpy::PyArray1<f64>>> {
            let slice = crate::convert::contiguous_slice(&xs)?;
            let out: Vec<f64> = slice.iter().map(|&x| $core_fn(x)).collect();
            Ok(numpy::PyArray1::from_vec(py, out))
        }
    };
}
