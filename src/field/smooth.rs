//! Gaussian smoothing of grid fields.
//!
//! Separable filter: one 1-D pass per axis with a normalized Gaussian
//! kernel truncated at 4 sigma. Where the kernel reaches past the
//! domain the constant fill value `cval` stands in, matching the
//! constant boundary mode of the usual array-processing filters.

use super::GridField;

impl GridField {
    /// Return a smoothed copy of this field.
    ///
    /// `sigma` holds one kernel width per axis, in grid cells. The
    /// receiver is never modified.
    pub fn smoothed(&self, sigma: &[f64], cval: f64) -> GridField {
        debug_assert_eq!(sigma.len(), self.rank());

        let mut values = self.values.clone();
        for axis in 0..self.rank() {
            if sigma[axis] > 0.0 {
                values = self.convolve_axis(&values, axis, sigma[axis], cval);
            }
        }

        GridField {
            shape: self.shape.clone(),
            origin: self.origin.clone(),
            step: self.step.clone(),
            strides: self.strides.clone(),
            values,
        }
    }

    fn convolve_axis(&self, values: &[f64], axis: usize, sigma: f64, cval: f64) -> Vec<f64> {
        let kernel = gaussian_kernel(sigma);
        let radius = (kernel.len() / 2) as isize;
        let n = self.shape[axis] as isize;
        let stride = self.strides[axis];

        let mut out = vec![0.0; values.len()];
        for (off, slot) in out.iter_mut().enumerate() {
            let i = ((off / stride) % self.shape[axis]) as isize;
            let mut acc = 0.0;
            for (k, w) in kernel.iter().enumerate() {
                let j = i + k as isize - radius;
                let v = if j < 0 || j >= n {
                    cval
                } else {
                    values[(off as isize + (j - i) * stride as isize) as usize]
                };
                acc += w * v;
            }
            *slot = acc;
        }
        out
    }
}

/// Normalized Gaussian kernel truncated at 4 sigma.
fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = (4.0 * sigma).ceil() as isize;
    let mut kernel: Vec<f64> = (-radius..=radius)
        .map(|i| (-0.5 * (i as f64 / sigma).powi(2)).exp())
        .collect();
    let sum: f64 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}
