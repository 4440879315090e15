//! Array geometry: extents, windows and row traversal.
//!
//! ## Purpose
//!
//! This module defines `Grid`, the description of a 1-4 dimensional array
//! embedded in a flat buffer. The fastest varying axis comes first.
//!
//! ## Design notes
//!
//! * **Windows**: Axis `i` (except the last active one) may live inside a wider
//!   allocation of `w_i >= n_i` elements. Stride of axis `i` is the product of the
//!   windows of all faster axes.
//! * **Unit padding**: Inactive axes are stored with extent 1 so that every
//!   kernel can iterate over four axes unconditionally.
//! * **Rows**: Kernels walk the grid one fastest-axis row at a time; `Rows`
//!   yields the buffer offset and outer index of each row.
//!
//! ## Invariants
//!
//! * `1 <= ndim <= 4` and every active extent is at least 1.
//! * `windows[i] >= extents[i]` for every axis.

// Internal dependencies
use crate::primitives::errors::IspError;

/// Maximum number of array dimensions.
pub const MAX_DIMS: usize = 4;

/// Geometry of a strided 1-4 dimensional array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    ndim: usize,
    extents: [usize; MAX_DIMS],
    windows: [usize; MAX_DIMS],
}

impl Grid {
    /// Create a contiguous grid from its extents (fastest varying first).
    pub fn new(extents: &[usize]) -> Result<Self, IspError> {
        let ndim = extents.len();
        if ndim == 0 || ndim > MAX_DIMS {
            return Err(IspError::InvalidDimensions(ndim));
        }

        let mut ext = [1usize; MAX_DIMS];
        for (axis, &n) in extents.iter().enumerate() {
            if n == 0 {
                return Err(IspError::EmptyAxis { axis });
            }
            ext[axis] = n;
        }

        Ok(Self {
            ndim,
            extents: ext,
            windows: ext,
        })
    }

    /// Embed the grid in a larger allocation.
    ///
    /// `windows[i]` is the allocated width of axis `i`; at most `ndim - 1`
    /// windows may be given since the slowest axis needs none.
    pub fn with_windows(mut self, windows: &[usize]) -> Result<Self, IspError> {
        if windows.len() >= self.ndim {
            return Err(IspError::InvalidDimensions(windows.len() + 1));
        }
        for (axis, &w) in windows.iter().enumerate() {
            if w < self.extents[axis] {
                return Err(IspError::InvalidWindow {
                    axis,
                    window: w,
                    extent: self.extents[axis],
                });
            }
            self.windows[axis] = w;
        }
        Ok(self)
    }

    /// Same windows, extents grown by `padding` along each axis.
    ///
    /// The grown extents must still fit in the windows.
    pub fn padded(&self, padding: &[usize]) -> Result<Self, IspError> {
        if padding.len() != self.ndim {
            return Err(IspError::InvalidDimensions(padding.len()));
        }
        let mut grown = *self;
        for (axis, &np) in padding.iter().enumerate() {
            let n = self.extents[axis] + np;
            grown.extents[axis] = n;
            if axis + 1 < self.ndim {
                if self.windows[axis] < n {
                    return Err(IspError::InvalidWindow {
                        axis,
                        window: self.windows[axis],
                        extent: n,
                    });
                }
            } else {
                grown.windows[axis] = n;
            }
        }
        Ok(grown)
    }

    /// Number of active dimensions.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Active extents.
    #[inline]
    pub fn extents(&self) -> &[usize] {
        &self.extents[..self.ndim]
    }

    /// Extent of `axis`, 1 for inactive axes.
    #[inline]
    pub fn extent(&self, axis: usize) -> usize {
        self.extents[axis]
    }

    /// All four extents, inactive axes reported as 1.
    #[inline]
    pub fn extents4(&self) -> [usize; MAX_DIMS] {
        self.extents
    }

    /// Allocated width of `axis`.
    #[inline]
    pub fn window(&self, axis: usize) -> usize {
        self.windows[axis]
    }

    /// Element strides of the four axes.
    #[inline]
    pub fn strides(&self) -> [usize; MAX_DIMS] {
        let w = &self.windows;
        [1, w[0], w[0] * w[1], w[0] * w[1] * w[2]]
    }

    /// Buffer offset of a four-component index.
    #[inline]
    pub fn offset(&self, index: &[usize; MAX_DIMS]) -> usize {
        let s = self.strides();
        index[0] + s[1] * index[1] + s[2] * index[2] + s[3] * index[3]
    }

    /// Number of samples in the grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.extents.iter().product()
    }

    /// Always false: every axis holds at least one sample.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Minimum buffer length able to hold the grid.
    #[inline]
    pub fn required_len(&self) -> usize {
        let last = [
            self.extents[0] - 1,
            self.extents[1] - 1,
            self.extents[2] - 1,
            self.extents[3] - 1,
        ];
        self.offset(&last) + 1
    }

    /// True when both grids have the same dimensionality and extents.
    #[inline]
    pub fn same_extents(&self, other: &Grid) -> bool {
        self.ndim == other.ndim && self.extents == other.extents
    }

    /// Iterate over the fastest-axis rows of the grid.
    #[inline]
    pub fn rows(&self) -> Rows {
        Rows::new(self.extents, self.strides())
    }
}

// ============================================================================
// Row Traversal
// ============================================================================

/// One fastest-axis row of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    /// Buffer offset of the first element of the row.
    pub offset: usize,
    /// Index of the row; component 0 is always 0.
    pub index: [usize; MAX_DIMS],
}

/// Iterator over the rows of a grid, axis 2 fastest.
#[derive(Debug, Clone)]
pub struct Rows {
    extents: [usize; MAX_DIMS],
    strides: [usize; MAX_DIMS],
    next: Option<[usize; MAX_DIMS]>,
}

impl Rows {
    /// Rows over arbitrary extents and strides.
    pub fn new(extents: [usize; MAX_DIMS], strides: [usize; MAX_DIMS]) -> Self {
        Self {
            extents,
            strides,
            next: Some([0; MAX_DIMS]),
        }
    }
}

impl Iterator for Rows {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        let index = self.next?;
        let offset = index[1] * self.strides[1]
            + index[2] * self.strides[2]
            + index[3] * self.strides[3];

        // Odometer over axes 1..4
        let mut succ = index;
        let mut axis = 1;
        loop {
            if axis == MAX_DIMS {
                self.next = None;
                break;
            }
            succ[axis] += 1;
            if succ[axis] < self.extents[axis] {
                self.next = Some(succ);
                break;
            }
            succ[axis] = 0;
            axis += 1;
        }

        Some(Row { offset, index })
    }
}
