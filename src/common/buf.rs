//! Buffer for holding limbs.

use crate::defs::Error;
use crate::defs::Limb;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice::SliceIndex;
use smallvec::SmallVec;

const STATIC_ALLOCATION: usize = 4;

/// Owned buffer of limbs.
///
/// The length of the buffer is the number of allocated limbs. Newly allocated limbs are always zero,
/// so the owner only has to keep zero the limbs it writes to and stops using.
#[derive(Debug, Hash, Default)]
pub struct LimbBuf {
    inner: SmallVec<[Limb; STATIC_ALLOCATION]>,
}

impl LimbBuf {
    /// Returns a buffer without allocated limbs.
    #[inline]
    pub fn empty() -> Self {
        LimbBuf {
            inner: SmallVec::new(),
        }
    }

    /// Returns a buffer of at least `sz` zero limbs.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn new(sz: usize) -> Result<Self, Error> {
        let mut inner = SmallVec::new();
        inner.try_reserve_exact(sz)?;
        inner.resize(sz, 0);
        Ok(LimbBuf { inner })
    }

    /// Returns a buffer holding a copy of `s`.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn from_slice(s: &[Limb]) -> Result<Self, Error> {
        let mut inner = SmallVec::new();
        inner.try_reserve_exact(s.len())?;
        inner.extend_from_slice(s);
        Ok(LimbBuf { inner })
    }

    /// Number of allocated limbs.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Makes sure at least `sz` limbs are allocated. Content is preserved, new limbs are set to zero.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn grow(&mut self, sz: usize) -> Result<(), Error> {
        let l = self.inner.len();
        if sz > l {
            self.inner.try_reserve_exact(sz - l)?;
            self.inner.resize(sz, 0);
        }
        Ok(())
    }

    /// Makes sure at least `sz` limbs are allocated, and sets to zero the first `used` limbs.
    /// After the call the first `sz` limbs are all zero, if limbs starting from `used` were zero before.
    ///
    /// ## Errors
    ///
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn reset(&mut self, sz: usize, used: usize) -> Result<(), Error> {
        let used = used.min(self.inner.len());
        self.inner[..used].fill(0);
        self.grow(sz)
    }

    /// Decrease the number of allocated limbs down to `sz`. Limbs starting from `sz` are discarded.
    pub fn shrink_to(&mut self, sz: usize) {
        if sz < self.inner.len() {
            self.inner.truncate(sz);
            self.inner.shrink_to_fit();
        }
    }

    /// Releases the memory of the buffer.
    pub fn release(&mut self) {
        self.inner = SmallVec::new();
    }
}

impl<I: SliceIndex<[Limb]>> IndexMut<I> for LimbBuf {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.inner.index_mut(index)
    }
}

impl<I: SliceIndex<[Limb]>> Index<I> for LimbBuf {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        self.inner.index(index)
    }
}

impl Deref for LimbBuf {
    type Target = [Limb];

    #[inline]
    fn deref(&self) -> &[Limb] {
        self.inner.deref()
    }
}

impl DerefMut for LimbBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Limb] {
        self.inner.deref_mut()
    }
}
