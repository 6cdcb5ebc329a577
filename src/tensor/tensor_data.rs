pub enum TensorData<T> {
    Cpu(Vec<T>),
    Unallocated,
}

impl<T: Copy + Default> TensorData<T> {
    pub fn zeroed(len: usize) -> Self {
        Self::Cpu(vec![T::default(); len])
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Cpu(data) => data,
            Self::Unallocated => &[],
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            Self::Cpu(data) => data,
            Self::Unallocated => &mut [],
        }
    }

    pub fn is_allocated(&self) -> bool {
        matches!(self, Self::Cpu(_))
    }
}
