use std::slice::ChunksMut;

pub trait MaybeParallelExt: IntoIterator + Sized {
    fn maybe_into_par_iter(self) -> Self::IntoIter {
        self.into_iter()
    }
}

impl<T: IntoIterator> MaybeParallelExt for T {}

pub trait MaybeParallelRefExt {
    type Item;
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    fn maybe_par_iter(&self) -> Self::Iter<'_>;
}

impl<T> MaybeParallelRefExt for [T] {
    type Item = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        T: 'a;

    fn maybe_par_iter(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> MaybeParallelRefExt for Vec<T> {
    type Item = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        T: 'a;

    fn maybe_par_iter(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

pub trait MaybeParallelSliceMut<T> {
    fn maybe_par_chunks_mut(&mut self, chunk_size: usize) -> ChunksMut<'_, T>;
}

impl<T: Send> MaybeParallelSliceMut<T> for [T] {
    fn maybe_par_chunks_mut(&mut self, chunk_size: usize) -> ChunksMut<'_, T> {
        self.chunks_mut(chunk_size)
    }
}
