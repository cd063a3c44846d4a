use rayon::{
    iter::{IntoParallelIterator, IntoParallelRefIterator},
    slice::{ChunksMut, ParallelSliceMut},
};

pub trait MaybeParallelExt: IntoParallelIterator + Sized {
    fn maybe_into_par_iter(self) -> Self::Iter {
        self.into_par_iter()
    }
}

impl<T: IntoParallelIterator> MaybeParallelExt for T {}

pub trait MaybeParallelRefExt: for<'a> IntoParallelRefIterator<'a> {
    fn maybe_par_iter(&self) -> <Self as IntoParallelRefIterator<'_>>::Iter {
        self.par_iter()
    }
}

impl<T: ?Sized + for<'a> IntoParallelRefIterator<'a>> MaybeParallelRefExt for T {}

pub trait MaybeParallelSliceMut<T: Send> {
    fn maybe_par_chunks_mut(&mut self, chunk_size: usize) -> ChunksMut<'_, T>;
}

impl<T: Send> MaybeParallelSliceMut<T> for [T] {
    fn maybe_par_chunks_mut(&mut self, chunk_size: usize) -> ChunksMut<'_, T> {
        self.par_chunks_mut(chunk_size)
    }
}
