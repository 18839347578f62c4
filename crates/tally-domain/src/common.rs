//! Shared traits for ledger primitives.

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Sums the amounts of every entry in `entries`.
pub fn total_amount<'a, T, I>(entries: I) -> f64
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    entries.into_iter().map(Amounted::amount).sum()
}
