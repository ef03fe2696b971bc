#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    SelectNext,
    SelectPrev,
    Activate,
    /// Fetch from the configured source at this index.
    FetchSource(usize),
    /// Fetch again from whichever URL produced the current palette.
    Refetch,
    Resize,
}
