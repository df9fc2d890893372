/// Actions an observer can take during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the scan and return the best candidate found so far.
    StopEarly,
}
