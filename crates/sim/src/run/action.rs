/// Control actions an observer can return to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run early and report the outcome so far.
    StopEarly,
}
