use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("'{}' is not a #rrggbb colour", .0)]
    InvalidColor(String),

    #[error(
        "Touch slot {} is out of range, only {} touches are tracked",
        slot,
        capacity
    )]
    TouchSlotOutOfRange { slot: usize, capacity: usize },
}
