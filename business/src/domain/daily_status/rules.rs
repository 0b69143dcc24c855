use super::value_objects::CookingStatus;

/// Daily status implied by a successful consumption.
///
/// Returns `Some(Cooked)` only for the first consumption of the day when the
/// user has not recorded anything for that day yet. `None` means the day's
/// status is left as it is; an explicit status is never replaced.
pub fn implicit_status(
    existing: Option<CookingStatus>,
    first_consume_today: bool,
) -> Option<CookingStatus> {
    match (existing, first_consume_today) {
        (None, true) => Some(CookingStatus::Cooked),
        _ => None,
    }
}
