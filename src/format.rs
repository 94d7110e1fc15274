use crate::time_slot::TimeSlot;

/// Renders a slot the way it is shown in the booking form, e.g. `8:30 PM`.
pub fn display_12h(slot: TimeSlot) -> String {
    let suffix = if slot.hour() < 12 { "AM" } else { "PM" };
    let hour = match slot.hour() % 12 {
        0 => 12,
        hour => hour,
    };
    format!("{}:{:02} {}", hour, slot.minute(), suffix)
}
