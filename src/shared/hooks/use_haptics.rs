use dioxus::prelude::*;

use crate::domain::services::SharedHaptics;
use crate::shared::services::Vibration;

/// Haptics from context, or the device vibration API when the app did not
/// provide one
pub fn use_haptics() -> SharedHaptics {
    use_hook(|| {
        try_consume_context::<SharedHaptics>().unwrap_or_else(|| SharedHaptics::new(Vibration))
    })
}
