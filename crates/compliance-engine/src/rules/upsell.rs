//! Cross-sell signals: insurance, flight/hotel booking, VIP handling

use crate::patterns::{contains_any, fold_case, INSURANCE_KEYWORDS, TRAVEL_BOOKING_KEYWORDS, VIP_KEYWORDS};
use shared_types::UpsellFlags;

pub fn detect_upsell_opportunities(text: &str) -> UpsellFlags {
    let text_lower = fold_case(text);

    UpsellFlags {
        insurance: contains_any(&text_lower, INSURANCE_KEYWORDS),
        flight_hotel: contains_any(&text_lower, TRAVEL_BOOKING_KEYWORDS),
        vip: contains_any(&text_lower, VIP_KEYWORDS),
    }
}
