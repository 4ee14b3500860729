//! Plain-text fare report.

use crate::models::FareCalculationResult;

use super::format_pounds;

const RULE_WIDTH: usize = 80;

pub(super) fn render(result: &FareCalculationResult) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut lines = vec![
        heavy.clone(),
        "FARE CALCULATION RESULT".to_string(),
        heavy.clone(),
        String::new(),
    ];

    if result.journey_fares.is_empty() {
        lines.push("No journeys found.".to_string());
    } else {
        lines.push("Journey Details:".to_string());
        lines.push(light.clone());

        for (index, fare) in result.journey_fares.iter().enumerate() {
            lines.push(format!(
                "{}. {} | Zone {} → {}",
                index + 1,
                fare.timestamp.format("%d/%m/%Y %H:%M"),
                fare.from_zone,
                fare.to_zone
            ));
            lines.push(format!(
                " Base Fare: £{} | Charged: £{}",
                format_pounds(fare.base_fare),
                format_pounds(fare.charged_fare)
            ));
            lines.push(format!(" {}", fare.explanation));
            lines.push(String::new());
        }

        lines.push(light);
    }

    lines.push(String::new());
    lines.push(format!("TOTAL FARE: £{}", format_pounds(result.total_fare)));
    lines.push(heavy);

    lines.join("\n")
}
