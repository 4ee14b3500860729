//! CSV fare report.

use csv::{Terminator, WriterBuilder};

use crate::error::{EngineError, EngineResult};
use crate::models::FareCalculationResult;

use super::format_pounds;

const HEADER: [&str; 6] = [
    "Timestamp",
    "From Zone",
    "To Zone",
    "Base Fare",
    "Charged Fare",
    "Explanation",
];

pub(super) fn render(result: &FareCalculationResult) -> EngineResult<String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER).map_err(output_error)?;

    for fare in &result.journey_fares {
        writer
            .write_record([
                fare.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
                fare.from_zone.to_string(),
                fare.to_zone.to_string(),
                format_pounds(fare.base_fare),
                format_pounds(fare.charged_fare),
                fare.explanation.replace(',', ";"),
            ])
            .map_err(output_error)?;
    }

    let bytes = writer.into_inner().map_err(|e| EngineError::OutputError {
        message: e.to_string(),
    })?;
    let mut output = String::from_utf8(bytes).map_err(|e| EngineError::OutputError {
        message: e.to_string(),
    })?;

    output.push('\n');
    output.push_str(&format!("Total Fare,,,,,{}", format_pounds(result.total_fare)));

    Ok(output)
}

fn output_error(error: csv::Error) -> EngineError {
    EngineError::OutputError {
        message: format!("CSV write error: {}", error),
    }
}
