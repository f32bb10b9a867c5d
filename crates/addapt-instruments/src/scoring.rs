use serde::Serialize;

use crate::error::InstrumentError;

/// One choice on an ordinal response scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseOption {
    pub value: u8,
    pub label: &'static str,
}

/// A checklist example attached to a DIVA item or impairment domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Example {
    pub id: &'static str,
    pub text: &'static str,
}

/// A single question as printed on the instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: &'static str,
    pub text: &'static str,
    /// Empty for plain ordinal items.
    pub examples: &'static [Example],
}

impl Item {
    pub const fn ordinal(id: &'static str, text: &'static str) -> Self {
        Self {
            id,
            text,
            examples: &[],
        }
    }

    pub fn example(&self, id: &str) -> Option<&'static Example> {
        self.examples.iter().find(|e| e.id == id)
    }
}

/// Resolve a fixed-length answer set into plain values.
///
/// Fails on the first unanswered item or the first value above `max`.
/// Item numbers in errors are 1-based, as printed on the questionnaire.
pub(crate) fn complete_items<const N: usize>(
    instrument: &'static str,
    items: &[Option<u8>; N],
    max: u8,
) -> Result<[u8; N], InstrumentError> {
    let mut values = [0u8; N];
    for (idx, answer) in items.iter().enumerate() {
        let value = answer.ok_or_else(|| InstrumentError::IncompleteInput {
            instrument,
            item: format!("item {}", idx + 1),
        })?;
        if value > max {
            return Err(InstrumentError::MalformedAnswer {
                instrument,
                item: format!("item {}", idx + 1),
                value: u32::from(value),
                max: u32::from(max),
            });
        }
        values[idx] = value;
    }
    Ok(values)
}

pub(crate) fn sum(values: &[u8]) -> u32 {
    values.iter().map(|&v| u32::from(v)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_items_passes_values_through() {
        let values = complete_items("TEST", &[Some(0), Some(3), Some(2)], 3).unwrap();
        assert_eq!(values, [0, 3, 2]);
        assert_eq!(sum(&values), 5);
    }

    #[test]
    fn missing_item_is_reported_one_based() {
        let err = complete_items("TEST", &[Some(1), None, Some(9)], 3).unwrap_err();
        assert_eq!(
            err,
            InstrumentError::IncompleteInput {
                instrument: "TEST",
                item: "item 2".to_string(),
            }
        );
    }

    #[test]
    fn out_of_range_value_is_not_clamped() {
        let err = complete_items("TEST", &[Some(1), Some(5)], 3).unwrap_err();
        assert_eq!(
            err,
            InstrumentError::MalformedAnswer {
                instrument: "TEST",
                item: "item 2".to_string(),
                value: 5,
                max: 3,
            }
        );
    }
}
