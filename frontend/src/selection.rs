use shared::OptimizeRequest;

use crate::error::ValidationError;

/// Origin and destination slots.
///
/// Marker clicks go through [`Selection::click`], which cycles start → end →
/// start-again. The select controls go through [`Selection::set_start`] and
/// [`Selection::set_end`], which overwrite a slot without touching the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    start: Option<String>,
    end: Option<String>,
}

impl Selection {
    pub fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }

    pub fn click(&mut self, city: &str) {
        match (&self.start, &self.end) {
            (None, _) => self.start = Some(city.to_string()),
            (Some(_), None) => self.end = Some(city.to_string()),
            (Some(_), Some(_)) => {
                self.start = Some(city.to_string());
                self.end = None;
            }
        }
    }

    pub fn set_start(&mut self, value: &str) {
        self.start = slot_value(value);
    }

    pub fn set_end(&mut self, value: &str) {
        self.end = slot_value(value);
    }

    pub fn to_request(&self) -> Result<OptimizeRequest, ValidationError> {
        match (&self.start, &self.end) {
            (Some(start), Some(end)) if start == end => Err(ValidationError::Duplicate),
            (Some(start), Some(end)) => Ok(OptimizeRequest {
                start_node: start.clone(),
                end_node: end.clone(),
            }),
            _ => Err(ValidationError::Missing),
        }
    }
}

fn slot_value(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
