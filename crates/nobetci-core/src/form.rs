//! The query form: province selection, district text, and the two ways of
//! submitting (the search action and Enter in the district field).

use thiserror::Error;

use crate::provinces::find_province;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Province,
    District,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Tab,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    SelectProvince(String),
    EditDistrict(String),
    KeyDown { field: Field, key: Key },
    SearchClicked,
}

/// Parameters of one lookup. `district` is empty when no filter is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub province: String,
    pub district: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown province '{0}'")]
    UnknownProvince(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    province: String,
    district: String,
}

impl SearchForm {
    /// Creates a form with `province` preselected and an empty district.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownProvince`] if `province` is not one of the
    /// 81 provinces.
    pub fn new(province: &str) -> Result<Self, FormError> {
        let province = find_province(province)
            .ok_or_else(|| FormError::UnknownProvince(province.to_string()))?;
        Ok(Self {
            province: province.to_string(),
            district: String::new(),
        })
    }

    #[must_use]
    pub fn province(&self) -> &str {
        &self.province
    }

    #[must_use]
    pub fn district(&self) -> &str {
        &self.district
    }

    /// Changes the selected province. An unknown name leaves the current
    /// selection in place.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownProvince`] if `input` does not resolve.
    pub fn select_province(&mut self, input: &str) -> Result<&str, FormError> {
        let province =
            find_province(input).ok_or_else(|| FormError::UnknownProvince(input.to_string()))?;
        province.clone_into(&mut self.province);
        Ok(&self.province)
    }

    pub fn edit_district(&mut self, text: &str) {
        text.trim().clone_into(&mut self.district);
    }

    /// The request the current selections describe.
    #[must_use]
    pub fn submit(&self) -> SearchRequest {
        SearchRequest {
            province: self.province.clone(),
            district: self.district.clone(),
        }
    }

    /// Applies one UI event and returns the request to issue, if the event
    /// is a submit.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownProvince`] for a province selection that
    /// does not resolve.
    pub fn handle(&mut self, event: FormEvent) -> Result<Option<SearchRequest>, FormError> {
        match event {
            FormEvent::SelectProvince(input) => {
                self.select_province(&input)?;
                Ok(None)
            }
            FormEvent::EditDistrict(text) => {
                self.edit_district(&text);
                Ok(None)
            }
            FormEvent::KeyDown {
                field: Field::District,
                key: Key::Enter,
            }
            | FormEvent::SearchClicked => Ok(Some(self.submit())),
            FormEvent::KeyDown { .. } => Ok(None),
        }
    }
}
