//! Login form payload.
//!
//! Fields are kept as ordered `(name, value)` pairs so the request carries
//! them exactly as the browser would serialize the `<form>`.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::error::RequestError;

/// Named values collected from a form, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    entries: Vec<(String, String)>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Repeated names are kept, like `FormData.append`.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// First value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a `FormData` body for `fetch`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Form`] if the browser refuses to construct or
    /// append to the `FormData` object.
    #[cfg(feature = "hydrate")]
    pub(crate) fn to_form_data(&self) -> Result<web_sys::FormData, RequestError> {
        use crate::net::error::js_error_message;

        let data = web_sys::FormData::new().map_err(|e| RequestError::Form(js_error_message(&e)))?;
        for (name, value) in self.iter() {
            data.append_with_str(name, value)
                .map_err(|e| RequestError::Form(js_error_message(&e)))?;
        }
        Ok(data)
    }
}

impl<K, V> FromIterator<(K, V)> for FormFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (name, value) in iter {
            fields.push(name, value);
        }
        fields
    }
}

/// Message used when the form element cannot be located.
#[cfg(any(test, feature = "hydrate"))]
fn missing_form_message(form_id: &str) -> String {
    format!("form #{form_id} not found")
}

/// Collect the current values of the `<form id="{form_id}">` element.
///
/// Non-text entries (file inputs) are skipped.
///
/// # Errors
///
/// Returns [`RequestError::Form`] if the element is missing or is not a form,
/// and [`RequestError::Unavailable`] outside the browser.
pub fn read_form(form_id: &str) -> Result<FormFields, RequestError> {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::error::js_error_message;
        use wasm_bindgen::JsCast;

        let form = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(form_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok())
            .ok_or_else(|| RequestError::Form(missing_form_message(form_id)))?;
        let data =
            web_sys::FormData::new_with_form(&form).map_err(|e| RequestError::Form(js_error_message(&e)))?;
        let entries = js_sys::try_iter(&data)
            .map_err(|e| RequestError::Form(js_error_message(&e)))?
            .ok_or_else(|| RequestError::Form("form data is not iterable".to_owned()))?;

        let mut fields = FormFields::new();
        for entry in entries {
            let entry = entry.map_err(|e| RequestError::Form(js_error_message(&e)))?;
            let pair = js_sys::Array::from(&entry);
            let Some(name) = pair.get(0).as_string() else {
                continue;
            };
            if let Some(value) = pair.get(1).as_string() {
                fields.push(name, value);
            }
        }
        Ok(fields)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form_id;
        Err(RequestError::Unavailable)
    }
}
